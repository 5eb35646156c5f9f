use crate::entry::{Entry, Event, Status};
use crate::parser::format::DateFormat;
use crate::parser::traits::*;
use crate::parser::{FIELD_COUNT, MAX_LINE_SIZE};

/// Parser for the tab-separated activity layout:
/// `ip \t name \t timestamp \t event[ task] \t status`.
#[derive(Debug, Clone, Default)]
pub struct TabLineParser {
    format: DateFormat,
}

impl TabLineParser {
    pub fn new(format: DateFormat) -> Self {
        Self { format }
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.format
    }

    pub fn parse_str(&self, line: &str) -> Result<Entry, ParseError> {
        self.parse(line.as_bytes())
    }
}

impl EntryParser for TabLineParser {
    fn parse(&self, raw: &[u8]) -> Result<Entry, ParseError> {
        if raw.len() > MAX_LINE_SIZE {
            return Err(ParseError::LineTooLarge(raw.len(), MAX_LINE_SIZE));
        }

        let text = std::str::from_utf8(raw).map_err(|_| ParseError::NonUtf8)?;
        let text = text.trim_end_matches(['\r', '\n']);

        let fields: Vec<&str> = text.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount(fields.len()));
        }

        let timestamp = self.format.parse(fields[2]).map_err(|e| ParseError::InvalidTimestamp {
            value: fields[2].to_string(),
            reason: e.to_string(),
        })?;

        let (event, task_number) = parse_event_field(fields[3])?;

        let status: Status = fields[4]
            .parse()
            .map_err(|_| ParseError::InvalidStatus(fields[4].to_string()))?;

        Ok(Entry::new(fields[0], fields[1], timestamp, event, task_number, status))
    }
}

/// Split `SOLVE_TASK 5` / `DONE_TASK 5` into event and task number.
///
/// Only a task event followed by a space is split, and only the token after
/// the event is read as the number. Everything else must be a bare event
/// token, so `LOGIN 5` is an unknown event and a bare `SOLVE_TASK` carries
/// task number 0.
fn parse_event_field(field: &str) -> Result<(Event, u32), ParseError> {
    if let Some((head, tail)) = field.split_once(' ') {
        if head == Event::SolveTask.as_str() || head == Event::DoneTask.as_str() {
            let event: Event = head
                .parse()
                .map_err(|_| ParseError::InvalidEvent(field.to_string()))?;
            let token = tail.split(' ').next().unwrap_or_default();
            let task = token
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidTaskNumber(token.to_string()))?;
            return Ok((event, task));
        }
    }

    let event: Event = field
        .parse()
        .map_err(|_| ParseError::InvalidEvent(field.to_string()))?;
    Ok((event, 0))
}
