//! Session: the read/execute/print loop.

use std::io::{self, BufRead, Write};

use serde_json::json;
use tracing::debug;

use engine::conf::{ConsoleConfig, OutputFormat};
use engine::parser::DateFormat;
use engine::{LogQuery, QueryResult};

/// Run queries from `input` until the sentinel line or EOF.
///
/// Returns the number of queries executed. Blank lines are skipped.
pub fn run<R, W>(input: R, mut output: W, query: &LogQuery, console: &ConsoleConfig) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut executed = 0;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed == console.sentinel {
            debug!("Sentinel received, ending session");
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let result = query.execute(trimmed);
        writeln!(output, "{}", render(&result, query.date_format(), console.output))?;
        output.flush()?;
        executed += 1;
    }

    Ok(executed)
}

/// One result as a single output line.
pub fn render(result: &QueryResult, format: &DateFormat, output: OutputFormat) -> String {
    let values = result.render(format);
    match output {
        OutputFormat::Plain => format!("[{}]", values.join(", ")),
        OutputFormat::Json => json!({ "kind": result.kind(), "values": values }).to_string(),
    }
}
