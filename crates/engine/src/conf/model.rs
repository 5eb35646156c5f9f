//! Model: TasklogConfig and related structs.

use serde::{Deserialize, Serialize};

use crate::parser::DateFormat;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TasklogConfig {
    pub corpus: CorpusConfig,
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub log_dir: String,
    pub file_suffix: String,
    pub date_format: String,
    /// Keep per-line diagnostics for dropped lines
    pub strict: bool,
    /// Parse the directory once and reuse it for every query
    pub cache: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Input line that ends the session
    pub sentinel: String,
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            file_suffix: ".log".to_string(),
            date_format: DateFormat::DEFAULT_PATTERN.to_string(),
            strict: false,
            cache: false,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            sentinel: "e".to_string(),
            output: OutputFormat::Plain,
        }
    }
}

impl TasklogConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.corpus.validate()?;
        self.console.validate()
    }
}

impl CorpusConfig {
    pub fn date_format(&self) -> DateFormat {
        DateFormat::new(self.date_format.clone())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.log_dir.is_empty() {
            return Err("corpus.log_dir must not be empty".to_string());
        }
        if self.file_suffix.is_empty() {
            return Err("corpus.file_suffix must not be empty".to_string());
        }
        if self.date_format.is_empty() {
            return Err("corpus.date_format must not be empty".to_string());
        }

        let format = self.date_format();
        if !format.is_valid() {
            return Err(format!("corpus.date_format {:?} is not a valid pattern", self.date_format));
        }

        // The pattern must be able to read back what it writes
        let sample = chrono::NaiveDate::from_ymd_opt(2020, 12, 31)
            .and_then(|d| d.and_hms_opt(23, 59, 58))
            .ok_or_else(|| "corpus.date_format sample timestamp is invalid".to_string())?;
        match format.parse(&format.format(sample)) {
            Ok(parsed) if parsed == sample => Ok(()),
            _ => Err(format!(
                "corpus.date_format {:?} cannot round-trip a full timestamp",
                self.date_format
            )),
        }
    }
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.sentinel.trim().is_empty() {
            return Err("console.sentinel must not be empty".to_string());
        }
        Ok(())
    }
}
