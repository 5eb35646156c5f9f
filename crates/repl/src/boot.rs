//! Boot: logging init and config load.

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use engine::{LogQuery, TasklogConfig};

const DEFAULT_FILTER: &str = "repl=info,engine=warn";
const LOG_FORMAT_ENV: &str = "TASKLOG_LOG_FORMAT";

/// Initialise the tracing subsystem.
///
/// Logs go to stderr so stdout carries nothing but query results.
/// `TASKLOG_LOG_FORMAT=json` switches to structured output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        let layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry().with(filter).with(layer).init();
    } else {
        let layer = fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry().with(filter).with(layer).init();
    }
}

/// Load config (file, then env), then let the first CLI argument override
/// the log directory.
pub fn load_config(log_dir: Option<String>) -> Result<TasklogConfig> {
    let mut config = TasklogConfig::load().context("Failed to load configuration")?;
    apply_log_dir(&mut config, log_dir);
    Ok(config)
}

fn apply_log_dir(config: &mut TasklogConfig, log_dir: Option<String>) {
    if let Some(dir) = log_dir.filter(|d| !d.trim().is_empty()) {
        config.corpus.log_dir = dir;
    }
}

/// Build the query engine and report what the first load saw.
pub fn boot(config: &TasklogConfig) -> LogQuery {
    info!(
        log_dir = %config.corpus.log_dir,
        suffix = %config.corpus.file_suffix,
        strict = config.corpus.strict,
        cache = config.corpus.cache,
        "Opening log corpus"
    );

    let query = LogQuery::from_config(&config.corpus);
    let corpus = query.snapshot();
    let stats = corpus.stats();
    info!(
        files = stats.files_read,
        entries = corpus.len(),
        skipped = stats.lines_skipped(),
        "Corpus ready"
    );

    for diagnostic in corpus.diagnostics() {
        warn!("{}", diagnostic);
    }

    query
}
