use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::range::DateRange;
use crate::conf::CorpusConfig;
use crate::entry::Entry;
use crate::parser::{DateFormat, Diagnostic, EntryParser, ParseStats, TabLineParser};

pub const DEFAULT_SUFFIX: &str = ".log";

/// Every entry read from one log directory, plus what was dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<Entry>,
    stats: ParseStats,
    diagnostics: Vec<Diagnostic>,
}

impl Corpus {
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Dropped lines; only populated by a strict loader.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn in_range<'a>(&'a self, range: &'a DateRange) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |e| range.contains(e.timestamp()))
    }
}

/// Reads every `*.log` file of a directory into a [`Corpus`].
///
/// Nothing here returns an error: unreadable directories and files are
/// logged and skipped, malformed lines are counted and dropped.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    parser: TabLineParser,
    suffix: String,
    strict: bool,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new(DateFormat::default())
    }
}

impl CorpusLoader {
    pub fn new(format: DateFormat) -> Self {
        Self {
            parser: TabLineParser::new(format),
            suffix: DEFAULT_SUFFIX.to_string(),
            strict: false,
        }
    }

    pub fn from_config(config: &CorpusConfig) -> Self {
        Self::new(config.date_format())
            .with_suffix(config.file_suffix.clone())
            .strict(config.strict)
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn load(&self, dir: impl AsRef<Path>) -> Corpus {
        let dir = dir.as_ref();
        let mut corpus = Corpus::default();

        let files = match self.log_files(dir) {
            Ok(files) => files,
            Err(e) => {
                warn!("Cannot read log directory {}: {}", dir.display(), e);
                return corpus;
            }
        };

        for path in files {
            let name = path.display().to_string();
            match File::open(&path) {
                Ok(file) => self.ingest(&mut corpus, &name, BufReader::new(file)),
                Err(e) => {
                    warn!("Skipping unreadable log file {}: {}", name, e);
                    corpus.stats.record_file(false);
                }
            }
        }

        info!(
            "Loaded {} entries from {} files in {} ({} lines skipped)",
            corpus.entries.len(),
            corpus.stats.files_read,
            dir.display(),
            corpus.stats.lines_skipped()
        );

        corpus
    }

    /// Regular files whose name ends with the suffix, sorted by name.
    fn log_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for item in std::fs::read_dir(dir)? {
            let path = match item {
                Ok(item) => item.path(),
                Err(e) => {
                    warn!("Skipping unreadable directory entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            let matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(&self.suffix));
            if matches && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Add one file's entries to `corpus`. On an I/O error the whole file
    /// counts as empty and as skipped.
    fn ingest<R: BufRead>(&self, corpus: &mut Corpus, name: &str, reader: R) {
        match self.read_entries(name, reader) {
            Ok((entries, stats, diagnostics)) => {
                corpus.stats.merge(&stats);
                corpus.stats.record_file(true);
                corpus.diagnostics.extend(diagnostics);
                corpus.entries.extend(entries);
            }
            Err(e) => {
                warn!("Skipping unreadable log file {}: {}", name, e);
                corpus.stats.record_file(false);
            }
        }
    }

    fn read_entries<R: BufRead>(
        &self,
        name: &str,
        reader: R,
    ) -> io::Result<(Vec<Entry>, ParseStats, Vec<Diagnostic>)> {
        let mut file_stats = ParseStats::new();
        let mut file_diagnostics = Vec::new();
        let mut entries = Vec::new();

        for (idx, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            if line.iter().all(|b| b.is_ascii_whitespace()) {
                continue;
            }

            match self.parser.parse(&line) {
                Ok(entry) => {
                    file_stats.record_parse();
                    entries.push(entry);
                }
                Err(e) => {
                    debug!("{}:{}: skipping line: {}", name, idx + 1, e);
                    file_stats.record_error(&e);
                    if self.strict {
                        file_diagnostics.push(Diagnostic {
                            file: name.to_string(),
                            line: idx + 1,
                            error: e,
                        });
                    }
                }
            }
        }

        Ok((entries, file_stats, file_diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Event;
    use crate::parser::SkipReason;
    use std::fs;
    use std::io::Read;

    /// Reader whose every read fails.
    struct Unreadable;

    impl Read for Unreadable {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device went away"))
        }
    }

    const ALICE: &str = "10.0.0.1\tAlice\t01.01.2020 10:00:00\tLOGIN\tOK\n\
                         10.0.0.1\tAlice\t01.01.2020 10:05:00\tSOLVE_TASK 5\tOK\n\
                         10.0.0.1\tAlice\t01.01.2020 10:06:00\tDONE_TASK 5\tOK\n";

    #[test]
    fn test_load_reads_only_log_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.log"), ALICE).unwrap();
        fs::write(
            dir.path().join("b.log"),
            "10.0.0.2\tBob\t02.01.2020 11:00:00\tWRITE_MESSAGE\tFAILED\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "10.0.0.3\tEve\t02.01.2020 11:00:00\tLOGIN\tOK\n").unwrap();
        fs::write(dir.path().join("a.log.bak"), ALICE).unwrap();

        let corpus = CorpusLoader::default().load(dir.path());
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.stats().files_read, 2);
        assert!(corpus.entries().iter().all(|e| e.name() != "Eve"));
    }

    #[test]
    fn test_load_skips_malformed_lines_silently() {
        let dir = tempfile::tempdir().unwrap();
        let content = format!(
            "{}garbage\n10.0.0.1\tAlice\tyesterday\tLOGIN\tOK\n10.0.0.1\tAlice\t01.01.2020 10:00:00\tLOGIN 1\tOK\n\n",
            ALICE
        );
        fs::write(dir.path().join("x.log"), content).unwrap();

        let corpus = CorpusLoader::default().load(dir.path());
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.stats().lines_seen, 6);
        assert_eq!(corpus.stats().lines_skipped(), 3);
        assert_eq!(corpus.stats().skipped.get(SkipReason::FieldCount), 1);
        assert_eq!(corpus.stats().skipped.get(SkipReason::Timestamp), 1);
        assert_eq!(corpus.stats().skipped.get(SkipReason::Event), 1);
        // Not strict: no diagnostics retained
        assert!(corpus.diagnostics().is_empty());
    }

    #[test]
    fn test_strict_loader_keeps_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("x.log"),
            "10.0.0.1\tAlice\t01.01.2020 10:00:00\tLOGIN\tOK\n10.0.0.1\tAlice\t01.01.2020 10:00:00\tLOGIN\tMAYBE\n",
        )
        .unwrap();

        let corpus = CorpusLoader::default().strict(true).load(dir.path());
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.diagnostics().len(), 1);
        let diag = &corpus.diagnostics()[0];
        assert_eq!(diag.line, 2);
        assert!(diag.file.ends_with("x.log"));
        assert_eq!(diag.error.reason(), SkipReason::Status);
    }

    #[test]
    fn test_missing_directory_yields_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = CorpusLoader::default().load(dir.path().join("does-not-exist"));
        assert!(corpus.is_empty());
        assert_eq!(corpus.stats().files_read, 0);
    }

    #[test]
    fn test_directory_named_like_log_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested.log")).unwrap();
        fs::write(dir.path().join("a.log"), ALICE).unwrap();

        let corpus = CorpusLoader::default().load(dir.path());
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.stats().files_skipped, 0);
    }

    #[test]
    fn test_read_error_mid_file_drops_whole_file() {
        let loader = CorpusLoader::default().strict(true);
        let mut corpus = Corpus::default();

        loader.ingest(&mut corpus, "good.log", ALICE.as_bytes());
        let broken = format!("{}garbage\n", ALICE);
        loader.ingest(&mut corpus, "broken.log", BufReader::new(broken.as_bytes().chain(Unreadable)));

        assert_eq!(corpus.len(), 3);
        assert!(corpus.entries().iter().all(|e| e.name() == "Alice"));
        assert_eq!(corpus.stats().files_read, 1);
        assert_eq!(corpus.stats().files_skipped, 1);
        // Lines read before the failure are not counted either
        assert_eq!(corpus.stats().lines_seen, 3);
        assert!(corpus.diagnostics().is_empty());
    }

    #[test]
    fn test_read_error_on_first_byte() {
        let loader = CorpusLoader::default();
        let mut corpus = Corpus::default();
        loader.ingest(&mut corpus, "dead.log", BufReader::new(Unreadable));

        assert!(corpus.is_empty());
        assert_eq!(corpus.stats().files_read, 0);
        assert_eq!(corpus.stats().files_skipped, 1);
    }

    #[test]
    fn test_non_utf8_file_keeps_valid_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut bytes = ALICE.as_bytes().to_vec();
        bytes.extend_from_slice(b"\xFF\xFE\t\t\t\t\n");
        fs::write(dir.path().join("bin.log"), bytes).unwrap();

        let corpus = CorpusLoader::default().load(dir.path());
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.stats().skipped.get(SkipReason::NonUtf8), 1);
    }

    #[test]
    fn test_custom_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.log"), ALICE).unwrap();
        fs::write(dir.path().join("b.txt"), ALICE).unwrap();

        let corpus = CorpusLoader::default().with_suffix(".txt").load(dir.path());
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_in_range_is_exclusive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.log"), ALICE).unwrap();
        let corpus = CorpusLoader::default().load(dir.path());

        let fmt = DateFormat::default();
        let range = DateRange::between(
            fmt.parse("01.01.2020 10:00:00").unwrap(),
            fmt.parse("01.01.2020 10:06:00").unwrap(),
        );
        let events: Vec<Event> = corpus.in_range(&range).map(|e| e.event()).collect();
        assert_eq!(events, vec![Event::SolveTask]);
    }
}
