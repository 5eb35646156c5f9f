use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;

use super::load::{Corpus, CorpusLoader};

/// Per-directory corpus cache
///
/// Holds the unfiltered corpus of each directory so repeated queries skip
/// re-reading files. Log files are assumed not to change while cached;
/// call [`CorpusCache::invalidate`] when they do.
#[derive(Debug, Default)]
pub struct CorpusCache {
    state: DashMap<PathBuf, Arc<Corpus>>,
}

impl CorpusCache {
    pub fn new() -> Self {
        Self {
            state: DashMap::new(),
        }
    }

    pub fn get(&self, dir: &Path) -> Option<Arc<Corpus>> {
        self.state.get(dir).map(|r| Arc::clone(r.value()))
    }

    /// Return the cached corpus for `dir`, loading it on first use.
    pub fn get_or_load(&self, dir: &Path, loader: &CorpusLoader) -> Arc<Corpus> {
        if let Some(corpus) = self.get(dir) {
            return corpus;
        }

        let corpus = Arc::new(loader.load(dir));
        self.state
            .entry(dir.to_path_buf())
            .or_insert(corpus)
            .value()
            .clone()
    }

    pub fn invalidate(&self, dir: &Path) {
        self.state.remove(dir);
    }

    pub fn clear(&self) {
        self.state.clear();
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}
