use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::cache::CorpusCache;
use super::load::{Corpus, CorpusLoader};
use crate::conf::CorpusConfig;

/// Where queries get their entries from.
///
/// Every query asks for a fresh snapshot; implementations decide whether
/// that means re-reading files or handing out a cached corpus.
pub trait CorpusSource: Send + Sync {
    fn snapshot(&self) -> Arc<Corpus>;
}

impl CorpusSource for Arc<Corpus> {
    fn snapshot(&self) -> Arc<Corpus> {
        Arc::clone(self)
    }
}

/// A log directory, re-read per query unless a cache is attached.
#[derive(Debug)]
pub struct DirectorySource {
    dir: PathBuf,
    loader: CorpusLoader,
    cache: Option<Arc<CorpusCache>>,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>, loader: CorpusLoader) -> Self {
        Self {
            dir: dir.into(),
            loader,
            cache: None,
        }
    }

    pub fn from_config(config: &CorpusConfig) -> Self {
        let source = Self::new(&config.log_dir, CorpusLoader::from_config(config));
        if config.cache {
            source.with_cache(Arc::new(CorpusCache::new()))
        } else {
            source
        }
    }

    pub fn with_cache(mut self, cache: Arc<CorpusCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CorpusSource for DirectorySource {
    fn snapshot(&self) -> Arc<Corpus> {
        match &self.cache {
            Some(cache) => cache.get_or_load(&self.dir, &self.loader),
            None => Arc::new(self.loader.load(&self.dir)),
        }
    }
}
