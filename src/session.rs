use crate::matcher;
use crate::scanner;
use crate::types::FileRecord;
use std::path::{Path, PathBuf};

/// One scan's worth of records tied to the root it came from.
///
/// The record list is built once when the session opens and treated as
/// read-only afterwards; every query derives its own scored view. Independent
/// sessions never share state.
#[derive(Debug)]
pub struct Session {
    root: PathBuf,
    records: Vec<FileRecord>,
}

impl Session {
    /// Scan `root` and cache the result for the life of the session.
    #[must_use]
    pub fn open(root: &Path) -> Self {
        let records = scanner::scan(root);
        log::debug!("scanned {} files under {}", records.len(), root.display());
        Self {
            root: root.to_path_buf(),
            records,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Rank the cached records against `query`, returning at most `k`.
    #[must_use]
    pub fn search(&self, query: &str, k: usize) -> Vec<FileRecord> {
        matcher::search(query, &self.records, k)
    }

    /// Replace the cached list with a fresh scan of the same root.
    pub fn rescan(&mut self) {
        self.records = scanner::scan(&self.root);
    }
}
