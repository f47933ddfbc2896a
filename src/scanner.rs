use crate::types::FileRecord;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve the conventional data root: prefer dummy_data/ under the current
/// directory, fall back to sample_data/ when only that exists.
#[must_use]
pub fn default_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let cand = cwd.join("dummy_data");
    if cand.is_dir() {
        return cand;
    }
    let fallback = cwd.join("sample_data");
    if fallback.is_dir() { fallback } else { cand }
}

/// Walk `root` once and collect lightweight metadata for every regular file,
/// in lexicographically sorted full-path order.
///
/// A missing or non-directory root is a valid empty result, not an error.
/// Files whose metadata cannot be read are skipped; a single unreadable file
/// never aborts the scan.
#[must_use]
pub fn scan(root: &Path) -> Vec<FileRecord> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut entries: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .collect();
    entries.sort_by(|a, b| a.path().cmp(b.path()));

    entries
        .into_iter()
        .filter_map(|entry| match record_for(entry.path()) {
            Some(rec) => Some(rec),
            None => {
                log::debug!("skipping unreadable file: {}", entry.path().display());
                None
            }
        })
        .collect()
}

fn record_for(path: &Path) -> Option<FileRecord> {
    let metadata = std::fs::metadata(path).ok()?;
    let canonical = path.canonicalize().ok()?;
    let modified: DateTime<Local> = metadata.modified().ok()?.into();

    let name = path.file_name()?.to_string_lossy().to_string();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default();

    Some(FileRecord {
        path: canonical.to_string_lossy().to_string(),
        name,
        ext,
        size_kb: (metadata.len() as f64 / 1024.0 * 10.0).round() / 10.0,
        modified_iso: modified.format("%Y-%m-%dT%H:%M:%S").to_string(),
    })
}
