/// Metadata for one discovered file. A record list is immutable once
/// produced; a re-scan replaces the whole list.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// Absolute, canonicalized location. Unique key within a scan.
    pub path: String,
    /// Base filename including extension.
    pub name: String,
    /// Lowercase extension with leading dot, or empty.
    pub ext: String,
    /// Size in KiB, rounded to one decimal.
    pub size_kb: f64,
    /// Last modification, local time, second precision, no offset.
    pub modified_iso: String,
}
