//! Scan engine
//!
//! Walks a root directory, filters out paths already sorted under a
//! year/month folder, classifies and dates the remaining media files, and
//! buckets them by truncated (year, month) date.

use crate::error::{Error, Result};
use crate::kind::{FileKind, classify};
use crate::time::resolve_date;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Mapping from truncated (year, month, day=1) date to the root-relative
/// paths of the files belonging to that bucket, in discovery order.
pub type ScanResult = BTreeMap<NaiveDate, Vec<PathBuf>>;

/// Information gathered for one eligible file during a scan
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Absolute path of the file
    pub path: PathBuf,
    /// Classified media kind
    pub kind: FileKind,
    /// Resolved capture date
    pub creation_date: NaiveDate,
}

impl FileInfo {
    /// Gather classification and capture date for a path.
    ///
    /// Returns `Ok(None)` for unsupported files; errors only when date
    /// resolution fails outright.
    pub fn gather(path: &Path) -> Result<Option<FileInfo>> {
        let Some(kind) = classify(path) else {
            return Ok(None);
        };

        let creation_date = resolve_date(path, kind)?;
        Ok(Some(FileInfo {
            path: path.to_path_buf(),
            kind,
            creation_date,
        }))
    }
}

/// Years in the range [1000;2999] count as generated year folders
static YEAR_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Generated month folders. The alternation mirrors the pattern as shipped:
/// "10" does not match it.
static MONTH_PATTERN: OnceLock<Regex> = OnceLock::new();

fn year_pattern() -> &'static Regex {
    YEAR_PATTERN.get_or_init(|| Regex::new(r"^[1-2][0-9]{3}$").unwrap())
}

fn month_pattern() -> &'static Regex {
    MONTH_PATTERN.get_or_init(|| Regex::new(r"^(0[1-9]|1[1-2])$").unwrap())
}

/// Check whether a root-relative path is still eligible for sorting.
///
/// A path is excluded (returns `false`) only when its first segment is a
/// generated year folder AND its second segment is a generated month folder,
/// i.e. when it already lives inside a previously built bucket. Paths with
/// fewer than two segments are always sortable.
pub fn is_sortable(path: &Path) -> bool {
    let mut segments = path.iter().map(|part| part.to_str());
    let (Some(first), Some(second)) = (segments.next(), segments.next()) else {
        return true;
    };

    // A non-UTF-8 segment cannot name a generated year/month folder
    let year = first.is_some_and(|s| year_pattern().is_match(s));
    let month = second.is_some_and(|s| month_pattern().is_match(s));
    !(year && month)
}

/// Recursively scan `root` and group eligible files by truncated date.
///
/// An empty result means there is nothing to sort.
pub fn scan(root: &Path) -> Result<ScanResult> {
    if !root.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut result = ScanResult::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        if !is_sortable(relative) {
            debug!(?relative, "Ignoring already sorted file");
            continue;
        }

        let Some(info) = FileInfo::gather(path)? else {
            debug!(?relative, "Ignoring unsupported file");
            continue;
        };

        let bucket = info.creation_date.with_day(1).unwrap_or(info.creation_date);
        result.entry(bucket).or_default().push(relative.to_path_buf());
    }

    info!(
        buckets = result.len(),
        files = result.values().map(Vec::len).sum::<usize>(),
        "Scan complete"
    );

    Ok(result)
}
