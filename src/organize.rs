//! Structure building, file relocation, and cleanup
//!
//! Consumes a `ScanResult` in three sequential stages: create the year/month
//! bucket directories, move each file into its bucket, then prune source
//! directories left empty. The stages must run in that order.

use crate::error::{Error, Result};
use crate::scan::ScanResult;
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counts of what the mover did, for reporting
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveStats {
    /// Files renamed into their bucket
    pub moved: usize,
    /// Source files discarded because the destination already existed
    pub discarded: usize,
}

/// Bucket directory for a truncated date: `<root>/<YYYY>/<MM>`
fn bucket_dir(root: &Path, date: &NaiveDate) -> PathBuf {
    root.join(date.year().to_string())
        .join(format!("{:02}", date.month()))
}

/// Create one directory per bucket date. Idempotent; must complete before
/// `move_files` runs.
pub fn create_structure(root: &Path, scan_result: &ScanResult) -> Result<()> {
    for date in scan_result.keys() {
        let dir = bucket_dir(root, date);
        debug!(?dir, "Creating date folder");
        fs::create_dir_all(&dir)?;
    }

    Ok(())
}

/// Move every scanned file into its bucket directory.
///
/// Fails with `MissingDateFolder` if a bucket directory was never created.
/// When the destination path already exists, the source file is discarded
/// instead: the pre-existing destination wins.
pub fn move_files(root: &Path, scan_result: &ScanResult) -> Result<MoveStats> {
    move_files_with_progress(root, scan_result, |_| {})
}

/// Like [`move_files`], invoking `on_file` once per relocated or discarded
/// file so callers can report incremental progress.
pub fn move_files_with_progress(
    root: &Path,
    scan_result: &ScanResult,
    mut on_file: impl FnMut(&Path),
) -> Result<MoveStats> {
    let mut stats = MoveStats::default();

    for (date, elements) in scan_result {
        let date_folder = bucket_dir(root, date);
        if !date_folder.is_dir() {
            return Err(Error::MissingDateFolder { path: date_folder });
        }

        for element in elements {
            let old_path = root.join(element);
            let new_path = date_folder.join(element);
            if let Some(parent) = new_path.parent() {
                fs::create_dir_all(parent)?;
            }

            if new_path.exists() {
                debug!(?old_path, ?new_path, "Destination exists, discarding source");
                fs::remove_file(&old_path)?;
                stats.discarded += 1;
            } else {
                debug!(?old_path, ?new_path, "Moving file");
                fs::rename(&old_path, &new_path)?;
                stats.moved += 1;
            }

            on_file(element);
        }
    }

    info!(
        moved = stats.moved,
        discarded = stats.discarded,
        "Move complete"
    );

    Ok(stats)
}

/// Remove source directories left empty by the move.
///
/// Directories that still hold entries (e.g. unsupported files) are left in
/// place. Must run strictly after `move_files`.
pub fn clean(root: &Path, scan_result: &ScanResult) -> Result<()> {
    for elements in scan_result.values() {
        for element in elements {
            let old_path = root.join(element);
            let Some(old_folder) = old_path.parent() else {
                continue;
            };
            if !old_folder.exists() {
                continue;
            }

            if let Err(e) = fs::remove_dir(old_folder) {
                debug!(?old_folder, error = %e, "Folder not empty, leaving in place");
            }
        }
    }

    Ok(())
}
