//! Creation-date resolution
//!
//! Resolves a best-effort capture date for a classified media file:
//! - Images: EXIF `DateTime` tag first, filesystem creation time as fallback
//! - Videos: filesystem creation time directly

pub mod exif;

use crate::error::{Error, Result};
use crate::kind::FileKind;
use chrono::{DateTime, Local, NaiveDate};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Resolve the creation date of a file accepted by the classifier.
///
/// Total for every `FileKind`: the filesystem fallback is unconditional, so
/// an error here means the filesystem itself refused the metadata read.
pub fn resolve_date(path: &Path, kind: FileKind) -> Result<NaiveDate> {
    if kind.is_image() {
        match exif::read_capture_date(path) {
            Ok(date) => return Ok(date),
            Err(Error::ExifMissing { .. }) => {
                debug!(?path, "No EXIF capture date, using filesystem timestamp");
            }
            Err(Error::ExifMalformed { value, .. }) => {
                warn!(?path, %value, "Malformed EXIF capture date, using filesystem timestamp");
            }
            Err(Error::ExifRead { message, .. }) => {
                debug!(?path, %message, "Unreadable EXIF data, using filesystem timestamp");
            }
            Err(e) => return Err(e),
        }
    }

    filesystem_date(path)
}

/// Derive a local calendar date from the file's creation timestamp.
///
/// Some filesystems do not record a birth time; the modification time is the
/// closest stand-in there.
fn filesystem_date(path: &Path) -> Result<NaiveDate> {
    let metadata = fs::metadata(path)?;
    let created = metadata.created().or_else(|_| metadata.modified())?;
    let datetime: DateTime<Local> = created.into();
    Ok(datetime.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_image_without_exif_falls_back_to_filesystem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.png");
        File::create(&path).unwrap().write_all(b"no exif here").unwrap();

        let date = resolve_date(&path, FileKind::Png).unwrap();
        assert_eq!(date, Local::now().date_naive());
    }

    #[test]
    fn test_video_uses_filesystem_timestamp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        File::create(&path).unwrap();

        let date = resolve_date(&path, FileKind::Mp4).unwrap();
        assert_eq!(date, Local::now().date_naive());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(resolve_date(&dir.path().join("gone.mp4"), FileKind::Mp4).is_err());
    }
}
