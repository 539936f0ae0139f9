//! EXIF capture-date extraction for images

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use exif::{In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// Capture-time formats accepted from the EXIF `DateTime` tag, tried in order
const DATE_FORMATS: &[&str] = &["%Y:%m:%d %H:%M:%S", "%Y/%m/%d %H:%M"];

/// Read the capture date from a file's EXIF metadata.
///
/// Fails with `ExifRead` when the container cannot be read, `ExifMissing`
/// when no `DateTime` tag is present, and `ExifMalformed` when the tag value
/// parses with none of the accepted formats. Callers treat all three as a cue
/// to fall back to the filesystem timestamp.
pub fn read_capture_date(path: &Path) -> Result<NaiveDate> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| Error::ExifRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let field = exif
        .get_field(Tag::DateTime, In::PRIMARY)
        .ok_or_else(|| Error::ExifMissing {
            path: path.to_path_buf(),
        })?;

    let raw = field.display_value().to_string();
    match parse_capture_datetime(&raw) {
        Some(datetime) => {
            trace!(?path, %raw, "Found EXIF capture date");
            Ok(datetime.date())
        }
        None => Err(Error::ExifMalformed {
            path: path.to_path_buf(),
            value: raw,
        }),
    }
}

/// Parse an EXIF datetime string, trying each accepted format in order
fn parse_capture_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_matches('"');

    for format in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    None
}
