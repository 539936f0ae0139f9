//! Media kind classification
//!
//! Maps file paths to a closed set of supported media kinds via an
//! extension-keyed media-type table. Unsupported files classify to `None`
//! and are silently skipped by every downstream stage.

use std::path::Path;

/// Supported media kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// JPEG images (jpg, jpeg)
    Jpeg,
    /// PNG images
    Png,
    /// HEIF-container images (heic, heif)
    Heic,
    /// Camera RAW images (arw, cr2, nef, dng, ...)
    Raw,
    /// MP4 videos
    Mp4,
    /// QuickTime videos (mov, qt)
    QuickTime,
}

impl FileKind {
    /// Whether this kind is an image kind (EXIF-capable for date resolution)
    pub fn is_image(self) -> bool {
        matches!(self, FileKind::Jpeg | FileKind::Png | FileKind::Heic | FileKind::Raw)
    }

    /// Whether this kind is a video kind
    pub fn is_video(self) -> bool {
        matches!(self, FileKind::Mp4 | FileKind::QuickTime)
    }
}

/// Extension -> media type table. Adding support for a new extension is a
/// one-line addition here.
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("heic", "image/heic"),
    ("heif", "image/heic"),
    ("raw", "image/x-raw"),
    ("arw", "image/x-raw"),
    ("cr2", "image/x-raw"),
    ("cr3", "image/x-raw"),
    ("nef", "image/x-raw"),
    ("dng", "image/x-raw"),
    ("orf", "image/x-raw"),
    ("rw2", "image/x-raw"),
    ("raf", "image/x-raw"),
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("mov", "video/quicktime"),
    ("qt", "video/quicktime"),
];

/// Look up the media type string for a file extension (case-insensitive)
fn media_type_for(ext: &str) -> Option<&'static str> {
    let ext = ext.to_lowercase();
    MEDIA_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mt)| *mt)
}

/// Classify a path into a supported media kind.
///
/// Returns `None` when the path is not a regular file, has no extension, or
/// the extension maps to no supported kind. This is a normal outcome, not an
/// error. No side effects beyond the file-vs-directory metadata check.
pub fn classify(path: &Path) -> Option<FileKind> {
    if !path.is_file() {
        return None;
    }

    let ext = path.extension().and_then(|e| e.to_str())?;
    let media_type = media_type_for(ext)?;
    let (category, subtype) = media_type.split_once('/')?;

    match category {
        "image" => match subtype {
            "jpeg" => Some(FileKind::Jpeg),
            "png" => Some(FileKind::Png),
            "heic" => Some(FileKind::Heic),
            "x-raw" => Some(FileKind::Raw),
            _ => None,
        },
        "video" => match subtype {
            "mp4" => Some(FileKind::Mp4),
            "quicktime" => Some(FileKind::QuickTime),
            _ => None,
        },
        _ => None,
    }
}
