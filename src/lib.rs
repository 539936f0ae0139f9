//! Mediasort - sorts photos and videos into year/month folders
//!
//! This library organizes a flat or loosely structured tree of media files
//! into a `YYYY/MM/` hierarchy derived from each file's capture date:
//! - EXIF capture-date extraction with filesystem-timestamp fallback
//! - Filtering of files already sorted under a year/month folder
//! - Collision-safe relocation (pre-existing destinations win)
//! - Cleanup of source directories emptied by the move
//! - Merging of device-generated edited/original image pairs
//!
//! The pipeline is strictly sequential: `scan` → `create_structure` →
//! `move_files` → optional `clean`. `merge` is an independent operation.

pub mod cli;
pub mod error;
pub mod kind;
pub mod merge;
pub mod organize;
pub mod scan;
pub mod time;

pub use error::{Error, Result};
pub use kind::{FileKind, classify};
pub use merge::merge;
pub use organize::{MoveStats, clean, create_structure, move_files, move_files_with_progress};
pub use scan::{FileInfo, ScanResult, is_sortable, scan};
pub use time::resolve_date;
