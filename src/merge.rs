//! Duplicate edited/original pair merging
//!
//! Some capture devices save an edited copy of an image alongside the
//! original, with an `E` marker inserted after the `IMG_` prefix
//! (`IMG_0001.JPG` / `IMG_E0001.JPG`). Within each leaf directory, the edited
//! copy is treated as authoritative and the original is dropped. Pairing is
//! by filename convention only; file contents are never compared.

use crate::error::{Error, Result};
use crate::kind::{FileKind, classify};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

const ORIGINAL_PREFIX: &str = "IMG_";
const EDITED_PREFIX: &str = "IMG_E";

/// Resolve edited/original duplicate pairs in every leaf directory under
/// `root`. Returns the number of merged files (two per resolved pair).
pub fn merge(root: &Path) -> Result<usize> {
    if !root.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut total = 0;
    for leaf in leaf_directories(root)? {
        debug!(?leaf, "Merging files in leaf folder");
        let merged = merge_leaf(&leaf)?;
        debug!(?leaf, merged, "Files merged");
        total += merged;
    }

    info!(merged = total, "Merge complete");
    Ok(total)
}

/// Directories under `root` (root included) that contain no subdirectories
fn leaf_directories(root: &Path) -> Result<Vec<PathBuf>> {
    let mut leaves = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_dir() && is_leaf(entry.path())? {
            leaves.push(entry.path().to_path_buf());
        }
    }

    Ok(leaves)
}

fn is_leaf(dir: &Path) -> Result<bool> {
    for entry in fs::read_dir(dir)? {
        if entry?.file_type()?.is_dir() {
            return Ok(false);
        }
    }

    Ok(true)
}

fn merge_leaf(leaf: &Path) -> Result<usize> {
    let mut merged = 0;

    for entry in fs::read_dir(leaf)? {
        let path = entry?.path();
        let Some(kind) = classify(&path) else {
            continue;
        };
        // The convention only applies to device-produced JPEG/HEIC shots
        if !matches!(kind, FileKind::Jpeg | FileKind::Heic) {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.starts_with(EDITED_PREFIX) {
            continue;
        }

        let bare = stem.strip_prefix(ORIGINAL_PREFIX).unwrap_or(stem);
        let edited = path.with_file_name(match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{EDITED_PREFIX}{bare}.{ext}"),
            None => format!("{EDITED_PREFIX}{bare}"),
        });

        if edited.exists() {
            debug!(original = ?path, ?edited, "Edited copy wins, dropping original");
            fs::remove_file(&path)?;
            merged += 2;
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write(path: &Path, content: &str) {
        File::create(path).unwrap().write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_merge_drops_original_of_pair() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("IMG_0001.JPG"), "original");
        write(&dir.path().join("IMG_E0001.JPG"), "edited");

        let merged = merge(dir.path()).unwrap();

        assert_eq!(merged, 2);
        assert!(!dir.path().join("IMG_0001.JPG").exists());
        let content = fs::read_to_string(dir.path().join("IMG_E0001.JPG")).unwrap();
        assert_eq!(content, "edited");
    }

    #[test]
    fn test_merge_leaves_lone_edited_file() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("IMG_E0002.JPG"), "edited");

        assert_eq!(merge(dir.path()).unwrap(), 0);
        assert!(dir.path().join("IMG_E0002.JPG").is_file());
    }

    #[test]
    fn test_merge_leaves_lone_original() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("IMG_0003.JPG"), "original");

        assert_eq!(merge(dir.path()).unwrap(), 0);
        assert!(dir.path().join("IMG_0003.JPG").is_file());
    }

    #[test]
    fn test_merge_only_visits_leaf_directories() {
        let dir = tempdir().unwrap();
        // Root has a subdirectory, so the pair at root level is untouched
        write(&dir.path().join("IMG_0004.JPG"), "original");
        write(&dir.path().join("IMG_E0004.JPG"), "edited");
        fs::create_dir(dir.path().join("2023")).unwrap();
        fs::create_dir(dir.path().join("2023/04")).unwrap();
        write(&dir.path().join("2023/04/IMG_0005.JPG"), "original");
        write(&dir.path().join("2023/04/IMG_E0005.JPG"), "edited");

        let merged = merge(dir.path()).unwrap();

        assert_eq!(merged, 2);
        assert!(dir.path().join("IMG_0004.JPG").is_file());
        assert!(!dir.path().join("2023/04/IMG_0005.JPG").exists());
        assert!(dir.path().join("2023/04/IMG_E0005.JPG").is_file());
    }

    #[test]
    fn test_merge_ignores_other_kinds() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("IMG_0006.PNG"), "original");
        write(&dir.path().join("IMG_E0006.PNG"), "edited");
        write(&dir.path().join("IMG_0007.MP4"), "original");
        write(&dir.path().join("IMG_E0007.MP4"), "edited");

        assert_eq!(merge(dir.path()).unwrap(), 0);
        assert!(dir.path().join("IMG_0006.PNG").is_file());
        assert!(dir.path().join("IMG_0007.MP4").is_file());
    }

    #[test]
    fn test_merge_handles_unprefixed_names() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("beach.jpg"), "original");
        write(&dir.path().join("IMG_Ebeach.jpg"), "edited");

        let merged = merge(dir.path()).unwrap();

        assert_eq!(merged, 2);
        assert!(!dir.path().join("beach.jpg").exists());
        assert!(dir.path().join("IMG_Ebeach.jpg").is_file());
    }

    #[test]
    fn test_merge_rejects_missing_root() {
        let dir = tempdir().unwrap();
        assert!(merge(&dir.path().join("nope")).is_err());
    }
}
