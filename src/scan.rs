//! Directory scanning for images eligible to appear in a background.

use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::Error;

/// Filename suffixes accepted by the scanner. Matching is case-sensitive.
pub const SUPPORTED_SUFFIXES: &[&str] = &[".jpg", ".png"];

/// Return `true` if the bare file name ends with a supported suffix.
///
/// Only the final path component is inspected, so `photos.jpg/readme.txt`
/// does not match while `.jpg` on its own does.
#[must_use]
pub fn is_supported_image(name: &str) -> bool {
    SUPPORTED_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// List the eligible images directly inside `dir`, in directory order.
///
/// Each returned path is absolute with symlinks resolved. When `shuffle` is
/// set the whole list is permuted with `rng`.
///
/// # Errors
/// Returns [`Error::NotADirectory`] if `dir` is missing or not a directory,
/// and [`Error::Walk`] if the directory cannot be read.
pub fn image_files<R: Rng + ?Sized>(
    dir: &Path,
    shuffle: bool,
    rng: &mut R,
) -> Result<Vec<PathBuf>, Error> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_supported_image(name) {
            continue;
        }
        match entry.path().canonicalize() {
            Ok(path) => {
                debug!(path = %path.display(), "eligible image");
                images.push(path);
            }
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "skipping unresolvable image");
            }
        }
    }

    if shuffle {
        images.shuffle(rng);
    }
    Ok(images)
}
