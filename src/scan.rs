//! Still discovery.
//!
//! Stage 1 of the sheet pipeline. Lists the stills directly inside the input
//! directory, in the order they will appear in the PDF.
//!
//! ## Matching Rules
//!
//! - Only regular files directly inside the directory; subdirectories are not
//!   descended into.
//! - Hidden files are skipped, including AppleDouble sidecars such as
//!   `._A001-Warm.jpg` that macOS leaves on non-HFS volumes.
//! - The extension must be one of [`STILL_EXTENSIONS`], compared exactly:
//!   `frame-A.JPG` is not picked up.
//! - Results are sorted lexicographically by path, which within one directory
//!   is filename order.
//!
//! A missing or unreadable directory is not an error: it simply contains no
//! stills, and the pipeline reports that nothing was found.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions recognized as stills.
pub const STILL_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "tif", "tiff", "heic"];

fn is_still(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| STILL_EXTENSIONS.contains(&e))
}

/// Return the stills in `dir`, sorted by filename.
pub fn discover_stills(dir: &Path) -> Vec<PathBuf> {
    let mut stills: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        // Skip hidden files and AppleDouble sidecars
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| e.into_path())
        .filter(|p| is_still(p))
        .collect();

    stills.sort();
    tracing::debug!(dir = %dir.display(), count = stills.len(), "discovered stills");
    stills
}
