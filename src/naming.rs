//! Filename parsing for the `<file>-<look>` still naming convention.
//!
//! Stills arrive from the set named `<file>-<look>.<ext>`, e.g.
//! `A001C003-Look2.tif`. The part before the first dash is printed under the
//! photo on the left, the part after it on the right:
//!
//! - `ABC-Look1.jpg` → file `ABC`, look `Look1`
//! - `ABC-Look1-v2.jpg` → file `ABC`, look `Look1` (further segments ignored)
//! - `ABC-.jpg` → file `ABC`, look empty
//! - `ABC-Look1.v2.jpg` → file `ABC`, look `Look1.v2` (only the extension is stripped)
//! - `NoHyphen.jpg` → [`NamingError::MissingSeparator`]

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NamingError {
    #[error("Filename has no '-' between file and look name: {0}")]
    MissingSeparator(String),
}

/// The two printed labels derived from a still's filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelParts {
    /// Segment before the first dash (bottom-left label).
    pub file_name: String,
    /// Segment after the first dash (bottom-right label).
    pub look_name: String,
}

/// Split a filename (with or without extension) into its label parts.
pub fn split_filename(name: &str) -> Result<LabelParts, NamingError> {
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut segments = stem.split('-');
    let file_name = segments.next().unwrap_or_default();
    let look_name = segments
        .next()
        .ok_or_else(|| NamingError::MissingSeparator(name.to_string()))?;

    Ok(LabelParts {
        file_name: file_name.to_string(),
        look_name: look_name.to_string(),
    })
}

/// Label parts for a discovered still, keyed off its file name.
pub fn label_parts_for(path: &Path) -> Result<LabelParts, NamingError> {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    split_filename(&name)
}
