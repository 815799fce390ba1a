//! Pure Rust decoding backend.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF) | `image::ImageReader` with the format fixed by extension |
//! | Decode (HEIC) | not available: fails with [`BackendError::Unsupported`] |

use super::backend::{BackendError, ImageBackend};
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Extensions with a decoder compiled in, and the format each maps to.
///
/// `heic` is discovered as a still but has no pure-Rust decoder here.
const DECODERS: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
];

fn format_for(path: &Path) -> Result<ImageFormat, BackendError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    DECODERS
        .iter()
        .find(|(candidate, fmt)| *candidate == ext && fmt.reading_enabled())
        .map(|(_, fmt)| *fmt)
        .ok_or_else(|| BackendError::Unsupported(path.display().to_string()))
}

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        let format = format_for(path)?;
        let mut reader = ImageReader::open(path).map_err(BackendError::Io)?;
        reader.set_format(format);
        reader.decode().map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
    }
}
