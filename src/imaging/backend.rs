//! Image decoding backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the one operation the pipeline needs from a
//! decoder: turn a still on disk into a full raster.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate's pure-Rust decoders.

use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported still format: {0}")]
    Unsupported(String),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image decoding backends.
pub trait ImageBackend {
    /// Decode the full image.
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Size of a synthetic raster handed out by [`MockBackend`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Dimensions {
        pub width: u32,
        pub height: u32,
    }

    /// Mock backend that records operations and hands out synthetic images.
    ///
    /// Queued dimensions are consumed front to back, one per decode call, so
    /// the queue order matches discovery order.
    #[derive(Default)]
    pub struct MockBackend {
        pub dimensions: Mutex<VecDeque<Dimensions>>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Decode(String),
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                dimensions: Mutex::new(dims.into()),
                operations: Mutex::new(Vec::new()),
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        fn next_dimensions(&self) -> Result<Dimensions, BackendError> {
            self.dimensions
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| BackendError::ProcessingFailed("No mock dimensions".to_string()))
        }
    }

    impl ImageBackend for MockBackend {
        fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Decode(path.to_string_lossy().to_string()));
            let dims = self.next_dimensions()?;
            Ok(DynamicImage::ImageRgb8(RgbImage::from_pixel(
                dims.width,
                dims.height,
                Rgb([90, 120, 150]),
            )))
        }
    }

    #[test]
    fn mock_records_decode() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);

        backend.decode(Path::new("/stills/A-B.jpg")).unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops, vec![RecordedOp::Decode("/stills/A-B.jpg".to_string())]);
    }

    #[test]
    fn mock_decodes_queue_in_order() {
        let backend = MockBackend::with_dimensions(vec![
            Dimensions { width: 40, height: 30 },
            Dimensions { width: 20, height: 50 },
        ]);

        let first = backend.decode(Path::new("/a.jpg")).unwrap();
        let second = backend.decode(Path::new("/b.jpg")).unwrap();
        assert_eq!((first.width(), first.height()), (40, 30));
        assert_eq!((second.width(), second.height()), (20, 50));
    }

    #[test]
    fn mock_runs_dry() {
        let backend = MockBackend::new();
        assert!(backend.decode(Path::new("/a.jpg")).is_err());
    }
}
