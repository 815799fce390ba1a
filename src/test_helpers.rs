//! Shared test utilities for the stillsheet test suite.
//!
//! Provides fixture writers (real JPEG/PNG files, empty placeholder stills),
//! a frozen timestamp, and ready-made [`Job`] and [`SheetConfig`] values so
//! module tests don't each rebuild them.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let input = TempDir::new().unwrap();
//! touch_stills(input.path(), &["A001-Warm.jpg", "A002-Cold.jpg"]);
//! let job = test_job(input.path(), output.path());
//! assert_eq!(job.generated_at, fixed_timestamp());
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{NaiveDate, NaiveDateTime};
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use crate::config::{LayoutConfig, SheetConfig};
use crate::imaging::{Quality, encode_page};
use crate::pdf::PdfPage;
use crate::types::Job;

// =========================================================================
// Fixture files
// =========================================================================

/// Write a solid-colour JPEG of the given size.
pub fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, Rgb([180, 90, 40]));
    img.save_with_format(path, ImageFormat::Jpeg).unwrap();
}

/// Write a solid-colour PNG of the given size.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, Rgb([40, 90, 180]));
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

/// Create empty files named like stills.
///
/// Enough for discovery and naming; pair with a mock backend for decoding.
pub fn touch_stills(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"").unwrap();
    }
}

// =========================================================================
// Values
// =========================================================================

/// 2024-05-12 18:30:05, the run time used throughout the tests.
pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 12)
        .and_then(|d| d.and_hms_opt(18, 30, 5))
        .unwrap()
}

/// Base64 of a PNG logo: opaque black left half, transparent right half.
pub fn test_logo_base64(width: u32, height: u32) -> String {
    let logo = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let mut png = Vec::new();
    logo.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();
    STANDARD.encode(png)
}

/// A job for project "Nightfall" shot on "2024-05-12", run at [`fixed_timestamp`].
pub fn test_job(input: &Path, output: &Path) -> Job {
    Job {
        input_dir: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        project_name: "Nightfall".to_string(),
        shooting_date: "2024-05-12".to_string(),
        logo: RgbaImage::from_pixel(8, 4, Rgba([0, 0, 0, 255])),
        generated_at: fixed_timestamp(),
    }
}

/// Small pages keep pipeline tests fast: 200px wide, 20px bands.
pub fn test_config() -> SheetConfig {
    SheetConfig {
        layout: LayoutConfig {
            width: 200,
            padding: 20,
            ..LayoutConfig::default()
        },
        ..SheetConfig::default()
    }
}

/// A white page, JPEG-encoded and ready for PDF assembly.
pub fn tiny_jpeg_page(width: u32, height: u32) -> PdfPage {
    let page = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    encode_page(&page, Quality::default()).unwrap()
}
