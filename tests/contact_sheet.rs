//! End-to-end runs through the public API with real image files.
//!
//! Font files are platform-specific, so these tests set text with a no-op
//! typesetter; text placement is covered by the unit tests.

use chrono::NaiveDate;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;
use stillsheet::config::{LayoutConfig, SheetConfig};
use stillsheet::imaging::{RustBackend, TextStyle, Typesetter};
use stillsheet::pipeline::{self, SheetError, SheetEvent};
use stillsheet::types::Job;
use tempfile::TempDir;

struct NoText;

impl Typesetter for NoText {
    fn draw(&self, _: &mut RgbaImage, _: TextStyle, _: i32, _: i32, _: &str) {}
}

fn write_still(dir: &Path, name: &str, width: u32, height: u32, format: ImageFormat) {
    RgbImage::from_pixel(width, height, Rgb([120, 80, 60]))
        .save_with_format(dir.join(name), format)
        .unwrap();
}

fn job(input: &Path, output: &Path) -> Job {
    Job {
        input_dir: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        project_name: "Harbour".to_string(),
        shooting_date: "2023-11-02".to_string(),
        logo: RgbaImage::from_pixel(16, 8, Rgba([10, 10, 10, 255])),
        generated_at: NaiveDate::from_ymd_opt(2023, 11, 2)
            .and_then(|d| d.and_hms_opt(9, 15, 0))
            .unwrap(),
    }
}

fn config() -> SheetConfig {
    SheetConfig {
        layout: LayoutConfig {
            width: 320,
            padding: 16,
            ..LayoutConfig::default()
        },
        ..SheetConfig::default()
    }
}

fn page_heights_pt(path: &Path) -> Vec<f32> {
    let doc = lopdf::Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .map(|id| {
            let page = doc.get_dictionary(id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[3].as_float().unwrap()
        })
        .collect()
}

#[test]
fn mixed_formats_become_one_pdf_in_filename_order() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_still(input.path(), "B010-Dusk.png", 160, 160, ImageFormat::Png);
    write_still(input.path(), "A001-Warm.jpg", 640, 480, ImageFormat::Jpeg);
    write_still(input.path(), "C100-Fog.tif", 320, 120, ImageFormat::Tiff);
    std::fs::write(input.path().join("notes.txt"), "not a still").unwrap();
    std::fs::create_dir(input.path().join("rejects")).unwrap();
    write_still(
        &input.path().join("rejects"),
        "Z999-Skip.jpg",
        10,
        10,
        ImageFormat::Jpeg,
    );

    let mut events = Vec::new();
    let report = pipeline::run(
        &job(input.path(), output.path()),
        &config(),
        &RustBackend::new(),
        &NoText,
        |e| events.push(e),
    )
    .unwrap();

    let expected = output.path().join("Harbour_2023-11-02.pdf");
    assert_eq!(report.output.as_deref(), Some(expected.as_path()));
    let names: Vec<_> = report
        .stills
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, ["A001-Warm.jpg", "B010-Dusk.png", "C100-Fog.tif"]);

    let labels: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            SheetEvent::PageRendered { labels, .. } => Some(labels.look_name.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, ["Warm", "Dusk", "Fog"]);

    // Photo heights 240, 320, 120; lead adds four bands, the rest one. 100 dpi.
    let want = [(240 + 64) as f32, (320 + 16) as f32, (120 + 16) as f32].map(|px| px * 0.72);
    let heights = page_heights_pt(&expected);
    assert_eq!(heights.len(), 3);
    for (got, want) in heights.iter().zip(want) {
        assert!((got - want).abs() < 0.01, "page height {got}, want {want}");
    }
}

#[test]
fn empty_directory_is_not_an_error() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    std::fs::write(input.path().join("README.md"), "nothing here").unwrap();

    let mut events = Vec::new();
    let report = pipeline::run(
        &job(input.path(), output.path()),
        &config(),
        &RustBackend::new(),
        &NoText,
        |e| events.push(e),
    )
    .unwrap();

    assert_eq!(report.output, None);
    assert_eq!(events.last(), Some(&SheetEvent::NoImages));
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn corrupt_still_aborts_without_writing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_still(input.path(), "A001-Warm.jpg", 64, 48, ImageFormat::Jpeg);
    std::fs::write(input.path().join("A002-Cold.jpg"), b"not a jpeg").unwrap();

    let result = pipeline::run(
        &job(input.path(), output.path()),
        &config(),
        &RustBackend::new(),
        &NoText,
        |_| {},
    );

    assert!(matches!(result, Err(SheetError::Imaging(_))));
    assert!(!output.path().join("Harbour_2023-11-02.pdf").exists());
}

#[test]
fn heic_is_discovered_but_not_decodable() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    std::fs::write(input.path().join("A001-Warm.heic"), b"ftypheic").unwrap();

    let result = pipeline::run(
        &job(input.path(), output.path()),
        &config(),
        &RustBackend::new(),
        &NoText,
        |_| {},
    );

    assert!(matches!(result, Err(SheetError::Imaging(_))));
}

#[test]
fn rerun_with_same_timestamp_is_byte_identical() {
    let input = TempDir::new().unwrap();
    write_still(input.path(), "A001-Warm.jpg", 200, 100, ImageFormat::Jpeg);
    write_still(input.path(), "A002-Cold.png", 100, 200, ImageFormat::Png);

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let mut bytes = Vec::new();
    for out in [&first, &second] {
        let report = pipeline::run(
            &job(input.path(), out.path()),
            &config(),
            &RustBackend::new(),
            &NoText,
            |_| {},
        )
        .unwrap();
        bytes.push(std::fs::read(report.output.unwrap()).unwrap());
    }
    assert_eq!(bytes[0], bytes[1]);
}
