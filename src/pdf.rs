//! PDF assembly.
//!
//! Stage 3 of the sheet pipeline. Takes the encoded pages in order and builds
//! one PDF with `lopdf`:
//!
//! ```text
//! Catalog → Pages ─┬─ Page 1  MediaBox = page pixels at `dpi`
//!                  │    └─ XObject /Im0  (DCTDecode, DeviceRGB)
//!                  ├─ Page 2
//!                  └─ ...
//! Info: Title = project, Subject = shooting date, CreationDate, Producer
//! ```
//!
//! Each page is exactly the size of its raster, so the image is drawn
//! full-bleed with a single `cm` + `Do`. The document is serialized in memory
//! and written in one call, so a failed run never leaves a partial file behind.
//! Given the same pages and [`DocumentInfo`] the output bytes are identical.

use chrono::NaiveDateTime;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF encoding failed: {0}")]
    Encode(String),
}

/// One rendered page, already encoded for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfPage {
    /// Baseline JPEG bytes, embedded as-is with `DCTDecode`.
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl PdfPage {
    pub fn jpeg(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// Document-level metadata written to the Info dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo<'a> {
    pub title: &'a str,
    pub subject: &'a str,
    pub created: NaiveDateTime,
}

/// Convert page pixels to PDF points at the given pixel density.
pub fn px_to_pt(px: u32, dpi: u32) -> f32 {
    px as f32 * 72.0 / dpi as f32
}

/// Encode a PDF text string.
///
/// ASCII is identical in PDFDocEncoding and stays a plain literal; anything
/// else is written as UTF-16BE behind a byte order mark.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
    Object::String(bytes, StringFormat::Hexadecimal)
}

fn pdf_date(at: &NaiveDateTime) -> String {
    format!("D:{}", at.format("%Y%m%d%H%M%S"))
}

/// Build the document: one page per entry, in order.
pub fn build_document(
    pages: Vec<PdfPage>,
    info: &DocumentInfo<'_>,
    dpi: u32,
) -> Result<Document, PdfError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());

    for page in pages {
        let w = px_to_pt(page.width, dpi);
        let h = px_to_pt(page.height, dpi);

        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => page.width as i64,
                "Height" => page.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            page.data,
        ));

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![w.into(), 0.into(), 0.into(), h.into(), 0.into(), 0.into()],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .map_err(|e| PdfError::Encode(format!("page content: {}", e)))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

        let media_box: Vec<Object> = vec![0.into(), 0.into(), w.into(), h.into()];
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    "Im0" => image_id,
                },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => text_string(info.title),
        "Subject" => text_string(info.subject),
        "Producer" => Object::string_literal(concat!("stillsheet ", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(pdf_date(&info.created)),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

/// Serialize the pages into PDF bytes.
pub fn render_pdf(
    pages: Vec<PdfPage>,
    info: &DocumentInfo<'_>,
    dpi: u32,
) -> Result<Vec<u8>, PdfError> {
    let mut doc = build_document(pages, info, dpi)?;
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| PdfError::Encode(format!("serialize: {}", e)))?;
    Ok(bytes)
}

/// Write the pages to `path` as one PDF.
///
/// With no pages nothing is written and `Ok(None)` is returned. The parent
/// directory is created if it does not exist.
pub fn write_pdf(
    pages: Vec<PdfPage>,
    path: &Path,
    info: &DocumentInfo<'_>,
    dpi: u32,
) -> Result<Option<PathBuf>, PdfError> {
    if pages.is_empty() {
        tracing::info!(path = %path.display(), "no pages, skipping PDF");
        return Ok(None);
    }

    let page_count = pages.len();
    let bytes = render_pdf(pages, info, dpi)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), pages = page_count, bytes = bytes.len(), "wrote PDF");
    Ok(Some(path.to_path_buf()))
}
