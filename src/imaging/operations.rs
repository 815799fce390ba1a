//! High-level page operations.
//!
//! These functions combine the layout calculations with pixel work: resize a
//! still, composite it onto a padded white canvas with its overlays, and
//! encode the finished page for embedding.

use super::backend::BackendError;
use super::calculations::PageGeometry;
use super::params::{PageKind, Quality, TextStyle};
use super::typeset::Typesetter;
use crate::naming::LabelParts;
use crate::pdf::PdfPage;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageEncoder, Rgba, RgbImage, RgbaImage};

/// Result type for page operations.
pub type Result<T> = std::result::Result<T, BackendError>;

const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Lead-page content: the title block and the logo.
#[derive(Debug, Clone, Copy)]
pub struct LeadOverlay<'a> {
    pub project_name: &'a str,
    pub shooting_date: &'a str,
    pub generated_at: &'a str,
    pub logo: &'a RgbaImage,
}

/// Resize a still to exactly `width` pixels wide with Lanczos3, keeping its aspect ratio.
pub fn resize_to_width(still: &DynamicImage, geometry: &PageGeometry) -> RgbaImage {
    imageops::resize(
        still,
        geometry.width,
        geometry.photo_height,
        FilterType::Lanczos3,
    )
}

/// Render one sheet page.
///
/// Passing `lead` makes this the lead page: four padding bands instead of
/// one, the photo pushed down by three bands, and the title block and logo
/// drawn above it. Every page gets the file and look labels in its bottom band.
pub fn render_page(
    still: &DynamicImage,
    labels: &LabelParts,
    lead: Option<&LeadOverlay<'_>>,
    width: u32,
    padding: u32,
    typesetter: &impl Typesetter,
) -> RgbImage {
    let kind = if lead.is_some() {
        PageKind::Lead
    } else {
        PageKind::Continuation
    };
    let geometry = PageGeometry::new(kind, (still.width(), still.height()), width, padding);

    let mut canvas = RgbaImage::from_pixel(geometry.width, geometry.canvas_height, PAPER);
    let photo = resize_to_width(still, &geometry);
    imageops::replace(&mut canvas, &photo, 0, geometry.photo_y as i64);

    if let Some(lead) = lead {
        let [title, date, stamp] = geometry.title_block();
        typesetter.draw(&mut canvas, TextStyle::Title, title.0, title.1, lead.project_name);
        typesetter.draw(&mut canvas, TextStyle::Subtitle, date.0, date.1, lead.shooting_date);
        typesetter.draw(&mut canvas, TextStyle::Caption, stamp.0, stamp.1, lead.generated_at);

        let (logo_x, logo_y) = geometry.logo_origin(lead.logo.width());
        imageops::overlay(&mut canvas, lead.logo, logo_x, logo_y);
    }

    let (file_at, look_at) = geometry.label_origins();
    typesetter.draw(&mut canvas, TextStyle::Label, file_at.0, file_at.1, &labels.file_name);
    typesetter.draw(&mut canvas, TextStyle::Label, look_at.0, look_at.1, &labels.look_name);

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Encode a rendered page as baseline JPEG for embedding in the PDF.
pub fn encode_page(page: &RgbImage, quality: Quality) -> Result<PdfPage> {
    let mut jpeg = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, quality.value() as u8)
        .write_image(
            page.as_raw(),
            page.width(),
            page.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))?;
    Ok(PdfPage::jpeg(jpeg, page.width(), page.height()))
}
