//! Pure layout math for sheet pages.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! ```text
//! Lead page                          Continuation page
//! ┌──────────────────────────┐       ┌──────────────────────────┐
//! │ p  Title          [logo] │ 3p    │                          │
//! │    Date                  │       │          photo           │
//! │    Timestamp             │       │                          │
//! ├──────────────────────────┤       ├──────────────────────────┤
//! │          photo           │       │ file            look     │ p
//! ├──────────────────────────┤       └──────────────────────────┘
//! │ file            look     │ p
//! └──────────────────────────┘
//! ```

use super::params::PageKind;

/// Vertical offset of the shooting date below the title origin.
pub const DATE_OFFSET: i32 = 70;
/// Vertical offset of the generation timestamp below the title origin.
pub const TIMESTAMP_OFFSET: i32 = 110;
/// Distance of the labels below the top of the bottom padding band.
pub const LABEL_OFFSET: i32 = 30;
/// Horizontal room reserved for the look label, measured from the right padding.
pub const LOOK_LABEL_WIDTH: i32 = 150;
/// Largest page side, in pixels, that baseline JPEG can encode.
pub const MAX_PAGE_EXTENT: u32 = 65_535;

/// Height of a still resized to `target_width`, aspect ratio preserved.
///
/// # Examples
/// ```
/// # use stillsheet::imaging::resized_height;
/// assert_eq!(resized_height((4000, 3000), 1920), 1440);
/// assert_eq!(resized_height((1000, 333), 1920), 639);
/// ```
pub fn resized_height(source: (u32, u32), target_width: u32) -> u32 {
    let (src_w, src_h) = source;
    if src_w == 0 {
        return src_h.max(1);
    }
    let h = (src_h as f64 * target_width as f64 / src_w as f64).round() as u32;
    h.max(1)
}

/// Canvas dimensions and photo placement for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    pub kind: PageKind,
    /// Canvas and photo width.
    pub width: u32,
    /// Height of the resized photo.
    pub photo_height: u32,
    /// Total canvas height including padding bands.
    pub canvas_height: u32,
    /// Top edge of the photo on the canvas.
    pub photo_y: u32,
    pub padding: u32,
}

impl PageGeometry {
    /// Lay out a page for a source of `source` pixels at the given width and padding.
    pub fn new(kind: PageKind, source: (u32, u32), width: u32, padding: u32) -> Self {
        let photo_height = resized_height(source, width);
        let (bands, photo_bands) = match kind {
            PageKind::Lead => (4, 3),
            PageKind::Continuation => (1, 0),
        };
        Self {
            kind,
            width,
            photo_height,
            canvas_height: photo_height.saturating_add(padding.saturating_mul(bands)),
            photo_y: padding.saturating_mul(photo_bands),
            padding,
        }
    }

    fn pad(&self) -> i64 {
        self.padding as i64
    }

    /// Origins of the title, date and timestamp lines on the lead page.
    pub fn title_block(&self) -> [(i32, i32); 3] {
        let p = self.pad();
        [
            (text_coord(p), text_coord(p)),
            (text_coord(p), text_coord(p + DATE_OFFSET as i64)),
            (text_coord(p), text_coord(p + TIMESTAMP_OFFSET as i64)),
        ]
    }

    /// Top-left corner of the logo: right-aligned, half a padding band in.
    ///
    /// Negative when the logo is wider than the page; the overlay is clipped.
    pub fn logo_origin(&self, logo_width: u32) -> (i64, i64) {
        let half = (self.padding / 2) as i64;
        (self.width as i64 - logo_width as i64 - half, half)
    }

    /// Origins of the file label (bottom-left) and look label (bottom-right).
    pub fn label_origins(&self) -> ((i32, i32), (i32, i32)) {
        let p = self.pad();
        let y = text_coord(self.canvas_height as i64 - p + LABEL_OFFSET as i64);
        let look_x = text_coord(self.width as i64 - p - LOOK_LABEL_WIDTH as i64);
        ((text_coord(p), y), (look_x, y))
    }
}

/// Clamp a layout coordinate into the range text drawing accepts.
fn text_coord(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
