//! Overlay text rendering.
//!
//! Page layout never touches font files directly: it asks a [`Typesetter`]
//! to set a string in one of the four [`TextStyle`]s at a pixel origin. The
//! production [`FontSet`] loads the configured faces with `ab_glyph` and
//! rasterizes through `imageproc`; tests substitute a recorder.
//!
//! Sizes in the config are em sizes, so each face's scale is derived from its
//! units-per-em rather than used as a raw line height.

use super::params::TextStyle;
use crate::config::{FontSpec, FontsConfig};
use ab_glyph::{Font, FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use std::path::PathBuf;
use thiserror::Error;

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Cannot read font {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("No usable face {index} in font {}", path.display())]
    InvalidFace { path: PathBuf, index: u32 },
}

/// Sets text onto a page canvas.
pub trait Typesetter {
    /// Draw `text` with its top-left origin at `(x, y)`.
    fn draw(&self, canvas: &mut RgbaImage, style: TextStyle, x: i32, y: i32, text: &str);
}

/// A loaded face plus the scale that renders it at the configured em size.
struct Face {
    font: FontVec,
    scale: PxScale,
}

impl Face {
    fn load(spec: &FontSpec) -> Result<Self, FontError> {
        let data = std::fs::read(&spec.path).map_err(|source| FontError::Io {
            path: spec.path.clone(),
            source,
        })?;
        let font = FontVec::try_from_vec_and_index(data, spec.index).map_err(|_| {
            FontError::InvalidFace {
                path: spec.path.clone(),
                index: spec.index,
            }
        })?;
        let scale = em_scale(&font, spec.size as f32);
        tracing::debug!(
            path = %spec.path.display(),
            index = spec.index,
            size = spec.size,
            "loaded font face"
        );
        Ok(Self { font, scale })
    }
}

/// Convert an em size in pixels to the `PxScale` ab_glyph expects.
fn em_scale(font: &impl Font, em_px: f32) -> PxScale {
    px_scale_for_em(em_px, font.height_unscaled(), font.units_per_em())
}

/// `PxScale` is the ascent-to-descent height, so scale the em size by
/// `height / units_per_em`. Without a usable em the size is taken as-is.
fn px_scale_for_em(em_px: f32, height_unscaled: f32, units_per_em: Option<f32>) -> PxScale {
    match units_per_em {
        Some(upem) if upem > 0.0 => PxScale::from(em_px * height_unscaled / upem),
        _ => PxScale::from(em_px),
    }
}

/// The four faces named by [`FontsConfig`], loaded and ready to draw.
pub struct FontSet {
    title: Face,
    subtitle: Face,
    caption: Face,
    label: Face,
}

impl FontSet {
    /// Load every configured face. Fails on the first unreadable file or face index.
    pub fn load(fonts: &FontsConfig) -> Result<Self, FontError> {
        Ok(Self {
            title: Face::load(&fonts.title)?,
            subtitle: Face::load(&fonts.subtitle)?,
            caption: Face::load(&fonts.caption)?,
            label: Face::load(&fonts.label)?,
        })
    }

    fn face(&self, style: TextStyle) -> &Face {
        match style {
            TextStyle::Title => &self.title,
            TextStyle::Subtitle => &self.subtitle,
            TextStyle::Caption => &self.caption,
            TextStyle::Label => &self.label,
        }
    }
}

impl Typesetter for FontSet {
    fn draw(&self, canvas: &mut RgbaImage, style: TextStyle, x: i32, y: i32, text: &str) {
        let face = self.face(style);
        draw_text_mut(canvas, INK, x, y, face.scale, &face.font, text);
    }
}
