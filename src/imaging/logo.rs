//! Logo payload decoding.
//!
//! The logo arrives on the command line as base64 text. ASCII whitespace is
//! stripped first so a payload wrapped by `base64` (76-column lines) can be
//! pasted as-is; the bytes are then decoded as any format `image` can sniff.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::RgbaImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("Logo is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Logo is not a readable image: {0}")]
    Image(#[from] image::ImageError),
}

/// Decode a base64 logo payload into an RGBA raster.
pub fn decode_logo(payload: &str) -> Result<RgbaImage, LogoError> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact)?;
    let logo = image::load_from_memory(&bytes)?.to_rgba8();
    tracing::debug!(width = logo.width(), height = logo.height(), "decoded logo");
    Ok(logo)
}
