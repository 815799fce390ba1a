//! Image processing: decode, lay out, composite, encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` |
//! | **Resize** | `image::imageops::resize` with Lanczos3 |
//! | **Overlay text** | `imageproc::drawing::draw_text_mut` with `ab_glyph` faces |
//! | **Logo** | `base64` → `image::load_from_memory` → `imageops::overlay` |
//! | **Page encode** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for page geometry (unit testable)
//! - **Parameters**: Small value types describing pages and text styles
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Typeset**: [`Typesetter`] trait + [`FontSet`]
//! - **Operations**: High-level functions combining calculations, backend and typesetter

pub mod backend;
mod calculations;
pub mod logo;
pub mod operations;
mod params;
pub mod rust_backend;
pub mod typeset;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{MAX_PAGE_EXTENT, PageGeometry, resized_height};
pub use logo::{LogoError, decode_logo};
pub use operations::{LeadOverlay, encode_page, render_page};
pub use params::{PageKind, Quality, TextStyle};
pub use rust_backend::RustBackend;
pub use typeset::{FontError, FontSet, Typesetter};
