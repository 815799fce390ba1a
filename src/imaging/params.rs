//! Parameter types for page rendering.
//!
//! These describe *what* a page looks like, not how pixels are pushed:
//!
//! - [`Quality`]: JPEG quality for embedded pages (1–100, default 90). Clamped on construction.
//! - [`PageKind`]: whether a page is the lead page (title block + logo) or a continuation page.
//! - [`TextStyle`]: which of the four configured faces a piece of text is set in.

/// Quality setting for lossy page encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Position of a page within the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// First page: carries the title block and the logo.
    Lead,
    /// Every other page: photo and labels only.
    Continuation,
}

impl PageKind {
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            Self::Lead
        } else {
            Self::Continuation
        }
    }
}

/// Overlay text styles, one per configured face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Project name.
    Title,
    /// Shooting date.
    Subtitle,
    /// Generation timestamp.
    Caption,
    /// File and look names.
    Label,
}
