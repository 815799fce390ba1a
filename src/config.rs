//! Sheet configuration module.
//!
//! Handles loading, validating, and merging a `stillsheet.toml` file. The
//! user file is sparse: stock defaults are serialized to a TOML table, the
//! user file is merged on top, and the result is deserialized and validated.
//! Command-line overrides (font paths, width, padding) are applied by the
//! binary after loading.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [layout]
//! width = 1920      # Page width in pixels (max 65535); every still is resized to this
//! padding = 100     # Padding band height in pixels (max 16383)
//! quality = 90      # JPEG quality of the embedded pages (1-100)
//! dpi = 100         # Pixel density used to size PDF pages
//!
//! [fonts.title]
//! path = "/System/Library/Fonts/PingFang.ttc"
//! index = 6         # Face index inside a .ttc collection (0 for .ttf)
//! size = 56         # Em size in pixels
//! ```
//!
//! The `subtitle`, `caption` and `label` faces follow the same shape.
//! Unknown keys are rejected to catch typos early.

use crate::imaging::MAX_PAGE_EXTENT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default face collection for the body text.
pub const DEFAULT_TEXT_FONT: &str = "/System/Library/Fonts/HelveticaNeue.ttc";
/// Default face collection for the title line.
pub const DEFAULT_TITLE_FONT: &str = "/System/Library/Fonts/PingFang.ttc";

/// Contact sheet configuration loaded from `stillsheet.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Page geometry and encoding settings.
    pub layout: LayoutConfig,
    /// The four faces used for overlay text.
    pub fonts: FontsConfig,
}

impl SheetConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.width == 0 {
            return Err(ConfigError::Validation(
                "layout.width must be non-zero".into(),
            ));
        }
        if self.layout.width > MAX_PAGE_EXTENT {
            return Err(ConfigError::Validation(format!(
                "layout.width must be at most {MAX_PAGE_EXTENT}"
            )));
        }
        // The lead page carries four padding bands
        if self.layout.padding > MAX_PAGE_EXTENT / 4 {
            return Err(ConfigError::Validation(format!(
                "layout.padding must be at most {}",
                MAX_PAGE_EXTENT / 4
            )));
        }
        if self.layout.quality == 0 || self.layout.quality > 100 {
            return Err(ConfigError::Validation(
                "layout.quality must be 1-100".into(),
            ));
        }
        if self.layout.dpi == 0 {
            return Err(ConfigError::Validation("layout.dpi must be non-zero".into()));
        }
        for (name, spec) in self.fonts.iter() {
            if spec.size == 0 {
                return Err(ConfigError::Validation(format!(
                    "fonts.{name}.size must be non-zero"
                )));
            }
        }
        Ok(())
    }
}

/// Page geometry and encoding settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Target page width in pixels.
    pub width: u32,
    /// Height of one padding band in pixels.
    pub padding: u32,
    /// JPEG quality used when embedding pages.
    pub quality: u32,
    /// Pixels per inch used to convert page pixels to PDF points.
    pub dpi: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            padding: 100,
            quality: 90,
            dpi: 100,
        }
    }
}

/// A single face: file, index inside a collection, and pixel size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSpec {
    pub path: PathBuf,
    pub index: u32,
    pub size: u32,
}

impl FontSpec {
    fn new(path: &str, index: u32, size: u32) -> Self {
        Self {
            path: PathBuf::from(path),
            index,
            size,
        }
    }
}

/// Faces for the four overlay text styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    /// Project name on the lead page.
    pub title: FontSpec,
    /// Shooting date on the lead page.
    pub subtitle: FontSpec,
    /// Generation timestamp on the lead page.
    pub caption: FontSpec,
    /// File and look labels on every page.
    pub label: FontSpec,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            title: FontSpec::new(DEFAULT_TITLE_FONT, 6, 56),
            subtitle: FontSpec::new(DEFAULT_TEXT_FONT, 0, 28),
            caption: FontSpec::new(DEFAULT_TEXT_FONT, 7, 20),
            label: FontSpec::new(DEFAULT_TEXT_FONT, 1, 28),
        }
    }
}

impl FontsConfig {
    /// All faces with their config key.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FontSpec)> {
        [
            ("title", &self.title),
            ("subtitle", &self.subtitle),
            ("caption", &self.caption),
            ("label", &self.label),
        ]
        .into_iter()
    }

    /// Point the subtitle, caption and label faces at another collection.
    ///
    /// Face indices are kept; pass `--text-font` a collection laid out like
    /// the default, or a config file with explicit indices.
    pub fn set_text_font(&mut self, path: &Path) {
        for spec in [&mut self.subtitle, &mut self.caption, &mut self.label] {
            spec.path = path.to_path_buf();
        }
    }

    pub fn set_title_font(&mut self, path: &Path) {
        self.title.path = path.to_path_buf();
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SheetConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SheetConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SheetConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path`, or the stock defaults when `path` is `None`.
///
/// Unlike an implicit lookup, an explicitly named file that does not exist
/// is an error.
pub fn load_config(path: Option<&Path>) -> Result<SheetConfig, ConfigError> {
    let overlay = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            tracing::debug!(path = %path.display(), "loaded config file");
            Some(toml::from_str::<toml::Value>(&content)?)
        }
        None => None,
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock `stillsheet.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# stillsheet configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Pass the file with `stillsheet --config stillsheet.toml ...`.

# ---------------------------------------------------------------------------
# Page layout
# ---------------------------------------------------------------------------
[layout]
# Every still is resized to this width (pixels), keeping its aspect ratio.
# At most 65535, the largest JPEG side.
width = 1920

# Height of one padding band (pixels). The lead page reserves four bands
# (three above the photo for the title block, one below for labels); every
# other page reserves one band below the photo. At most 16383.
padding = 100

# JPEG quality of the pages embedded in the PDF (1 = worst, 100 = best).
quality = 90

# Pixel density used to size PDF pages: a 1920px page at 100 dpi is 19.2in.
dpi = 100

# ---------------------------------------------------------------------------
# Fonts
# ---------------------------------------------------------------------------
# `index` selects a face inside a .ttc collection; use 0 for plain .ttf/.otf.
# `size` is the em size in pixels.

# Project name on the lead page.
[fonts.title]
path = "/System/Library/Fonts/PingFang.ttc"
index = 6
size = 56

# Shooting date on the lead page.
[fonts.subtitle]
path = "/System/Library/Fonts/HelveticaNeue.ttc"
index = 0
size = 28

# Generation timestamp on the lead page.
[fonts.caption]
path = "/System/Library/Fonts/HelveticaNeue.ttc"
index = 7
size = 20

# File and look labels under every photo.
[fonts.label]
path = "/System/Library/Fonts/HelveticaNeue.ttc"
index = 1
size = 28
"##
}
