//! Shared types threaded through every pipeline stage.

use chrono::NaiveDateTime;
use image::RgbaImage;
use std::path::PathBuf;

/// Timestamp format printed on the lead page.
pub const GENERATED_AT_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Everything a single run needs to know, fixed before the first still is read.
///
/// Built once by the binary from the command line and passed by reference to
/// each stage; nothing in the pipeline reads process-global state.
#[derive(Debug, Clone)]
pub struct Job {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Free text, printed as the title and used in the output filename.
    pub project_name: String,
    /// Free text, printed under the title and used in the output filename.
    pub shooting_date: String,
    /// Decoded logo, composited onto the lead page.
    pub logo: RgbaImage,
    /// When the run started; frozen here so reruns can be reproduced.
    pub generated_at: NaiveDateTime,
}

impl Job {
    /// `<project>_<date>.pdf`
    pub fn output_filename(&self) -> String {
        format!("{}_{}.pdf", self.project_name, self.shooting_date)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.output_filename())
    }

    /// The lead-page timestamp line.
    pub fn generated_at_label(&self) -> String {
        self.generated_at.format(GENERATED_AT_FORMAT).to_string()
    }
}
