//! The sheet pipeline: discover → render → assemble.
//!
//! [`run`] drives one job end to end. Stills are handled strictly one at a
//! time: decode, render, encode to JPEG, drop the rasters, move on. Only the
//! encoded pages are held until the PDF is assembled.
//!
//! Progress is reported through a callback of [`SheetEvent`]s rather than
//! printed here, so the binary decides how to show it and tests can collect
//! the events directly.
//!
//! Any error aborts the run before the PDF is written; there is no partial
//! output and no per-still recovery.

use crate::config::{ConfigError, SheetConfig};
use crate::imaging::{
    BackendError, FontError, ImageBackend, LeadOverlay, LogoError, PageKind, Quality,
    Typesetter, encode_page, render_page,
};
use crate::naming::{LabelParts, NamingError, label_parts_for};
use crate::pdf::{self, DocumentInfo, PdfError};
use crate::scan::discover_stills;
use crate::types::Job;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Font error: {0}")]
    Font(#[from] FontError),
    #[error("Logo error: {0}")]
    Logo(#[from] LogoError),
    #[error("Bad still name: {0}")]
    Naming(#[from] NamingError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("PDF output failed: {0}")]
    Pdf(#[from] PdfError),
}

/// Progress notifications emitted while a job runs.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetEvent {
    /// Discovery finished.
    Discovered { count: usize },
    /// One page is rendered and encoded.
    PageRendered {
        index: usize,
        source: PathBuf,
        labels: LabelParts,
        kind: PageKind,
        width: u32,
        height: u32,
    },
    /// The input held no stills; nothing was written.
    NoImages,
    /// The PDF was written.
    Written { path: PathBuf, pages: usize },
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetReport {
    /// Stills in page order.
    pub stills: Vec<PathBuf>,
    /// The written PDF, or `None` when there was nothing to write.
    pub output: Option<PathBuf>,
}

/// Run one contact sheet job.
pub fn run(
    job: &Job,
    config: &SheetConfig,
    backend: &impl ImageBackend,
    typesetter: &impl Typesetter,
    mut on_event: impl FnMut(SheetEvent),
) -> Result<SheetReport, SheetError> {
    let stills = discover_stills(&job.input_dir);
    on_event(SheetEvent::Discovered {
        count: stills.len(),
    });

    let layout = &config.layout;
    let quality = Quality::new(layout.quality);
    let generated_at = job.generated_at_label();
    let lead = LeadOverlay {
        project_name: &job.project_name,
        shooting_date: &job.shooting_date,
        generated_at: &generated_at,
        logo: &job.logo,
    };

    let mut pages = Vec::with_capacity(stills.len());
    for (index, path) in stills.iter().enumerate() {
        let labels = label_parts_for(path)?;
        let kind = PageKind::for_index(index);

        let encoded = {
            let still = backend.decode(path)?;
            let overlay = (kind == PageKind::Lead).then_some(&lead);
            let page = render_page(
                &still,
                &labels,
                overlay,
                layout.width,
                layout.padding,
                typesetter,
            );
            encode_page(&page, quality)?
        };
        tracing::debug!(
            index,
            source = %path.display(),
            width = encoded.width,
            height = encoded.height,
            jpeg_bytes = encoded.data.len(),
            "rendered page"
        );

        on_event(SheetEvent::PageRendered {
            index,
            source: path.clone(),
            labels,
            kind,
            width: encoded.width,
            height: encoded.height,
        });
        pages.push(encoded);
    }

    let info = DocumentInfo {
        title: &job.project_name,
        subject: &job.shooting_date,
        created: job.generated_at,
    };
    let page_count = pages.len();
    let output = pdf::write_pdf(pages, &job.output_path(), &info, layout.dpi)?;

    match &output {
        Some(path) => on_event(SheetEvent::Written {
            path: path.clone(),
            pages: page_count,
        }),
        None => on_event(SheetEvent::NoImages),
    }

    Ok(SheetReport { stills, output })
}
