//! CLI output formatting for the sheet pipeline.
//!
//! Each page is shown by its printed identity, the file and look labels,
//! with the source filename and page size as indented context lines:
//!
//! ```text
//! Found 3 images
//! 001 A001 · Warm (lead)
//!     Source: A001-Warm.jpg
//!     Page: 1920x1840
//! 002 A002 · Cold
//!     Source: A002-Cold.tif
//!     Page: 1920x1180
//! 003 B001 · Warm
//!     Source: B001-Warm.png
//!     Page: 1920x1540
//! Wrote 3 pages → out/Nightfall_2024-05-12.pdf
//! ```
//!
//! `format_*` functions are pure and return lines; the `print_*` wrappers
//! write them to stdout.

use crate::imaging::PageKind;
use crate::pipeline::SheetEvent;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the lines for one pipeline event.
pub fn format_event(event: &SheetEvent) -> Vec<String> {
    match event {
        SheetEvent::Discovered { count } => vec![format!("Found {} images", count)],
        SheetEvent::PageRendered {
            index,
            source,
            labels,
            kind,
            width,
            height,
        } => {
            let marker = match kind {
                PageKind::Lead => " (lead)",
                PageKind::Continuation => "",
            };
            let source_name = source
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            vec![
                format!(
                    "{} {} · {}{}",
                    format_index(index + 1),
                    labels.file_name,
                    labels.look_name,
                    marker
                ),
                format!("{}Source: {}", indent(1), source_name),
                format!("{}Page: {}x{}", indent(1), width, height),
            ]
        }
        SheetEvent::NoImages => vec!["No images found for creating PDF".to_string()],
        SheetEvent::Written { path, pages } => {
            let noun = if *pages == 1 { "page" } else { "pages" };
            vec![format!("Wrote {} {} → {}", pages, noun, path.display())]
        }
    }
}

pub fn print_event(event: &SheetEvent) {
    for line in format_event(event) {
        println!("{}", line);
    }
}
