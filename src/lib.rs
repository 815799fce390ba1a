//! # Stillsheet
//!
//! Turns a directory of stills into a single paginated PDF contact sheet.
//! Every still becomes one page: the photo resized to a fixed width on a white
//! canvas, labelled underneath with the two halves of its `<file>-<look>`
//! filename. The first page also carries a title block (project name, shooting
//! date, generation timestamp) and a logo.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Discover  input/     →  sorted still paths   (scan)
//! 2. Render    each still →  encoded page         (naming + imaging)
//! 3. Assemble  pages      →  <project>_<date>.pdf (pdf)
//! ```
//!
//! [`pipeline::run`] drives the stages for one [`types::Job`]. Stills are
//! handled one at a time and each rendered page is JPEG-encoded right away,
//! so memory stays proportional to the encoded output rather than to the
//! decoded rasters.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: lists the stills in the input directory, sorted by filename |
//! | [`naming`] | `<file>-<look>` filename convention parser for the page labels |
//! | [`imaging`] | Stage 2: decode, resize, composite text and logo, encode |
//! | [`pdf`] | Stage 3: assembles encoded pages into one PDF with `lopdf` |
//! | [`pipeline`] | Runs a job end to end and reports progress events |
//! | [`config`] | `stillsheet.toml` loading, validation and merging; stock defaults |
//! | [`types`] | The immutable [`types::Job`] threaded through every stage |
//! | [`output`] | CLI output formatting for pipeline events |
//!
//! # Design Decisions
//!
//! ## Reproducible Output
//!
//! The generation timestamp is captured once into the [`types::Job`] and is
//! the only time-dependent input. With it frozen, the same stills produce a
//! byte-identical PDF.
//!
//! ## All or Nothing
//!
//! The PDF is built in memory and written with a single call after the last
//! page is encoded. A bad filename or undecodable still aborts the run before
//! anything reaches the output directory.
//!
//! ## Fonts as Configuration
//!
//! Overlay text faces (file, collection index, em size) live in the config
//! file and can be swapped from the command line. Layout code only talks to
//! the [`imaging::Typesetter`] trait, so nothing outside the binary needs a
//! real font to run.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod pdf;
pub mod pipeline;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
