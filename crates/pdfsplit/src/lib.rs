//! pdfsplit - Per-Page PDF Text Splitting
//!
//! pdfsplit walks a directory of PDF documents and writes the text layer of
//! every page to its own folder: `<output>/<document stem>/<page index>/text_layer.txt`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pdfsplit::{SplitConfig, process_directory};
//! use pdfsplit::pdf::LopdfBackend;
//!
//! # fn main() -> pdfsplit::Result<()> {
//! let config = SplitConfig::default();
//! let backend = LopdfBackend::with_passwords(config.passwords.clone());
//! let report = process_directory(&backend, "input".as_ref(), "output".as_ref(), &config)?;
//! println!("Processed {} document(s)", report.documents.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **PDF Module** (`pdf`): the document collaborator trait and its lopdf backend
//! - **Pipeline Module** (`pipeline`): page dispenser, worker pool, result queue,
//!   writer thread, and the per-document and per-directory orchestrators
//! - **Core Module** (`core`): configuration loading and directory traversal
//!
//! Documents are processed one after another. Within a document, `thread_count`
//! workers extract pages in parallel and a single writer thread performs all
//! filesystem output, so at most `thread_count + 1` pipeline threads exist at once.

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod pdf;
pub mod pipeline;
pub mod types;

pub use error::{PdfSplitError, Result};
pub use types::*;

pub use core::config::{DEFAULT_TEXT_FILE_NAME, SplitConfig};
pub use pipeline::directory::process_directory;
pub use pipeline::document::process_document;
