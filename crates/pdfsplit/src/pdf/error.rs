//! Failures reported by a document backend.
//!
//! Open failures carry the file path so a single log line identifies the
//! document. Page failures carry enough position information to find the
//! page again without the document name.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PdfError {
    /// The file could not be read from disk.
    #[error("{}: cannot read file: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// The bytes could not be parsed as a PDF.
    #[error("{}: not a valid PDF: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    /// The document is encrypted and no password was configured.
    #[error("{}: encrypted and no password is configured", .path.display())]
    PasswordRequired { path: PathBuf },

    /// None of the configured passwords opened the document.
    #[error("{}: rejected all {tried} configured password(s)", .path.display())]
    InvalidPassword { path: PathBuf, tried: usize },

    /// A zero-based page index past the end of the document.
    #[error("page index {index} is out of range for a {page_count}-page document")]
    PageOutOfRange { index: usize, page_count: usize },

    /// The text layer of a page could not be rendered. `page_number` is one-based.
    #[error("page {page_number}: text extraction failed: {reason}")]
    TextExtraction { page_number: u32, reason: String },
}

pub type Result<T> = std::result::Result<T, PdfError>;
