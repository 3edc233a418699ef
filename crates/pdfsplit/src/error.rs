//! Error types for pdfsplit.
//!
//! Errors only surface from operations that run before or around the
//! pipeline: loading configuration, validating the input directory, and
//! creating the output root. Inside the pipeline every failure is handled
//! where it occurs (logged and counted) and never crosses a thread boundary.
//!
//! - `Io` wraps `std::io::Error` unchanged so system problems stay visible
//! - `Pdf` carries a [`crate::pdf::PdfError`] from direct backend use
//! - `Validation` covers invalid configuration, paths and parameters
//!
//! # Example
//!
//! ```rust
//! use pdfsplit::{PdfSplitError, Result};
//!
//! fn thread_count(raw: &str) -> Result<usize> {
//!     raw.parse()
//!         .map_err(|e| PdfSplitError::validation_with_source(format!("Invalid thread count: {}", raw), e))
//! }
//!
//! assert!(thread_count("four").is_err());
//! ```
use thiserror::Error;

/// Result type alias using `PdfSplitError`.
pub type Result<T> = std::result::Result<T, PdfSplitError>;

/// Main error type for all pdfsplit operations.
#[derive(Debug, Error)]
pub enum PdfSplitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] crate::pdf::error::PdfError),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl PdfSplitError {
    error_constructor!(validation, Validation);
}
