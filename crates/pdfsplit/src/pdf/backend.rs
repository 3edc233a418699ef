//! Document collaborator traits.
//!
//! The pipeline never parses PDF data itself. It talks to a backend through
//! three small traits:
//!
//! - [`PdfBackend`] opens a document from a path.
//! - [`PageSource`] is an opened document: it reports its page count and
//!   hands out page handles by zero-based index.
//! - [`PageHandle`] is one page of that document: it renders the text layer
//!   (and, as an extension point, the image layer).
//!
//! # Thread Safety
//!
//! Workers call [`PageSource::create_page`] concurrently on a shared
//! reference, so documents must be `Sync`. A backend whose underlying library
//! cannot create pages concurrently must serialize the call internally.
//!
//! # Usage
//!
//! ```ignore
//! let doc = backend.open(path)?;
//! for index in 0..doc.page_count() {
//!     let page = doc.create_page(index)?;
//!     let text = page.extract_text()?;
//! }
//! ```

use super::error::Result;
use crate::types::PageImage;
use std::path::Path;

/// Opens documents from the filesystem.
pub trait PdfBackend: Send + Sync {
    /// The opened document type.
    type Document: PageSource;

    /// Load a document from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a usable PDF.
    /// The caller skips the document; it is never retried.
    fn open(&self, path: &Path) -> Result<Self::Document>;
}

/// An opened document shared read-only by all workers.
pub trait PageSource: Sync {
    /// A handle to one page, borrowing the document. Dropping it releases the page.
    type Page<'a>: PageHandle
    where
        Self: 'a;

    /// Total number of pages.
    fn page_count(&self) -> usize;

    /// Create a handle for the page at zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`super::PdfError::PageOutOfRange`] if the index is out of range,
    /// or another error if the page object cannot be resolved.
    fn create_page(&self, index: usize) -> Result<Self::Page<'_>>;
}

/// One page of an opened document.
pub trait PageHandle {
    /// Render the page's text layer as UTF-8 bytes.
    fn extract_text(&self) -> Result<Vec<u8>>;

    /// Collect the page's images in discovery order.
    ///
    /// Image extraction is an inert extension point: the default
    /// implementation finds nothing.
    fn extract_images(&self) -> Result<Vec<PageImage>> {
        Ok(Vec::new())
    }
}
