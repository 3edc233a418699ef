//! PDF document access.
//!
//! The pipeline treats the PDF library as an opaque collaborator reached
//! through the traits in [`backend`]. [`lopdf_backend`] provides the default
//! implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use pdfsplit::pdf::{LopdfBackend, PageHandle, PageSource, PdfBackend};
//!
//! # fn example() -> pdfsplit::Result<()> {
//! let doc = LopdfBackend::new().open("document.pdf".as_ref())?;
//! let page = doc.create_page(0)?;
//! println!("{}", String::from_utf8_lossy(&page.extract_text()?));
//! # Ok(())
//! # }
//! ```
pub mod backend;
pub mod error;
pub mod lopdf_backend;

pub use backend::{PageHandle, PageSource, PdfBackend};
pub use error::PdfError;
pub use lopdf_backend::{LopdfBackend, LopdfDocument, LopdfPage};
