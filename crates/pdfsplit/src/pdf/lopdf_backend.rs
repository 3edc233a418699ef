//! lopdf-based document backend.
//!
//! Implements [`PdfBackend`] on top of the [lopdf](https://crates.io/crates/lopdf)
//! crate. `lopdf::Document` is `Sync`, so workers create pages and extract
//! text concurrently without extra locking.

use super::backend::{PageHandle, PageSource, PdfBackend};
use super::error::{PdfError, Result};
use std::path::Path;

/// The default backend.
///
/// lopdf opens documents encrypted with an empty user password on its own.
/// Any other encrypted document is retried with each configured password in
/// order; the first one lopdf accepts wins.
#[derive(Debug, Clone, Default)]
pub struct LopdfBackend {
    passwords: Vec<String>,
}

impl LopdfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_passwords(passwords: Vec<String>) -> Self {
        Self { passwords }
    }

    /// Parse an in-memory PDF. `path` only labels errors.
    pub fn open_bytes(&self, bytes: &[u8], path: &Path) -> Result<LopdfDocument> {
        let inner = lopdf::Document::load_mem(bytes).map_err(|e| malformed(path, e))?;

        // Without the right password lopdf returns an empty shell that still
        // carries /Encrypt; never hand that out as a zero-page document.
        let inner = if inner.is_encrypted() {
            self.unlock(bytes, path)?
        } else {
            inner
        };

        Ok(LopdfDocument::new(inner))
    }

    fn unlock(&self, bytes: &[u8], path: &Path) -> Result<lopdf::Document> {
        if self.passwords.is_empty() {
            return Err(PdfError::PasswordRequired {
                path: path.to_path_buf(),
            });
        }

        for (attempt, password) in self.passwords.iter().enumerate() {
            match lopdf::Document::load_mem_with_password(bytes, password) {
                Ok(document) if !document.is_encrypted() => {
                    tracing::debug!("Opened {} with configured password #{}", path.display(), attempt + 1);
                    return Ok(document);
                }
                Ok(_) | Err(lopdf::Error::InvalidPassword) => {
                    tracing::debug!("Configured password #{} rejected for {}", attempt + 1, path.display());
                }
                Err(e) => return Err(malformed(path, e)),
            }
        }

        Err(PdfError::InvalidPassword {
            path: path.to_path_buf(),
            tried: self.passwords.len(),
        })
    }
}

fn malformed(path: &Path, err: lopdf::Error) -> PdfError {
    PdfError::Malformed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;

    fn open(&self, path: &Path) -> Result<Self::Document> {
        let bytes = std::fs::read(path).map_err(|e| PdfError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.open_bytes(&bytes, path)
    }
}

/// A parsed document backed by lopdf.
pub struct LopdfDocument {
    inner: lopdf::Document,
    /// One-based lopdf page numbers, indexed by zero-based page index.
    page_numbers: Vec<u32>,
}

impl LopdfDocument {
    fn new(inner: lopdf::Document) -> Self {
        // get_pages() is keyed by one-based page number, already in order.
        let page_numbers = inner.get_pages().keys().copied().collect();
        Self { inner, page_numbers }
    }
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_numbers.len())
            .finish_non_exhaustive()
    }
}

impl PageSource for LopdfDocument {
    type Page<'a> = LopdfPage<'a>;

    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn create_page(&self, index: usize) -> Result<Self::Page<'_>> {
        let number = *self.page_numbers.get(index).ok_or(PdfError::PageOutOfRange {
            index,
            page_count: self.page_numbers.len(),
        })?;
        Ok(LopdfPage {
            document: &self.inner,
            number,
        })
    }
}

/// A single page of a [`LopdfDocument`].
#[derive(Debug, Clone, Copy)]
pub struct LopdfPage<'a> {
    document: &'a lopdf::Document,
    number: u32,
}

impl PageHandle for LopdfPage<'_> {
    fn extract_text(&self) -> Result<Vec<u8>> {
        self.document
            .extract_text(&[self.number])
            .map(String::into_bytes)
            .map_err(|e| PdfError::TextExtraction {
                page_number: self.number,
                reason: e.to_string(),
            })
    }
}
