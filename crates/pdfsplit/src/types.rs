//! Values passed through the pipeline and the reports it produces.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One image found on a page.
///
/// `data` is written to disk as-is; no encoding happens in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// Position in discovery order, unique within the page.
    pub index: usize,
    pub data: Vec<u8>,
    /// File extension used when the image is written (e.g. `png`).
    pub format: String,
}

/// Everything extracted from a single page.
///
/// Built by a worker, moved into the result queue, and consumed by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// Stem of the source file name.
    pub document_name: String,
    /// Zero-based page position within the document.
    pub page_index: usize,
    /// Full text layer; empty when extraction yields nothing.
    pub text: String,
    pub images: Vec<PageImage>,
}

impl PageResult {
    /// A result with no text and no images.
    pub fn empty(document_name: impl Into<String>, page_index: usize) -> Self {
        Self {
            document_name: document_name.into(),
            page_index,
            text: String::new(),
            images: Vec::new(),
        }
    }
}

/// Lifecycle of one document run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentState {
    Opening,
    Dispatching,
    Draining,
    Closed,
}

/// Outcome of processing one PDF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub document_name: String,
    pub path: PathBuf,
    /// `false` when the document could not be opened and was skipped.
    pub opened: bool,
    pub page_count: usize,
    /// Pages for which a result was pushed to the writer.
    pub pages_extracted: usize,
    /// Pages whose handle could not be obtained.
    pub pages_skipped: usize,
    /// Pages whose output was fully written.
    pub pages_written: usize,
    /// Pages with at least one failed directory creation or file write.
    pub write_failures: usize,
    pub state: DocumentState,
}

impl DocumentReport {
    pub(crate) fn new(document_name: String, path: PathBuf) -> Self {
        Self {
            document_name,
            path,
            opened: false,
            page_count: 0,
            pages_extracted: 0,
            pages_skipped: 0,
            pages_written: 0,
            write_failures: 0,
            state: DocumentState::Opening,
        }
    }

    /// True when the document opened and every page reached disk.
    pub fn is_complete(&self) -> bool {
        self.opened && self.pages_written == self.page_count
    }
}

/// Outcome of processing a whole input directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryReport {
    pub documents: Vec<DocumentReport>,
}

impl DirectoryReport {
    /// Number of documents that could not be opened.
    pub fn failed_documents(&self) -> usize {
        self.documents.iter().filter(|d| !d.opened).count()
    }

    pub fn pages_written(&self) -> usize {
        self.documents.iter().map(|d| d.pages_written).sum()
    }
}
