//! The single writer that performs all filesystem output for a document.
//!
//! Layout: `<output_root>/<document_name>/<page_index>/<text_file_name>`, plus
//! `image_<index>.<format>` files when the result carries images. Existing
//! files are overwritten. A failed page write is logged and counted; the
//! writer moves on to the next result.

use super::queue::ResultQueue;
use crate::types::PageResult;
use std::path::{Path, PathBuf};

/// Counters reported by [`PageWriter::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterStats {
    pub written: usize,
    pub failed: usize,
}

/// Writes page results below an output root.
#[derive(Debug, Clone)]
pub struct PageWriter<'a> {
    output_root: &'a Path,
    text_file_name: &'a str,
}

impl<'a> PageWriter<'a> {
    pub fn new(output_root: &'a Path, text_file_name: &'a str) -> Self {
        Self {
            output_root,
            text_file_name,
        }
    }

    /// Directory holding the output of one page.
    pub fn page_dir(&self, document_name: &str, page_index: usize) -> PathBuf {
        self.output_root.join(document_name).join(page_index.to_string())
    }

    /// Write one result, creating its page directory as needed.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error hit while creating the directory or writing a file.
    pub fn write_page(&self, result: &PageResult) -> std::io::Result<PathBuf> {
        let page_dir = self.page_dir(&result.document_name, result.page_index);
        std::fs::create_dir_all(&page_dir)?;

        std::fs::write(page_dir.join(self.text_file_name), result.text.as_bytes())?;

        for image in &result.images {
            let image_path = page_dir.join(format!("image_{}.{}", image.index, image.format));
            std::fs::write(image_path, &image.data)?;
        }

        Ok(page_dir)
    }

    /// Drain `queue` until it is finished and empty, writing every result.
    pub fn run(&self, queue: &ResultQueue<PageResult>) -> WriterStats {
        let mut stats = WriterStats::default();

        while let Some(result) = queue.pop() {
            match self.write_page(&result) {
                Ok(page_dir) => {
                    stats.written += 1;
                    tracing::debug!("Wrote page {} to {}", result.page_index, page_dir.display());
                }
                Err(e) => {
                    stats.failed += 1;
                    tracing::warn!(
                        "Failed to write page {} of {}: {}",
                        result.page_index,
                        result.document_name,
                        e
                    );
                }
            }
        }

        stats
    }
}
