//! Directory-level orchestration: every matching PDF, one after another.

use super::document::process_document;
use crate::Result;
use crate::core::config::SplitConfig;
use crate::core::io::{ensure_directory, find_files_by_extension, validate_directory};
use crate::pdf::PdfBackend;
use crate::types::DirectoryReport;
use std::path::Path;

/// Split every PDF directly under `input_dir` into `output_root`.
///
/// Only regular files whose extension equals `config.pdf_extension` are
/// considered; subdirectories are not searched. Documents are processed
/// sequentially in path order, and each one is fully written before the next
/// is opened. A document that fails to open is recorded in the report and
/// the remaining documents are still processed.
///
/// # Errors
///
/// Returns `PdfSplitError::Validation` if `input_dir` is not an existing
/// directory, or `PdfSplitError::Io` if it cannot be listed or `output_root`
/// cannot be created.
pub fn process_directory<B: PdfBackend>(
    backend: &B,
    input_dir: &Path,
    output_root: &Path,
    config: &SplitConfig,
) -> Result<DirectoryReport> {
    validate_directory(input_dir)?;
    ensure_directory(output_root)?;

    let files = find_files_by_extension(input_dir, &config.pdf_extension)?;
    if files.is_empty() {
        tracing::info!("No .{} files found in {}", config.pdf_extension, input_dir.display());
    } else {
        tracing::info!("Found {} document(s) in {}", files.len(), input_dir.display());
    }

    let mut report = DirectoryReport::default();
    for path in files {
        report.documents.push(process_document(backend, &path, output_root, config));
    }

    tracing::info!(
        "Processed {} document(s), {} failed to open, {} page(s) written",
        report.documents.len(),
        report.failed_documents(),
        report.pages_written()
    );

    Ok(report)
}
