//! Per-document orchestration.
//!
//! One call to [`process_document`] walks a document through
//! `Opening -> Dispatching -> Draining -> Closed`:
//!
//! - **Opening**: load the document through the backend. On failure the
//!   document is reported and skipped; it goes straight to `Closed`.
//! - **Dispatching**: build the dispenser and queue, start `thread_count`
//!   workers and one writer, and wait for every worker to finish.
//! - **Draining**: mark the queue finished and wait for the writer, so every
//!   pushed result is on disk before the document is done.
//! - **Closed**: release the document.
//!
//! All threads live inside a `std::thread::scope`, so they borrow the
//! document, dispenser and queue directly and are guaranteed joined when
//! the scope ends.

use super::dispenser::PageDispenser;
use super::extract::Extractor;
use super::queue::ResultQueue;
use super::worker::{WorkerContext, WorkerStats, run_worker};
use super::writer::{PageWriter, WriterStats};
use crate::core::config::SplitConfig;
use crate::pdf::{PageSource, PdfBackend};
use crate::types::{DocumentReport, DocumentState, PageResult};
use std::path::Path;
use std::thread;

/// Document name used for output: the file stem of `path`.
pub fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Split one PDF into per-page output below `output_root`.
///
/// Never fails: open errors, skipped pages and write failures are logged and
/// recorded in the returned report.
pub fn process_document<B: PdfBackend>(
    backend: &B,
    path: &Path,
    output_root: &Path,
    config: &SplitConfig,
) -> DocumentReport {
    let name = document_name(path);
    let span = tracing::info_span!("document", name = %name);
    let _entered = span.enter();

    let mut report = DocumentReport::new(name.clone(), path.to_path_buf());

    let document = match backend.open(path) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!("Failed to open PDF {}", e);
            report.state = DocumentState::Closed;
            return report;
        }
    };
    report.opened = true;
    report.page_count = document.page_count();

    transition(&mut report, DocumentState::Dispatching);
    tracing::info!(
        "Processing {} page(s) with {} worker(s)",
        report.page_count,
        config.thread_count
    );
    if config.thread_count == 0 {
        tracing::warn!("thread_count is 0; no pages of {} will be extracted", name);
    }

    let dispenser = PageDispenser::new(report.page_count);
    let queue: ResultQueue<PageResult> = ResultQueue::new();
    let writer = PageWriter::new(output_root, &config.text_file_name);
    let ctx = WorkerContext {
        document: &document,
        document_name: &name,
        dispenser: &dispenser,
        queue: &queue,
        extractor: Extractor::new(config.extract_images, &config.image_format),
    };

    let (worker_stats, writer_stats) = thread::scope(|scope| {
        let writer_handle = thread::Builder::new()
            .name("pdfsplit-writer".to_string())
            .spawn_scoped(scope, || {
                let _entered = span.enter();
                writer.run(&queue)
            })
            .map_err(|e| tracing::error!("Failed to spawn writer thread, writing inline: {}", e))
            .ok();

        let mut workers = Vec::with_capacity(config.thread_count);
        for id in 0..config.thread_count {
            let ctx = &ctx;
            let spawned = thread::Builder::new()
                .name(format!("pdfsplit-worker-{}", id))
                .spawn_scoped(scope, {
                    let span = tracing::debug_span!(parent: &span, "worker", id);
                    move || {
                        let _entered = span.enter();
                        run_worker(ctx)
                    }
                });
            match spawned {
                Ok(handle) => workers.push(handle),
                Err(e) => tracing::error!("Failed to spawn worker {}: {}", id, e),
            }
        }

        let mut worker_stats = WorkerStats::default();
        for handle in workers {
            match handle.join() {
                Ok(stats) => worker_stats += stats,
                Err(_) => tracing::error!("A worker thread panicked"),
            }
        }

        transition(&mut report, DocumentState::Draining);
        queue.mark_finished();

        let writer_stats = match writer_handle {
            Some(handle) => handle.join().unwrap_or_else(|_| {
                tracing::error!("The writer thread panicked");
                WriterStats::default()
            }),
            None => writer.run(&queue),
        };

        (worker_stats, writer_stats)
    });

    report.pages_extracted = worker_stats.extracted;
    report.pages_skipped = worker_stats.skipped;
    report.pages_written = writer_stats.written;
    report.write_failures = writer_stats.failed;

    drop(document);
    transition(&mut report, DocumentState::Closed);
    tracing::info!(
        "Finished: {} written, {} skipped, {} write failure(s)",
        report.pages_written,
        report.pages_skipped,
        report.write_failures
    );

    report
}

fn transition(report: &mut DocumentReport, next: DocumentState) {
    tracing::debug!("{:?} -> {:?}", report.state, next);
    report.state = next;
}
