//! Worker loop: acquire a page index, extract it, push the result.

use super::dispenser::PageDispenser;
use super::extract::Extractor;
use super::queue::ResultQueue;
use crate::pdf::PageSource;
use crate::types::PageResult;

/// Per-worker counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Results pushed to the queue.
    pub extracted: usize,
    /// Indices whose page handle could not be created.
    pub skipped: usize,
}

impl std::ops::AddAssign for WorkerStats {
    fn add_assign(&mut self, other: Self) {
        self.extracted += other.extracted;
        self.skipped += other.skipped;
    }
}

/// Everything a worker shares with its siblings.
pub struct WorkerContext<'a, D: PageSource> {
    pub document: &'a D,
    pub document_name: &'a str,
    pub dispenser: &'a PageDispenser,
    pub queue: &'a ResultQueue<PageResult>,
    pub extractor: Extractor<'a>,
}

/// Run until the dispenser is exhausted.
///
/// A page whose handle cannot be created is logged and skipped. The handle
/// is dropped (released) before the next index is acquired.
pub fn run_worker<D: PageSource>(ctx: &WorkerContext<'_, D>) -> WorkerStats {
    let mut stats = WorkerStats::default();

    while let Some(page_index) = ctx.dispenser.acquire() {
        let page = match ctx.document.create_page(page_index) {
            Ok(page) => page,
            Err(e) => {
                stats.skipped += 1;
                tracing::warn!("Skipping page {} of {}: {}", page_index, ctx.document_name, e);
                continue;
            }
        };

        let result = ctx.extractor.extract(Some(&page), ctx.document_name, page_index);
        ctx.queue.push(result);
        stats.extracted += 1;
        drop(page);
    }

    stats
}
