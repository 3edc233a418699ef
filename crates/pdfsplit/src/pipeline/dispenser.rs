//! Page index dispenser shared by the workers of one document.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out page indices `0..page_count`, each exactly once.
///
/// `acquire` never blocks. Once every index has been handed out, all further
/// calls return `None`; the counter saturates at `page_count` instead of
/// growing with each extra call.
#[derive(Debug)]
pub struct PageDispenser {
    next: AtomicUsize,
    page_count: usize,
}

impl PageDispenser {
    pub fn new(page_count: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            page_count,
        }
    }

    /// Take the next unused page index, or `None` when the document is exhausted.
    pub fn acquire(&self) -> Option<usize> {
        self.next
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |next| {
                (next < self.page_count).then_some(next + 1)
            })
            .ok()
    }
}
