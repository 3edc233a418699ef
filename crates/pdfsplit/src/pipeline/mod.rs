//! The concurrent splitting pipeline.
//!
//! For each document:
//!
//! ```text
//!  PageDispenser ──> worker 0 ─┐
//!                 ─> worker 1 ─┼─> ResultQueue ──> PageWriter ──> <output>/<doc>/<page>/
//!                 ─> worker N ─┘
//! ```
//!
//! Workers claim page indices from the [`dispenser::PageDispenser`], build a
//! [`crate::PageResult`] with the [`extract::Extractor`], and push it to the
//! [`queue::ResultQueue`]. One [`writer::PageWriter`] thread drains the queue.
//! Each index is claimed by exactly one worker, and every pushed result is
//! written before [`document::process_document`] returns.

pub mod directory;
pub mod dispenser;
pub mod document;
pub mod extract;
pub mod queue;
pub mod worker;
pub mod writer;

pub use directory::process_directory;
pub use dispenser::PageDispenser;
pub use document::process_document;
pub use extract::Extractor;
pub use queue::ResultQueue;
pub use writer::{PageWriter, WriterStats};
