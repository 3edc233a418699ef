//! Blocking multi-producer, single-consumer hand-off between workers and the writer.
//!
//! # Thread Safety
//!
//! The queue is `Send + Sync` and is shared by reference inside a thread scope.
//! Internal state is protected by a `parking_lot::Mutex`; a `Condvar` wakes the
//! consumer when an item arrives or the queue is marked finished.

use crate::types::PageResult;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

#[derive(Debug)]
struct QueueState<T> {
    items: VecDeque<T>,
    finished: bool,
}

/// Unbounded FIFO queue with an explicit "no more input" signal.
///
/// Producers never block. [`ResultQueue::pop`] blocks until an item is
/// available or the queue is finished and drained.
#[derive(Debug)]
pub struct ResultQueue<T = PageResult> {
    state: Mutex<QueueState<T>>,
    available: Condvar,
}

impl<T> Default for ResultQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResultQueue<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                items: VecDeque::new(),
                finished: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Append `item` to the tail and wake one waiting consumer.
    pub fn push(&self, item: T) {
        let mut state = self.state.lock();
        if state.finished {
            tracing::warn!("Item pushed after the result queue was marked finished");
        }
        state.items.push_back(item);
        drop(state);
        self.available.notify_one();
    }

    /// Remove the oldest item, blocking while the queue is empty and not finished.
    ///
    /// Returns `None` only once the queue is finished and every item has been popped.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.state.lock();
        loop {
            if let Some(item) = state.items.pop_front() {
                return Some(item);
            }
            if state.finished {
                return None;
            }
            self.available.wait(&mut state);
        }
    }

    /// Signal that no more items will be pushed. Idempotent.
    ///
    /// Wakes every blocked consumer so one waiting on an empty queue returns `None`.
    pub fn mark_finished(&self) {
        let mut state = self.state.lock();
        state.finished = true;
        drop(state);
        self.available.notify_all();
    }

    pub fn is_finished(&self) -> bool {
        self.state.lock().finished
    }

    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_fifo_order_single_producer() {
        let queue = ResultQueue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        queue.mark_finished();

        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_pending_items_drain_after_finish() {
        let queue = ResultQueue::new();
        queue.push("a");
        queue.mark_finished();

        assert!(queue.is_finished());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some("a"));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_mark_finished_is_idempotent() {
        let queue: ResultQueue<u32> = ResultQueue::new();
        queue.mark_finished();
        queue.mark_finished();
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_finish_wakes_blocked_consumer() {
        let queue: ResultQueue<u32> = ResultQueue::new();

        thread::scope(|scope| {
            let consumer = scope.spawn(|| queue.pop());
            thread::sleep(Duration::from_millis(50));
            queue.mark_finished();
            assert_eq!(consumer.join().unwrap(), None);
        });
    }

    #[test]
    fn test_push_wakes_blocked_consumer() {
        let queue = ResultQueue::new();

        thread::scope(|scope| {
            let consumer = scope.spawn(|| queue.pop());
            thread::sleep(Duration::from_millis(50));
            queue.push(42);
            assert_eq!(consumer.join().unwrap(), Some(42));
        });
    }

    #[test]
    fn test_no_lost_items_with_many_producers() {
        const PRODUCERS: usize = 8;
        const PER_PRODUCER: usize = 1_000;
        let queue = ResultQueue::new();

        let received = thread::scope(|scope| {
            let consumer = scope.spawn(|| {
                let mut received = Vec::new();
                while let Some(item) = queue.pop() {
                    received.push(item);
                }
                received
            });

            let producers: Vec<_> = (0..PRODUCERS)
                .map(|p| {
                    let queue = &queue;
                    scope.spawn(move || {
                        for i in 0..PER_PRODUCER {
                            queue.push(p * PER_PRODUCER + i);
                        }
                    })
                })
                .collect();

            for producer in producers {
                producer.join().unwrap();
            }
            queue.mark_finished();
            consumer.join().unwrap()
        });

        let mut received = received;
        received.sort_unstable();
        assert_eq!(received, (0..PRODUCERS * PER_PRODUCER).collect::<Vec<_>>());
    }
}
