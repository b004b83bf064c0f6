//! Thread-safe update queue between host threads and the processing thread.
//!
//! Inbound requests may arrive from any thread; they drain on the processing
//! thread in arrival order. Every entry is stamped with a monotonically
//! increasing sequence number and the queue remembers the newest stamp
//! handed out, so the consumer can recognize entries that were superseded
//! while still queued ("latest wins") without replaying intermediates.

use std::collections::VecDeque;
use std::sync::Mutex;

/// A queued request together with its sequence stamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stamped<T> {
    /// Monotonic stamp assigned at enqueue time; higher is newer.
    pub seq: u64,
    /// The queued request.
    pub value: T,
}

#[derive(Debug)]
struct Inner<T> {
    entries: VecDeque<Stamped<T>>,
    next_seq: u64,
    newest_seq: Option<u64>,
}

/// FIFO multiple-producer/single-consumer queue with newest-stamp tracking.
///
/// A single mutex guards both the entries and the stamp counters, so stamps
/// are assigned in queue order and no entry is ever lost or duplicated. The
/// validator itself needs no locking; this queue is the only synchronization
/// point between the host's caller thread and the processing thread.
#[derive(Debug)]
pub struct UpdateQueue<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> UpdateQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: VecDeque::new(),
                next_seq: 0,
                newest_seq: None,
            }),
        }
    }

    /// Enqueue a request from any thread. Returns its stamp, which is also
    /// recorded as the newest.
    pub fn push(&self, value: T) -> u64 {
        let mut inner = self.inner.lock().expect("update queue lock");
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.newest_seq = Some(seq);
        inner.entries.push_back(Stamped { seq, value });
        seq
    }

    /// Dequeue the oldest entry, if any.
    pub fn pop(&self) -> Option<Stamped<T>> {
        self.inner.lock().expect("update queue lock").entries.pop_front()
    }

    /// The stamp of the most recently pushed request, if any was ever pushed.
    #[must_use]
    pub fn newest_seq(&self) -> Option<u64> {
        self.inner.lock().expect("update queue lock").newest_seq
    }

    /// Whether `seq` is still the newest stamp handed out.
    ///
    /// A popped entry for which this is false was superseded while queued
    /// and should be dropped, not applied.
    #[must_use]
    pub fn is_newest(&self, seq: u64) -> bool {
        self.newest_seq() == Some(seq)
    }

    /// Number of queued entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().expect("update queue lock").entries.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all queued entries. Stamps keep increasing.
    pub fn clear(&self) {
        self.inner.lock().expect("update queue lock").entries.clear();
    }
}

impl<T> Default for UpdateQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
