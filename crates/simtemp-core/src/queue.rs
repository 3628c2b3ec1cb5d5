use std::collections::VecDeque;
use std::sync::Mutex;

use crate::record::Record;

/// Fixed capacity of the record queue: exactly 128 records.
pub const CAPACITY: usize = 128;

/// Returned by [`RecordQueue::try_push`] when the queue has no free slot.
/// The incoming record is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("record queue is full")]
pub struct QueueFull;

/// Bounded FIFO ring of [`Record`]s.
///
/// All four operations run under a single short critical section: the body
/// is always O(1) (a capacity check, one record copy, and for `force_push` a
/// single pop) and never suspends, satisfying the non-suspending requirement
/// for the producer's tick context even though this is a plain
/// [`std::sync::Mutex`] rather than a hand-rolled spinlock (see DESIGN.md).
#[derive(Debug)]
pub struct RecordQueue {
    records: Mutex<VecDeque<Record>>,
}

impl Default for RecordQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordQueue {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(VecDeque::with_capacity(CAPACITY)),
        }
    }

    /// Number of records currently enqueued. `0 <= len() <= CAPACITY` always.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Pushes `record` iff the queue has a free slot; otherwise fails without
    /// mutating the queue.
    pub fn try_push(&self, record: Record) -> Result<(), QueueFull> {
        let mut guard = self.records.lock().unwrap();
        if guard.len() >= CAPACITY {
            return Err(QueueFull);
        }
        guard.push_back(record);
        Ok(())
    }

    /// Pushes `record`, evicting the oldest record first if the queue is
    /// full. Always succeeds since `CAPACITY > 0`.
    ///
    /// Returns the evicted record, if any.
    pub fn force_push(&self, record: Record) -> Option<Record> {
        debug_assert!(CAPACITY > 0, "force_push relies on CAPACITY > 0 to always succeed");
        let mut guard = self.records.lock().unwrap();
        let evicted = if guard.len() >= CAPACITY {
            guard.pop_front()
        } else {
            None
        };
        guard.push_back(record);
        evicted
    }

    /// Dequeues the oldest record, or `None` if the queue is empty.
    pub fn pop_one(&self) -> Option<Record> {
        self.records.lock().unwrap().pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordFlags;

    fn record(n: u64) -> Record {
        Record {
            timestamp_ns: n,
            temp_mc: 30_000,
            flags: RecordFlags::NEW_SAMPLE,
        }
    }

    #[test]
    fn starts_empty() {
        let q = RecordQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.pop_one(), None);
    }

    #[test]
    fn try_push_fails_without_mutation_when_full() {
        let q = RecordQueue::new();
        for i in 0..CAPACITY as u64 {
            q.try_push(record(i)).unwrap();
        }
        assert_eq!(q.len(), CAPACITY);
        assert_eq!(q.try_push(record(9999)), Err(QueueFull));
        assert_eq!(q.len(), CAPACITY);
        // The oldest record (0) is still there, untouched.
        assert_eq!(q.pop_one().unwrap().timestamp_ns, 0);
    }

    #[test]
    fn force_push_evicts_oldest_when_full() {
        let q = RecordQueue::new();
        for i in 0..CAPACITY as u64 {
            q.try_push(record(i)).unwrap();
        }
        let evicted = q.force_push(record(9999));
        assert_eq!(evicted.unwrap().timestamp_ns, 0);
        assert_eq!(q.len(), CAPACITY);
        assert_eq!(q.pop_one().unwrap().timestamp_ns, 1);
    }

    #[test]
    fn fifo_order_preserved_across_commit_and_consume() {
        let q = RecordQueue::new();
        for i in 0..5u64 {
            q.try_push(record(i)).unwrap();
        }
        for i in 0..5u64 {
            assert_eq!(q.pop_one().unwrap().timestamp_ns, i);
        }
        assert!(q.is_empty());
    }

    #[test]
    fn force_push_on_non_full_queue_never_evicts() {
        let q = RecordQueue::new();
        q.try_push(record(1)).unwrap();
        assert_eq!(q.force_push(record(2)), None);
        assert_eq!(q.len(), 2);
    }
}
