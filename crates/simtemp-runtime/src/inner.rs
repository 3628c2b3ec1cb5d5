use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use simtemp_core::{AlertLatch, ConfigFields, Counters, RecordQueue};
use tokio::sync::{Mutex, Notify};

/// Shared state every open reader and the producer task hold a pin on.
///
/// Mirrors `span_collector`'s split between the lock-free hot path (queue,
/// latch, counters) and the sleeping-mutex-guarded configuration.
pub(crate) struct Inner {
    pub(crate) queue: RecordQueue,
    pub(crate) alert: AlertLatch,
    pub(crate) counters: Counters,
    pub(crate) config: Mutex<ConfigFields>,
    pub(crate) data_notify: Notify,
    pub(crate) period_notify: Notify,
    pub(crate) stopping: AtomicBool,
    /// Fixed reference point for `timestamp_ns`; `Instant` is guaranteed
    /// monotonic, unlike wall-clock time.
    pub(crate) origin: Instant,
}

impl Inner {
    pub(crate) fn new(config: ConfigFields) -> Self {
        Self {
            queue: RecordQueue::new(),
            alert: AlertLatch::new(),
            counters: Counters::new(),
            config: Mutex::new(config),
            data_notify: Notify::new(),
            period_notify: Notify::new(),
            stopping: AtomicBool::new(false),
            origin: Instant::now(),
        }
    }

    pub(crate) fn is_stopping(&self) -> bool {
        self.stopping.load(Ordering::Acquire)
    }
}
