use std::sync::atomic::{AtomicBool, Ordering};

/// Single-bit latched alert state.
///
/// Edge-triggered with coalescing: a burst of threshold-crossing commits
/// while already `armed` does not re-increment the `alerts` counter, and
/// must not be turned into level-triggered behavior by a reimplementation.
#[derive(Debug, Default)]
pub struct AlertLatch {
    armed: AtomicBool,
}

impl AlertLatch {
    pub fn new() -> Self {
        Self {
            armed: AtomicBool::new(false),
        }
    }

    /// Attempts the `clear -> armed` transition.
    ///
    /// Returns `true` iff this call performed the transition, in which case
    /// the caller must increment the `alerts` counter exactly once. Acquire
    /// ordering on success so that a reader's subsequent `poll()` observing
    /// `armed` happens-after this commit.
    pub fn arm_if_clear(&self) -> bool {
        self.armed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Unconditional `-> clear` transition, performed when a reader consumes
    /// a `THRESHOLD`-bearing record.
    pub fn clear(&self) {
        self.armed.store(false, Ordering::Release);
    }

    /// Pure observation of the current state.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }
}
