use std::sync::Arc;

use bitflags::bitflags;
use simtemp_core::{DeviceError, Record, RecordFlags, RECORD_WIRE_SIZE};

use crate::inner::Inner;

bitflags! {
    /// Readiness mask returned by [`SimtempReader::poll`]: epoll-style
    /// readable/priority bits, nothing else.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Readiness: u32 {
        /// Set iff the record queue is non-empty.
        const READABLE = 0x1;
        /// Set iff the alert latch is armed.
        const PRIORITY = 0x2;
    }
}

/// A single reader handle onto the record stream named `simtemp`.
///
/// Holding one pins the owning [`crate::device::SimtempDevice`] instance
/// alive via a cloned `Arc`, the same scoped-acquire role
/// `AsyncSpanProducer` plays for `AsyncSpanCollector`.
pub struct SimtempReader {
    pub(crate) inner: Arc<Inner>,
}

impl SimtempReader {
    /// Blocking (awaiting) read of exactly one record.
    ///
    /// Returns `IoFatal` once the device has started tearing down and no
    /// further records will ever be produced.
    pub async fn read(&self) -> Result<Record, DeviceError> {
        loop {
            let notified = self.inner.data_notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if let Some(record) = self.dequeue() {
                return Ok(record);
            }
            if self.inner.is_stopping() {
                return Err(DeviceError::IoFatal);
            }
            notified.await;
        }
    }

    /// Non-blocking read: returns `Again` immediately if the queue is empty.
    pub fn try_read(&self) -> Result<Record, DeviceError> {
        if let Some(record) = self.dequeue() {
            return Ok(record);
        }
        if self.inner.is_stopping() {
            return Err(DeviceError::IoFatal);
        }
        Err(DeviceError::Again)
    }

    /// Blocking read into a caller-supplied byte buffer. `buf` shorter than
    /// [`RECORD_WIRE_SIZE`] is rejected without consuming a record; any
    /// longer buffer still yields exactly one record's worth of bytes.
    pub async fn read_into(&self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        if buf.len() < RECORD_WIRE_SIZE {
            return Err(DeviceError::InvalidArgument);
        }
        let record = self.read().await?;
        buf[..RECORD_WIRE_SIZE].copy_from_slice(&record.to_bytes());
        Ok(RECORD_WIRE_SIZE)
    }

    /// Non-blocking counterpart to [`SimtempReader::read_into`].
    pub fn try_read_into(&self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        if buf.len() < RECORD_WIRE_SIZE {
            return Err(DeviceError::InvalidArgument);
        }
        let record = self.try_read()?;
        buf[..RECORD_WIRE_SIZE].copy_from_slice(&record.to_bytes());
        Ok(RECORD_WIRE_SIZE)
    }

    /// Readiness mask: `READABLE` iff the queue is non-empty, `PRIORITY` iff
    /// the alert latch is armed. Pure observation; never blocks.
    pub fn poll(&self) -> Readiness {
        let mut mask = Readiness::empty();
        if !self.inner.queue.is_empty() {
            mask |= Readiness::READABLE;
        }
        if self.inner.alert.is_armed() {
            mask |= Readiness::PRIORITY;
        }
        mask
    }

    /// Unpins the device instance. Never fails; dropping the reader has the
    /// same effect.
    pub fn close(self) {}

    fn dequeue(&self) -> Option<Record> {
        let record = self.inner.queue.pop_one()?;
        if record.flags.contains(RecordFlags::THRESHOLD) {
            self.inner.alert.clear();
        }
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_mask_has_no_other_bits() {
        let mask = Readiness::READABLE | Readiness::PRIORITY;
        assert_eq!(mask.bits(), 0x3);
    }
}
