use std::sync::Arc;

use simtemp_core::{ConfigFields, DeviceError, Mode};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::inner::Inner;
use crate::stream::SimtempReader;

/// A live virtual temperature sensor instance.
///
/// Brought up by [`SimtempDevice::probe`] and torn down by
/// [`SimtempDevice::remove`]. Exposes `read_attr`/`write_attr` for the
/// textual control surface and `open_reader` for the binary record stream;
/// there is no separate registry type for either, the device plays that
/// role directly.
pub struct SimtempDevice {
    pub(crate) inner: Arc<Inner>,
    pub(crate) producer_task: Option<JoinHandle<()>>,
    pub(crate) shutdown_tx: Option<oneshot::Sender<()>>,
}

impl SimtempDevice {
    /// Opens a new reader onto the record stream. Fails with `IoFatal` once
    /// the device has begun tearing down.
    pub fn open_reader(&self) -> Result<SimtempReader, DeviceError> {
        if self.inner.is_stopping() {
            return Err(DeviceError::IoFatal);
        }
        Ok(SimtempReader {
            inner: Arc::clone(&self.inner),
        })
    }

    /// Reads the `updates`/`alerts`/`drops` counters without touching the
    /// configuration mutex.
    pub fn stats(&self) -> String {
        self.inner.counters.format_stats()
    }

    /// Current configuration snapshot (`sampling_ms`, `threshold_mC`,
    /// `mode`, `debug`), taken under the configuration mutex.
    pub async fn config(&self) -> ConfigFields {
        *self.inner.config.lock().await
    }

    pub async fn set_sampling_ms(&self, sampling_ms: u64) -> Result<(), DeviceError> {
        let validated = ConfigFields::validate_sampling_ms(sampling_ms)?;
        let debug = {
            let mut config = self.inner.config.lock().await;
            config.sampling_ms = validated;
            config.debug
        };
        if debug {
            tracing::debug!(sampling_ms = validated, "sampling_ms updated");
        }
        // Reschedule decision belongs to the producer task itself: it
        // observes the new period on its next config snapshot. This notify
        // only wakes it out of the current sleep early.
        self.inner.period_notify.notify_one();
        Ok(())
    }

    pub async fn set_threshold_mc(&self, threshold_mc: i32) {
        let debug = {
            let mut config = self.inner.config.lock().await;
            config.threshold_mc = threshold_mc;
            config.debug
        };
        if debug {
            tracing::debug!(threshold_mc, "threshold_mC updated");
        }
    }

    pub async fn set_mode(&self, mode: Mode) {
        let debug = {
            let mut config = self.inner.config.lock().await;
            config.mode = mode;
            config.debug
        };
        if debug {
            tracing::debug!(%mode, "mode updated");
        }
    }

    pub async fn set_debug(&self, debug: bool) {
        let mut config = self.inner.config.lock().await;
        config.debug = debug;
        if debug {
            tracing::debug!("verbose logging enabled");
        }
    }
}
