use std::sync::atomic::Ordering;
use std::sync::Arc;

use simtemp_core::{ConfigFields, DeviceError};
use tokio::sync::oneshot;

use crate::bindings::BindingProperties;
use crate::device::SimtempDevice;
use crate::inner::Inner;
use crate::producer_task;

impl SimtempDevice {
    /// Brings a device instance up: initializes RQ/AL/CS/counters, applies
    /// any bring-up properties, and schedules the producer's first tick.
    ///
    /// Fails with `DeviceError::InvalidArgument` if a `sampling-ms`
    /// bring-up property of `0` is supplied; nothing is left allocated on
    /// failure since `Inner` is still a local value at that point.
    pub async fn probe(bindings: &dyn BindingProperties) -> Result<Self, DeviceError> {
        let mut config = ConfigFields::default();
        if let Some(sampling_ms) = bindings.get_u32("sampling-ms") {
            config.sampling_ms = ConfigFields::validate_sampling_ms(u64::from(sampling_ms))?;
        }
        if let Some(threshold_mc) = bindings.get_i32("threshold-mC") {
            config.threshold_mc = threshold_mc;
        }

        let inner = Arc::new(Inner::new(config));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let producer_task = tokio::spawn(producer_task::run(Arc::clone(&inner), shutdown_rx));

        tracing::info!("simtemp device probed");

        Ok(Self {
            inner,
            producer_task: Some(producer_task),
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Tears a device instance down: stops the producer, wakes every
    /// waiting reader so it observes `IoFatal`, and releases the shared
    /// state once the last pin drops.
    ///
    /// Never fails. If readers are still holding a pin when this returns,
    /// that is logged rather than blocked on — they will observe `stopping`
    /// on their next poll or wake and release it themselves.
    pub async fn remove(mut self) {
        self.inner.stopping.store(true, Ordering::Release);

        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.producer_task.take() {
            if let Err(err) = task.await {
                tracing::warn!(?err, "producer task join failed during teardown");
            }
        }

        self.inner.data_notify.notify_waiters();

        match Arc::try_unwrap(self.inner) {
            Ok(_inner) => tracing::debug!("simtemp device fully released on teardown"),
            Err(inner) => {
                tracing::warn!(
                    pins_outstanding = Arc::strong_count(&inner) - 1,
                    "device removed while readers were still open"
                );
            }
        }
    }
}
