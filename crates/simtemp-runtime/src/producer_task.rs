use std::sync::Arc;
use std::time::Duration;

use simtemp_core::{Producer, Record, RecordFlags};
use tokio::sync::oneshot;

use crate::inner::Inner;

fn monotonic_ns(inner: &Inner) -> u64 {
    inner.origin.elapsed().as_nanos() as u64
}

/// Runs one tick: snapshot config, synthesize, commit to the queue, update
/// the alert latch and counters, wake readers.
fn tick(
    inner: &Inner,
    producer: &mut Producer,
    mode: simtemp_core::Mode,
    threshold_mc: i32,
    debug: bool,
) {
    let temp_mc = producer.synthesize_next(mode);
    let mut flags = RecordFlags::NEW_SAMPLE;
    if temp_mc >= threshold_mc {
        flags |= RecordFlags::THRESHOLD;
    }
    let record = Record {
        timestamp_ns: monotonic_ns(inner),
        temp_mc,
        flags,
    };

    if debug {
        tracing::debug!(temp_mc, flags = ?flags, "produced sample");
    }

    if inner.queue.force_push(record).is_some() {
        inner.counters.record_drop();
    }
    if flags.contains(RecordFlags::THRESHOLD) && inner.alert.arm_if_clear() {
        inner.counters.record_alert();
    }
    inner.counters.record_update();
    inner.data_notify.notify_waiters();
}

/// The cooperative periodic task driving [`Producer`] ticks.
///
/// Races a reschedulable `sleep` against the period-changed notify (so a
/// `sampling_ms` write takes effect within one pending tick) and the
/// shutdown oneshot, mirroring `AsyncSpanCollector`'s consumer loop racing
/// its interval tick against a shutdown receiver.
pub(crate) async fn run(inner: Arc<Inner>, mut shutdown_rx: oneshot::Receiver<()>) {
    let mut producer = Producer::new();

    loop {
        if inner.is_stopping() {
            return;
        }

        let (mode, threshold_mc, sampling_ms, debug) = {
            let config = inner.config.lock().await;
            (config.mode, config.threshold_mc, config.sampling_ms, config.debug)
        };

        tick(&inner, &mut producer, mode, threshold_mc, debug);

        if inner.is_stopping() {
            return;
        }

        let sleep = tokio::time::sleep(Duration::from_millis(sampling_ms));
        tokio::pin!(sleep);

        tokio::select! {
            _ = &mut sleep => {}
            _ = inner.period_notify.notified() => {
                if debug {
                    tracing::debug!("sampling period changed, rescheduling next tick");
                }
            }
            _ = &mut shutdown_rx => {
                return;
            }
        }
    }
}
