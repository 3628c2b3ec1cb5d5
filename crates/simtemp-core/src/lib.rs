//! Synchronous core of the virtual temperature sensor: the record wire
//! format, the bounded record queue, the alert latch, the configuration
//! fields/counters, and the pure sample-synthesis math.
//!
//! Nothing in this crate depends on an async runtime; the scheduling loop
//! that drives [`producer::Producer`] on a cadence lives in the runtime
//! crate.

pub mod alert;
pub mod config;
pub mod error;
pub mod producer;
pub mod queue;
pub mod record;

pub use alert::AlertLatch;
pub use config::{
    ConfigFields, Counters, Mode, DEFAULT_SAMPLING_MS, DEFAULT_THRESHOLD_MC,
};
pub use error::{DeviceError, ParseModeError};
pub use producer::{synthesize_temp_mc, Producer};
pub use queue::{QueueFull, RecordQueue, CAPACITY};
pub use record::{Record, RecordFlags, RECORD_WIRE_SIZE};
