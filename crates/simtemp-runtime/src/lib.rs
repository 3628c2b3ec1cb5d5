//! Async runtime for the virtual temperature sensor: lifecycle bring-up/
//! tear-down, the producer's scheduling loop, the reader-facing stream
//! surface, and the textual control attribute registry.
//!
//! Built on top of `simtemp-core`, the way `ringmpsc-stream` and
//! `span_collector` layer async plumbing on top of `ringmpsc-rs`.

mod attributes;
mod bindings;
mod device;
mod inner;
mod lifecycle;
mod producer_task;
mod stream;

pub use attributes::{ATTR_DEBUG, ATTR_MODE, ATTR_SAMPLING_MS, ATTR_STATS, ATTR_THRESHOLD_MC};
pub use bindings::{BindingProperties, NoBindingProperties, StaticBindingProperties};
pub use device::SimtempDevice;
pub use stream::{Readiness, SimtempReader};

pub use simtemp_core::{ConfigFields, Counters, DeviceError, Mode, Record, RecordFlags, RECORD_WIRE_SIZE};
