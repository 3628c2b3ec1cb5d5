use thiserror::Error;

/// Error taxonomy surfaced to consumers of the stream and attribute surfaces.
///
/// Drops and evictions are never reported here — they are accounted for via
/// the `drops` counter in [`crate::config::Counters`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// Bad attribute write or a read buffer shorter than one record.
    #[error("invalid argument")]
    InvalidArgument,
    /// Non-blocking read found no data available.
    #[error("resource temporarily unavailable")]
    Again,
    /// The device is tearing down; no further reads will succeed.
    #[error("device is shutting down")]
    IoFatal,
    /// The consumer-supplied buffer was unusable; the dequeued record is lost.
    #[error("bad address")]
    Fault,
    /// The handle's backing device instance is gone.
    #[error("no such device")]
    NoDevice,
}

/// Error returned when parsing an attribute's textual `mode` value fails.
#[derive(Debug, Clone, Error)]
#[error("unknown mode {0:?} (expected one of: normal, ramp, noisy)")]
pub struct ParseModeError(pub String);

impl From<ParseModeError> for DeviceError {
    fn from(_: ParseModeError) -> Self {
        DeviceError::InvalidArgument
    }
}
