use simtemp_core::DeviceError;

use crate::device::SimtempDevice;

/// Control attribute names (see [`SimtempDevice::read_attr`]/
/// [`SimtempDevice::write_attr`]).
pub const ATTR_SAMPLING_MS: &str = "sampling_ms";
pub const ATTR_THRESHOLD_MC: &str = "threshold_mC";
pub const ATTR_MODE: &str = "mode";
pub const ATTR_DEBUG: &str = "debug";
pub const ATTR_STATS: &str = "stats";

impl SimtempDevice {
    /// Reads a named control attribute's current value as newline-terminated
    /// text.
    pub async fn read_attr(&self, name: &str) -> Result<String, DeviceError> {
        match name {
            ATTR_SAMPLING_MS => Ok(format!("{}\n", self.config().await.sampling_ms)),
            ATTR_THRESHOLD_MC => Ok(format!("{}\n", self.config().await.threshold_mc)),
            ATTR_MODE => Ok(format!("{}\n", self.config().await.mode)),
            ATTR_DEBUG => Ok(format!("{}\n", u8::from(self.config().await.debug))),
            ATTR_STATS => Ok(self.stats()),
            _ => Err(DeviceError::InvalidArgument),
        }
    }

    /// Writes a named control attribute. `value` may carry an optional
    /// trailing newline, trimmed before parsing.
    ///
    /// A rejected write (invalid number, unknown mode, `sampling_ms = 0`)
    /// leaves the attribute's prior value and the producer's cadence
    /// unchanged.
    pub async fn write_attr(&self, name: &str, value: &str) -> Result<(), DeviceError> {
        let trimmed = value.trim();
        match name {
            ATTR_SAMPLING_MS => {
                let parsed: u64 = trimmed.parse().map_err(|_| DeviceError::InvalidArgument)?;
                self.set_sampling_ms(parsed).await
            }
            ATTR_THRESHOLD_MC => {
                let parsed: i32 = trimmed.parse().map_err(|_| DeviceError::InvalidArgument)?;
                self.set_threshold_mc(parsed).await;
                Ok(())
            }
            ATTR_MODE => {
                let mode = trimmed.parse()?;
                self.set_mode(mode).await;
                Ok(())
            }
            ATTR_DEBUG => {
                let parsed: i64 = trimmed.parse().map_err(|_| DeviceError::InvalidArgument)?;
                self.set_debug(parsed != 0).await;
                Ok(())
            }
            ATTR_STATS => Err(DeviceError::InvalidArgument),
            _ => Err(DeviceError::InvalidArgument),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::NoBindingProperties;
    use crate::device::SimtempDevice;

    async fn probed() -> SimtempDevice {
        SimtempDevice::probe(&NoBindingProperties).await.unwrap()
    }

    #[tokio::test]
    async fn mode_round_trips_through_read_and_write() {
        let device = probed().await;
        device.write_attr(ATTR_MODE, "ramp\n").await.unwrap();
        assert_eq!(device.read_attr(ATTR_MODE).await.unwrap(), "ramp\n");
        device.remove().await;
    }

    #[tokio::test]
    async fn unknown_mode_is_rejected_and_leaves_prior_value() {
        let device = probed().await;
        let before = device.read_attr(ATTR_MODE).await.unwrap();
        let err = device.write_attr(ATTR_MODE, "blazing").await.unwrap_err();
        assert_eq!(err, DeviceError::InvalidArgument);
        assert_eq!(device.read_attr(ATTR_MODE).await.unwrap(), before);
        device.remove().await;
    }

    #[tokio::test]
    async fn sampling_ms_zero_is_rejected_and_leaves_prior_value() {
        let device = probed().await;
        let before = device.read_attr(ATTR_SAMPLING_MS).await.unwrap();
        let err = device
            .write_attr(ATTR_SAMPLING_MS, "0")
            .await
            .unwrap_err();
        assert_eq!(err, DeviceError::InvalidArgument);
        assert_eq!(device.read_attr(ATTR_SAMPLING_MS).await.unwrap(), before);
        device.remove().await;
    }

    #[tokio::test]
    async fn stats_is_read_only() {
        let device = probed().await;
        assert!(device.write_attr(ATTR_STATS, "updates=0").await.is_err());
        device.remove().await;
    }

    #[tokio::test]
    async fn debug_treats_any_nonzero_value_as_true() {
        let device = probed().await;
        device.write_attr(ATTR_DEBUG, "2").await.unwrap();
        assert_eq!(device.read_attr(ATTR_DEBUG).await.unwrap(), "1\n");
        device.write_attr(ATTR_DEBUG, "-5").await.unwrap();
        assert_eq!(device.read_attr(ATTR_DEBUG).await.unwrap(), "1\n");
        device.write_attr(ATTR_DEBUG, "0").await.unwrap();
        assert_eq!(device.read_attr(ATTR_DEBUG).await.unwrap(), "0\n");
        device.remove().await;
    }
}
