use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ParseModeError;

/// Sample-generation mode, selecting which synthesis curve the producer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Ramp,
    Noisy,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Normal => "normal",
            Mode::Ramp => "ramp",
            Mode::Noisy => "noisy",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Mode::Normal),
            "ramp" => Ok(Mode::Ramp),
            "noisy" => Ok(Mode::Noisy),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Default sampling period, in milliseconds.
pub const DEFAULT_SAMPLING_MS: u64 = 1000;
/// Default alert threshold, in milli-degrees Celsius.
pub const DEFAULT_THRESHOLD_MC: i32 = 45_000;

/// The mutex-guarded configuration fields. `ramp_counter` is
/// deliberately excluded: it is producer-private state (see
/// [`crate::producer::Producer`]) and needs no lock of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFields {
    pub sampling_ms: u64,
    pub threshold_mc: i32,
    pub mode: Mode,
    pub debug: bool,
}

impl Default for ConfigFields {
    fn default() -> Self {
        Self {
            sampling_ms: DEFAULT_SAMPLING_MS,
            threshold_mc: DEFAULT_THRESHOLD_MC,
            mode: Mode::default(),
            debug: false,
        }
    }
}

impl ConfigFields {
    /// Validates and returns a new `sampling_ms`. Rejects `0`.
    pub fn validate_sampling_ms(value: u64) -> Result<u64, crate::error::DeviceError> {
        if value == 0 {
            Err(crate::error::DeviceError::InvalidArgument)
        } else {
            Ok(value)
        }
    }
}

/// Lock-free statistics counters, updated outside the config mutex.
///
/// Every method uses `Ordering::Relaxed`: these are purely observational
/// counters with no happens-before relationship to guard, the same
/// reasoning `CollectorMetrics` in the teacher crate documents for its
/// own atomic fields.
#[derive(Debug, Default)]
pub struct Counters {
    updates: AtomicU64,
    alerts: AtomicU64,
    drops: AtomicU64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_alert(&self) {
        self.alerts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_drop(&self) {
        self.drops.fetch_add(1, Ordering::Relaxed);
    }

    pub fn updates(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }

    pub fn alerts(&self) -> u64 {
        self.alerts.load(Ordering::Relaxed)
    }

    pub fn drops(&self) -> u64 {
        self.drops.load(Ordering::Relaxed)
    }

    /// Renders the exact `stats` attribute text form:
    /// `updates=<u> alerts=<a> drops=<d>\n`.
    pub fn format_stats(&self) -> String {
        format!(
            "updates={} alerts={} drops={}\n",
            self.updates(),
            self.alerts(),
            self.drops()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_canonical_lowercase_text() {
        for (text, mode) in [("normal", Mode::Normal), ("ramp", Mode::Ramp), ("noisy", Mode::Noisy)] {
            assert_eq!(text.parse::<Mode>().unwrap(), mode);
            assert_eq!(mode.to_string(), text);
        }
    }

    #[test]
    fn mode_parsing_trims_and_lowercases() {
        assert_eq!(" Ramp\n".parse::<Mode>().unwrap(), Mode::Ramp);
    }

    #[test]
    fn mode_rejects_unknown_names() {
        assert!("blazing".parse::<Mode>().is_err());
    }

    #[test]
    fn sampling_ms_zero_is_rejected() {
        assert!(ConfigFields::validate_sampling_ms(0).is_err());
        assert!(ConfigFields::validate_sampling_ms(1).is_ok());
    }

    #[test]
    fn stats_format_matches_exact_wire_text() {
        let counters = Counters::new();
        counters.record_update();
        counters.record_update();
        counters.record_alert();
        assert_eq!(counters.format_stats(), "updates=2 alerts=1 drops=0\n");
    }
}
