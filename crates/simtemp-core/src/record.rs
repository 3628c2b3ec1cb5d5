use bitflags::bitflags;

bitflags! {
    /// Flag bits carried by a committed [`Record`].
    ///
    /// Bits outside this set are reserved and must be zero; nothing in this
    /// crate ever sets them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RecordFlags: u32 {
        /// Set on every record the producer commits.
        const NEW_SAMPLE = 0x1;
        /// Set iff `temp_mC >= threshold_mC` at commit time.
        const THRESHOLD = 0x2;
    }
}

/// The 16-byte wire record exchanged between the producer and a reader.
///
/// Native host byte order; cross-architecture transport requires explicit
/// conversion by the consumer, which this crate never performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Monotonic nanoseconds at producer commit.
    pub timestamp_ns: u64,
    /// Temperature in milli-degrees Celsius.
    pub temp_mc: i32,
    /// Flag bitmask (see [`RecordFlags`]).
    pub flags: RecordFlags,
}

/// Size in bytes of the wire form of a [`Record`]. Reads shorter than this
/// are rejected with [`crate::error::DeviceError::InvalidArgument`].
pub const RECORD_WIRE_SIZE: usize = 16;

impl Record {
    /// Packs the record into its 16-byte native-endian wire form.
    pub fn to_bytes(self) -> [u8; RECORD_WIRE_SIZE] {
        let mut buf = [0u8; RECORD_WIRE_SIZE];
        buf[0..8].copy_from_slice(&self.timestamp_ns.to_ne_bytes());
        buf[8..12].copy_from_slice(&self.temp_mc.to_ne_bytes());
        buf[12..16].copy_from_slice(&self.flags.bits().to_ne_bytes());
        buf
    }

    /// Unpacks a record from its 16-byte native-endian wire form.
    ///
    /// Reserved flag bits present in `bytes` are preserved as-is via
    /// [`RecordFlags::from_bits_retain`] rather than rejected, since this is
    /// only ever called on bytes this crate itself produced.
    pub fn from_bytes(bytes: [u8; RECORD_WIRE_SIZE]) -> Self {
        let timestamp_ns = u64::from_ne_bytes(bytes[0..8].try_into().unwrap());
        let temp_mc = i32::from_ne_bytes(bytes[8..12].try_into().unwrap());
        let flags = u32::from_ne_bytes(bytes[12..16].try_into().unwrap());
        Self {
            timestamp_ns,
            temp_mc,
            flags: RecordFlags::from_bits_retain(flags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_wire_bytes() {
        let record = Record {
            timestamp_ns: 123_456_789,
            temp_mc: -2_000,
            flags: RecordFlags::NEW_SAMPLE | RecordFlags::THRESHOLD,
        };
        let bytes = record.to_bytes();
        assert_eq!(bytes.len(), RECORD_WIRE_SIZE);
        assert_eq!(Record::from_bytes(bytes), record);
    }

    #[test]
    fn new_sample_always_present_on_synthesized_records() {
        let record = Record {
            timestamp_ns: 0,
            temp_mc: 30_000,
            flags: RecordFlags::NEW_SAMPLE,
        };
        assert!(record.flags.contains(RecordFlags::NEW_SAMPLE));
        assert!(!record.flags.contains(RecordFlags::THRESHOLD));
    }
}
