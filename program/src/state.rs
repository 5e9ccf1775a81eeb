//! Program state

use {
    crate::error::CounterError,
    bytemuck::{Pod, Zeroable},
    spl_pod::primitives::PodU32,
};

/// Counter
///
/// The whole account is this one record: a little-endian `u32` at offset 0,
/// nothing else. Freshly allocated (zero-filled) account data is therefore a
/// valid counter holding `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct CounterState {
    /// Current value of the counter
    pub count: PodU32,
}

impl CounterState {
    /// Creates a counter holding `count`
    pub fn new(count: u32) -> Self {
        Self {
            count: PodU32::from(count),
        }
    }

    /// Current value of the counter
    pub fn count(&self) -> u32 {
        u32::from(self.count)
    }

    /// Views account data as a counter. The data must be exactly
    /// `COUNTER_ACCOUNT_LEN` bytes long.
    pub fn unpack(data: &[u8]) -> Result<&Self, CounterError> {
        bytemuck::try_from_bytes(data).map_err(|_| CounterError::CorruptAccountState)
    }

    /// Mutable version of [`CounterState::unpack`]
    pub fn unpack_mut(data: &mut [u8]) -> Result<&mut Self, CounterError> {
        bytemuck::try_from_bytes_mut(data).map_err(|_| CounterError::CorruptAccountState)
    }
}

/// Encodes a count into its on-account byte representation
pub fn encode(count: u32) -> [u8; crate::COUNTER_ACCOUNT_LEN] {
    bytemuck::cast(CounterState::new(count))
}

/// Decodes on-account bytes into a count
pub fn decode(data: &[u8]) -> Result<u32, CounterError> {
    CounterState::unpack(data).map(CounterState::count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(crate::COUNTER_ACCOUNT_LEN, 4);
        assert_eq!(encode(0), [0, 0, 0, 0]);
        assert_eq!(encode(1), [1, 0, 0, 0]);
        assert_eq!(encode(0x0403_0201), [1, 2, 3, 4]);
        assert_eq!(encode(u32::MAX), [0xff; 4]);
    }

    #[test]
    fn test_round_trip() {
        for count in [0, 1, 255, 256, 65_535, 1 << 24, u32::MAX - 1, u32::MAX] {
            assert_eq!(decode(&encode(count)).unwrap(), count);
        }
        for bytes in [[0, 0, 0, 0], [0xde, 0xad, 0xbe, 0xef], [0xff, 0, 0xff, 0]] {
            assert_eq!(encode(decode(&bytes).unwrap()), bytes);
        }
    }

    #[test]
    fn test_decode_wrong_length() {
        for len in [0, 1, 3, 5, 8, 165] {
            let data = vec![0; len];
            assert_eq!(decode(&data), Err(CounterError::CorruptAccountState));
            assert_eq!(
                CounterState::unpack(&data),
                Err(CounterError::CorruptAccountState)
            );
        }
    }

    #[test]
    fn test_pod_view_matches_codec() {
        let mut data = encode(7).to_vec();
        assert_eq!(CounterState::unpack(&data).unwrap().count(), 7);

        let state = CounterState::unpack_mut(&mut data).unwrap();
        *state = CounterState::new(0x0102_0304);
        assert_eq!(data, vec![4, 3, 2, 1]);
        assert_eq!(bytemuck::bytes_of(&CounterState::default()), &encode(0));
    }
}
