//! The generated value

use crate::source::UUID_LEN;

/// A 128-bit UUID
///
/// Bytes are kept in RFC 4122 field order: `time_low`, `time_mid`,
/// `time_hi_and_version`, `clock_seq_hi_and_reserved`, `clock_seq_low` and
/// `node`, all big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid([u8; UUID_LEN]);

impl Uuid {
    /// Wrap raw bytes as they are. No version or variant bits are touched.
    pub const fn from_bytes(bytes: [u8; UUID_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; UUID_LEN] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; UUID_LEN] {
        self.0
    }

    /// The whole UUID as a big-endian integer
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// RFC 4122 fields
    ///
    /// `(time_low, time_mid, time_hi_and_version, clock_seq_and_node)`
    pub fn fields(&self) -> (u32, u16, u16, &[u8; 8]) {
        let [a, b, c, d, e, f, g, h, rest @ ..] = &self.0;
        let time_low = u32::from_be_bytes([*a, *b, *c, *d]);
        let time_mid = u16::from_be_bytes([*e, *f]);
        let time_hi_and_version = u16::from_be_bytes([*g, *h]);
        (time_low, time_mid, time_hi_and_version, rest)
    }

    /// Version nibble (bits 12-15 of `time_hi_and_version`)
    pub const fn version_num(&self) -> u8 {
        self.0[6] >> 4
    }

    /// The two most significant bits of `clock_seq_hi_and_reserved`
    pub const fn variant_bits(&self) -> u8 {
        self.0[8] >> 6
    }

    /// Random based UUID with the RFC 4122 variant
    pub const fn is_rfc4122_v4(&self) -> bool {
        self.version_num() == crate::generator::VERSION_RANDOM
            && self.variant_bits() == crate::generator::VARIANT_RFC4122
    }
}

impl From<Uuid> for [u8; UUID_LEN] {
    fn from(value: Uuid) -> Self {
        value.0
    }
}

impl From<Uuid> for u128 {
    fn from(value: Uuid) -> Self {
        value.as_u128()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const SAMPLE: [u8; UUID_LEN] = [
        0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0x4e, 0xf0, 0x91, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
        0x88,
    ];

    #[test]
    fn fields_are_big_endian() {
        let uuid = Uuid::from_bytes(SAMPLE);
        let (low, mid, hi, rest) = uuid.fields();
        assert_eq!(low, 0x1234_5678);
        assert_eq!(mid, 0x9abc);
        assert_eq!(hi, 0x4ef0);
        assert_eq!(rest, &[0x91, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
    }

    #[test]
    fn u128_is_big_endian() {
        let uuid = Uuid::from_bytes(SAMPLE);
        assert_eq!(uuid.as_u128(), 0x12345678_9abc_4ef0_9122_334455667788);
        assert_eq!(u128::from(uuid), uuid.as_u128());
        assert_eq!(<[u8; UUID_LEN]>::from(uuid), SAMPLE);
    }

    #[test_case(SAMPLE => (4, 0b10, true) ; "v4")]
    #[test_case([0; UUID_LEN] => (0, 0b00, false) ; "nil")]
    #[test_case([0xff; UUID_LEN] => (0xf, 0b11, false) ; "max")]
    #[test_case([0, 0, 0, 0, 0, 0, 0x40, 0, 0xc0, 0, 0, 0, 0, 0, 0, 0] => (4, 0b11, false) ; "v4 wrong variant")]
    #[test_case([0, 0, 0, 0, 0, 0, 0x10, 0, 0xbf, 0, 0, 0, 0, 0, 0, 0] => (1, 0b10, false) ; "v1")]
    fn markers(bytes: [u8; UUID_LEN]) -> (u8, u8, bool) {
        let uuid = Uuid::from_bytes(bytes);
        (uuid.version_num(), uuid.variant_bits(), uuid.is_rfc4122_v4())
    }
}
