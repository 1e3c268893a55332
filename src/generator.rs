//! Version 4 UUID assembly

use log::{debug, trace};

use crate::source::{ByteSource, OsSource, UUID_LEN};
use crate::Uuid;

/// Version number of random based UUIDs
pub const VERSION_RANDOM: u8 = 4;
/// `10` in the two high bits of byte 8
pub const VARIANT_RFC4122: u8 = 0b10;

/// Set the RFC 4122 variant (byte 8 to bin `10xx_xxxx`)
pub fn mark_variant(bytes: &mut [u8; UUID_LEN]) -> &mut [u8; UUID_LEN] {
    bytes[8] = (bytes[8] & 0x3f) | (VARIANT_RFC4122 << 6);
    bytes
}

/// Set the version nibble (byte 6 to hex `4x`)
pub fn mark_version(bytes: &mut [u8; UUID_LEN]) -> &mut [u8; UUID_LEN] {
    bytes[6] = (bytes[6] & 0x0f) | (VERSION_RANDOM << 4);
    bytes
}

/// Turn 16 random bytes into a version 4 UUID
///
/// Only the 6 marker bits change, the other 122 are kept as given.
///
/// ```
/// let uuid = rng_uuid::mark([0xff; 16]);
/// assert_eq!(uuid.as_u128(), 0xffffffff_ffff_4fff_bfff_ffffffffffff);
/// ```
pub fn mark(mut bytes: [u8; UUID_LEN]) -> Uuid {
    mark_version(mark_variant(&mut bytes));
    Uuid::from_bytes(bytes)
}

/// Random based UUID generator
///
/// Holds nothing but its [`ByteSource`]. Every call gets a fresh buffer.
///
/// ```
/// use rng_uuid::{source::FixedSource, Generator};
///
/// let mut generator = Generator::new(FixedSource([0; 16]));
/// let uuid = generator.generate().unwrap();
/// assert_eq!(uuid.version_num(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator<S = OsSource> {
    source: S,
}

impl Generator<OsSource> {
    /// Generator backed by the operating system CSPRNG
    pub fn os() -> Self {
        Self::new(OsSource)
    }
}

impl<S: ByteSource> Generator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Generate a new version 4 UUID
    ///
    /// If the source fails its error is returned as is. There is no retry and
    /// no fallback to another source.
    pub fn generate(&mut self) -> Result<Uuid, S::Error> {
        let mut bytes = [0u8; UUID_LEN];
        if let Err(e) = self.source.fill(&mut bytes) {
            debug!("random byte source failed, no uuid generated");
            return Err(e);
        }
        let uuid = mark(bytes);
        trace!("generated uuid {:032x}", uuid.as_u128());
        Ok(uuid)
    }

    /// Generate `n` UUIDs, stopping at the first failure
    pub fn generate_many(&mut self, n: usize) -> Result<Vec<Uuid>, S::Error> {
        (0..n).map(|_| self.generate()).collect()
    }
}

/// Generate a version 4 UUID from the operating system CSPRNG
pub fn new_v4() -> Result<Uuid, crate::Error> {
    Generator::os().generate()
}
