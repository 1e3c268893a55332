//! RFC 4122 version 4 (random based) UUIDs
//!
//! See <https://github.com/Zheoni/rng-uuid> for the CLI.
//!
//! A [`Generator`] asks its [`ByteSource`] for 16 random bytes, sets the
//! version and variant markers and returns the [`Uuid`]. Use [`new_v4`] for the
//! operating system CSPRNG, or build a [`Generator`] with any other source.
//!
//! ```
//! use rng_uuid::{source::RngSource, Generator};
//!
//! let mut generator = Generator::new(RngSource::seeded(1));
//! let uuid = generator.generate()?;
//! assert!(uuid.is_rfc4122_v4());
//! # Ok::<(), rng_uuid::Error>(())
//! ```
//!
//! Rendering to text and parsing are left to the caller.

mod generator;
pub mod source;
mod uuid;

pub use generator::{
    mark, mark_variant, mark_version, new_v4, Generator, VARIANT_RFC4122, VERSION_RANDOM,
};
pub use source::ByteSource;
pub use uuid::Uuid;

/// Generation error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The random source could not give the bytes
    #[error("entropy: {0}")]
    Entropy(#[from] rand::Error),
}
