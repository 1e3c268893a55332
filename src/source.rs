//! Random byte sources
//!
//! A [`Generator`](crate::Generator) only needs 16 random bytes per UUID. Where
//! they come from is up to the [`ByteSource`] it is built with.

use std::convert::Infallible;

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64 as Pcg;

use crate::Error;

/// Number of bytes in a UUID
pub const UUID_LEN: usize = 16;

/// Something that can fill a UUID sized buffer with random bytes
///
/// Implementations used for real identifiers must give independent, uniformly
/// distributed bytes from a cryptographically strong generator. If the
/// generator is going to be shared between threads, making that sound is the
/// job of the source, not of the [`Generator`](crate::Generator).
pub trait ByteSource {
    /// Error returned when the bytes can't be obtained
    type Error;

    /// Fill the whole buffer or fail
    fn fill(&mut self, buf: &mut [u8; UUID_LEN]) -> Result<(), Self::Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn fill(&mut self, buf: &mut [u8; UUID_LEN]) -> Result<(), Self::Error> {
        (**self).fill(buf)
    }
}

/// The operating system CSPRNG
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsSource;

impl ByteSource for OsSource {
    type Error = Error;

    fn fill(&mut self, buf: &mut [u8; UUID_LEN]) -> Result<(), Self::Error> {
        OsRng.try_fill_bytes(buf)?;
        Ok(())
    }
}

/// Adapter for any [`rand`] generator
///
/// Errors from [`RngCore::try_fill_bytes`] surface as [`Error::Entropy`].
#[derive(Debug, Clone, PartialEq)]
pub struct RngSource<R>(R);

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl RngSource<Pcg> {
    /// Seeded PCG64 generator
    ///
    /// The output is reproducible for a given seed, which also means it is
    /// **not** suitable for identifiers that must be unguessable.
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg::seed_from_u64(seed))
    }
}

impl<R: RngCore> ByteSource for RngSource<R> {
    type Error = Error;

    fn fill(&mut self, buf: &mut [u8; UUID_LEN]) -> Result<(), Self::Error> {
        self.0.try_fill_bytes(buf)?;
        Ok(())
    }
}

/// Replays the same 16 bytes on every call
///
/// Only useful for tests and examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSource(pub [u8; UUID_LEN]);

impl ByteSource for FixedSource {
    type Error = Infallible;

    fn fill(&mut self, buf: &mut [u8; UUID_LEN]) -> Result<(), Self::Error> {
        *buf = self.0;
        Ok(())
    }
}
