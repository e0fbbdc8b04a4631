//! Randomness used for key generation and serial numbers.
//!
//! Every CA setup and every issuance draws one fresh seed from an
//! [`EntropySource`] and expands it with a ChaCha-based CSPRNG. A source that
//! runs dry surfaces as [`PkiError::Entropy`] instead of a panic deep inside
//! prime generation.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::error::PkiError;

/// Provider of cryptographically secure random bytes.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` entirely, or fail without partial output being used.
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

/// Operating system entropy (`getrandom`).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        OsRng.try_fill_bytes(dest)
    }
}

/// Seed a CSPRNG for one operation.
pub(crate) fn seeded_rng(source: &dyn EntropySource) -> Result<StdRng, PkiError> {
    let mut seed = <StdRng as SeedableRng>::Seed::default();
    source.fill(&mut seed).map_err(PkiError::Entropy)?;
    Ok(StdRng::from_seed(seed))
}
