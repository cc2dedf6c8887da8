//! Deterministic placeholder fingerprints for unresolvable terms.
//!
//! The generator is a pure function of `(term, mode, total_bits)`: the term is
//! hashed into a ChaCha seed, so equal terms always produce equal fingerprints
//! and distinct terms draw from independent streams. No process-wide RNG is
//! read or advanced.

use crate::fingerprint::Fingerprint;
use crate::TARGET_SPARSITY;
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// How to fill a fingerprint the service could not provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Seeded random sample at the target sparsity.
    Random,
    /// No active bits.
    Empty,
}

impl FillMode {
    /// Returns the mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::Random => "random",
            FillMode::Empty => "empty",
        }
    }
}

impl From<&str> for FillMode {
    /// `"random"` selects [`FillMode::Random`]; every other value is empty.
    fn from(s: &str) -> Self {
        if s == "random" {
            FillMode::Random
        } else {
            FillMode::Empty
        }
    }
}

impl FromStr for FillMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FillMode::from(s))
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the 32-byte generator seed for a term.
fn term_seed(term: &str) -> [u8; 32] {
    let digest = Sha256::digest(term.as_bytes());
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&digest);
    seed
}

/// Number of positions a random placeholder carries for a bit-space.
#[inline]
pub fn placeholder_bits(total_bits: u32) -> usize {
    (total_bits as f64 * TARGET_SPARSITY) as usize
}

/// Generates a placeholder fingerprint for `term`.
///
/// In [`FillMode::Random`] this samples `placeholder_bits(total_bits)`
/// distinct positions uniformly without replacement and returns them sorted.
/// In [`FillMode::Empty`], or when the target count is zero, the result has
/// no active bits.
pub fn generate(term: &str, mode: FillMode, total_bits: u32) -> Fingerprint {
    let amount = placeholder_bits(total_bits);
    if mode == FillMode::Empty || amount == 0 {
        return Fingerprint::empty();
    }

    let mut rng = ChaCha8Rng::from_seed(term_seed(term));
    let mut positions: Vec<u32> = index::sample(&mut rng, total_bits as usize, amount)
        .into_iter()
        .map(|i| i as u32)
        .collect();
    positions.sort_unstable();

    Fingerprint::new(positions)
}
