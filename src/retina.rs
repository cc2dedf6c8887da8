//! Retina geometry registry.
//!
//! A retina is a named, fixed-size 2D bit-space. Only the retinas listed in
//! [`Retina`] are known locally; anything else is an [`CorticalError::UnknownRetina`].

use crate::error::{CorticalError, Result};
use crate::fingerprint::placeholder_bits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width and height of a retina.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Dimensions {
    /// Creates a geometry whose bit count is non-zero and fits in a `u32`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        match width.checked_mul(height) {
            Some(total) if total > 0 => Ok(Self { width, height }),
            _ => Err(CorticalError::InvalidArgument(format!(
                "retina geometry {}x{} is not a usable bit-space",
                width, height
            ))),
        }
    }

    /// Total number of bits (width * height), saturating at `u32::MAX`.
    #[inline]
    pub fn total_bits(&self) -> u32 {
        self.width.saturating_mul(self.height)
    }

    /// Number of ON bits a fingerprint at the target sparsity carries.
    #[inline]
    pub fn target_bits(&self) -> usize {
        placeholder_bits(self.total_bits())
    }
}

/// The known retinas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Retina {
    /// `en_synonymous`
    EnSynonymous,
    /// `en_associative`
    EnAssociative,
}

impl Retina {
    /// All registered retinas.
    pub const ALL: [Retina; 2] = [Retina::EnSynonymous, Retina::EnAssociative];

    /// Returns the service-side name.
    pub fn name(&self) -> &'static str {
        match self {
            Retina::EnSynonymous => "en_synonymous",
            Retina::EnAssociative => "en_associative",
        }
    }

    /// Returns the geometry.
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Retina::EnSynonymous | Retina::EnAssociative => Dimensions {
                width: 128,
                height: 128,
            },
        }
    }
}

impl FromStr for Retina {
    type Err = CorticalError;

    fn from_str(s: &str) -> Result<Self> {
        Retina::ALL
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| CorticalError::UnknownRetina(s.to_string()))
    }
}

impl fmt::Display for Retina {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the geometry of a retina by name.
pub fn dimensions(retina_name: &str) -> Result<Dimensions> {
    Ok(retina_name.parse::<Retina>()?.dimensions())
}

/// Total bit count of a retina by name.
pub fn total_bits(retina_name: &str) -> Result<u32> {
    Ok(dimensions(retina_name)?.total_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_retinas() {
        let dims = dimensions("en_synonymous").unwrap();
        assert_eq!(dims, Dimensions { width: 128, height: 128 });
        assert_eq!(total_bits("en_associative").unwrap(), 16_384);
    }

    #[test]
    fn test_unknown_retina() {
        let err = dimensions("fr_general").unwrap_err();
        assert!(matches!(err, CorticalError::UnknownRetina(name) if name == "fr_general"));
    }

    #[test]
    fn test_target_bits() {
        // 16384 * 0.03 = 491.52
        assert_eq!(Retina::EnSynonymous.dimensions().target_bits(), 491);
        let tiny = Dimensions { width: 4, height: 4 };
        assert_eq!(tiny.target_bits(), 0);
    }

    #[test]
    fn test_checked_dimensions() {
        assert_eq!(Dimensions::new(128, 128).unwrap().total_bits(), 16_384);
        assert!(matches!(
            Dimensions::new(70_000, 70_000),
            Err(CorticalError::InvalidArgument(_))
        ));
        assert!(Dimensions::new(0, 128).is_err());
    }

    #[test]
    fn test_total_bits_saturates() {
        let huge = Dimensions {
            width: 70_000,
            height: 70_000,
        };
        assert_eq!(huge.total_bits(), u32::MAX);
    }

    #[test]
    fn test_name_round_trip() {
        for retina in Retina::ALL {
            assert_eq!(retina.name().parse::<Retina>().unwrap(), retina);
        }
    }
}
