//! Sparse fingerprint (SDR) as exchanged with the remote service.

use serde::{Deserialize, Serialize};

/// A Sparse Distributed Representation given by its ON-bit positions.
///
/// Serialises as `{"positions": [...]}`, the wire shape the service uses for
/// both fingerprints it returns and bitmaps it accepts. Position order is not
/// significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Active bit positions.
    pub positions: Vec<u32>,
}

impl Fingerprint {
    /// Creates a fingerprint from a list of active positions.
    pub fn new(positions: Vec<u32>) -> Self {
        Self { positions }
    }

    /// Creates an all-zero fingerprint.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a fingerprint from a borrowed position slice.
    pub fn from_positions(positions: &[u32]) -> Self {
        Self {
            positions: positions.to_vec(),
        }
    }

    /// Returns the number of active bits.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.positions.len()
    }

    /// Checks if this fingerprint has no active bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Checks if a bit is active at the given position.
    pub fn contains(&self, position: u32) -> bool {
        self.positions.contains(&position)
    }

    /// Returns an iterator over active bit positions.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.positions.iter().copied()
    }

    /// Returns the sparsity (fraction of active bits) within `total_bits`.
    pub fn sparsity(&self, total_bits: u32) -> f64 {
        if total_bits == 0 {
            0.0
        } else {
            self.positions.len() as f64 / total_bits as f64
        }
    }

    /// Returns the sparsity as a percentage rounded to 0 decimal places.
    pub fn sparsity_percent(&self, total_bits: u32) -> f64 {
        (self.sparsity(total_bits) * 100.0).round()
    }

    /// Checks that every position is unique and inside `[0, total_bits)`.
    pub fn is_well_formed(&self, total_bits: u32) -> bool {
        let mut sorted = self.positions.clone();
        sorted.sort_unstable();
        sorted.windows(2).all(|w| w[0] != w[1]) && sorted.iter().all(|&p| p < total_bits)
    }

    /// Canonical JSON form, used both as request body and cache identity.
    pub fn to_canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Vec<u32>> for Fingerprint {
    fn from(positions: Vec<u32>) -> Self {
        Self::new(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_creation() {
        let fp = Fingerprint::empty();
        assert_eq!(fp.cardinality(), 0);
        assert!(fp.is_empty());
    }

    #[test]
    fn test_from_positions() {
        let fp = Fingerprint::from_positions(&[1, 5, 10, 100]);
        assert_eq!(fp.cardinality(), 4);
        assert!(fp.contains(1));
        assert!(fp.contains(5));
        assert!(!fp.contains(2));
    }

    #[test]
    fn test_sparsity() {
        let fp = Fingerprint::new(vec![0, 1, 2, 3, 4]);
        assert!((fp.sparsity(100) - 0.05).abs() < 1e-10);
        assert_eq!(fp.sparsity_percent(100), 5.0);
        assert_eq!(fp.sparsity(0), 0.0);
    }

    #[test]
    fn test_sparsity_percent_rounds() {
        let fp = Fingerprint::new((0..491).collect());
        // 491 / 16384 = 2.997%
        assert_eq!(fp.sparsity_percent(16_384), 3.0);
    }

    #[test]
    fn test_well_formed() {
        assert!(Fingerprint::new(vec![3, 1, 2]).is_well_formed(4));
        assert!(!Fingerprint::new(vec![1, 1]).is_well_formed(4));
        assert!(!Fingerprint::new(vec![4]).is_well_formed(4));
    }

    #[test]
    fn test_canonical_json() {
        let fp = Fingerprint::new(vec![2, 7]);
        assert_eq!(fp.to_canonical_json().unwrap(), r#"{"positions":[2,7]}"#);
        let back: Fingerprint = serde_json::from_str(r#"{"positions": [2, 7]}"#).unwrap();
        assert_eq!(back, fp);
    }
}
