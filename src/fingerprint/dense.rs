//! Dense bitstring conversion.

use crate::error::{CorticalError, Result};
use crate::fingerprint::{Fingerprint, SdrInfo};

/// Renders positions as a `'0'`/`'1'` string of length `total_bits`.
///
/// Positions at or beyond `total_bits` are ignored. The input is only read.
pub fn positions_to_dense(positions: &[u32], total_bits: u32) -> String {
    let mut dense = vec!['0'; total_bits as usize];
    for &pos in positions {
        if let Some(bit) = dense.get_mut(pos as usize) {
            *bit = '1';
        }
    }
    dense.into_iter().collect()
}

/// Renders an [`SdrInfo`] as a dense bitstring of length `width * height`.
pub fn to_dense_string(info: &SdrInfo) -> String {
    positions_to_dense(&info.fingerprint.positions, info.total_bits())
}

/// Parses a dense bitstring back into a fingerprint.
pub fn from_dense_string(dense: &str) -> Result<Fingerprint> {
    let mut positions = Vec::new();
    for (i, c) in dense.chars().enumerate() {
        match c {
            '1' => positions.push(i as u32),
            '0' => {}
            other => {
                return Err(CorticalError::InvalidArgument(format!(
                    "unexpected character {:?} at bit {} in dense bitmap",
                    other, i
                )))
            }
        }
    }
    Ok(Fingerprint::new(positions))
}

impl Fingerprint {
    /// Renders this fingerprint as a dense bitstring.
    pub fn to_dense_string(&self, total_bits: u32) -> String {
        positions_to_dense(&self.positions, total_bits)
    }
}
