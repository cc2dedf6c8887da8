//! Remote operations, implemented on [`CorticalClient`](crate::CorticalClient).

mod fingerprint;
mod similarity;
mod text;

pub use similarity::{ComparisonMetrics, SimilarTerm};
