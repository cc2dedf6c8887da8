//! Fingerprint types, placeholder generation and dense conversion.

mod dense;
mod info;
mod placeholder;
mod sdr;

pub use dense::{from_dense_string, positions_to_dense, to_dense_string};
pub use info::{Origin, SdrInfo, TermRecord};
pub use placeholder::{generate, placeholder_bits, FillMode};
pub use sdr::Fingerprint;
