//! Term fingerprint records.

use crate::error::Result;
use crate::fingerprint::Fingerprint;
use crate::retina::Dimensions;
use serde::{Deserialize, Serialize};

/// Where a fingerprint came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Returned by the remote term lookup.
    #[default]
    Resolved,
    /// Generated locally because the service had no record for the term.
    Placeholder,
}

/// A term record as returned by the `/terms` endpoint.
///
/// Every field is optional on the wire; a record without a fingerprint is
/// treated as unresolved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermRecord {
    /// The term.
    #[serde(default)]
    pub term: Option<String>,
    /// Document frequency.
    #[serde(default)]
    pub df: Option<f64>,
    /// Relevance score.
    #[serde(default)]
    pub score: Option<f64>,
    /// Part-of-speech types.
    #[serde(default)]
    pub pos_types: Option<Vec<String>>,
    /// Fingerprint, present when `get_fingerprint=true`.
    #[serde(default)]
    pub fingerprint: Option<Fingerprint>,
    /// Retina width, if the service reports it.
    #[serde(default)]
    pub width: Option<u32>,
    /// Retina height, if the service reports it.
    #[serde(default)]
    pub height: Option<u32>,
}

impl TermRecord {
    /// Geometry reported by the service, if it sent both width and height.
    ///
    /// Fails when the reported geometry overflows a `u32` bit count or is empty.
    pub fn dimensions(&self) -> Result<Option<Dimensions>> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Dimensions::new(width, height).map(Some),
            _ => Ok(None),
        }
    }
}

/// Fully populated fingerprint information for one term.
///
/// This is the value persisted under the `bitmap` cache category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdrInfo {
    /// The term.
    pub term: String,
    /// The fingerprint.
    pub fingerprint: Fingerprint,
    /// Retina width.
    pub width: u32,
    /// Retina height.
    pub height: u32,
    /// Percentage of active bits, rounded to 0 decimal places.
    pub sparsity: f64,
    /// Service score; `None` for placeholders.
    pub score: Option<f64>,
    /// Service part-of-speech types; `None` for placeholders.
    pub pos_types: Option<Vec<String>>,
    /// Document frequency, when the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub df: Option<f64>,
    /// Resolved by the service or generated locally.
    #[serde(default)]
    pub origin: Origin,
}

impl SdrInfo {
    /// Builds an info record for a resolved term with its final geometry.
    pub fn resolved(
        term: &str,
        record: TermRecord,
        fingerprint: Fingerprint,
        dims: Dimensions,
    ) -> Self {
        Self::build(
            record.term.unwrap_or_else(|| term.to_string()),
            fingerprint,
            dims,
            record.score,
            record.pos_types,
            record.df,
            Origin::Resolved,
        )
    }

    /// Builds an info record for a placeholder fingerprint.
    pub fn placeholder(term: &str, fingerprint: Fingerprint, dims: Dimensions) -> Self {
        Self::build(
            term.to_string(),
            fingerprint,
            dims,
            None,
            None,
            None,
            Origin::Placeholder,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        term: String,
        fingerprint: Fingerprint,
        dims: Dimensions,
        score: Option<f64>,
        pos_types: Option<Vec<String>>,
        df: Option<f64>,
        origin: Origin,
    ) -> Self {
        let sparsity = fingerprint.sparsity_percent(dims.total_bits());
        Self {
            term,
            fingerprint,
            width: dims.width,
            height: dims.height,
            sparsity,
            score,
            pos_types,
            df,
            origin,
        }
    }

    /// Total bit count (width * height), saturating at `u32::MAX`.
    #[inline]
    pub fn total_bits(&self) -> u32 {
        self.width.saturating_mul(self.height)
    }

    /// Checks whether this record holds a locally generated fingerprint.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.origin == Origin::Placeholder
    }
}
