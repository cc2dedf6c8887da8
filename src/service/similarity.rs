//! Bitmap to similar terms, and bitmap comparison.

use crate::cache::{CacheCategory, ContentCache};
use crate::client::CorticalClient;
use crate::error::{CorticalError, Result};
use crate::fingerprint::Fingerprint;
use crate::transport::{Method, Transport};
use crate::{DEFAULT_MAX_RESULTS, DEFAULT_START_INDEX, TARGET_SPARSITY};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A term similar to a queried bitmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarTerm {
    /// The term.
    pub term: String,
    /// Service-assigned similarity score.
    pub score: f64,
}

/// Metrics returned by `/compare`, in response order.
///
/// Typical keys are `Cosine-Similarity`, `Euclidean-Distance`,
/// `Jaccard-Distance`, `Overlapping-all`, `Overlapping-left-right`,
/// `Overlapping-right-left`, `Size-left`, `Size-right` and `Weighted-Scoring`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonMetrics(pub Map<String, Value>);

impl ComparisonMetrics {
    /// Returns a metric as a number.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.0.get(name).and_then(Value::as_f64)
    }

    /// Iterates metric names and values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of metrics.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if no metrics were returned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Transport> CorticalClient<T> {
    /// Returns the terms most similar to a bitmap, in the service's ranking order.
    ///
    /// The raw response is cached under `similarTerms`, keyed by the
    /// canonical JSON of `{"positions": on_bits}`.
    pub fn bitmap_to_terms(&self, on_bits: &[u32]) -> Result<Vec<SimilarTerm>> {
        if on_bits.is_empty() {
            return Err(CorticalError::InvalidArgument(
                "cannot convert empty bitmap to term".to_string(),
            ));
        }

        let data = Fingerprint::from_positions(on_bits).to_canonical_json()?;
        let key = ContentCache::key(CacheCategory::SimilarTerms, data.as_bytes());

        if self.cache.has(&key) {
            debug!("fetching raw (similar) terms from the cache");
            return Ok(serde_json::from_slice(&self.cache.read(&key)?)?);
        }

        debug!("fetching raw (similar) terms from REST API");
        let request = self
            .request(Method::Post, "/expressions/similar_terms")
            .query("start_index", DEFAULT_START_INDEX)
            .query("max_results", DEFAULT_MAX_RESULTS)
            .query("get_fingerprint", false)
            .query_opt("pos_type", self.config.pos_type.as_ref())
            .query("sparsity", TARGET_SPARSITY)
            .query_opt("context_id", self.config.context_id)
            .body(data);
        let response = self.call_api(request)?;

        // only decodable bodies become entries
        let terms: Vec<SimilarTerm> = serde_json::from_str(&response.body)?;
        self.cache.write(&key, response.body.as_bytes())?;
        Ok(terms)
    }

    /// Compares two bitmaps remotely. Never cached.
    pub fn compare(&self, bitmap1: &[u32], bitmap2: &[u32]) -> Result<ComparisonMetrics> {
        let data = serde_json::to_string(&[
            Fingerprint::from_positions(bitmap1),
            Fingerprint::from_positions(bitmap2),
        ])?;
        let request = self.request(Method::Post, "/compare").body(data);
        let response = self.call_api(request)?;
        Ok(serde_json::from_str(&response.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_terms_ignore_extra_fields() {
        let terms: Vec<SimilarTerm> = serde_json::from_str(
            r#"[{"term": "fruit", "score": 71.0, "df": 0.1, "pos_types": ["NOUN"], "fingerprint": {"positions": []}},
                {"term": "apple", "score": 65.5}]"#,
        )
        .unwrap();
        assert_eq!(terms[0].term, "fruit");
        assert_eq!(terms[1].score, 65.5);
    }

    #[test]
    fn test_metrics_preserve_order() {
        let metrics: ComparisonMetrics = serde_json::from_str(
            r#"{"Weighted-Scoring": 0.44, "Cosine-Similarity": 0.67, "Size-left": 9}"#,
        )
        .unwrap();
        let names: Vec<&str> = metrics.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["Weighted-Scoring", "Cosine-Similarity", "Size-left"]);
        assert_eq!(metrics.metric("Size-left"), Some(9.0));
        assert_eq!(metrics.metric("missing"), None);
    }
}
