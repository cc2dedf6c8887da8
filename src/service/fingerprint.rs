//! Term to fingerprint resolution.

use crate::cache::{CacheCategory, ContentCache};
use crate::client::CorticalClient;
use crate::error::Result;
use crate::fingerprint::{self, SdrInfo, TermRecord};
use crate::transport::{Method, Transport};
use crate::{DEFAULT_MAX_RESULTS, DEFAULT_START_INDEX};
use log::{debug, info};
use serde_json::Value;

/// Picks the first term record out of a `/terms` response, if it is usable.
///
/// Anything other than a non-empty list whose head decodes to a record with a
/// fingerprint yields `None`.
fn first_record(response: Value) -> Option<TermRecord> {
    match response {
        Value::Array(records) => records
            .into_iter()
            .next()
            .and_then(|head| serde_json::from_value::<TermRecord>(head).ok())
            .filter(|record| record.fingerprint.is_some()),
        _ => None,
    }
}

impl<T: Transport> CorticalClient<T> {
    /// Returns the fingerprint information for `term`.
    ///
    /// Served from the `bitmap` cache when present. Otherwise the term is
    /// looked up remotely; if the service has no usable record a placeholder
    /// fingerprint is generated. Either way the completed record is written
    /// through to the cache before it is returned. A non-200 response
    /// propagates and nothing is cached.
    pub fn get_bitmap(&self, term: &str) -> Result<SdrInfo> {
        let key = ContentCache::key(CacheCategory::Bitmap, term.as_bytes());
        if self.cache.has(&key) {
            debug!("fetching {} sdr from the cache", term);
            return self.cache.read_json(&key);
        }

        debug!("fetching {} sdr from REST API", term);
        let request = self
            .request(Method::Get, "/terms")
            .query("term", term)
            .query("start_index", DEFAULT_START_INDEX)
            .query("max_results", DEFAULT_MAX_RESULTS)
            .query("get_fingerprint", true);
        let response = self.call_api(request)?;
        let parsed: Value = serde_json::from_str(&response.body)?;

        let info = match first_record(parsed) {
            Some(mut record) => {
                let fp = record.fingerprint.take().unwrap_or_default();
                let dims = match record.dimensions()? {
                    Some(dims) => dims,
                    None => self.dimensions()?,
                };
                SdrInfo::resolved(term, record, fp, dims)
            }
            None => {
                info!(
                    "API could not return info for the text '{}'; generating a placeholder fingerprint",
                    term
                );
                let dims = self.dimensions()?;
                let fp = fingerprint::generate(term, self.config.fill_mode, dims.total_bits());
                SdrInfo::placeholder(term, fp, dims)
            }
        };

        self.cache.write_json(&key, &info)?;
        Ok(info)
    }

    /// Returns the dense `'0'`/`'1'` rendering of `term`'s fingerprint.
    pub fn get_sdr(&self, term: &str) -> Result<String> {
        let info = self.get_bitmap(term)?;
        Ok(fingerprint::to_dense_string(&info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_record_takes_head() {
        let response = json!([
            {"term": "apple", "fingerprint": {"positions": [1, 2]}},
            {"term": "apples", "fingerprint": {"positions": [3]}}
        ]);
        let record = first_record(response).unwrap();
        assert_eq!(record.term.as_deref(), Some("apple"));
    }

    #[test]
    fn test_first_record_rejects_unusable() {
        assert!(first_record(json!([])).is_none());
        assert!(first_record(json!({"term": "apple"})).is_none());
        assert!(first_record(json!([{"term": "apple"}])).is_none());
        assert!(first_record(json!(["apple"])).is_none());
    }
}
