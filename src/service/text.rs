//! Text tokenization pass-through.

use crate::cache::{CacheCategory, ContentCache};
use crate::client::CorticalClient;
use crate::error::Result;
use crate::transport::{Method, Transport};
use log::debug;

/// Splits the service's comma-joined sentences into token lists.
fn split_sentences(sentences: Vec<String>) -> Vec<Vec<String>> {
    sentences
        .into_iter()
        .map(|sentence| sentence.split(',').map(str::to_string).collect())
        .collect()
}

impl<T: Transport> CorticalClient<T> {
    /// Tokenizes `text` into sentences of tokens.
    ///
    /// ```text
    /// "The cow jumped over the moon. Then it ran to the other side."
    ///   => [["cow", "jumped", "moon"], ["ran", "other side"]]
    /// ```
    pub fn tokenize(&self, text: &str) -> Result<Vec<Vec<String>>> {
        let key = ContentCache::key(CacheCategory::Tokenize, text.as_bytes());

        if self.cache.has(&key) {
            debug!("fetching tokens from the cache");
            let sentences: Vec<String> = serde_json::from_slice(&self.cache.read(&key)?)?;
            return Ok(split_sentences(sentences));
        }

        debug!("fetching tokens from REST API");
        let request = self
            .request(Method::Post, "/text/tokenize")
            .query_opt("POStags", self.config.tokenize_pos_tags.as_ref())
            .body(text.to_string());
        let response = self.call_api(request)?;

        let sentences: Vec<String> = serde_json::from_str(&response.body)?;
        self.cache.write(&key, response.body.as_bytes())?;
        Ok(split_sentences(sentences))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        let split = split_sentences(vec!["cow,jumped,moon".into(), "ran,other side".into()]);
        assert_eq!(
            split,
            vec![
                vec!["cow".to_string(), "jumped".into(), "moon".into()],
                vec!["ran".to_string(), "other side".into()],
            ]
        );
    }
}
