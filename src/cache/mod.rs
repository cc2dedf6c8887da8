//! Content-addressed on-disk cache.
//!
//! Entries live at `<root>/<category>-<sha224 hex>.json`. Once written an
//! entry is authoritative: there is no eviction, expiry or size bound.

use crate::error::{CorticalError, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha224};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File extension of cache entries.
const ENTRY_EXTENSION: &str = "json";

/// Cache namespaces, one per cached operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheCategory {
    /// Term to [`SdrInfo`](crate::SdrInfo).
    Bitmap,
    /// Bitmap to raw similar-terms response.
    SimilarTerms,
    /// Text to raw tokenizer response.
    Tokenize,
}

impl CacheCategory {
    /// Returns the key prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheCategory::Bitmap => "bitmap",
            CacheCategory::SimilarTerms => "similarTerms",
            CacheCategory::Tokenize => "tokenize",
        }
    }
}

impl fmt::Display for CacheCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key/value byte store rooted at a directory.
#[derive(Debug, Clone)]
pub struct ContentCache {
    root: PathBuf,
}

impl ContentCache {
    /// Opens a cache rooted at `root`, creating the directory if needed.
    pub fn new<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Derives the cache key for `identity` within `category`.
    pub fn key(category: CacheCategory, identity: &[u8]) -> String {
        let mut hasher = Sha224::new();
        hasher.update(identity);
        format!("{}-{:x}", category.as_str(), hasher.finalize())
    }

    /// Returns the cache root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file backing `key`.
    pub fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{}", key, ENTRY_EXTENSION))
    }

    /// Checks whether an entry exists.
    pub fn has(&self, key: &str) -> bool {
        self.path(key).is_file()
    }

    /// Reads an entry, failing with [`CorticalError::CacheMiss`] if absent.
    pub fn read(&self, key: &str) -> Result<Vec<u8>> {
        match fs::read(self.path(key)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CorticalError::CacheMiss(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Creates or replaces an entry.
    ///
    /// The bytes go to a temporary file in the cache root which is then
    /// renamed over the target, so readers never observe a partial entry.
    pub fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        tmp.persist(self.path(key))?;
        debug!("wrote cache entry {} ({} bytes)", key, bytes.len());
        Ok(())
    }

    /// Reads and decodes a JSON entry.
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let bytes = self.read(key)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Encodes and writes a JSON entry.
    pub fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.write(key, &bytes)
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> Result<usize> {
        let mut count = 0;
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(ENTRY_EXTENSION) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Checks if the cache holds no entries.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_key_is_deterministic() {
        let a = ContentCache::key(CacheCategory::Bitmap, b"banana");
        let b = ContentCache::key(CacheCategory::Bitmap, b"banana");
        assert_eq!(a, b);
        // sha224 hex digest is 56 characters
        assert_eq!(a.len(), "bitmap-".len() + 56);
        assert!(a.starts_with("bitmap-"));
    }

    #[test]
    fn test_key_separates_identity_and_category() {
        let a = ContentCache::key(CacheCategory::Bitmap, b"banana");
        let b = ContentCache::key(CacheCategory::Bitmap, b"bananas");
        let c = ContentCache::key(CacheCategory::Tokenize, b"banana");
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a[a.len() - 56..], c[c.len() - 56..]);
    }

    #[test]
    fn test_known_digest() {
        // sha224("") is a fixed test vector
        assert_eq!(
            ContentCache::key(CacheCategory::SimilarTerms, b""),
            "similarTerms-d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
    }

    #[test]
    fn test_creates_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("en_synonymous");
        let cache = ContentCache::new(&root).unwrap();
        assert!(root.is_dir());
        // idempotent
        ContentCache::new(&root).unwrap();
        assert!(cache.is_empty().unwrap());
    }

    #[test]
    fn test_read_write() {
        let dir = tempdir().unwrap();
        let cache = ContentCache::new(dir.path()).unwrap();
        let key = ContentCache::key(CacheCategory::Bitmap, b"term");

        assert!(!cache.has(&key));
        assert!(cache.read(&key).unwrap_err().is_cache_miss());

        cache.write(&key, b"first").unwrap();
        assert!(cache.has(&key));
        assert_eq!(cache.read(&key).unwrap(), b"first");

        cache.write(&key, b"second").unwrap();
        assert_eq!(cache.read(&key).unwrap(), b"second");
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[test]
    fn test_json_helpers() {
        let dir = tempdir().unwrap();
        let cache = ContentCache::new(dir.path()).unwrap();
        cache.write_json("k", &vec![1u32, 2, 3]).unwrap();
        let back: Vec<u32> = cache.read_json("k").unwrap();
        assert_eq!(back, vec![1, 2, 3]);

        cache.write("bad", b"{not json").unwrap();
        let err = cache.read_json::<Vec<u32>>("bad").unwrap_err();
        assert!(matches!(err, CorticalError::Serialization(_)));
    }
}
