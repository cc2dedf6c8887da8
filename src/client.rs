//! The cortical client: configuration, cache and transport in one place.

use crate::cache::ContentCache;
use crate::config::ClientConfig;
use crate::error::{CorticalError, Result};
use crate::retina::{self, Dimensions};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
use std::time::Duration;

/// Client for the Semantic Folding REST service.
///
/// Operations live in [`crate::service`]: term fingerprints
/// ([`get_bitmap`](Self::get_bitmap)), similar terms and comparisons
/// ([`bitmap_to_terms`](Self::bitmap_to_terms), [`compare`](Self::compare)),
/// and tokenization ([`tokenize`](Self::tokenize)).
pub struct CorticalClient<T: Transport = HttpTransport> {
    pub(crate) config: ClientConfig,
    pub(crate) api_key: String,
    pub(crate) cache: ContentCache,
    pub(crate) transport: T,
}

impl CorticalClient<HttpTransport> {
    /// Creates a client talking HTTP to `config.base_url`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport =
            HttpTransport::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> CorticalClient<T> {
    /// Creates a client over an arbitrary transport.
    ///
    /// Resolves the API key and creates `<cache_dir>/<retina>` if absent.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        let cache = ContentCache::new(config.cache_root())?;
        Ok(Self {
            config,
            api_key,
            cache,
            transport,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the active retina name.
    pub fn retina(&self) -> &str {
        &self.config.retina
    }

    /// Returns the cache.
    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Returns the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Geometry of the active retina.
    pub fn dimensions(&self) -> Result<Dimensions> {
        retina::dimensions(&self.config.retina)
    }

    /// Starts a JSON request to `path` with the active retina selected.
    pub(crate) fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, path)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .query("retina_name", &self.config.retina)
    }

    /// Sends a request with the API key attached.
    ///
    /// Any status other than 200 becomes [`CorticalError::RemoteService`].
    pub(crate) fn call_api(&self, request: ApiRequest) -> Result<ApiResponse> {
        let request = request.header("api-key", &self.api_key);
        let response = self.transport.request(&request)?;
        if response.status != 200 {
            return Err(CorticalError::RemoteService {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }
}
