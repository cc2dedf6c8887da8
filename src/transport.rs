//! HTTP transport seam.
//!
//! The client only needs "send this request, give me status and body". The
//! [`Transport`] trait captures that so the HTTP stack can be swapped for an
//! in-process stub.

use crate::error::{CorticalError, Result};
use log::debug;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A request to the remote service, relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Resource path, e.g. `/terms`.
    pub path: String,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
    /// Request headers.
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Starts a request.
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a query parameter.
    pub fn query<V: ToString>(mut self, name: &str, value: V) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Appends a query parameter when `value` is set.
    pub fn query_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    /// Sets a header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the body.
    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Looks up a query parameter by name.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Looks up a header by name (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl ApiResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

/// Request/response capability used by the client.
pub trait Transport {
    /// Performs one blocking request. Non-200 statuses are returned, not raised.
    fn request(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn request(&self, request: &ApiRequest) -> Result<ApiResponse> {
        (**self).request(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn request(&self, request: &ApiRequest) -> Result<ApiResponse> {
        (**self).request(request)
    }
}

/// Converts request headers into a `reqwest` header map.
///
/// A name or value HTTP cannot carry (control characters, non-token names)
/// is a [`CorticalError::Configuration`] error.
fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| CorticalError::Configuration(format!("invalid header name {:?}", name)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| CorticalError::Configuration(format!("invalid value for header {}", name)))?;
        map.insert(header, value);
    }
    Ok(map)
}

/// [`Transport`] over a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HttpClient,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for `base_url` with the given timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn request(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!("{} {}", request.method, url);

        let headers = header_map(&request.headers)?;
        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        let mut builder = builder.query(&request.query).headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = ApiRequest::new(Method::Get, "/terms")
            .query("retina_name", "en_synonymous")
            .query("start_index", 0)
            .query_opt::<String>("pos_type", None)
            .header("api-key", "k");

        assert_eq!(req.query_value("retina_name"), Some("en_synonymous"));
        assert_eq!(req.query_value("start_index"), Some("0"));
        assert_eq!(req.query_value("pos_type"), None);
        assert_eq!(req.header_value("API-KEY"), Some("k"));
        assert!(req.body.is_none());
    }

    #[test]
    fn test_header_map() {
        let headers = vec![
            ("api-key".to_string(), "k".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        let map = header_map(&headers).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_invalid_header_rejected() {
        let bad_value = vec![("api-key".to_string(), "bad\nkey".to_string())];
        assert!(matches!(
            header_map(&bad_value),
            Err(CorticalError::Configuration(_))
        ));

        let bad_name = vec![("api key".to_string(), "k".to_string())];
        assert!(matches!(
            header_map(&bad_name),
            Err(CorticalError::Configuration(_))
        ));
    }

    #[test]
    fn test_base_url_trimmed() {
        let transport = HttpTransport::new("http://localhost:1/rest/", Duration::from_secs(1)).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:1/rest");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
