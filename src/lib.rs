//! # Cortical - cached client for a Semantic Folding service
//!
//! A Semantic Folding service represents terms as binary fingerprints
//! (Sparse Distributed Representations) on a fixed 2D grid called a retina.
//! This crate wraps the service's REST API with a content-addressed on-disk
//! cache so repeated queries never hit the network twice, and guarantees that
//! every term yields a well-formed fingerprint: terms the service cannot
//! resolve get a deterministic placeholder seeded by the term itself.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cortical::{ClientConfig, CorticalClient};
//!
//! let client = CorticalClient::new(ClientConfig {
//!     api_key: Some("your-key".into()),
//!     ..Default::default()
//! })?;
//!
//! // Fingerprint for a term (cached after the first call)
//! let info = client.get_bitmap("banana")?;
//!
//! // Terms near that fingerprint
//! let similar = client.bitmap_to_terms(&info.fingerprint.positions)?;
//!
//! // Compare two fingerprints
//! let apple = client.get_bitmap("apple")?;
//! let metrics = client.compare(&info.fingerprint.positions, &apple.fingerprint.positions)?;
//! ```
//!
//! ## Architecture
//!
//! - [`retina`] - Known retina geometries
//! - [`cache`] - Content-addressed on-disk cache
//! - [`fingerprint`] - Fingerprints, placeholder generation, dense conversion
//! - [`transport`] - Request/response seam and the HTTP implementation
//! - [`service`] - Term, similarity and text operations on [`CorticalClient`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod retina;
pub mod service;
pub mod transport;

// Re-export commonly used types
pub use cache::{CacheCategory, ContentCache};
pub use client::CorticalClient;
pub use config::ClientConfig;
pub use error::{CorticalError, Result};
pub use fingerprint::{FillMode, Fingerprint, Origin, SdrInfo};
pub use retina::{Dimensions, Retina};
pub use service::{ComparisonMetrics, SimilarTerm};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target sparsity (3%).
pub const TARGET_SPARSITY: f64 = 0.03;

/// `start_index` sent with paginated queries.
pub const DEFAULT_START_INDEX: u32 = 0;

/// `max_results` sent with paginated queries.
pub const DEFAULT_MAX_RESULTS: u32 = 10;
