#[cfg(feature = "cli")]
pub mod cli;

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration shared by every retrieval backend.
///
/// Owned by the hosting proxy and handed to the adapters behind an `Arc`;
/// read-only after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Maximum allowed image size in bytes. 0 means unlimited.
    pub max_allowed_size: u64,

    /// Origins images may be fetched from. Empty means unrestricted.
    pub allowed_origins: Vec<Url>,

    /// Static Authorization header value forwarded to HTTP origins.
    /// S3 credentials come from the ambient environment instead.
    pub authorization: Option<String>,
}

impl SourceConfig {
    /// Whether `host` passes the allow-list. Host comparison is exact and
    /// case-sensitive.
    pub fn origin_allowed(&self, host: &str) -> bool {
        self.allowed_origins.is_empty()
            || self
                .allowed_origins
                .iter()
                .any(|origin| origin.host_str() == Some(host))
    }
}
