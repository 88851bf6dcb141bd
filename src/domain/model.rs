use std::fmt;

use reqwest::Method;
use url::Url;

use crate::utils::error::{Result, SourceError};

/// Query parameter carrying the remote image reference.
pub const URL_QUERY_KEY: &str = "url";

/// Tag under which an adapter is registered ("s3", "http", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceKind(pub &'static str);

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Adapter-facing view of the inbound proxy request.
///
/// Adapters only ever look at the method and the `url` query parameter;
/// routing, headers and body stay with the host.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    method: Method,
    url: Url,
}

impl ImageRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self { method, url }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Build a GET request carrying `reference` as the `url` query value,
    /// for callers that hold a bare reference instead of a full request.
    pub fn from_reference(reference: &str) -> Result<Self> {
        let url = Url::parse_with_params("http://localhost/", [(URL_QUERY_KEY, reference)])
            .map_err(|_| SourceError::InvalidReference(reference.to_string()))?;
        Ok(Self::get(url))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Value of the `url` query parameter, if present.
    pub fn remote_reference(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == URL_QUERY_KEY)
            .map(|(_, value)| value.into_owned())
    }
}

/// Parsed remote reference: `scheme://bucket/key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRef {
    pub scheme: String,
    pub bucket: String,
    pub key: String,
}

impl RemoteRef {
    /// Parse a raw reference string. The URL host becomes the bucket and the
    /// path, stripped of its leading slash, becomes the object key.
    pub fn parse(raw: &str) -> Result<Self> {
        let parsed =
            Url::parse(raw).map_err(|_| SourceError::InvalidReference(raw.to_string()))?;

        let bucket = match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(SourceError::InvalidReference(raw.to_string())),
        };

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            bucket,
            key: parsed.path().trim_start_matches('/').to_string(),
        })
    }
}
