use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use url::Url;

use crate::config::SourceConfig;
use crate::domain::model::{ImageRequest, SourceKind};
use crate::domain::ports::ImageSource;
use crate::utils::error::{Result, SourceError};

pub const KIND: SourceKind = SourceKind("http");

/// Retrieves images referenced as plain `http://` or `https://` URLs.
///
/// The configured authorization value, when present, is attached verbatim as
/// the Authorization header of the outbound request.
pub struct HttpImageSource {
    config: Arc<SourceConfig>,
    client: Client,
}

pub fn factory(config: Arc<SourceConfig>) -> Box<dyn ImageSource> {
    Box::new(HttpImageSource::new(config))
}

impl HttpImageSource {
    pub fn new(config: Arc<SourceConfig>) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: Arc<SourceConfig>) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    fn kind(&self) -> SourceKind {
        KIND
    }

    fn matches(&self, request: &ImageRequest) -> bool {
        request.method() == &Method::GET
            && request.remote_reference().is_some_and(|value| {
                value.starts_with("http://") || value.starts_with("https://")
            })
    }

    async fn get_image(&self, request: &ImageRequest) -> Result<Vec<u8>> {
        let raw = request
            .remote_reference()
            .ok_or_else(|| SourceError::InvalidReference(String::new()))?;
        let remote_url =
            Url::parse(&raw).map_err(|_| SourceError::InvalidReference(raw.clone()))?;

        let host = match remote_url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(SourceError::InvalidReference(raw)),
        };

        if !self.config.origin_allowed(&host) {
            return Err(SourceError::OriginNotAllowed(host));
        }

        tracing::debug!(url = %remote_url, "fetching remote image");

        let mut outbound = self.client.get(remote_url);
        if let Some(authorization) = &self.config.authorization {
            outbound = outbound.header(AUTHORIZATION, authorization.as_str());
        }

        let response = outbound
            .send()
            .await
            .map_err(|e| SourceError::Backend(format!("error fetching remote image: {e}")))?;

        if !response.status().is_success() {
            return Err(SourceError::Backend(format!(
                "remote image responded with status {}",
                response.status()
            )));
        }

        // The advertised length is advisory; a misreporting origin can still
        // push an oversized body, which the host has to tolerate.
        if self.config.max_allowed_size > 0 {
            if let Some(reported) = response.content_length() {
                if reported > self.config.max_allowed_size {
                    return Err(SourceError::SizeExceeded {
                        reported,
                        limit: self.config.max_allowed_size,
                    });
                }
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Backend(format!("error reading remote image body: {e}")))?;

        Ok(body.to_vec())
    }
}
