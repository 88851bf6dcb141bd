use std::sync::Arc;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use reqwest::Method;
use tokio::sync::OnceCell;

use crate::config::SourceConfig;
use crate::domain::model::{ImageRequest, RemoteRef, SourceKind};
use crate::domain::ports::ImageSource;
use crate::utils::error::{Result, SourceError};

pub const KIND: SourceKind = SourceKind("s3");

/// Retrieves images referenced as `s3://bucket/key`.
///
/// The client is shared across requests and safe for concurrent use. When
/// none is injected it is resolved once, lazily, from the ambient
/// environment; the configured authorization value is never attached to S3
/// calls.
pub struct S3ImageSource {
    config: Arc<SourceConfig>,
    client: OnceCell<Client>,
}

pub fn factory(config: Arc<SourceConfig>) -> Box<dyn ImageSource> {
    Box::new(S3ImageSource::new(config))
}

impl S3ImageSource {
    pub fn new(config: Arc<SourceConfig>) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Use an already-configured client (custom endpoint, static
    /// credentials) instead of the ambient environment.
    pub fn with_client(client: Client, config: Arc<SourceConfig>) -> Self {
        Self {
            config,
            client: OnceCell::new_with(Some(client)),
        }
    }

    async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
                Client::new(&sdk_config)
            })
            .await
    }

    async fn fetch_image(&self, remote: &RemoteRef) -> Result<Vec<u8>> {
        let client = self.client().await;

        // Check the remote image size before transferring any body.
        if self.config.max_allowed_size > 0 {
            let head = client
                .head_object()
                .bucket(&remote.bucket)
                .key(&remote.key)
                .send()
                .await
                .map_err(|e| {
                    SourceError::Backend(format!("error fetching image headers from S3: {e}"))
                })?;

            let reported = head.content_length().unwrap_or(0).max(0) as u64;
            if reported > self.config.max_allowed_size {
                return Err(SourceError::SizeExceeded {
                    reported,
                    limit: self.config.max_allowed_size,
                });
            }
        }

        let object = client
            .get_object()
            .bucket(&remote.bucket)
            .key(&remote.key)
            .send()
            .await
            .map_err(|e| SourceError::Backend(format!("error fetching image from S3: {e}")))?;

        let data = object
            .body
            .collect()
            .await
            .map_err(|e| SourceError::Backend(format!("error reading image body from S3: {e}")))?;

        Ok(data.into_bytes().to_vec())
    }
}

#[async_trait]
impl ImageSource for S3ImageSource {
    fn kind(&self) -> SourceKind {
        KIND
    }

    fn matches(&self, request: &ImageRequest) -> bool {
        request.method() == &Method::GET
            && request
                .remote_reference()
                .is_some_and(|value| value.starts_with("s3://"))
    }

    async fn get_image(&self, request: &ImageRequest) -> Result<Vec<u8>> {
        let raw = request
            .remote_reference()
            .ok_or_else(|| SourceError::InvalidReference(String::new()))?;
        let remote = RemoteRef::parse(&raw)?;

        if !self.config.origin_allowed(&remote.bucket) {
            return Err(SourceError::OriginNotAllowed(remote.bucket));
        }

        tracing::debug!(bucket = %remote.bucket, key = %remote.key, "fetching image from S3");
        self.fetch_image(&remote).await
    }
}
