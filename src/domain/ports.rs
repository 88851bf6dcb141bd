use async_trait::async_trait;

use crate::domain::model::{ImageRequest, SourceKind};
use crate::utils::error::Result;

/// Capability interface implemented by every retrieval backend.
///
/// `matches` is probed for every registered adapter on every request, so it
/// must stay cheap and side-effect-free; the expensive work happens in
/// `get_image`.
#[async_trait]
pub trait ImageSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    fn matches(&self, request: &ImageRequest) -> bool;

    async fn get_image(&self, request: &ImageRequest) -> Result<Vec<u8>>;
}
