use crate::application::ApplicationResult;
use async_trait::async_trait;

/// External object store holding listing images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn delete(&self, public_id: &str) -> ApplicationResult<()>;
}
