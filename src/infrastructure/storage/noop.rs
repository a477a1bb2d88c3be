use crate::application::{ApplicationResult, ports::image_store::ImageStore};
use async_trait::async_trait;

/// Used when no Cloudinary credentials are configured.
#[derive(Default, Clone)]
pub struct NoopImageStore;

#[async_trait]
impl ImageStore for NoopImageStore {
    async fn delete(&self, public_id: &str) -> ApplicationResult<()> {
        tracing::debug!(public_id, "image store not configured; skipping delete");
        Ok(())
    }
}
