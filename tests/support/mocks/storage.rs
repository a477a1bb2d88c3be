// tests/support/mocks/storage.rs
use async_trait::async_trait;
use easyrent::application::{
    ApplicationResult, error::ApplicationError, ports::image_store::ImageStore,
};
use std::sync::Mutex;

/// Records delete requests; the failing variant errors on every call.
#[derive(Debug, Default)]
pub struct RecordingImageStore {
    requested: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingImageStore {
    pub fn failing() -> Self {
        Self {
            requested: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn delete(&self, public_id: &str) -> ApplicationResult<()> {
        self.requested.lock().unwrap().push(public_id.to_string());
        if self.fail {
            Err(ApplicationError::infrastructure("object store unavailable"))
        } else {
            Ok(())
        }
    }
}
