use crate::application::{ApplicationResult, error::ApplicationError, ports::image_store::ImageStore};
use crate::config::CloudinaryConfig;
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::time::Duration;

const API_BASE: &str = "https://api.cloudinary.com/v1_1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct CloudinaryImageStore {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

impl CloudinaryImageStore {
    pub fn new(config: CloudinaryConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    fn destroy_url(&self) -> String {
        format!("{API_BASE}/{}/image/destroy", self.config.cloud_name)
    }
}

/// Hex SHA-256 over the sorted parameters followed by the API secret.
fn sign(public_id: &str, timestamp: i64, api_secret: &str) -> String {
    let payload = format!("public_id={public_id}&timestamp={timestamp}{api_secret}");
    let digest = Sha256::digest(payload.as_bytes());
    format!("{digest:x}")
}

#[async_trait]
impl ImageStore for CloudinaryImageStore {
    async fn delete(&self, public_id: &str) -> ApplicationResult<()> {
        let timestamp = Utc::now().timestamp();
        let signature = sign(public_id, timestamp, &self.config.api_secret);
        let timestamp = timestamp.to_string();
        let params = [
            ("public_id", public_id),
            ("timestamp", timestamp.as_str()),
            ("api_key", self.config.api_key.as_str()),
            ("signature", signature.as_str()),
            ("signature_algorithm", "sha256"),
        ];

        let response = self
            .client
            .post(self.destroy_url())
            .form(&params)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("image store request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::infrastructure(format!(
                "image store returned status {status}"
            )));
        }

        let body: DestroyResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("image store response: {err}")))?;

        match body.result.as_str() {
            "ok" => {
                tracing::info!(public_id, "image deleted");
                Ok(())
            }
            "not found" => {
                tracing::debug!(public_id, "image already absent");
                Ok(())
            }
            other => Err(ApplicationError::infrastructure(format!(
                "image store refused delete: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_hex_sha256() {
        let signature = sign("easyrent/flat-1", 1_700_000_000, "secret");
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(signature, sign("easyrent/flat-1", 1_700_000_000, "secret"));
        assert_ne!(signature, sign("easyrent/flat-1", 1_700_000_001, "secret"));
    }

    #[test]
    fn signature_of_known_payload() {
        // sha256("public_id=a&timestamp=1b")
        let expected = format!("{:x}", Sha256::digest(b"public_id=a&timestamp=1b"));
        assert_eq!(sign("a", 1, "b"), expected);
    }

    #[test]
    fn destroy_url_uses_cloud_name() {
        let store = CloudinaryImageStore::new(CloudinaryConfig {
            cloud_name: "demo".into(),
            api_key: "key".into(),
            api_secret: "secret".into(),
        })
        .unwrap();
        assert_eq!(
            store.destroy_url(),
            "https://api.cloudinary.com/v1_1/demo/image/destroy"
        );
    }
}
