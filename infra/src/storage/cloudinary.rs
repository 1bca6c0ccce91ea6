//! Cloudinary implementation of the image store port.
//!
//! Uploads go to the signed upload endpoint as a multipart POST; deletes
//! use the destroy endpoint. Both are single-attempt with no retries, per
//! the port's contract. Request signing follows Cloudinary's scheme: the
//! SHA-1 hex digest of the sorted parameter string with the API secret
//! appended.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha1::{Digest, Sha1};
use std::time::Duration;
use tracing::{debug, error, info};

use ct_core::errors::DomainError;
use ct_core::services::storage::{ImageStore, StoredImage};
use ct_shared::config::ConfigError;

/// Cloudinary account configuration
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    /// Cloud name identifying the account
    pub cloud_name: String,
    /// API key
    pub api_key: String,
    /// API secret used for request signing
    pub api_secret: String,
    /// API base URL, overridable for tests
    pub base_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl CloudinaryConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_name: std::env::var("CLOUDINARY_CLOUD_NAME")
                .map_err(|_| ConfigError::missing("CLOUDINARY_CLOUD_NAME"))?,
            api_key: std::env::var("CLOUDINARY_API_KEY")
                .map_err(|_| ConfigError::missing("CLOUDINARY_API_KEY"))?,
            api_secret: std::env::var("CLOUDINARY_API_SECRET")
                .map_err(|_| ConfigError::missing("CLOUDINARY_API_SECRET"))?,
            base_url: std::env::var("CLOUDINARY_BASE_URL")
                .unwrap_or_else(|_| "https://api.cloudinary.com/v1_1".to_string()),
            request_timeout_secs: std::env::var("CLOUDINARY_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Successful upload response (subset of the fields Cloudinary returns)
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

/// Cloudinary-backed [`ImageStore`].
pub struct CloudinaryStore {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryStore {
    /// Create a new Cloudinary store
    pub fn new(config: CloudinaryConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::Storage {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        info!(cloud_name = %config.cloud_name, "Cloudinary store initialized");
        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, DomainError> {
        let config = CloudinaryConfig::from_env().map_err(|e| DomainError::Internal {
            message: e.to_string(),
        })?;
        Self::new(config)
    }

    /// Sign a request: SHA-1 hex of `params` + api secret. `params` must be
    /// the `&`-joined, alphabetically sorted parameter string, excluding
    /// `file`, `api_key`, and the signature itself.
    fn sign(&self, params: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(params.as_bytes());
        hasher.update(self.config.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{}/image/{action}",
            self.config.base_url, self.config.cloud_name
        )
    }
}

#[async_trait]
impl ImageStore for CloudinaryStore {
    async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<StoredImage, DomainError> {
        let timestamp = Utc::now().timestamp();
        let signature = self.sign(&format!("folder={folder}&timestamp={timestamp}"));

        let part = reqwest::multipart::Part::bytes(bytes).file_name("image");
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("folder", folder.to_string())
            .text("signature", signature);

        debug!(folder, "uploading image to Cloudinary");

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Image upload request failed: {e}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, "Cloudinary upload rejected");
            return Err(DomainError::Storage {
                message: format!("Image upload failed with status {status}: {body}"),
            });
        }

        let uploaded: UploadResponse =
            response.json().await.map_err(|e| DomainError::Storage {
                message: format!("Malformed upload response: {e}"),
            })?;

        Ok(StoredImage {
            url: uploaded.secure_url,
            storage_ref: uploaded.public_id,
        })
    }

    async fn delete(&self, storage_ref: &str) -> Result<(), DomainError> {
        let timestamp = Utc::now().timestamp();
        let signature = self.sign(&format!("public_id={storage_ref}&timestamp={timestamp}"));

        let form = reqwest::multipart::Form::new()
            .text("public_id", storage_ref.to_string())
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature);

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("Image delete request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(DomainError::Storage {
                message: format!("Image delete failed with status {}", response.status()),
            });
        }

        let destroyed: DestroyResponse =
            response.json().await.map_err(|e| DomainError::Storage {
                message: format!("Malformed delete response: {e}"),
            })?;

        // Cloudinary reports "not found" with a 200; treat it as success
        // since the end state is the same.
        if destroyed.result != "ok" && destroyed.result != "not found" {
            return Err(DomainError::Storage {
                message: format!("Image delete rejected: {}", destroyed.result),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CloudinaryStore {
        CloudinaryStore::new(CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "abcd".to_string(),
            base_url: "https://api.cloudinary.com/v1_1".to_string(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_signature_is_hex_sha1_over_params_and_secret() {
        let store = store();
        let signature = store.sign("folder=uploads&timestamp=1315060510");

        let mut hasher = Sha1::new();
        hasher.update(b"folder=uploads&timestamp=1315060510abcd");
        assert_eq!(signature, hex::encode(hasher.finalize()));
        assert_eq!(signature.len(), 40);
    }

    #[test]
    fn test_endpoint_includes_cloud_name_and_action() {
        let store = store();
        assert_eq!(
            store.endpoint("upload"),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
        assert_eq!(
            store.endpoint("destroy"),
            "https://api.cloudinary.com/v1_1/demo/image/destroy"
        );
    }
}
