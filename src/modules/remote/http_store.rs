//! Client for the passive remote JSON store.
//!
//! The server holds one JSON array of locations and an upload endpoint;
//! there is no server-side validation and no per-record API. Reads are
//! time-bounded, writes replace the whole collection (last writer wins).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::error::{AppError, Result};
use crate::features::locations::Location;

/// Seam between the synchronization gateway and the network. Every failure
/// is reported as `AppError::RemoteUnavailable`; the gateway decides how to
/// degrade.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches the full location collection.
    async fn fetch_locations(&self) -> Result<Vec<Location>>;

    /// Replaces the full location collection.
    async fn save_locations(&self, locations: &[Location]) -> Result<()>;

    /// Uploads a binary file, returning the remote-assigned URL.
    async fn upload(&self, bytes: Vec<u8>, filename: &str, content_type: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    url: Option<String>,
}

pub struct HttpRemoteStore {
    client: reqwest::Client,
    base_url: String,
    /// Bound on reads; writes are deliberately unbounded.
    read_timeout: Duration,
}

impl HttpRemoteStore {
    pub fn new(base_url: &str, read_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(read_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            read_timeout,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn fetch_locations(&self) -> Result<Vec<Location>> {
        let url = self.endpoint("locations");
        debug!("Fetching locations from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.read_timeout)
            .send()
            .await
            .map_err(|e| {
                warn!("Remote fetch failed: {}", e);
                AppError::RemoteUnavailable(format!("Fetch failed: {}", e))
            })?;

        if !response.status().is_success() {
            warn!("Remote store returned status: {}", response.status());
            return Err(AppError::RemoteUnavailable(format!(
                "Fetch returned status {}",
                response.status()
            )));
        }

        response.json::<Vec<Location>>().await.map_err(|e| {
            warn!("Failed to parse remote locations: {}", e);
            AppError::RemoteUnavailable(format!("Malformed locations payload: {}", e))
        })
    }

    async fn save_locations(&self, locations: &[Location]) -> Result<()> {
        let url = self.endpoint("locations");
        debug!("Saving {} locations to {}", locations.len(), url);

        let response = self
            .client
            .post(&url)
            .json(&locations)
            .send()
            .await
            .map_err(|e| AppError::RemoteUnavailable(format!("Save failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::RemoteUnavailable(format!(
                "Save returned status {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn upload(&self, bytes: Vec<u8>, filename: &str, content_type: &str) -> Result<String> {
        let url = self.endpoint("upload");
        debug!("Uploading {} ({} bytes) to {}", filename, bytes.len(), url);

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| AppError::Validation(format!("Invalid content type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::RemoteUnavailable(format!("Upload failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::RemoteUnavailable(format!(
                "Upload returned status {}",
                response.status()
            )));
        }

        let parsed: UploadResponse = response.json().await.map_err(|e| {
            AppError::RemoteUnavailable(format!("Malformed upload response: {}", e))
        })?;

        match parsed {
            UploadResponse {
                success: true,
                url: Some(remote_url),
            } => Ok(remote_url),
            _ => Err(AppError::RemoteUnavailable(
                "Upload response missing success/url".to_string(),
            )),
        }
    }
}
