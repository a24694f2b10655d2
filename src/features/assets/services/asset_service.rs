use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{debug, warn};

use crate::modules::remote::RemoteStore;

/// Turns an uploaded binary (location photo or map background) into a
/// durable reference string.
///
/// The preferred outcome is the remote-assigned URL; when the upload fails
/// for any reason the bytes are embedded as a base64 data URL instead. Both
/// forms are valid image references to the rest of the system — they differ
/// only in size and durability, and callers must not assume one over the
/// other.
pub struct AssetIngestor {
    remote: Arc<dyn RemoteStore>,
}

impl AssetIngestor {
    pub fn new(remote: Arc<dyn RemoteStore>) -> Self {
        Self { remote }
    }

    pub async fn ingest(&self, bytes: Vec<u8>, filename: &str, content_type: &str) -> String {
        match self
            .remote
            .upload(bytes.clone(), filename, content_type)
            .await
        {
            Ok(url) => {
                debug!("Uploaded '{}' to remote store: {}", filename, url);
                url
            }
            Err(e) => {
                warn!("Upload of '{}' failed ({}), embedding inline", filename, e);
                Self::embed(&bytes, content_type)
            }
        }
    }

    /// Self-contained inline encoding, usable as an image reference without
    /// any further network access.
    fn embed(bytes: &[u8], content_type: &str) -> String {
        format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::core::error::{AppError, Result};
    use crate::features::locations::Location;

    struct UploadStub {
        url: Option<String>,
    }

    #[async_trait]
    impl RemoteStore for UploadStub {
        async fn fetch_locations(&self) -> Result<Vec<Location>> {
            Err(AppError::RemoteUnavailable("unused".to_string()))
        }

        async fn save_locations(&self, _: &[Location]) -> Result<()> {
            Err(AppError::RemoteUnavailable("unused".to_string()))
        }

        async fn upload(&self, _: Vec<u8>, _: &str, _: &str) -> Result<String> {
            self.url
                .clone()
                .ok_or_else(|| AppError::RemoteUnavailable("upload refused".to_string()))
        }
    }

    #[tokio::test]
    async fn returns_remote_url_on_success() {
        let ingestor = AssetIngestor::new(Arc::new(UploadStub {
            url: Some("/photos/stanek.jpg".to_string()),
        }));

        let reference = ingestor
            .ingest(vec![1, 2, 3], "stanek.jpg", "image/jpeg")
            .await;
        assert_eq!(reference, "/photos/stanek.jpg");
    }

    #[tokio::test]
    async fn falls_back_to_data_url_and_never_fails() {
        let ingestor = AssetIngestor::new(Arc::new(UploadStub { url: None }));

        let reference = ingestor
            .ingest(vec![0xFF, 0xD8, 0xFF], "photo.jpg", "image/jpeg")
            .await;

        assert!(reference.starts_with("data:image/jpeg;base64,"));
        assert!(reference.len() > "data:image/jpeg;base64,".len());
    }

    #[test]
    fn embedded_representation_round_trips() {
        let bytes = b"\x89PNG\r\n";
        let reference = AssetIngestor::embed(bytes, "image/png");

        let encoded = reference.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), bytes);
    }
}
