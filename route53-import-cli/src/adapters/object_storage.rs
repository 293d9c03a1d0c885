//! S3-backed row source

use std::sync::Arc;

use async_trait::async_trait;
use route53_import_core::error::SourceError;
use route53_import_core::types::ObjectLocator;
use route53_import_core::RowSource;
use route53_import_provider::ObjectStorage;

/// Row source that downloads the CSV object from object storage.
pub struct ObjectStorageRowSource {
    storage: Arc<dyn ObjectStorage>,
}

impl ObjectStorageRowSource {
    #[must_use]
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl RowSource for ObjectStorageRowSource {
    async fn fetch(&self, locator: &ObjectLocator) -> Result<Vec<u8>, SourceError> {
        tracing::debug!("[{}] Fetching {}", self.storage.id(), locator);
        let body = self
            .storage
            .get_object(&locator.container, &locator.key)
            .await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use route53_import_provider::{ProviderError, Result as ProviderResult};
    use tokio::sync::RwLock;

    struct MockStorage {
        requests: RwLock<Vec<(String, String)>>,
        body: Option<Vec<u8>>,
    }

    #[async_trait]
    impl ObjectStorage for MockStorage {
        fn id(&self) -> &'static str {
            "mock"
        }

        async fn get_object(&self, bucket: &str, key: &str) -> ProviderResult<Vec<u8>> {
            self.requests
                .write()
                .await
                .push((bucket.to_string(), key.to_string()));
            self.body.clone().ok_or_else(|| ProviderError::ObjectNotFound {
                provider: "mock".to_string(),
                bucket: bucket.to_string(),
                key: key.to_string(),
                raw_message: None,
            })
        }
    }

    #[tokio::test]
    async fn fetch_reads_bucket_and_key() {
        let storage = Arc::new(MockStorage {
            requests: RwLock::new(Vec::new()),
            body: Some(b"action\nUPSERT\n".to_vec()),
        });
        let source = ObjectStorageRowSource::new(storage.clone());

        let body = source
            .fetch(&ObjectLocator::new("imports", "2024/batch.csv"))
            .await
            .unwrap();
        assert_eq!(body, b"action\nUPSERT\n");
        assert_eq!(
            *storage.requests.read().await,
            vec![("imports".to_string(), "2024/batch.csv".to_string())]
        );
    }

    #[tokio::test]
    async fn storage_errors_are_kept() {
        let storage = Arc::new(MockStorage {
            requests: RwLock::new(Vec::new()),
            body: None,
        });
        let source = ObjectStorageRowSource::new(storage);

        let err = source
            .fetch(&ObjectLocator::new("imports", "missing.csv"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SourceError::Provider(ProviderError::ObjectNotFound { .. })
        ));
        assert!(err.is_expected());
    }
}
