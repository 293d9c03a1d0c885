//! S3 `ObjectStorage` trait implementation

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::{sha256_hex, uri_encode_path};
use crate::providers::sigv4::{SigV4Signer, SigningRequest, amz_date};
use crate::traits::{ErrorContext, ObjectStorage, ProviderErrorMapper, RawApiError};

use super::error::S3ErrorBody;
use super::{S3_SERVICE, S3Provider};

impl S3Provider {
    /// 统一处理 S3 响应错误
    fn handle_response_error(&self, status: u16, body: &[u8], ctx: ErrorContext) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        let text = String::from_utf8_lossy(body);
        if let Ok(error) = quick_xml::de::from_str::<S3ErrorBody>(&text) {
            return Err(self.map_error(RawApiError::with_code(error.code, error.message), ctx));
        }

        // HEAD-style responses and some 404s come without a body
        if status == 404 {
            return Err(self.map_error(
                RawApiError::with_code("NoSuchKey", format!("HTTP {status}")),
                ctx,
            ));
        }

        Err(self.unknown_error(RawApiError::new(format!("HTTP {status}: {text}"))))
    }
}

#[async_trait]
impl ObjectStorage for S3Provider {
    fn id(&self) -> &'static str {
        "s3"
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        if bucket.is_empty() || key.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "bucket/key".to_string(),
                detail: "bucket and key must not be empty".to_string(),
            });
        }

        let host = self.bucket_host(bucket);
        let path = uri_encode_path(&format!("/{}", key.trim_start_matches('/')));
        let timestamp = amz_date(Utc::now());
        let payload_hash = sha256_hex(b"");

        let mut headers = vec![
            ("Host".to_string(), host.clone()),
            ("X-Amz-Date".to_string(), timestamp.clone()),
            ("X-Amz-Content-Sha256".to_string(), payload_hash.clone()),
        ];
        if let Some(token) = &self.credentials.session_token {
            headers.push(("X-Amz-Security-Token".to_string(), token.clone()));
        }

        let signer = SigV4Signer {
            credentials: &self.credentials,
            region: &self.region,
            service: S3_SERVICE,
        };
        let authorization = signer.authorization(
            &SigningRequest {
                method: "GET",
                canonical_uri: &path,
                query: &[],
                headers: &headers,
                payload_hash: &payload_hash,
            },
            &timestamp,
        );

        let url = format!("https://{host}{path}");
        let mut request = self.client.get(&url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let request = request.header("Authorization", authorization);

        let (status, body) =
            HttpUtils::execute_request_raw(request, self.provider_name(), "GET", &url).await?;

        self.handle_response_error(
            status,
            &body,
            ErrorContext {
                bucket: Some(bucket.to_string()),
                key: Some(key.to_string()),
                ..Default::default()
            },
        )?;

        log::info!("[s3] fetched s3://{bucket}/{key} ({} bytes)", body.len());
        Ok(body)
    }
}
