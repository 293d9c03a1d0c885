//! S3 error mapping
//!
//! Reference: <https://docs.aws.amazon.com/AmazonS3/latest/API/ErrorResponses.html>

use serde::Deserialize;

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::S3Provider;

/// S3 error body (`<Error><Code/><Message/></Error>`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct S3ErrorBody {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ProviderErrorMapper for S3Provider {
    fn provider_name(&self) -> &'static str {
        "s3"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some("NoSuchKey" | "NoSuchBucket") => ProviderError::ObjectNotFound {
                provider: self.provider_name().to_string(),
                bucket: context.bucket.unwrap_or_default(),
                key: context.key.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            Some("AccessDenied" | "AllAccessDisabled") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some(
                "InvalidAccessKeyId"
                | "SignatureDoesNotMatch"
                | "ExpiredToken"
                | "InvalidToken"
                | "TokenRefreshRequired",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("SlowDown") => ProviderError::Throttled {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            Some("InvalidBucketName" | "KeyTooLongError") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "bucket/key".to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}
