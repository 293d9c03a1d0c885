//! Amazon S3 Provider (object download only)

mod error;
mod provider;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::types::AwsCredentials;

/// SigV4 service name.
pub(crate) const S3_SERVICE: &str = "s3";

/// Amazon S3 client able to download whole objects.
///
/// Uses virtual-hosted-style addressing
/// (`https://{bucket}.s3.{region}.amazonaws.com/{key}`).
///
/// ```rust,no_run
/// use route53_import_provider::{AwsCredentials, S3Provider};
///
/// let storage = S3Provider::new(
///     AwsCredentials::new("your-access-key-id", "your-secret-access-key", None),
///     "eu-west-1",
/// );
/// ```
pub struct S3Provider {
    pub(crate) client: Client,
    pub(crate) credentials: AwsCredentials,
    pub(crate) region: String,
}

impl S3Provider {
    /// Creates a new S3 client for buckets in `region`.
    pub fn new(credentials: AwsCredentials, region: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            credentials,
            region: region.into(),
        }
    }

    /// Host of `bucket` in the configured region.
    pub(crate) fn bucket_host(&self, bucket: &str) -> String {
        format!("{bucket}.s3.{}.amazonaws.com", self.region)
    }
}
