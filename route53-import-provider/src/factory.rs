//! Client factory functions.

use std::sync::Arc;

#[cfg(feature = "route53")]
use crate::providers::Route53Provider;
#[cfg(feature = "s3")]
use crate::providers::S3Provider;
#[cfg(feature = "route53")]
use crate::traits::HostedZoneApi;
#[cfg(feature = "s3")]
use crate::traits::ObjectStorage;
use crate::types::AwsCredentials;

/// Creates a [`HostedZoneApi`] backed by Amazon Route 53.
///
/// The returned client is wrapped in `Arc<dyn HostedZoneApi>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use route53_import_provider::{create_hosted_zone_api, AwsCredentials};
///
/// let api = create_hosted_zone_api(AwsCredentials::new("AKID", "secret", None));
/// assert_eq!(api.id(), "route53");
/// ```
#[cfg(feature = "route53")]
pub fn create_hosted_zone_api(credentials: AwsCredentials) -> Arc<dyn HostedZoneApi> {
    Arc::new(Route53Provider::new(credentials))
}

/// Creates an [`ObjectStorage`] backed by Amazon S3 in `region`.
#[cfg(feature = "s3")]
pub fn create_object_storage(
    credentials: AwsCredentials,
    region: impl Into<String>,
) -> Arc<dyn ObjectStorage> {
    Arc::new(S3Provider::new(credentials, region))
}
