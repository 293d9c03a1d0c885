//! Amazon Route 53 Provider

mod error;
mod http;
mod provider;
/// Route 53 API-specific XML request/response types.
pub(crate) mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::types::AwsCredentials;

/// Route 53 API host (global endpoint).
pub(crate) const ROUTE53_HOST: &str = "route53.amazonaws.com";
/// Route 53 is signed against `us-east-1` regardless of where the caller runs.
pub(crate) const ROUTE53_SIGNING_REGION: &str = "us-east-1";
/// SigV4 service name.
pub(crate) const ROUTE53_SERVICE: &str = "route53";
/// API version path prefix.
pub(crate) const API_VERSION: &str = "2013-04-01";
/// XML namespace of the API version.
pub(crate) const XML_NAMESPACE: &str = "https://route53.amazonaws.com/doc/2013-04-01/";
/// Upper bound of `maxitems` accepted by `ListHostedZonesByName`.
pub(crate) const MAX_LIST_ITEMS: u32 = 100;

/// Amazon Route 53 provider implementation.
///
/// Authenticates via AWS Signature Version 4.
///
/// # Construction
///
/// ```rust,no_run
/// use route53_import_provider::{AwsCredentials, Route53Provider};
///
/// let provider = Route53Provider::new(AwsCredentials::new(
///     "your-access-key-id",
///     "your-secret-access-key",
///     None,
/// ));
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) credentials: AwsCredentials,
    pub(crate) endpoint: String,
}

/// Builder for [`Route53Provider`].
pub struct Route53ProviderBuilder {
    credentials: AwsCredentials,
    endpoint: String,
}

impl Route53ProviderBuilder {
    fn new(credentials: AwsCredentials) -> Self {
        Self {
            credentials,
            endpoint: format!("https://{ROUTE53_HOST}"),
        }
    }

    /// Override the API endpoint (e.g. a local emulator). Must not end with `/`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the [`Route53Provider`] instance.
    pub fn build(self) -> Route53Provider {
        Route53Provider {
            client: create_http_client(),
            credentials: self.credentials,
            endpoint: self.endpoint,
        }
    }
}

impl Route53Provider {
    /// Creates a new Route 53 provider against the public endpoint.
    pub fn new(credentials: AwsCredentials) -> Self {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: AwsCredentials) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(credentials)
    }

    /// Host header value derived from the endpoint.
    pub(crate) fn host(&self) -> &str {
        self.endpoint
            .split_once("://")
            .map_or(self.endpoint.as_str(), |(_, rest)| rest)
    }
}
