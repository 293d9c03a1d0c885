//! AWS service clients

/// Shared utilities used by provider implementations.
pub mod common;
pub(crate) mod sigv4;

#[cfg(feature = "route53")]
mod route53;
#[cfg(feature = "s3")]
mod s3;

#[cfg(feature = "route53")]
pub use route53::{Route53Provider, Route53ProviderBuilder};
#[cfg(feature = "s3")]
pub use s3::S3Provider;
