//! # route53-import-provider
//!
//! Thin, dependency-light clients for the two AWS services the bulk import
//! pipeline talks to.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Capability | Auth Method |
//! |----------|-------------|------------|-------------|
//! | [Amazon Route 53](https://aws.amazon.com/route53/) | `route53` | [`HostedZoneApi`] | AWS SigV4 |
//! | [Amazon S3](https://aws.amazon.com/s3/) | `s3` | [`ObjectStorage`] | AWS SigV4 |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)*: Enable both providers.
//! - **`route53`**: Enable only the Route 53 client.
//! - **`s3`**: Enable only the S3 client.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static builds and Lambda-style runtimes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use route53_import_provider::{
//!     create_hosted_zone_api, AwsCredentials, Change, ResourceRecord, ResourceRecordSet,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = AwsCredentials::new("AKIDEXAMPLE", "secret", None);
//!     let api = create_hosted_zone_api(credentials);
//!
//!     // 1. Find the hosted zone for a domain
//!     let zones = api.list_hosted_zones_by_name("example.com", 2).await?;
//!     let zone = &zones[0];
//!
//!     // 2. Submit a change batch
//!     let change = Change {
//!         action: "UPSERT".to_string(),
//!         resource_record_set: ResourceRecordSet {
//!             name: "www.example.com".to_string(),
//!             record_type: "A".to_string(),
//!             ttl: 300,
//!             resource_records: vec![ResourceRecord {
//!                 value: vec!["192.0.2.1".to_string()],
//!             }],
//!         },
//!     };
//!     let info = api.change_resource_record_sets(&zone.id, &[change]).await?;
//!     println!("submitted {} ({})", info.id, info.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). AWS error
//! codes are mapped onto structured variants, for example:
//!
//! - [`ProviderError::InvalidCredentials`]: signature or key rejected
//! - [`ProviderError::HostedZoneNotFound`]: `NoSuchHostedZone`
//! - [`ProviderError::InvalidChangeBatch`]: Route 53 refused the batch
//! - [`ProviderError::Throttled`]: request rate exceeded
//!
//! Requests are never retried by this crate.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
#[cfg(feature = "route53")]
pub use factory::create_hosted_zone_api;
#[cfg(feature = "s3")]
pub use factory::create_object_storage;

// Re-export public traits only (internal traits are not exported)
pub use traits::{HostedZoneApi, ObjectStorage};

// Re-export types
pub use types::{AwsCredentials, Change, ChangeInfo, HostedZone, ResourceRecord, ResourceRecordSet};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "route53")]
pub use providers::{Route53Provider, Route53ProviderBuilder};

#[cfg(feature = "s3")]
pub use providers::S3Provider;
