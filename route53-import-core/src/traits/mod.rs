//! Collaborator abstraction trait definition

mod row_source;

pub use row_source::RowSource;

// Re-export provider 库的 trait
pub use route53_import_provider::HostedZoneApi;
