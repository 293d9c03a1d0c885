//! Route 53 Import Core Library
//!
//! Core pipeline of the bulk DNS record import:
//! - Row parsing and grouping by domain
//! - Hosted zone resolution
//! - Atomic per-domain change batch commits
//! - The import entrypoint and its result contract
//!
//! Collaborators (the CSV object store and the DNS hosting API) are consumed
//! through traits, so the pipeline runs the same against AWS, the local
//! filesystem or in-memory mocks.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ErrorReport, ImportError, ImportResult, RowError, SourceError};
pub use services::{ImportService, ServiceContext};
pub use traits::RowSource;
