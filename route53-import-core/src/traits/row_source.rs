//! Row source abstract Trait

use async_trait::async_trait;

use crate::error::SourceError;
use crate::types::ObjectLocator;

/// Row Source Trait
///
/// Fetches the raw bytes of a tabular input document. Decoding into rows
/// happens in the pipeline, so implementations only move bytes.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetch the whole document
    ///
    /// # Arguments
    /// * `locator` - container and key of the document
    async fn fetch(&self, locator: &ObjectLocator) -> Result<Vec<u8>, SourceError>;
}
