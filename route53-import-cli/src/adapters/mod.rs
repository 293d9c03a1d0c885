//! Row source adapters for the CLI
//!
//! Bridge the import core's [`RowSource`](route53_import_core::RowSource) trait
//! to where the CSV actually lives:
//! - **`ObjectStorageRowSource`**: reads the object from S3 through the provider crate.
//! - **`LocalFileRowSource`**: reads `<root>/<container>/<key>` from the local filesystem.

mod local_file;
mod object_storage;

pub use local_file::LocalFileRowSource;
pub use object_storage::ObjectStorageRowSource;
