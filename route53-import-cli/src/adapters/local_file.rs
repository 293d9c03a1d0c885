//! Filesystem-backed row source

use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use route53_import_core::error::SourceError;
use route53_import_core::types::ObjectLocator;
use route53_import_core::RowSource;

/// Row source reading `<root>/<container>/<key>`.
///
/// Container and key must be relative paths that stay below `root`.
pub struct LocalFileRowSource {
    root: PathBuf,
}

impl LocalFileRowSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, locator: &ObjectLocator) -> io::Result<PathBuf> {
        for part in [&locator.container, &locator.key] {
            let path = Path::new(part);
            let escapes = part.is_empty()
                || path
                    .components()
                    .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
            if escapes {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("path component {part:?} is not allowed"),
                ));
            }
        }
        Ok(self.root.join(&locator.container).join(&locator.key))
    }
}

#[async_trait]
impl RowSource for LocalFileRowSource {
    async fn fetch(&self, locator: &ObjectLocator) -> Result<Vec<u8>, SourceError> {
        let path = self.resolve(locator)?;
        tracing::debug!("Reading {}", path.display());
        Ok(tokio::fs::read(&path).await?)
    }
}
