//! Import pipeline orchestration

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;

use crate::error::{ErrorReport, ImportError, ImportResult};
use crate::services::{group_by_domain, BatchCommitter, ServiceContext, ZoneResolver};
use crate::types::{correlation_id, ImportEvent, ObjectLocator, PipelineResult};
use crate::utils::csv_rows::{parse_rows, RawRow};

/// 导入服务
///
/// Drives fetch, grouping, then per domain zone resolution and commit, strictly
/// in sequence. The first failure stops the run; batches committed before it
/// stay committed.
pub struct ImportService {
    ctx: Arc<ServiceContext>,
    resolver: ZoneResolver,
    committer: BatchCommitter,
}

impl ImportService {
    /// 创建导入服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            resolver: ZoneResolver::new(Arc::clone(&ctx)),
            committer: BatchCommitter::new(Arc::clone(&ctx)),
            ctx,
        }
    }

    /// Fetch and decode the CSV document at `locator`.
    pub async fn fetch_rows(&self, locator: &ObjectLocator) -> ImportResult<Vec<RawRow>> {
        let fetch_failed = |source| ImportError::FetchFailed {
            key: locator.key.clone(),
            source,
        };

        let bytes = self
            .ctx
            .row_source
            .fetch(locator)
            .await
            .map_err(fetch_failed)?;
        log::debug!("Fetched {locator} ({} bytes)", bytes.len());

        parse_rows(&bytes).map_err(fetch_failed)
    }

    /// Run the pipeline and return the change id of every committed domain, in order.
    pub async fn run(&self, locator: &ObjectLocator) -> ImportResult<Vec<String>> {
        let rows = self.fetch_rows(locator).await?;
        let group = group_by_domain(&rows)?;

        let mut change_ids = Vec::with_capacity(group.len());
        for (domain, requests) in group.iter() {
            let Some(first) = requests.first() else {
                continue;
            };
            let zone_id = self.resolver.resolve(domain, first.visibility()).await?;
            let change_id = self.committer.commit(domain, &zone_id, requests).await?;
            change_ids.push(change_id);
        }

        Ok(change_ids)
    }

    /// Run the pipeline and fold the outcome into a [`PipelineResult`].
    ///
    /// Never fails: errors and panics raised inside the run become failure results.
    pub async fn process(&self, locator: &ObjectLocator, number: Value) -> PipelineResult {
        log::info!("Starting import of {locator}");

        let outcome = match AssertUnwindSafe(self.run(locator)).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(payload) => Err(ImportError::Internal {
                detail: panic_detail(payload.as_ref()),
            }),
        };

        match outcome {
            Ok(change_ids) => {
                log::info!(
                    "Import of {locator} committed {} batch(es): {}",
                    change_ids.len(),
                    change_ids.join(",")
                );
                PipelineResult::success(number, &change_ids)
            }
            Err(err) => {
                log_failure(locator, &err);
                PipelineResult::failure(number, &err)
            }
        }
    }

    /// Entry point for a raw invocation event.
    pub async fn handle(&self, event: &Value) -> PipelineResult {
        match ImportEvent::from_value(event) {
            Ok(ImportEvent { number, locator }) => self.process(&locator, number).await,
            Err(err) => {
                log::warn!("Rejected invocation event: {}", ErrorReport::from(&err));
                PipelineResult::failure(correlation_id(event), &err)
            }
        }
    }
}

fn log_failure(locator: &ObjectLocator, err: &ImportError) {
    let report = ErrorReport::from(err);
    let cause = std::error::Error::source(err).map(ToString::to_string);
    match (err.is_expected(), cause) {
        (true, Some(cause)) => log::warn!("Import of {locator} failed: {report} ({cause})"),
        (true, None) => log::warn!("Import of {locator} failed: {report}"),
        (false, Some(cause)) => log::error!("Import of {locator} failed: {report} ({cause})"),
        (false, None) => log::error!("Import of {locator} failed: {report} ({err:?})"),
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
