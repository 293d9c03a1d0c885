//! Atomic per-domain commit

use std::sync::Arc;

use crate::error::{ImportError, ImportResult};
use crate::services::ServiceContext;
use crate::types::{Change, ChangeRequest};

/// 变更批次提交服务
pub struct BatchCommitter {
    ctx: Arc<ServiceContext>,
}

impl BatchCommitter {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Submit all `requests` of `domain` as one change batch against `zone_id`.
    ///
    /// After the API accepts the batch the configured settle delay is awaited.
    /// Returns the change id.
    pub async fn commit(
        &self,
        domain: &str,
        zone_id: &str,
        requests: &[ChangeRequest],
    ) -> ImportResult<String> {
        let changes: Vec<Change> = requests
            .iter()
            .map(ChangeRequest::to_change_batch_entry)
            .collect();

        log::info!(
            "Committing {} change(s) for {domain} to hosted zone {zone_id}",
            changes.len()
        );

        let info = self
            .ctx
            .hosted_zone_api
            .change_resource_record_sets(zone_id, &changes)
            .await
            .map_err(|source| {
                if source.is_expected() {
                    log::warn!("Change batch for {domain} rejected: {source}");
                } else {
                    log::error!("Change batch for {domain} failed: {source}");
                }
                ImportError::CommitFailed {
                    domain: domain.to_string(),
                    source,
                }
            })?;

        log::info!("Change batch for {domain} accepted: {} ({})", info.id, info.status);

        tokio::time::sleep(self.ctx.settings.settle_delay).await;
        Ok(info.id)
    }
}
