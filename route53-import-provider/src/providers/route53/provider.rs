//! Route 53 `HostedZoneApi` trait implementation

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::uri_encode;
use crate::traits::{ErrorContext, HostedZoneApi, ProviderErrorMapper};
use crate::types::{Change, ChangeInfo, HostedZone};

use super::types::{
    CHANGE_REQUEST_ROOT, ChangeResourceRecordSetsRequest, ChangeResourceRecordSetsResponse,
    ListHostedZonesByNameResponse,
};
use super::{API_VERSION, MAX_LIST_ITEMS, Route53Provider};

impl Route53Provider {
    /// Bare zone id: accepts `Z…`, `hostedzone/Z…` and `/hostedzone/Z…`.
    pub(crate) fn bare_zone_id(zone_id: &str) -> &str {
        zone_id.trim_start_matches('/').trim_start_matches("hostedzone/")
    }
}

#[async_trait]
impl HostedZoneApi for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    async fn list_hosted_zones_by_name(
        &self,
        dns_name: &str,
        max_items: u32,
    ) -> Result<Vec<HostedZone>> {
        if max_items == 0 || max_items > MAX_LIST_ITEMS {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "maxitems".to_string(),
                detail: format!("must be between 1 and {MAX_LIST_ITEMS}, got {max_items}"),
            });
        }

        let path = format!("/{API_VERSION}/hostedzonesbyname");
        let max_items = max_items.to_string();
        let query = [("dnsname", dns_name), ("maxitems", max_items.as_str())];

        let response: ListHostedZonesByNameResponse = self
            .get(
                &path,
                &query,
                ErrorContext {
                    domain: Some(dns_name.to_string()),
                    ..Default::default()
                },
            )
            .await?;

        log::debug!(
            "[route53] hostedzonesbyname {:?}: {} zone(s), truncated={:?}, maxitems={:?}",
            response.dns_name,
            response.hosted_zones.hosted_zone.len(),
            response.is_truncated,
            response.max_items
        );

        Ok(response
            .hosted_zones
            .hosted_zone
            .into_iter()
            .map(HostedZone::from)
            .collect())
    }

    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        changes: &[Change],
    ) -> Result<ChangeInfo> {
        if changes.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "changes".to_string(),
                detail: "a change batch needs at least one change".to_string(),
            });
        }

        let bare_id = Self::bare_zone_id(zone_id);
        let path = format!("/{API_VERSION}/hostedzone/{}/rrset", uri_encode(bare_id));
        let body = ChangeResourceRecordSetsRequest::new(changes);

        let response: ChangeResourceRecordSetsResponse = self
            .post(
                &path,
                CHANGE_REQUEST_ROOT,
                &body,
                ErrorContext {
                    zone_id: Some(bare_id.to_string()),
                    ..Default::default()
                },
            )
            .await?;

        log::info!(
            "[route53] submitted {} change(s) to {bare_id}: {} {}",
            changes.len(),
            response.change_info.id,
            response.change_info.status
        );

        Ok(response.change_info.into())
    }
}
