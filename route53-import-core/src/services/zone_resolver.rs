//! Hosted zone resolution

use std::sync::Arc;

use crate::error::{ImportError, ImportResult};
use crate::services::ServiceContext;
use crate::types::{HostedZone, ZoneVisibility};

/// Strip everything up to and including `hostedzone/` from a zone id.
///
/// Ids without the prefix are returned unchanged.
pub fn strip_zone_prefix(zone_id: &str) -> &str {
    zone_id
        .split_once("hostedzone/")
        .map_or(zone_id, |(_, bare)| bare)
}

/// Pick the single candidate named `domain.` with the requested visibility.
pub fn select_zone<'a>(
    domain: &str,
    visibility: ZoneVisibility,
    candidates: &'a [HostedZone],
) -> ImportResult<&'a HostedZone> {
    let fqdn = format!("{domain}.");
    let mut matches = candidates.iter().filter(|zone| {
        zone.name == fqdn && ZoneVisibility::from_private_flag(zone.private_zone) == visibility
    });

    match (matches.next(), matches.next()) {
        (Some(zone), None) => Ok(zone),
        (Some(_), Some(_)) => Err(ImportError::AmbiguousZone {
            domain: domain.to_string(),
        }),
        (None, _) => Err(ImportError::ZoneNotFound {
            domain: domain.to_string(),
        }),
    }
}

/// Zone 解析服务
pub struct ZoneResolver {
    ctx: Arc<ServiceContext>,
}

impl ZoneResolver {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Resolve `domain` to the bare id of its hosted zone.
    pub async fn resolve(&self, domain: &str, visibility: ZoneVisibility) -> ImportResult<String> {
        let candidates = self
            .ctx
            .hosted_zone_api
            .list_hosted_zones_by_name(domain, self.ctx.settings.zone_lookup_limit)
            .await
            .map_err(|source| {
                if source.is_expected() {
                    log::warn!("Hosted zone lookup for {domain} failed: {source}");
                } else {
                    log::error!("Hosted zone lookup for {domain} failed: {source}");
                }
                ImportError::ZoneQueryFailed {
                    domain: domain.to_string(),
                    source,
                }
            })?;

        let zone = select_zone(domain, visibility, &candidates)?;
        let zone_id = strip_zone_prefix(&zone.id).to_string();
        log::debug!("Resolved {domain} ({visibility}) to hosted zone {zone_id}");
        Ok(zone_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, zone, MockHostedZoneApi};
    use route53_import_provider::ProviderError;

    #[test]
    fn strips_hostedzone_prefix() {
        assert_eq!(strip_zone_prefix("/hostedzone/Z123"), "Z123");
        assert_eq!(strip_zone_prefix("hostedzone/Z123"), "Z123");
        assert_eq!(strip_zone_prefix("Z123"), "Z123");
    }

    #[test]
    fn two_matching_candidates_are_ambiguous() {
        let candidates = vec![
            zone("/hostedzone/Z1", "example.com.", false),
            zone("/hostedzone/Z2", "example.com.", false),
        ];
        let err = select_zone("example.com", ZoneVisibility::Public, &candidates).unwrap_err();
        assert!(
            matches!(&err, ImportError::AmbiguousZone { domain } if domain == "example.com"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn visibility_disambiguates() {
        let candidates = vec![
            zone("/hostedzone/Z1", "example.com.", false),
            zone("/hostedzone/Z2", "example.com.", true),
        ];
        let private = select_zone("example.com", ZoneVisibility::Private, &candidates).unwrap();
        assert_eq!(private.id, "/hostedzone/Z2");
        let public = select_zone("example.com", ZoneVisibility::Public, &candidates).unwrap();
        assert_eq!(public.id, "/hostedzone/Z1");
    }

    #[test]
    fn no_candidate_is_not_found() {
        let err = select_zone("example.com", ZoneVisibility::Public, &[]).unwrap_err();
        assert!(matches!(err, ImportError::ZoneNotFound { .. }));

        // Lexicographic neighbours are not matches.
        let candidates = vec![
            zone("/hostedzone/Z1", "example.com.au.", false),
            zone("/hostedzone/Z2", "sub.example.com.", false),
        ];
        let err = select_zone("example.com", ZoneVisibility::Public, &candidates).unwrap_err();
        assert!(matches!(err, ImportError::ZoneNotFound { .. }));
    }

    #[test]
    fn wrong_visibility_is_not_found() {
        let candidates = vec![zone("/hostedzone/Z1", "example.com.", true)];
        let err = select_zone("example.com", ZoneVisibility::Public, &candidates).unwrap_err();
        assert!(matches!(err, ImportError::ZoneNotFound { .. }));
    }

    #[tokio::test]
    async fn resolve_queries_with_limit_and_strips_id() {
        let api = MockHostedZoneApi::with_zones(vec![zone("/hostedzone/Z123", "example.com.", false)]);
        let (ctx, _, api) = create_test_context(api);
        let resolver = ZoneResolver::new(ctx);

        let id = resolver
            .resolve("example.com", ZoneVisibility::Public)
            .await
            .unwrap();
        assert_eq!(id, "Z123");
        assert_eq!(api.list_calls().await, vec![("example.com".to_string(), 2)]);
    }

    #[tokio::test]
    async fn query_failure_keeps_domain() {
        let api = MockHostedZoneApi::new();
        api.set_list_error(Some(ProviderError::NetworkError {
            provider: "route53".to_string(),
            detail: "connection reset".to_string(),
        }))
        .await;
        let (ctx, _, _) = create_test_context(api);

        let err = ZoneResolver::new(ctx)
            .resolve("example.com", ZoneVisibility::Public)
            .await
            .unwrap_err();
        assert!(
            matches!(&err, ImportError::ZoneQueryFailed { domain, .. } if domain == "example.com"),
            "unexpected error: {err:?}"
        );
    }
}
