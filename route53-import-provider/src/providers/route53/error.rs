//! Route 53 error mapping
//!
//! Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
//!
//! ## Error code groups
//!
//! - **Authentication**: `InvalidClientTokenId`, `SignatureDoesNotMatch`, `IncompleteSignature`,
//!   `MissingAuthenticationToken`, `ExpiredToken`
//! - **Permission denied**: `AccessDenied`, `AccessDeniedException`
//! - **Throttling**: `Throttling`, `ThrottlingException`, `PriorRequestNotComplete`
//! - **Hosted zone**: `NoSuchHostedZone`
//! - **Change batch**: `InvalidChangeBatch`
//! - **Parameters**: `InvalidInput`, `InvalidDomainName`, `InvalidParameterValue`
//! - **Service side**: `ServiceUnavailable`, `InternalFailure`
//!
//! Anything else falls back to `Unknown`.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;

impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "ExpiredToken",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 权限拒绝 ============
            Some("AccessDenied" | "AccessDeniedException") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 频率限制 ============
            Some("Throttling" | "ThrottlingException" | "PriorRequestNotComplete") => {
                ProviderError::Throttled {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ Hosted zone 不存在 ============
            Some("NoSuchHostedZone") => ProviderError::HostedZoneNotFound {
                provider: self.provider_name().to_string(),
                zone_id: context.zone_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ Change batch 被拒绝 ============
            Some("InvalidChangeBatch") => ProviderError::InvalidChangeBatch {
                provider: self.provider_name().to_string(),
                messages: vec![raw.message],
            },

            // ============ 参数无效 - 域名 ============
            Some("InvalidDomainName") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "dnsname".to_string(),
                detail: match context.domain {
                    Some(domain) => format!("{domain}: {}", raw.message),
                    None => raw.message,
                },
            },

            // ============ 参数无效 - 其他 ============
            Some("InvalidInput" | "InvalidParameterValue") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "input".to_string(),
                detail: raw.message,
            },

            // ============ 服务端错误 ============
            Some("ServiceUnavailable" | "InternalFailure") => ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: raw.message,
            },

            // ============ 其他错误 fallback ============
            _ => self.unknown_error(raw),
        }
    }
}
