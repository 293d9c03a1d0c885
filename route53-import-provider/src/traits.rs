use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{Change, ChangeInfo, HostedZone};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// AWS 错误码（如 `NoSuchHostedZone`）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Hosted zone ID（用于 `HostedZoneNotFound`）
    pub zone_id: Option<String>,
    /// 域名（用于 `InvalidParameter`）
    pub domain: Option<String>,
    /// S3 bucket（用于 `ObjectNotFound`）
    pub bucket: Option<String>,
    /// S3 object key（用于 `ObjectNotFound`）
    pub key: Option<String>,
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Hosted zone capabilities of a DNS hosting API.
#[async_trait]
pub trait HostedZoneApi: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// List hosted zones in lexicographic order starting at `dns_name`.
    ///
    /// Returns at most `max_items` zones. Callers must still compare names: the
    /// API returns the zones that sort at or after `dns_name`, not only exact matches.
    async fn list_hosted_zones_by_name(
        &self,
        dns_name: &str,
        max_items: u32,
    ) -> Result<Vec<HostedZone>>;

    /// Submit `changes` as one atomic batch against `zone_id`.
    ///
    /// Either every change is applied or none is.
    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        changes: &[Change],
    ) -> Result<ChangeInfo>;
}

/// Read access to an object store.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Download the whole object body.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
}
