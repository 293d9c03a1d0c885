use serde::{Deserialize, Serialize};

/// Unified error type for all AWS provider operations.
///
/// Each variant includes a `provider` field identifying which client produced the error
/// (`"route53"` or `"s3"`), plus variant-specific context. All variants are serializable
/// for structured error reporting.
///
/// None of these errors are retried by this crate; callers decide what is terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, 5xx, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The access key, secret or session token was rejected.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the AWS API, if available.
        raw_message: Option<String>,
    },

    /// The credentials are valid but the IAM policy does not allow the operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the AWS API, if available.
        raw_message: Option<String>,
    },

    /// The API rejected the request because of its rate limit (HTTP 429 or a throttling code).
    Throttled {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the AWS API, if available.
        raw_message: Option<String>,
    },

    /// The hosted zone addressed by the request does not exist.
    HostedZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Hosted zone id used in the request.
        zone_id: String,
        /// Original error message from the AWS API, if available.
        raw_message: Option<String>,
    },

    /// Route 53 refused the change batch (record conflicts, bad values, etc.).
    InvalidChangeBatch {
        /// Provider that produced the error.
        provider: String,
        /// Every message Route 53 returned for the batch.
        messages: Vec<String>,
    },

    /// A request parameter is invalid (malformed domain name, bad max-items, etc.).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The requested object (or its bucket) does not exist.
    ObjectNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Bucket the object was requested from.
        bucket: String,
        /// Object key.
        key: String,
        /// Original error message from the AWS API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the AWS API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::HostedZoneNotFound { .. }
                | Self::InvalidChangeBatch { .. }
                | Self::InvalidParameter { .. }
                | Self::ObjectNotFound { .. }
        )
    }

    /// Identifier of the provider that produced the error.
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::InvalidCredentials { provider, .. }
            | Self::PermissionDenied { provider, .. }
            | Self::Throttled { provider, .. }
            | Self::HostedZoneNotFound { provider, .. }
            | Self::InvalidChangeBatch { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::ObjectNotFound { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::SerializationError { provider, .. }
            | Self::Unknown { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::Throttled {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Throttled (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Throttled")
                }
            }
            Self::HostedZoneNotFound {
                provider,
                zone_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Hosted zone '{zone_id}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Hosted zone '{zone_id}' not found")
                }
            }
            Self::InvalidChangeBatch { provider, messages } => {
                if messages.is_empty() {
                    write!(f, "[{provider}] Invalid change batch")
                } else {
                    write!(f, "[{provider}] Invalid change batch: {}", messages.join("; "))
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ObjectNotFound {
                provider,
                bucket,
                key,
                ..
            } => {
                write!(f, "[{provider}] Object '{key}' not found in bucket '{bucket}'")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
