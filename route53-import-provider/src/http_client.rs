//! Generic HTTP client tools
//!
//! Shared request execution for the AWS clients. Each client signs and builds its
//! own `RequestBuilder`; this module sends it, logs, maps transport failures and
//! decodes XML bodies.
//!
//! No retries are performed here.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the raw response body
    ///
    /// # Arguments
    /// * `request_builder` - signed request constructor (URL, headers, body)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url_or_action` - URL or Action name (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, body))` - status code and body bytes
    /// * `Err(ProviderError::NetworkError | Timeout | Throttled)` - transport failure, 429 or 5xx
    pub async fn execute_request_raw(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, Vec<u8>), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(provider_name, &e))?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Throttled (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::Throttled {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 500 | 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?
            .to_vec();

        log::debug!("[{provider_name}] Response Body: {} bytes", body.len());

        Ok((status_code, body))
    }

    /// Performs an HTTP request and returns the response as text
    ///
    /// Same as [`execute_request_raw`](Self::execute_request_raw), with the body
    /// decoded as UTF-8 (lossy) and logged in truncated form.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), ProviderError> {
        let (status_code, body) =
            Self::execute_request_raw(request_builder, provider_name, method_name, url_or_action)
                .await?;
        let response_text = String::from_utf8_lossy(&body).into_owned();

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse an XML response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Arguments
    /// * `response_text` - XML text
    /// * `provider_name` - Provider name (used for error messages)
    pub fn parse_xml<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        quick_xml::de::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] XML parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

fn transport_error(provider_name: &str, err: &reqwest::Error) -> ProviderError {
    let provider = provider_name.to_string();
    let detail = err.to_string();
    if err.is_timeout() {
        ProviderError::Timeout { provider, detail }
    } else {
        ProviderError::NetworkError { provider, detail }
    }
}
