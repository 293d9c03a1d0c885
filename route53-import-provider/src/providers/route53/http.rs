//! Route 53 HTTP request methods

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::sha256_hex;
use crate::providers::sigv4::{SigV4Signer, SigningRequest, amz_date, canonical_query};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::types::{ErrorResponse, InvalidChangeBatchResponse};
use super::{ROUTE53_SERVICE, ROUTE53_SIGNING_REGION, Route53Provider};

impl Route53Provider {
    // ==================== 辅助方法 ====================

    /// 统一处理 Route 53 响应错误
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        // <ErrorResponse><Error>…</Error></ErrorResponse>
        if let Ok(error) = quick_xml::de::from_str::<ErrorResponse>(response_text) {
            log::debug!(
                "[{}] {} error {} (request id {:?})",
                self.provider_name(),
                error.error.error_type.as_deref().unwrap_or("Unknown"),
                error.error.code,
                error.request_id
            );
            return Err(self.map_error(
                RawApiError::with_code(error.error.code, error.error.message),
                ctx,
            ));
        }

        // <InvalidChangeBatch><Messages>…</Messages></InvalidChangeBatch>
        if let Ok(batch) = quick_xml::de::from_str::<InvalidChangeBatchResponse>(response_text) {
            log::debug!(
                "[{}] InvalidChangeBatch (request id {:?})",
                self.provider_name(),
                batch.request_id
            );
            return Err(ProviderError::InvalidChangeBatch {
                provider: self.provider_name().to_string(),
                messages: batch.messages.message,
            });
        }

        // 回退到通用错误
        Err(self.unknown_error(RawApiError::new(format!("HTTP {status}: {response_text}"))))
    }

    /// Headers every signed request carries, in signing form.
    fn base_headers(&self, timestamp: &str) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Host".to_string(), self.host().to_string()),
            ("X-Amz-Date".to_string(), timestamp.to_string()),
        ];
        if let Some(token) = &self.credentials.session_token {
            headers.push(("X-Amz-Security-Token".to_string(), token.clone()));
        }
        headers
    }

    fn sign(
        &self,
        method: &str,
        path: &str,
        query: &[(&str, &str)],
        headers: &[(String, String)],
        payload: &str,
        timestamp: &str,
    ) -> String {
        let payload_hash = sha256_hex(payload.as_bytes());
        let signer = SigV4Signer {
            credentials: &self.credentials,
            region: ROUTE53_SIGNING_REGION,
            service: ROUTE53_SERVICE,
        };
        signer.authorization(
            &SigningRequest {
                method,
                canonical_uri: path,
                query,
                headers,
                payload_hash: &payload_hash,
            },
            timestamp,
        )
    }

    // ==================== 公开 API 方法 ====================

    /// 执行 GET 请求
    ///
    /// `path` must already be URI-encoded; `query` pairs are raw.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        ctx: ErrorContext,
    ) -> Result<T> {
        let timestamp = amz_date(Utc::now());
        let headers = self.base_headers(&timestamp);
        let authorization = self.sign("GET", path, query, &headers, "", &timestamp);

        let query_string = canonical_query(query);
        let url = if query_string.is_empty() {
            format!("{}{path}", self.endpoint)
        } else {
            format!("{}{path}?{query_string}", self.endpoint)
        };

        let mut request = self.client.get(&url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let request = request.header("Authorization", authorization);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_xml(&response_text, self.provider_name())
    }

    /// 执行 POST 请求，body 以 `root` 为根元素序列化为 XML
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        root: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let payload = quick_xml::se::to_string_with_root(root, body).map_err(|e| {
            ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            }
        })?;

        log::debug!("Request Body: {}", truncate_for_log(&payload));

        let timestamp = amz_date(Utc::now());
        let mut headers = self.base_headers(&timestamp);
        headers.push(("Content-Type".to_string(), "application/xml".to_string()));
        let authorization = self.sign("POST", path, &[], &headers, &payload, &timestamp);

        let url = format!("{}{path}", self.endpoint);

        let mut request = self.client.post(&url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let request = request.header("Authorization", authorization).body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_xml(&response_text, self.provider_name())
    }
}
