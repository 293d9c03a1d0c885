//! AWS Signature Version 4
//!
//! Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html>

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::providers::common::{hmac_sha256, sha256_hex, uri_encode};
use crate::types::AwsCredentials;
use crate::utils::log_sanitizer::{mask_key_id, truncate_for_log};

/// Signing algorithm identifier.
const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Request parts that go into the signature.
pub(crate) struct SigningRequest<'a> {
    pub method: &'a str,
    /// Already URI-encoded absolute path.
    pub canonical_uri: &'a str,
    /// Raw (unencoded) query pairs; encoded and sorted during signing.
    pub query: &'a [(&'a str, &'a str)],
    /// Headers to sign, including `host`.
    pub headers: &'a [(String, String)],
    /// Hex SHA-256 of the payload.
    pub payload_hash: &'a str,
}

/// Signer bound to one credential set, region and service.
pub(crate) struct SigV4Signer<'a> {
    pub credentials: &'a AwsCredentials,
    pub region: &'a str,
    pub service: &'a str,
}

/// `X-Amz-Date` format.
pub(crate) fn amz_date(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Canonical query string: keys and values encoded, sorted by key then value.
pub(crate) fn canonical_query(query: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(String, String)> = query
        .iter()
        .map(|(k, v)| (uri_encode(k), uri_encode(v)))
        .collect();
    pairs.sort_unstable();
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signing key: `HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")`.
pub(crate) fn derive_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{secret}").as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

impl SigV4Signer<'_> {
    /// Build the `Authorization` header value for `request` at `amz_date`.
    pub(crate) fn authorization(&self, request: &SigningRequest<'_>, amz_date: &str) -> String {
        let date = &amz_date[..amz_date.len().min(8)];
        let scope = format!("{date}/{}/{}/aws4_request", self.region, self.service);

        // 1. Canonical headers: lowercase names, trimmed values, sorted by name
        let mut sorted_headers: Vec<(String, &str)> = request
            .headers
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.trim()))
            .collect();
        sorted_headers.sort_by(|a, b| a.0.cmp(&b.0));

        let canonical_headers = sorted_headers
            .iter()
            .fold(String::new(), |mut acc, (k, v)| {
                let _ = writeln!(acc, "{k}:{v}");
                acc
            });

        let signed_headers = sorted_headers
            .iter()
            .map(|(k, _)| k.as_str())
            .collect::<Vec<_>>()
            .join(";");

        // 2. Canonical request
        let canonical_request = format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            request.method,
            request.canonical_uri,
            canonical_query(request.query),
            canonical_headers,
            signed_headers,
            request.payload_hash
        );

        log::debug!("CanonicalRequest:\n{}", truncate_for_log(&canonical_request));

        // 3. String to sign
        let string_to_sign = format!(
            "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
            sha256_hex(canonical_request.as_bytes())
        );

        log::debug!("StringToSign:\n{string_to_sign}");

        // 4. Signature
        let signing_key = derive_signing_key(
            &self.credentials.secret_access_key,
            date,
            self.region,
            self.service,
        );
        let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes()));

        log::debug!(
            "Signed {} {} as {}",
            request.method,
            request.canonical_uri,
            mask_key_id(&self.credentials.access_key_id)
        );

        format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
            self.credentials.access_key_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_credentials() -> AwsCredentials {
        AwsCredentials::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            None,
        )
    }

    #[test]
    fn signing_key_matches_documented_example() {
        // "Deriving the signing key" example from the AWS general reference.
        let key = derive_signing_key(
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            "20120215",
            "us-east-1",
            "iam",
        );
        assert_eq!(
            hex::encode(key),
            "f4780e2d9f65fa895f9c67b32ce1baf0b0d8a43505a000a1a9e090d414db404d"
        );
    }

    #[test]
    fn get_vanilla_test_vector() {
        // `get-vanilla` from the AWS SigV4 test suite.
        let credentials = example_credentials();
        let signer = SigV4Signer {
            credentials: &credentials,
            region: "us-east-1",
            service: "service",
        };
        let headers = vec![
            ("Host".to_string(), "example.amazonaws.com".to_string()),
            ("X-Amz-Date".to_string(), "20150830T123600Z".to_string()),
        ];
        let payload_hash = sha256_hex(b"");
        let request = SigningRequest {
            method: "GET",
            canonical_uri: "/",
            query: &[],
            headers: &headers,
            payload_hash: &payload_hash,
        };

        assert_eq!(
            signer.authorization(&request, "20150830T123600Z"),
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
    }

    #[test]
    fn canonical_query_sorts_and_encodes() {
        assert_eq!(
            canonical_query(&[("maxitems", "2"), ("dnsname", "example.com")]),
            "dnsname=example.com&maxitems=2"
        );
        assert_eq!(canonical_query(&[("k", "a b")]), "k=a%20b");
        assert_eq!(canonical_query(&[]), "");
    }

    #[test]
    fn header_order_does_not_change_signature() {
        let credentials = example_credentials();
        let signer = SigV4Signer {
            credentials: &credentials,
            region: "us-east-1",
            service: "route53",
        };
        let payload_hash = sha256_hex(b"");
        let forward = vec![
            ("Host".to_string(), "route53.amazonaws.com".to_string()),
            ("X-Amz-Date".to_string(), "20240101T000000Z".to_string()),
        ];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();

        let sign = |headers: &[(String, String)]| {
            signer.authorization(
                &SigningRequest {
                    method: "GET",
                    canonical_uri: "/2013-04-01/hostedzonesbyname",
                    query: &[("dnsname", "example.com")],
                    headers,
                    payload_hash: &payload_hash,
                },
                "20240101T000000Z",
            )
        };

        assert_eq!(sign(&forward), sign(&reversed));
    }

    #[test]
    fn different_secret_changes_signature() {
        let one = example_credentials();
        let two = AwsCredentials::new("AKIDEXAMPLE", "another-secret", None);
        let headers = vec![("Host".to_string(), "route53.amazonaws.com".to_string())];
        let payload_hash = sha256_hex(b"");
        let request = SigningRequest {
            method: "GET",
            canonical_uri: "/",
            query: &[],
            headers: &headers,
            payload_hash: &payload_hash,
        };

        let sig_one = SigV4Signer {
            credentials: &one,
            region: "us-east-1",
            service: "route53",
        }
        .authorization(&request, "20240101T000000Z");
        let sig_two = SigV4Signer {
            credentials: &two,
            region: "us-east-1",
            service: "route53",
        }
        .authorization(&request, "20240101T000000Z");

        assert_ne!(sig_one, sig_two);
    }
}
