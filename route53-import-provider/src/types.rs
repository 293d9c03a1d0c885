use serde::{Deserialize, Serialize};

// ============ Credentials ============

/// Static AWS credentials used to sign requests.
///
/// `session_token` is only needed for temporary (STS) credentials.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AwsCredentials {
    /// Access key id (`AKIA…` / `ASIA…`).
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Session token for temporary credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl AwsCredentials {
    /// Create a credentials value.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }
}

// Secrets never end up in logs.
impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

// ============ Hosted Zone Types ============

/// A hosted zone as reported by `ListHostedZonesByName`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Zone identifier exactly as returned by the API (usually `/hostedzone/Z…`).
    pub id: String,
    /// Fully-qualified zone name, including the trailing dot.
    pub name: String,
    /// Whether the zone is a private (VPC-scoped) zone.
    pub private_zone: bool,
}

/// Confirmation returned by `ChangeResourceRecordSets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Change identifier (e.g. `/change/C2682N5HXP0BZ4`).
    pub id: String,
    /// `PENDING` or `INSYNC`.
    pub status: String,
    /// Submission timestamp as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

// ============ Change Batch Types ============

/// One entry of a change batch.
///
/// Serializes with the same keys the Route 53 API documents for a change
/// (`Action`, `ResourceRecordSet`, `Name`, `Type`, `TTL`, `ResourceRecords`, `Value`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Change {
    /// `CREATE`, `UPSERT` or `DELETE`.
    pub action: String,
    /// The record set the action applies to.
    pub resource_record_set: ResourceRecordSet,
}

/// A resource record set inside a [`Change`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecordSet {
    /// Record name.
    pub name: String,
    /// Record type (`A`, `TXT`, …).
    #[serde(rename = "Type")]
    pub record_type: String,
    /// Time to live in seconds.
    #[serde(rename = "TTL")]
    pub ttl: u32,
    /// Resource records of the set.
    pub resource_records: Vec<ResourceRecord>,
}

/// A single resource record.
///
/// `value` holds an ordered value sequence; the Route 53 client sends it as a
/// single `<Value>` element with the parts separated by one space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecord {
    /// Value sequence of this record.
    pub value: Vec<String>,
}

impl ResourceRecord {
    /// The value as it goes on the wire.
    pub fn wire_value(&self) -> String {
        self.value.join(" ")
    }
}
