//! Route 53 API type definitions (REST/XML, version 2013-04-01)

use serde::{Deserialize, Serialize};

use crate::types::{Change, ChangeInfo, HostedZone};

use super::XML_NAMESPACE;

// ============ Route 53 API response structure ============

/// Response payload for `ListHostedZonesByName`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHostedZonesByNameResponse {
    #[serde(default)]
    pub hosted_zones: XmlHostedZones,
    #[serde(rename = "DNSName")]
    pub dns_name: Option<String>,
    pub is_truncated: Option<bool>,
    pub max_items: Option<u32>,
}

/// `<HostedZones>` wrapper.
#[derive(Debug, Default, Deserialize)]
pub struct XmlHostedZones {
    #[serde(rename = "HostedZone", default)]
    pub hosted_zone: Vec<XmlHostedZone>,
}

/// Hosted zone item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlHostedZone {
    pub id: String,
    pub name: String,
    pub config: Option<XmlHostedZoneConfig>,
}

/// `<Config>` of a hosted zone.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlHostedZoneConfig {
    #[serde(default)]
    pub private_zone: bool,
}

impl From<XmlHostedZone> for HostedZone {
    fn from(zone: XmlHostedZone) -> Self {
        Self {
            id: zone.id,
            name: zone.name,
            private_zone: zone.config.is_some_and(|c| c.private_zone),
        }
    }
}

/// Response payload for `ChangeResourceRecordSets`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeResourceRecordSetsResponse {
    pub change_info: XmlChangeInfo,
}

/// `<ChangeInfo>` element.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlChangeInfo {
    pub id: String,
    pub status: String,
    pub submitted_at: Option<String>,
}

impl From<XmlChangeInfo> for ChangeInfo {
    fn from(info: XmlChangeInfo) -> Self {
        Self {
            id: info.id,
            status: info.status,
            submitted_at: info.submitted_at,
        }
    }
}

// ============ Error bodies ============

/// Generic error body (`<ErrorResponse><Error>…</Error></ErrorResponse>`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
}

/// `<Error>` element.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    #[serde(rename = "Type")]
    pub error_type: Option<String>,
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Body returned when a change batch is rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvalidChangeBatchResponse {
    pub messages: XmlMessages,
    pub request_id: Option<String>,
}

/// `<Messages>` wrapper.
#[derive(Debug, Deserialize)]
pub struct XmlMessages {
    #[serde(rename = "Message", default)]
    pub message: Vec<String>,
}

// ============ Request bodies ============

/// Root element name of the change request body.
pub const CHANGE_REQUEST_ROOT: &str = "ChangeResourceRecordSetsRequest";

/// Body of `ChangeResourceRecordSets`.
#[derive(Debug, Serialize)]
pub struct ChangeResourceRecordSetsRequest<'a> {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "ChangeBatch")]
    pub change_batch: XmlChangeBatch<'a>,
}

/// `<ChangeBatch>` element.
#[derive(Debug, Serialize)]
pub struct XmlChangeBatch<'a> {
    #[serde(rename = "Changes")]
    pub changes: XmlChanges<'a>,
}

/// `<Changes>` wrapper.
#[derive(Debug, Serialize)]
pub struct XmlChanges<'a> {
    #[serde(rename = "Change")]
    pub change: Vec<XmlChange<'a>>,
}

/// One `<Change>`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct XmlChange<'a> {
    pub action: &'a str,
    pub resource_record_set: XmlResourceRecordSet<'a>,
}

/// `<ResourceRecordSet>` element.
#[derive(Debug, Serialize)]
pub struct XmlResourceRecordSet<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Type")]
    pub record_type: &'a str,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    #[serde(rename = "ResourceRecords")]
    pub resource_records: XmlResourceRecords,
}

/// `<ResourceRecords>` wrapper.
#[derive(Debug, Serialize)]
pub struct XmlResourceRecords {
    #[serde(rename = "ResourceRecord")]
    pub resource_record: Vec<XmlResourceRecord>,
}

/// One `<ResourceRecord>`.
#[derive(Debug, Serialize)]
pub struct XmlResourceRecord {
    #[serde(rename = "Value")]
    pub value: String,
}

impl<'a> ChangeResourceRecordSetsRequest<'a> {
    /// Build the request body for `changes`.
    pub fn new(changes: &'a [Change]) -> Self {
        let change = changes
            .iter()
            .map(|c| XmlChange {
                action: &c.action,
                resource_record_set: XmlResourceRecordSet {
                    name: &c.resource_record_set.name,
                    record_type: &c.resource_record_set.record_type,
                    ttl: c.resource_record_set.ttl,
                    resource_records: XmlResourceRecords {
                        resource_record: c
                            .resource_record_set
                            .resource_records
                            .iter()
                            .map(|r| XmlResourceRecord {
                                value: r.wire_value(),
                            })
                            .collect(),
                    },
                },
            })
            .collect();

        Self {
            xmlns: XML_NAMESPACE,
            change_batch: XmlChangeBatch {
                changes: XmlChanges { change },
            },
        }
    }
}
