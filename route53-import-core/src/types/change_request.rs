//! Change request: one desired record mutation

use std::fmt;
use std::str::FromStr;

use route53_import_provider::{Change, ResourceRecord, ResourceRecordSet};

/// TTL applied when the input does not give one.
pub const DEFAULT_TTL: u32 = 300;

/// Requested action. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    Upsert,
    Delete,
    /// Input text that is not a supported action, kept for error reporting
    Unrecognised(String),
}

impl ChangeAction {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Upsert => "UPSERT",
            Self::Delete => "DELETE",
            Self::Unrecognised(raw) => raw,
        }
    }
}

impl From<&str> for ChangeAction {
    fn from(raw: &str) -> Self {
        match raw {
            "UPSERT" => Self::Upsert,
            "DELETE" => Self::Delete,
            other => Self::Unrecognised(other.to_string()),
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record type. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    Mx,
    Ptr,
    A,
    Cname,
    Srv,
    Txt,
    Ns,
    Aaaa,
    /// Input text outside the supported set, kept for error reporting
    Unrecognised(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mx => "MX",
            Self::Ptr => "PTR",
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Aaaa => "AAAA",
            Self::Unrecognised(raw) => raw,
        }
    }
}

impl From<&str> for RecordType {
    fn from(raw: &str) -> Self {
        match raw {
            "MX" => Self::Mx,
            "PTR" => Self::Ptr,
            "A" => Self::A,
            "CNAME" => Self::Cname,
            "SRV" => Self::Srv,
            "TXT" => Self::Txt,
            "NS" => Self::Ns,
            "AAAA" => Self::Aaaa,
            other => Self::Unrecognised(other.to_string()),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hosted zone visibility class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ZoneVisibility {
    #[default]
    Public,
    Private,
}

impl ZoneVisibility {
    /// Visibility of a hosted zone from its private flag.
    pub fn from_private_flag(private_zone: bool) -> Self {
        if private_zone {
            Self::Private
        } else {
            Self::Public
        }
    }
}

impl FromStr for ZoneVisibility {
    type Err = String;

    /// Case-insensitive `public` / `private`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            _ => Err(s.to_string()),
        }
    }
}

impl fmt::Display for ZoneVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("PUBLIC"),
            Self::Private => f.write_str("PRIVATE"),
        }
    }
}

/// One desired DNS record mutation.
///
/// Immutable once built. The domain is lowercased and TXT values are wrapped in
/// double quotes at construction; the wrapping is applied unconditionally, so a
/// value that is already quoted ends up quoted twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    action: ChangeAction,
    domain_name: String,
    visibility: ZoneVisibility,
    record_name: String,
    record_values: Vec<String>,
    record_type: RecordType,
    ttl: u32,
}

impl ChangeRequest {
    pub fn new(
        action: ChangeAction,
        domain_name: &str,
        visibility: ZoneVisibility,
        record_name: impl Into<String>,
        record_values: Vec<String>,
        record_type: RecordType,
        ttl: u32,
    ) -> Self {
        let record_values = if record_type == RecordType::Txt {
            record_values.into_iter().map(|v| format!("\"{v}\"")).collect()
        } else {
            record_values
        };

        Self {
            action,
            domain_name: domain_name.to_lowercase(),
            visibility,
            record_name: record_name.into(),
            record_values,
            record_type,
            ttl,
        }
    }

    /// Builder with PUBLIC visibility and a 300 s TTL.
    pub fn builder(
        action: impl Into<ChangeAction>,
        domain_name: impl Into<String>,
        record_name: impl Into<String>,
        record_type: impl Into<RecordType>,
    ) -> ChangeRequestBuilder {
        ChangeRequestBuilder {
            action: action.into(),
            domain_name: domain_name.into(),
            visibility: ZoneVisibility::default(),
            record_name: record_name.into(),
            record_values: Vec::new(),
            record_type: record_type.into(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn action(&self) -> &ChangeAction {
        &self.action
    }

    /// Lowercased domain name.
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn visibility(&self) -> ZoneVisibility {
        self.visibility
    }

    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    pub fn record_values(&self) -> &[String] {
        &self.record_values
    }

    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// `true` iff the action is UPSERT or DELETE.
    pub fn is_valid_action(&self) -> bool {
        !matches!(self.action, ChangeAction::Unrecognised(_))
    }

    /// `true` iff the record type is one of MX, PTR, A, CNAME, SRV, TXT, NS, AAAA.
    pub fn is_valid_record_type(&self) -> bool {
        !matches!(self.record_type, RecordType::Unrecognised(_))
    }

    /// Change batch entry for this request.
    ///
    /// Carries exactly one resource record whose value is the whole value sequence.
    pub fn to_change_batch_entry(&self) -> Change {
        Change {
            action: self.action.as_str().to_string(),
            resource_record_set: ResourceRecordSet {
                name: self.record_name.clone(),
                record_type: self.record_type.as_str().to_string(),
                ttl: self.ttl,
                resource_records: vec![ResourceRecord {
                    value: self.record_values.clone(),
                }],
            },
        }
    }
}

/// Builder for [`ChangeRequest`].
#[derive(Debug, Clone)]
pub struct ChangeRequestBuilder {
    action: ChangeAction,
    domain_name: String,
    visibility: ZoneVisibility,
    record_name: String,
    record_values: Vec<String>,
    record_type: RecordType,
    ttl: u32,
}

impl ChangeRequestBuilder {
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.record_values.push(value.into());
        self
    }

    #[must_use]
    pub fn values(mut self, values: Vec<String>) -> Self {
        self.record_values = values;
        self
    }

    #[must_use]
    pub fn visibility(mut self, visibility: ZoneVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> ChangeRequest {
        ChangeRequest::new(
            self.action,
            &self.domain_name,
            self.visibility,
            self.record_name,
            self.record_values,
            self.record_type,
            self.ttl,
        )
    }
}
