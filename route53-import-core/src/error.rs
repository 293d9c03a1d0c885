//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use route53_import_provider::ProviderError;

/// Failure of a [`RowSource`](crate::traits::RowSource) or of decoding what it returned.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Object storage client error
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// Local I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a readable CSV document
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SourceError {
    /// Whether it is expected behavior (missing object, bad file), used for log classification.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Provider(e) => e.is_expected(),
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            Self::Csv(_) => true,
        }
    }
}

/// A single input row could not be turned into a change request.
///
/// `index` is the 1-based position of the row, header line excluded.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum RowError {
    /// Action is not UPSERT or DELETE
    #[error("Invalid request action")]
    InvalidAction { index: usize, action: String },

    /// Record type outside the supported set
    #[error("Record type is not recognised")]
    UnrecognizedRecordType { index: usize, record_type: String },

    /// A required column has no cell in this row
    #[error("Required column is missing")]
    MissingField { index: usize, field: String },

    /// `zone_type` is neither public nor private
    #[error("Zone type is not recognised")]
    UnrecognizedZoneType { index: usize, zone_type: String },

    /// `ttl` is not a non-negative integer
    #[error("TTL is not a valid number of seconds")]
    InvalidTtl { index: usize, ttl: String },
}

impl RowError {
    /// 1-based row position.
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidAction { index, .. }
            | Self::UnrecognizedRecordType { index, .. }
            | Self::MissingField { index, .. }
            | Self::UnrecognizedZoneType { index, .. }
            | Self::InvalidTtl { index, .. } => *index,
        }
    }

    /// The offending cell text (or column name for [`RowError::MissingField`]).
    pub fn error_data(&self) -> &str {
        match self {
            Self::InvalidAction { action, .. } => action,
            Self::UnrecognizedRecordType { record_type, .. } => record_type,
            Self::MissingField { field, .. } => field,
            Self::UnrecognizedZoneType { zone_type, .. } => zone_type,
            Self::InvalidTtl { ttl, .. } => ttl,
        }
    }
}

/// Import pipeline error type
///
/// Every variant is terminal: the run stops at the first one.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The CSV object could not be fetched or decoded
    #[error("Failed to read CSV file from S3")]
    FetchFailed {
        key: String,
        #[source]
        source: SourceError,
    },

    /// A row failed validation
    #[error(transparent)]
    ParseRowFailed(#[from] RowError),

    /// More than one hosted zone matched name and visibility
    #[error("Multiple hosted zones with the same name {domain} were found")]
    AmbiguousZone { domain: String },

    /// No hosted zone matched name and visibility
    #[error("The hosted zone {domain} does not exist")]
    ZoneNotFound { domain: String },

    /// The hosted zone listing call failed
    #[error("Could not perform list operation from Route 53")]
    ZoneQueryFailed {
        domain: String,
        #[source]
        source: ProviderError,
    },

    /// The change batch was not accepted
    #[error("Failed to commit changes to Route 53")]
    CommitFailed {
        domain: String,
        #[source]
        source: ProviderError,
    },

    /// The invocation event lacks a required field
    #[error("Invalid invocation event")]
    InvalidEvent { field: String },

    /// Anything unexpected, including panics caught at the service boundary
    #[error("There was an error while processing the request")]
    Internal { detail: String },
}

impl ImportError {
    /// User-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Row index for row errors, `0` for every other error.
    pub fn index(&self) -> usize {
        match self {
            Self::ParseRowFailed(e) => e.index(),
            _ => 0,
        }
    }

    /// The datum the error is about, if the error carries one.
    pub fn error_data(&self) -> Option<&str> {
        match self {
            Self::FetchFailed { key, .. } => Some(key),
            Self::ParseRowFailed(e) => Some(e.error_data()),
            Self::ZoneQueryFailed { domain, .. } | Self::CommitFailed { domain, .. } => {
                Some(domain)
            }
            Self::InvalidEvent { field } => Some(field),
            Self::AmbiguousZone { .. } | Self::ZoneNotFound { .. } | Self::Internal { .. } => None,
        }
    }

    /// Whether it is expected behavior (bad input, missing zone, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ParseRowFailed(_)
            | Self::AmbiguousZone { .. }
            | Self::ZoneNotFound { .. }
            | Self::InvalidEvent { .. } => true,
            Self::FetchFailed { source, .. } => source.is_expected(),
            Self::ZoneQueryFailed { source, .. } | Self::CommitFailed { source, .. } => {
                source.is_expected()
            }
            Self::Internal { .. } => false,
        }
    }
}

/// Formatted view of an [`ImportError`] as reported to the caller.
///
/// Renders `"{message} : on {error_data}, index: {index}"` when the error carries
/// data, otherwise just `"{message}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub message: String,
    pub error_data: Option<String>,
    pub index: usize,
}

impl From<&ImportError> for ErrorReport {
    fn from(err: &ImportError) -> Self {
        Self {
            message: err.message(),
            error_data: err.error_data().map(ToString::to_string),
            index: err.index(),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_data {
            Some(data) => write!(f, "{} : on {data}, index: {}", self.message, self.index),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Import pipeline Result type alias
pub type ImportResult<T> = std::result::Result<T, ImportError>;
