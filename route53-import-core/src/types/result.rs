//! Pipeline result returned to the invoker

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ErrorReport, ImportError};

/// `state` of a successful run.
pub const SUCCESS_STATE: &str = "Successfully committed changes to Route53";
/// `state` of a failed run.
pub const ERROR_STATE: &str = "Error";

/// Outcome of one import run: `{ "number", "state", "message" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Correlation id copied from the invocation
    pub number: Value,
    pub state: String,
    /// Comma-joined change ids on success, the formatted error otherwise
    pub message: String,
}

impl PipelineResult {
    pub fn success(number: Value, change_ids: &[String]) -> Self {
        Self {
            number,
            state: SUCCESS_STATE.to_string(),
            message: change_ids.join(","),
        }
    }

    pub fn failure(number: Value, err: &ImportError) -> Self {
        Self {
            number,
            state: ERROR_STATE.to_string(),
            message: ErrorReport::from(err).to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.state == SUCCESS_STATE
    }
}
