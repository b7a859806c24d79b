//! Transient view state of an evolve session.
//!
//! Every transition publishes a fresh `SessionView`; nothing is merged
//! with the previous value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::ComparisonResult;
use crate::error::{AppError, EMPTY_INPUT};

pub const STATUS_READY: &str = "Ready to evolve your code";
pub const STATUS_CONNECTING: &str = "Connecting to Gemini AI...";
pub const STATUS_ANALYZING: &str = "AI is analyzing your code...";
pub const STATUS_COMPLETE: &str = "Evolution complete! 🎉";

/// What a front-end shows between and during evolve requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub status: String,
    /// Set while a request is in flight; the trigger is disabled meanwhile
    pub is_loading: bool,
    pub evolved_code: Option<String>,
    pub comparison: Option<ComparisonResult>,
}

impl Default for SessionView {
    fn default() -> Self {
        Self::idle(STATUS_READY)
    }
}

impl SessionView {
    fn idle(status: &str) -> Self {
        Self {
            status: status.to_string(),
            is_loading: false,
            evolved_code: None,
            comparison: None,
        }
    }

    /// Request accepted, previous result cleared
    pub fn connecting() -> Self {
        Self {
            is_loading: true,
            ..Self::idle(STATUS_CONNECTING)
        }
    }

    /// Waiting on the model
    pub fn analyzing() -> Self {
        Self {
            is_loading: true,
            ..Self::idle(STATUS_ANALYZING)
        }
    }

    pub fn completed(outcome: &EvolveOutcome) -> Self {
        Self {
            status: STATUS_COMPLETE.to_string(),
            is_loading: false,
            evolved_code: Some(outcome.evolved_code.clone()),
            comparison: Some(outcome.comparison.clone()),
        }
    }

    /// Failed request; the status line carries the user-facing message
    pub fn failed(error: &AppError) -> Self {
        Self::idle(&status_for_error(error))
    }

    /// Rejected before any request was made; the last result stays visible
    pub fn reject(&mut self, error: &AppError) {
        self.status = status_for_error(error);
        self.is_loading = false;
    }
}

/// Status line for an error. Empty input gets the bare prompt, everything
/// else is prefixed with `Error: `.
pub fn status_for_error(error: &AppError) -> String {
    match error {
        AppError::Validation(msg) if msg == EMPTY_INPUT => EMPTY_INPUT.to_string(),
        other => format!("Error: {}", other.user_message()),
    }
}

/// Result of one successful evolve request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolveOutcome {
    pub request_id: Uuid,
    pub evolved_code: String,
    pub comparison: ComparisonResult,
    pub completed_at: DateTime<Utc>,
}
