//! `/predict` wire types and response classification.
//!
//! DESIGN
//! ======
//! The endpoint answers with a JSON object carrying either `prediction` or
//! `error`, and the HTTP status says which one to expect. Everything the
//! browser receives is reduced to a [`PredictOutcome`] here so the DOM layer
//! only has to display text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::text::{CONNECTION_FAILED, UNKNOWN_ERROR, display_case, error_text};

/// Response body of `POST /predict`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted label on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,
    /// Failure message on non-success statuses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Whether `status` is in the 2xx range.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Result of one submission, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PredictOutcome {
    /// Success status with a label.
    Label(String),
    /// Non-success status; carries the server's message.
    Rejected { status: u16, message: String },
    /// The request did not complete or the body was unusable.
    TransportFailed { reason: String },
}

impl PredictOutcome {
    /// Classify a received response.
    ///
    /// A success status whose body lacks a `prediction` is treated like a
    /// transport failure: there is nothing meaningful to show.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = match serde_json::from_str::<PredictResponse>(body) {
            Ok(parsed) => parsed,
            Err(e) => {
                return Self::TransportFailed {
                    reason: format!("unreadable response ({status}): {e}"),
                };
            }
        };

        if is_success(status) {
            match parsed.prediction {
                Some(label) => Self::Label(label),
                None => Self::TransportFailed {
                    reason: format!("response {status} has no prediction"),
                },
            }
        } else {
            Self::Rejected {
                status,
                message: parsed.error.unwrap_or_else(|| UNKNOWN_ERROR.to_owned()),
            }
        }
    }

    #[must_use]
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::TransportFailed {
            reason: reason.into(),
        }
    }

    /// Text for the result panel.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Label(label) => display_case(label),
            Self::Rejected { message, .. } => error_text(message),
            Self::TransportFailed { .. } => CONNECTION_FAILED.to_owned(),
        }
    }
}
