//! Typed records built from GitHub REST payloads.
//!
//! Each record has a payload struct mirroring the JSON (required fields are
//! plain, optional ones are `Option` or defaulted) and a read-only record type
//! built from it once. Renderers live next to their record.

mod comment;
mod issue;
mod label;
mod milestone;
mod user;

pub use comment::Comment;
pub use issue::{Issue, LabelMode};
pub use label::Label;
pub use milestone::Milestone;
pub use user::User;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GhiError, Result};

/// Open/closed state shared by issues and milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Open,
    Closed,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Open => "open",
            State::Closed => "closed",
        }
    }
}

/// Decode one JSON value, naming `what` in the error.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| GhiError::InvalidPayload(format!("malformed {}: {}", what, e)))
}
