//! `ghi edit` and its shorthands `open`, `close` and `assign`.

use serde_json::{Map, Value};

use super::{show_command, Session};
use crate::api::Transport;
use crate::display::Presenter;
use crate::error::Result;
use crate::model::State;

/// Assignee value that removes the current assignee.
pub const UNASSIGN: &str = "none";

/// Fields to change; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOptions {
    pub title: Option<String>,
    pub body: Option<String>,
    /// Login, or [`UNASSIGN`].
    pub assignee: Option<String>,
    pub state: Option<State>,
    pub milestone: Option<u64>,
    pub labels: Option<Vec<String>>,
}

impl EditOptions {
    /// The PATCH body, or `None` when nothing would change.
    pub fn payload(&self) -> Option<Value> {
        let mut payload = Map::new();
        if let Some(title) = &self.title {
            payload.insert("title".into(), Value::from(title.as_str()));
        }
        if let Some(body) = &self.body {
            payload.insert("body".into(), Value::from(body.as_str()));
        }
        if let Some(assignee) = &self.assignee {
            let value = if assignee == UNASSIGN {
                Value::Null
            } else {
                Value::from(assignee.as_str())
            };
            payload.insert("assignee".into(), value);
        }
        if let Some(state) = self.state {
            payload.insert("state".into(), Value::from(state.as_str()));
        }
        if let Some(milestone) = self.milestone {
            payload.insert("milestone".into(), Value::from(milestone));
        }
        if let Some(labels) = &self.labels {
            payload.insert("labels".into(), Value::from(labels.clone()));
        }

        if payload.is_empty() {
            None
        } else {
            Some(Value::Object(payload))
        }
    }
}

/// Who `assign` should assign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignee {
    User(String),
    /// The configured `username`.
    Me,
    Nobody,
}

/// PATCH the issue and show it again.
///
/// Returns `false` without touching the API when no field was given, so the
/// caller can print usage instead.
pub fn edit_command<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    number: u64,
    options: &EditOptions,
) -> Result<bool> {
    let Some(payload) = options.payload() else {
        return Ok(false);
    };

    let mut spinner = session.spinner();
    session
        .transport
        .patch(&session.issue_path(number), &payload)?;
    spinner.stop();

    show_command(session, number, false)?;
    Ok(true)
}

pub fn open_command<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    number: u64,
) -> Result<()> {
    set_state(session, number, State::Open)
}

pub fn close_command<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    number: u64,
) -> Result<()> {
    set_state(session, number, State::Closed)
}

fn set_state<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    number: u64,
    state: State,
) -> Result<()> {
    let options = EditOptions {
        state: Some(state),
        ..EditOptions::default()
    };
    edit_command(session, number, &options).map(|_| ())
}

pub fn assign_command<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    number: u64,
    assignee: Assignee,
) -> Result<()> {
    let login = match assignee {
        Assignee::User(login) if !login.is_empty() => login,
        Assignee::User(_) | Assignee::Nobody => UNASSIGN.to_string(),
        Assignee::Me => session.config.require_username()?.to_string(),
    };
    let options = EditOptions {
        assignee: Some(login),
        ..EditOptions::default()
    };
    edit_command(session, number, &options).map(|_| ())
}
