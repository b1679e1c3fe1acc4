//! `ghi create`: open a new issue.

use serde_json::{json, Value};

use super::{show_command, Session};
use crate::api::Transport;
use crate::display::Presenter;
use crate::error::Result;
use crate::model::Issue;

pub fn create_command<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    title: &str,
    body: Option<&str>,
) -> Result<()> {
    let mut payload = json!({ "title": title });
    if let Some(body) = body {
        payload["body"] = Value::from(body);
    }

    let mut spinner = session.spinner();
    let reply = session.transport.post(&session.issues_path(), &payload)?;
    spinner.stop();

    let created = Issue::from_value(reply, Vec::new())?;
    show_command(session, created.number, false)
}
