//! `ghi comment`: add a comment to an issue.

use serde_json::json;

use super::{show_command, Session};
use crate::api::Transport;
use crate::display::Presenter;
use crate::error::Result;

pub fn comment_command<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    number: u64,
    text: &str,
) -> Result<()> {
    let path = format!("{}/comments", session.issue_path(number));

    let mut spinner = session.spinner();
    session.transport.post(&path, &json!({ "body": text }))?;
    spinner.stop();

    show_command(session, number, false)
}
