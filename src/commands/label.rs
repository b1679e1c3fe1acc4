//! `ghi label`: repository labels and their colors.

use super::Session;
use crate::api::Transport;
use crate::display::Presenter;
use crate::error::Result;
use crate::model::Label;

pub fn label_command<T: Transport, P: Presenter>(session: &mut Session<T, P>) -> Result<()> {
    let heading = format!("Labels for {}:", session.repo);
    session.heading(&heading);

    let path = format!("{}/labels", session.repo.api_path());
    let mut spinner = session.spinner();
    let payloads = session.transport.get_pages(&path, &[])?;
    spinner.stop();

    let lines = payloads
        .into_iter()
        .map(|p| Label::from_value(p).map(|l| l.print_line(&session.ctx)))
        .collect::<Result<Vec<_>>>()?;

    session.page_lines(lines);
    Ok(())
}
