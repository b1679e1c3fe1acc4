//! `ghi milestone`: milestones with progress bars.

use super::{Session, StateFilter};
use crate::api::Transport;
use crate::display::Presenter;
use crate::error::Result;
use crate::model::Milestone;

pub fn milestone_command<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    state: StateFilter,
) -> Result<()> {
    let heading = format!("{} Milestones for {}:", state.title(), session.repo);
    session.heading(&heading);

    let path = format!("{}/milestones", session.repo.api_path());
    let mut spinner = session.spinner();
    let payloads = session
        .transport
        .get_pages(&path, &[("state", state.as_str().to_string())])?;
    spinner.stop();

    let lines = payloads
        .into_iter()
        .map(|p| Milestone::from_value(p).map(|m| m.print_line(&session.ctx)))
        .collect::<Result<Vec<_>>>()?;

    session.page_lines(lines);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;
    use crate::test_utils::{fake_session, FakeTransport};
    use serde_json::json;

    const MILESTONES: &str = "repos/octocat/hello/milestones";

    #[test]
    fn test_lists_milestones_with_progress() {
        let transport = FakeTransport::default().with(
            MILESTONES,
            json!([
                fixtures::milestone(1, "v1.0", 1, 3),
                fixtures::milestone(2, "v2.0", 0, 0),
            ]),
        );
        let mut session = fake_session(transport);
        milestone_command(&mut session, StateFilter::Open).unwrap();

        assert_eq!(session.presenter.lines(), ["Open Milestones for octocat/hello:"]);
        let page = session.presenter.pages()[0].to_string();
        assert!(page.contains("  #1  O  [ v1.0"));
        assert!(page.contains("75% (3/4) ]\n"));
        assert!(page.contains("0% (0/0) ]\n"));
    }

    #[test]
    fn test_sends_state_filter() {
        let transport = FakeTransport::default().with(MILESTONES, json!([]));
        let mut session = fake_session(transport);
        milestone_command(&mut session, StateFilter::Closed).unwrap();

        let params = session.transport.params_for(MILESTONES);
        assert!(params.contains(&("state", "closed".to_string())));
        assert_eq!(session.presenter.lines(), ["Closed Milestones for octocat/hello:"]);
        assert_eq!(session.presenter.pages(), ["No results."]);
    }
}
