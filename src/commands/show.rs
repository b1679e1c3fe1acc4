//! `ghi show`: issue detail with comments.

use super::Session;
use crate::api::Transport;
use crate::display::Presenter;
use crate::error::Result;
use crate::model::Issue;

pub fn show_command<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    number: u64,
    browser: bool,
) -> Result<()> {
    if browser {
        let url = session.repo.issue_url(number);
        return session.presenter.open_url(&url);
    }

    let heading = format!("Issue #{} in {}:", number, session.repo);
    session.heading(&heading);

    let path = session.issue_path(number);
    let mut spinner = session.spinner();
    let payload = session.transport.get(&path, &[])?;
    let comments = session
        .transport
        .get_pages(&format!("{}/comments", path), &[])?;
    spinner.stop();

    let issue = Issue::from_value(payload, comments)?;
    let detail = issue.print_detail(&session.ctx);
    session.presenter.page(&detail);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::recorder::Output;
    use crate::model::fixtures;
    use crate::test_utils::{fake_session, FakeTransport};
    use serde_json::json;

    fn transport() -> FakeTransport {
        FakeTransport::default()
            .with("repos/octocat/hello/issues/42", fixtures::issue(42, "Crash on start"))
            .with(
                "repos/octocat/hello/issues/42/comments",
                json!([
                    fixtures::comment("hubot", "Me too", "2024-06-15T11:00:00Z"),
                    fixtures::comment("octocat", "Fixed", "2024-06-15T11:59:00Z"),
                ]),
            )
    }

    #[test]
    fn test_show_renders_detail_with_comments() {
        let mut session = fake_session(transport());
        show_command(&mut session, 42, false).unwrap();

        assert_eq!(session.presenter.lines(), ["Issue #42 in octocat/hello:"]);
        let page = session.presenter.pages()[0].to_string();
        assert!(page.starts_with("Crash on start\n"));
        assert!(page.contains("2 COMMENTS"));
        let first = page.find("hubot wrote 1 hour ago:").unwrap();
        let second = page.find("octocat wrote 1 minute ago:").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_show_in_browser_skips_the_api() {
        let mut session = fake_session(FakeTransport::default());
        show_command(&mut session, 42, true).unwrap();

        assert_eq!(
            session.presenter.outputs,
            vec![Output::Browser(
                "https://github.com/octocat/hello/issues/42".to_string()
            )]
        );
        assert!(session.transport.requests.borrow().is_empty());
    }

    #[test]
    fn test_missing_issue_is_an_error() {
        let mut session = fake_session(FakeTransport::default());
        assert!(show_command(&mut session, 7, false).is_err());
        assert!(session.presenter.pages().is_empty());
    }
}
