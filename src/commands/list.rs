//! `ghi list`: one line per issue.

use clap::ValueEnum;

use super::Session;
use crate::api::Transport;
use crate::display::Presenter;
use crate::error::Result;
use crate::model::{Issue, LabelMode};

/// Which issues to list by state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StateFilter {
    #[default]
    Open,
    Closed,
    All,
}

impl StateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateFilter::Open => "open",
            StateFilter::Closed => "closed",
            StateFilter::All => "all",
        }
    }

    /// Capitalized, for headings.
    pub fn title(&self) -> &'static str {
        match self {
            StateFilter::Open => "Open",
            StateFilter::Closed => "Closed",
            StateFilter::All => "All",
        }
    }
}

/// Restrict a listing to plain issues or to pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IssueType {
    Issues,
    Prs,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub state: StateFilter,
    pub milestone: Option<u64>,
    /// Comma separated label names.
    pub labels: Option<String>,
    /// Login, or `none` for unassigned issues.
    pub assignee: Option<String>,
    pub creator: Option<String>,
    pub kind: Option<IssueType>,
    pub label_mode: LabelMode,
    pub show_comments: bool,
}

impl ListOptions {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("state", self.state.as_str().to_string())];
        if let Some(milestone) = self.milestone {
            params.push(("milestone", milestone.to_string()));
        }
        if let Some(labels) = &self.labels {
            params.push(("labels", labels.clone()));
        }
        if let Some(assignee) = &self.assignee {
            params.push(("assignee", assignee.clone()));
        }
        if let Some(creator) = &self.creator {
            params.push(("creator", creator.clone()));
        }
        params
    }

    fn heading(&self, repo: &str) -> String {
        let mut heading = format!("{} Issues for {}", self.state.title(), repo);
        if let Some(milestone) = self.milestone {
            heading.push_str(&format!(", with milestone #{}", milestone));
        }
        if let Some(labels) = &self.labels {
            heading.push_str(&format!(", labeled {}", labels));
        }
        if let Some(assignee) = &self.assignee {
            heading.push_str(&format!(", assigned to {}", assignee));
        }
        if let Some(creator) = &self.creator {
            heading.push_str(&format!(", created by {}", creator));
        }
        heading.push(':');
        heading
    }

    fn keeps(&self, issue: &Issue) -> bool {
        match self.kind {
            Some(IssueType::Issues) => !issue.is_pull_request,
            Some(IssueType::Prs) => issue.is_pull_request,
            None => true,
        }
    }
}

pub fn list_command<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    options: &ListOptions,
) -> Result<()> {
    let heading = options.heading(&session.repo.to_string());
    session.heading(&heading);

    let mut spinner = session.spinner();
    let payloads = session
        .transport
        .get_pages(&session.issues_path(), &options.params())?;
    spinner.stop();

    let mut lines = Vec::new();
    for payload in payloads {
        let issue = Issue::from_value(payload, Vec::new())?;
        if options.keeps(&issue) {
            lines.push(issue.print_line(&session.ctx, options.label_mode, options.show_comments));
        }
    }

    session.page_lines(lines);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;
    use crate::test_utils::{fake_session, FakeTransport};
    use serde_json::json;

    const ISSUES: &str = "repos/octocat/hello/issues";

    fn mixed() -> FakeTransport {
        let mut pr = fixtures::issue(2, "Add feature");
        pr["pull_request"] = json!({});
        FakeTransport::default().with(ISSUES, json!([fixtures::issue(1, "Fix bug"), pr]))
    }

    fn options() -> ListOptions {
        ListOptions {
            show_comments: true,
            ..ListOptions::default()
        }
    }

    #[test]
    fn test_lists_every_issue() {
        let mut session = fake_session(mixed());
        list_command(&mut session, &options()).unwrap();

        assert_eq!(session.presenter.lines(), ["Open Issues for octocat/hello:"]);
        let pages = session.presenter.pages();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("#1  O  Fix bug  [0 @]\n"));
        assert!(pages[0].contains("#2  O   P  Add feature  [0 @]\n"));
    }

    #[test]
    fn test_sends_filters_and_paging_params() {
        let mut session = fake_session(mixed());
        let options = ListOptions {
            state: StateFilter::All,
            milestone: Some(4),
            labels: Some("bug,ui".to_string()),
            assignee: Some("hubot".to_string()),
            creator: Some("octocat".to_string()),
            ..options()
        };
        list_command(&mut session, &options).unwrap();

        let params = session.transport.params_for(ISSUES);
        for expected in [
            ("state", "all"),
            ("milestone", "4"),
            ("labels", "bug,ui"),
            ("assignee", "hubot"),
            ("creator", "octocat"),
            ("per_page", "100"),
            ("page", "1"),
        ] {
            assert!(
                params.contains(&(expected.0, expected.1.to_string())),
                "missing {:?}",
                expected
            );
        }
        assert_eq!(
            session.presenter.lines(),
            ["All Issues for octocat/hello, with milestone #4, labeled bug,ui, \
              assigned to hubot, created by octocat:"]
        );
    }

    #[test]
    fn test_filters_by_type() {
        let mut session = fake_session(mixed());
        let only_prs = ListOptions {
            kind: Some(IssueType::Prs),
            ..options()
        };
        list_command(&mut session, &only_prs).unwrap();
        let page = session.presenter.pages()[0].to_string();
        assert!(page.contains("Add feature"));
        assert!(!page.contains("Fix bug"));

        let mut session = fake_session(mixed());
        let only_issues = ListOptions {
            kind: Some(IssueType::Issues),
            ..options()
        };
        list_command(&mut session, &only_issues).unwrap();
        let page = session.presenter.pages()[0].to_string();
        assert!(page.contains("Fix bug"));
        assert!(!page.contains("Add feature"));
    }

    #[test]
    fn test_empty_listing() {
        let mut session = fake_session(FakeTransport::default().with(ISSUES, json!([])));
        list_command(&mut session, &options()).unwrap();
        assert_eq!(session.presenter.pages(), ["No results."]);
    }

    #[test]
    fn test_hides_comment_badge() {
        let mut session = fake_session(mixed());
        let options = ListOptions {
            show_comments: false,
            ..options()
        };
        list_command(&mut session, &options).unwrap();
        assert!(!session.presenter.pages()[0].contains('@'));
    }

    #[test]
    fn test_transport_failure_propagates() {
        let mut session = fake_session(FakeTransport::default());
        let err = list_command(&mut session, &options()).unwrap_err();
        assert_eq!(err.to_string(), "Couldn't connect to GitHub. Status Code: 404");
        assert!(session.presenter.pages().is_empty());
    }
}
