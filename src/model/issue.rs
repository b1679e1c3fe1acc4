//! Issues and pull requests.
//!
//! The list endpoint returns both; pull requests carry a `pull_request` key and
//! get an extra marker in the one-line view.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{decode, Comment, Label, Milestone, State, User};
use crate::error::Result;
use crate::render::RenderContext;
use crate::style::Style;
use crate::text::pad_left;

pub const NO_DESCRIPTION: &str = "No description provided.";

const OPEN_COLOR: u32 = 0x00AA00;
const CLOSED_CHIP_COLOR: u32 = 0xDD0000;
const CLOSED_BADGE_COLOR: u32 = 0xAA0000;
const PULL_REQUEST_COLOR: u32 = 0xCC00CC;
const COMMENT_MARK_COLOR: u32 = 0xFFFF00;

/// How labels are shown in one-line listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Name chips.
    #[default]
    Full,
    /// One blank swatch per label.
    Short,
    None,
}

#[derive(Debug, Deserialize)]
struct IssuePayload {
    number: u64,
    title: String,
    #[serde(default)]
    body: Option<String>,
    state: State,
    user: User,
    #[serde(default)]
    assignee: Option<User>,
    #[serde(default)]
    milestone: Option<Milestone>,
    #[serde(default)]
    labels: Vec<Value>,
    #[serde(default)]
    comments: u64,
    created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "present", rename = "pull_request")]
    is_pull_request: bool,
}

/// True whenever the key exists, whatever its value.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    IgnoredAny::deserialize(deserializer).map(|_| true)
}

/// An issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    /// Never empty; [`NO_DESCRIPTION`] stands in for a missing body.
    pub body: String,
    pub state: State,
    pub creator: User,
    pub assignee: Option<User>,
    pub milestone: Option<Milestone>,
    pub labels: Vec<Label>,
    /// Comments fetched alongside the issue, in server order.
    pub comments: Vec<Comment>,
    /// Comment count reported by the issue payload itself.
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
    pub is_pull_request: bool,
}

impl Issue {
    /// Build an issue from its payload and, for detail views, its comments.
    pub fn from_value(value: Value, comments: Vec<Value>) -> Result<Self> {
        let payload: IssuePayload = decode(value, "issue")?;

        let labels = payload
            .labels
            .into_iter()
            .map(Label::from_value)
            .collect::<Result<Vec<_>>>()?;
        let comments = comments
            .into_iter()
            .map(Comment::from_value)
            .collect::<Result<Vec<_>>>()?;

        let body = payload
            .body
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        Ok(Self {
            number: payload.number,
            title: payload.title,
            body,
            state: payload.state,
            creator: payload.user,
            assignee: payload.assignee,
            milestone: payload.milestone,
            labels,
            comments,
            comment_count: payload.comments,
            created_at: payload.created_at,
            is_pull_request: payload.is_pull_request,
        })
    }

    /// One line for `list`: number, state chip, PR marker, title, labels and
    /// comment count.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Stylizer and terminal metrics to render with
    /// * `labels` - How labels are drawn; `LabelMode::None` also drops the
    ///   separator that follows them
    /// * `show_comments` - Append the `[N @]` badge
    pub fn print_line(&self, ctx: &RenderContext, labels: LabelMode, show_comments: bool) -> String {
        let mut line = ctx.bold(&pad_left(&format!("#{}", self.number), 6));
        line.push(' ');

        let chip = match self.state {
            State::Open => ctx.paint(" O ", Style::new().bg(OPEN_COLOR)),
            State::Closed => ctx.paint(" C ", Style::new().bg(CLOSED_CHIP_COLOR)),
        };
        line.push_str(&chip);
        line.push(' ');

        if self.is_pull_request {
            line.push_str(&ctx.paint(" P ", Style::new().bg(PULL_REQUEST_COLOR)));
            line.push(' ');
        }

        line.push_str(&self.title);
        line.push(' ');

        // The separator follows the chips even when there are none.
        let chips: Option<Vec<String>> = match labels {
            LabelMode::Full => Some(self.labels.iter().map(|l| l.print_name(ctx)).collect()),
            LabelMode::Short => Some(self.labels.iter().map(|l| l.print_swatch(ctx)).collect()),
            LabelMode::None => None,
        };
        if let Some(chips) = chips {
            line.push_str(&chips.join(" "));
            line.push(' ');
        }

        if show_comments {
            let mark = ctx.paint("@", Style::new().fg(COMMENT_MARK_COLOR));
            line.push_str(&format!("[{} {}]", self.comment_count, mark));
        }

        line.push('\n');
        line
    }

    /// Full view for `show`: header, milestone and assignee, labels, the
    /// wrapped body, then every comment.
    pub fn print_detail(&self, ctx: &RenderContext) -> String {
        let mut out = ctx.bold(&self.title);
        out.push('\n');

        let badge = match self.state {
            State::Open => ctx.paint(" Open ", Style::new().bg(OPEN_COLOR).bold()),
            State::Closed => ctx.paint(" Closed ", Style::new().bg(CLOSED_BADGE_COLOR).bold()),
        };
        out.push_str(&format!(
            "{} {} created this {}\n",
            badge,
            self.creator.print_name(ctx),
            ctx.relative_time(self.created_at)
        ));

        let milestone = match &self.milestone {
            Some(m) => m.progress_bar(ctx),
            None => "No milestone".to_string(),
        };
        let assignee = match &self.assignee {
            Some(u) => format!("Assigned to {}", u.print_name(ctx)),
            None => "No assignee".to_string(),
        };
        out.push_str(&format!("{} - {}\n", milestone, assignee));

        if self.labels.is_empty() {
            out.push_str("No labels");
        } else {
            let chips: Vec<String> = self.labels.iter().map(|l| l.print_name(ctx)).collect();
            out.push_str(&chips.join(" "));
        }
        out.push_str("\n\n");

        out.push_str(&ctx.wrap(&self.body));
        out.push_str("\n\n");

        let count = match self.comments.len() {
            1 => "1 COMMENT".to_string(),
            n => format!("{} COMMENTS", n),
        };
        out.push_str(&ctx.bold(&count));
        out.push('\n');

        for comment in &self.comments {
            out.push_str(&comment.print_detail(ctx));
        }

        out
    }
}
