//! CLI command handlers for ghi.
//!
//! Each command builds REST requests for the current repository, turns the
//! responses into [`crate::model`] records and hands the rendered text to the
//! session's [`Presenter`].
//!
//! # Commands
//!
//! - [`list`] - One line per issue, with filters
//! - [`show`] - Issue detail with comments
//! - [`edit`] - Change fields; `open`, `close` and `assign` are shorthands
//! - [`create`] - Open a new issue
//! - [`comment`] - Comment on an issue
//! - [`milestone`] - Milestones with progress bars
//! - [`label`] - Labels with their colors
//! - [`config`] - Effective configuration

mod comment;
mod config;
mod create;
mod edit;
mod label;
mod list;
mod milestone;
mod show;

pub use comment::comment_command;
pub use config::{config_command, config_report};
pub use create::create_command;
pub use edit::{assign_command, close_command, edit_command, open_command, Assignee, EditOptions};
pub use label::label_command;
pub use list::{list_command, IssueType, ListOptions, StateFilter};
pub use milestone::milestone_command;
pub use show::show_command;

use crate::api::Transport;
use crate::config::Config;
use crate::display::Presenter;
use crate::git::Repository;
use crate::progress::Spinner;
use crate::render::RenderContext;
use crate::style::Style;

const HEADING_COLOR: u32 = 0x00FF00;
const SPINNER_MESSAGE: &str = "Talking to GitHub";

/// Shown instead of an empty listing.
pub const NO_RESULTS: &str = "No results.";

/// Everything a command needs for one invocation.
pub struct Session<T: Transport, P: Presenter> {
    pub transport: T,
    pub presenter: P,
    pub repo: Repository,
    pub ctx: RenderContext,
    pub config: Config,
    /// Draw the activity spinner while requests are outstanding.
    pub show_spinner: bool,
}

impl<T: Transport, P: Presenter> Session<T, P> {
    /// Print a bold green heading right away.
    pub fn heading(&mut self, text: &str) {
        let heading = self.ctx.paint(text, Style::new().fg(HEADING_COLOR).bold());
        self.presenter.line(&heading);
    }

    /// Start the spinner, or a hidden one when spinners are off.
    ///
    /// Dropping the returned spinner stops it, so early returns through `?`
    /// always clear it before the error is printed.
    pub fn spinner(&self) -> Spinner {
        if self.show_spinner {
            Spinner::start(SPINNER_MESSAGE)
        } else {
            Spinner::hidden()
        }
    }

    pub fn issues_path(&self) -> String {
        format!("{}/issues", self.repo.api_path())
    }

    pub fn issue_path(&self, number: u64) -> String {
        format!("{}/issues/{}", self.repo.api_path(), number)
    }

    /// Page `lines`, or [`NO_RESULTS`] when there are none.
    pub fn page_lines(&mut self, lines: Vec<String>) {
        if lines.is_empty() {
            self.presenter.page(NO_RESULTS);
        } else {
            self.presenter.page(&lines.concat());
        }
    }
}
