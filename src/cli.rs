//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};

use crate::commands::{Assignee, EditOptions, IssueType, ListOptions, StateFilter};
use crate::config::Config;
use crate::error::Result;
use crate::model::{LabelMode, State};

#[derive(Parser, Debug)]
#[command(name = "ghi")]
#[command(
    version,
    about = "Browse and edit GitHub issues of the repository you are in",
    after_help = "EXAMPLES:
    ghi                          # Open issues of the current repository
    ghi list --closed --mine     # Closed issues assigned to you
    ghi show 42                  # Issue #42 with its comments
    ghi close 42                 # Close issue #42
    ghi comment 42 \"Fixed in 1.2\"

CONFIG:
    Credentials live in ~/.config/ghi/config.toml (`username`, `token`).
    Reading public repositories works without them."
)]
pub struct Cli {
    /// Log every request to stderr (same as GHI_LOG=ghi=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List issues (default command)
    List(ListArgs),

    /// Show an issue with its comments
    Show {
        issue: u64,

        /// Open the issue on github.com instead
        #[arg(short, long)]
        browser: bool,
    },

    /// Edit an issue
    Edit(EditArgs),

    /// Reopen an issue
    Open { issue: u64 },

    /// Close an issue
    Close { issue: u64 },

    /// Assign an issue, or remove its assignee
    Assign {
        issue: u64,

        /// Login to assign; empty removes the assignee
        #[arg(conflicts_with_all = ["none", "me"])]
        assignee: Option<String>,

        /// Remove the assignee
        #[arg(long, conflicts_with = "me")]
        none: bool,

        /// Assign yourself (needs `username` in the config)
        #[arg(long)]
        me: bool,
    },

    /// Create an issue
    Create {
        title: String,
        body: Option<String>,
    },

    /// Comment on an issue
    Comment { issue: u64, text: String },

    /// List milestones
    Milestone(MilestoneArgs),

    /// List labels
    Label,

    /// Show the effective configuration
    Config,

    /// Output shell completion script to stdout (hidden utility command)
    #[command(hide = true)]
    Completions {
        /// bash, zsh or fish; detected from $SHELL when omitted
        shell: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Issue state
    #[arg(short, long, value_enum, default_value_t = StateFilter::Open)]
    pub state: StateFilter,

    /// Same as --state closed
    #[arg(long, conflicts_with_all = ["state", "all"])]
    pub closed: bool,

    /// Same as --state all
    #[arg(long, conflicts_with = "state")]
    pub all: bool,

    /// Only issues in this milestone
    #[arg(short, long)]
    pub milestone: Option<u64>,

    /// Only issues with these labels (comma separated)
    #[arg(short, long)]
    pub labels: Option<String>,

    /// Only issues assigned to this user
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// Only issues assigned to you
    #[arg(long, conflicts_with_all = ["assignee", "noassignee"])]
    pub mine: bool,

    /// Only unassigned issues
    #[arg(long, conflicts_with = "assignee")]
    pub noassignee: bool,

    /// Only issues created by this user
    #[arg(short, long)]
    pub creator: Option<String>,

    /// Only issues or only pull requests
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<IssueType>,

    /// Same as --type issues
    #[arg(long, conflicts_with_all = ["kind", "prs"])]
    pub issues: bool,

    /// Same as --type prs
    #[arg(long, conflicts_with = "kind")]
    pub prs: bool,

    /// Hide labels
    #[arg(long, conflicts_with = "shortlabels")]
    pub nolabels: bool,

    /// Show labels as color swatches only
    #[arg(long)]
    pub shortlabels: bool,

    /// Hide comment counts
    #[arg(long)]
    pub nocomments: bool,
}

impl ListArgs {
    /// Fold the shorthand flags into [`ListOptions`].
    pub fn resolve(&self, config: &Config) -> Result<ListOptions> {
        let state = if self.closed {
            StateFilter::Closed
        } else if self.all {
            StateFilter::All
        } else {
            self.state
        };

        let assignee = if self.mine {
            Some(config.require_username()?.to_string())
        } else if self.noassignee {
            Some("none".to_string())
        } else {
            self.assignee.clone()
        };

        let kind = if self.issues {
            Some(IssueType::Issues)
        } else if self.prs {
            Some(IssueType::Prs)
        } else {
            self.kind
        };

        let label_mode = if self.nolabels {
            LabelMode::None
        } else if self.shortlabels {
            LabelMode::Short
        } else {
            LabelMode::Full
        };

        Ok(ListOptions {
            state,
            milestone: self.milestone,
            labels: self.labels.clone(),
            assignee,
            creator: self.creator.clone(),
            kind,
            label_mode,
            show_comments: !self.nocomments,
        })
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    pub issue: u64,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New body
    #[arg(short, long)]
    pub body: Option<String>,

    /// Assignee login, or "none" to unassign
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// New state
    #[arg(short, long, value_enum)]
    pub state: Option<State>,

    /// Milestone number
    #[arg(short, long)]
    pub milestone: Option<u64>,

    /// Labels, comma separated; replaces the current labels
    #[arg(short, long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,
}

impl EditArgs {
    pub fn options(&self) -> EditOptions {
        EditOptions {
            title: self.title.clone(),
            body: self.body.clone(),
            assignee: self.assignee.clone(),
            state: self.state,
            milestone: self.milestone,
            labels: self.labels.clone(),
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneArgs {
    /// Milestone state
    #[arg(short, long, value_enum, default_value_t = StateFilter::Open)]
    pub state: StateFilter,

    /// Same as --state closed
    #[arg(long, conflicts_with_all = ["state", "all"])]
    pub closed: bool,

    /// Same as --state all
    #[arg(long, conflicts_with = "state")]
    pub all: bool,
}

impl MilestoneArgs {
    pub fn state(&self) -> StateFilter {
        if self.closed {
            StateFilter::Closed
        } else if self.all {
            StateFilter::All
        } else {
            self.state
        }
    }
}

/// Map the `assign` arguments onto an [`Assignee`].
pub fn assignee_from_args(assignee: Option<String>, none: bool, me: bool) -> Assignee {
    if me {
        Assignee::Me
    } else if none {
        Assignee::Nobody
    } else {
        match assignee {
            Some(login) => Assignee::User(login),
            None => Assignee::Nobody,
        }
    }
}
