//! ghi: GitHub issues in the terminal.
//!
//! The repository is inferred from the `origin` remote of the git checkout
//! the command runs in. [`run`] wires configuration, the REST client and the
//! terminal together and hands the parsed command to [`dispatch`].

pub mod api;
pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod display;
pub mod error;
pub mod git;
pub mod model;
pub mod output;
pub mod pager;
pub mod progress;
pub mod render;
pub mod style;
pub mod terminal;
pub mod text;
pub mod time;

#[cfg(test)]
mod test_utils;

pub use error::{GhiError, Result};

use std::io::IsTerminal;

use chrono::Utc;
use clap::CommandFactory;
use tracing::debug;

use crate::api::{GitHubClient, Transport};
use crate::cli::{assignee_from_args, Cli, Commands, ListArgs};
use crate::commands::{
    assign_command, close_command, comment_command, config_command, create_command,
    edit_command, label_command, list_command, milestone_command, open_command, show_command,
    Session,
};
use crate::completion::completions_command;
use crate::config::load_config;
use crate::display::{Presenter, TerminalPresenter};
use crate::git::discover_repository;
use crate::output::{init_logging, print_warning};
use crate::render::RenderContext;
use crate::style::Stylizer;
use crate::terminal::TerminalMetrics;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let (config, problem) = load_config();
    if let Some(e) = problem {
        print_warning(&format!("{} Continuing with defaults.", e));
    }

    match &cli.command {
        Some(Commands::Completions { shell }) => return completions_command(shell.as_deref()),
        Some(Commands::Config) => return config_command(&config),
        _ => {}
    }

    let repo = discover_repository(&std::env::current_dir()?)?;
    debug!("repository {}", repo);

    let metrics = TerminalMetrics::detect();
    let no_color = cli.no_color || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let stylizer = Stylizer::for_mode(config.effective_color(no_color));

    let mut session = Session {
        transport: GitHubClient::new(&config)?,
        presenter: TerminalPresenter::new(metrics, config.pager.clone()),
        repo,
        ctx: RenderContext::new(stylizer, metrics, Utc::now()),
        show_spinner: std::io::stderr().is_terminal() && !cli.verbose,
        config,
    };

    let command = cli
        .command
        .unwrap_or_else(|| Commands::List(ListArgs::default()));
    dispatch(&mut session, command)
}

/// Route one command to its handler.
pub fn dispatch<T: Transport, P: Presenter>(
    session: &mut Session<T, P>,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::List(args) => {
            let options = args.resolve(&session.config)?;
            list_command(session, &options)
        }
        Commands::Show { issue, browser } => show_command(session, issue, browser),
        Commands::Edit(args) => {
            if !edit_command(session, args.issue, &args.options())? {
                print_subcommand_help("edit")?;
            }
            Ok(())
        }
        Commands::Open { issue } => open_command(session, issue),
        Commands::Close { issue } => close_command(session, issue),
        Commands::Assign {
            issue,
            assignee,
            none,
            me,
        } => assign_command(session, issue, assignee_from_args(assignee, none, me)),
        Commands::Create { title, body } => create_command(session, &title, body.as_deref()),
        Commands::Comment { issue, text } => comment_command(session, issue, &text),
        Commands::Milestone(args) => milestone_command(session, args.state()),
        Commands::Label => label_command(session),
        Commands::Config => config_command(&session.config),
        Commands::Completions { shell } => completions_command(shell.as_deref()),
    }
}

fn print_subcommand_help(name: &str) -> Result<()> {
    if let Some(help) = subcommand_help(name) {
        print!("{}", help);
    }
    Ok(())
}

/// Help text for one sub-command, with the full `ghi <name>` usage line.
fn subcommand_help(name: &str) -> Option<String> {
    let mut cli = Cli::command();
    cli.build();
    cli.find_subcommand_mut(name)
        .map(|sub| sub.render_help().to_string())
}
