//! Error type shared by every ghi command.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhiError {
    #[error("Current directory is no git repo: {0}")]
    NotAGitRepo(PathBuf),

    #[error("Couldn't extract GitHub URL: {0}")]
    NoGitHubRemote(String),

    #[error("You are not authorized to do that. Set `username` and `token` in {0}")]
    Unauthorized(String),

    #[error("Couldn't connect to GitHub. Status Code: {0}")]
    Status(u16),

    #[error("Couldn't connect to GitHub: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Unexpected response payload: {0}")]
    InvalidPayload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shell completion error: {0}")]
    ShellCompletion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GhiError>;
