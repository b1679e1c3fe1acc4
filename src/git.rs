//! Repository discovery from local git metadata.

use crate::error::{GhiError, Result};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// How many parent directories to search for `.git`.
const MAX_DEPTH: usize = 20;

/// A GitHub repository, as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Path prefix for REST endpoints, e.g. `repos/octocat/hello`.
    pub fn api_path(&self) -> String {
        format!("repos/{}/{}", self.owner, self.name)
    }

    pub fn issue_url(&self, number: u64) -> String {
        format!("https://github.com/{}/{}/issues/{}", self.owner, self.name, number)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Find the `.git` directory for `start` or one of its ancestors.
pub fn find_git_dir(start: &Path) -> Result<PathBuf> {
    let mut current = Some(start);
    for _ in 0..MAX_DEPTH {
        let Some(dir) = current else { break };
        let candidate = dir.join(".git");
        if candidate.is_dir() {
            return Ok(candidate);
        }
        current = dir.parent();
    }
    Err(GhiError::NotAGitRepo(start.to_path_buf()))
}

/// The url of `[remote "origin"]` in a git config file.
pub fn origin_url(git_config: &str) -> Option<String> {
    let mut in_origin = false;
    for line in git_config.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_origin = line == "[remote \"origin\"]";
            continue;
        }
        if !in_origin {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "url" {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

fn github_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"github\.com[/:]([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?/?$")
            .expect("valid regex")
    })
}

/// Extract owner and name from an https or ssh GitHub remote url.
pub fn parse_github_url(url: &str) -> Option<Repository> {
    let caps = github_url_regex().captures(url.trim())?;
    Some(Repository::new(&caps[1], &caps[2]))
}

/// Work out which GitHub repository `cwd` belongs to.
pub fn discover_repository(cwd: &Path) -> Result<Repository> {
    let git_dir = find_git_dir(cwd)?;
    let config_path = git_dir.join("config");
    let config = fs::read_to_string(&config_path).map_err(|e| {
        GhiError::NoGitHubRemote(format!("cannot read {}: {}", config_path.display(), e))
    })?;

    let url = origin_url(&config)
        .ok_or_else(|| GhiError::NoGitHubRemote("no \"origin\" remote configured".to_string()))?;

    parse_github_url(&url)
        .ok_or_else(|| GhiError::NoGitHubRemote(format!("\"{}\" is not a GitHub url", url)))
}
