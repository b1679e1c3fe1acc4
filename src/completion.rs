//! Shell completion scripts for ghi.
//!
//! `ghi completions [shell]` writes a script for bash, zsh or fish to stdout.
//! Without an argument the shell is taken from `$SHELL`.

use crate::cli::Cli;
use crate::error::{GhiError, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Names accepted by [`ShellType::from_name`].
pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish"];

/// Supported shell types for completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Convert to the `clap_complete::Shell` type.
    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(GhiError::ShellCompletion(format!(
                "Unsupported shell: '{}'. Supported shells are: {}.",
                name,
                SUPPORTED_SHELLS.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the user's shell from the `$SHELL` environment variable.
pub fn detect_shell() -> Result<ShellType> {
    let shell_path = std::env::var("SHELL").map_err(|_| {
        GhiError::ShellCompletion(
            "$SHELL environment variable is not set. \
             Pass the shell name explicitly, e.g. `ghi completions zsh`."
                .to_string(),
        )
    })?;

    parse_shell_from_path(&shell_path)
}

/// Parse a shell type from a path such as `/usr/local/bin/fish`.
pub fn parse_shell_from_path(shell_path: &str) -> Result<ShellType> {
    let shell_name = std::path::Path::new(shell_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(shell_path);

    ShellType::from_name(shell_name)
}

/// Generate a completion script covering every ghi command and flag.
pub fn generate_completion_script(shell: ShellType) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell.to_clap_shell(), &mut cmd, "ghi", &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}

/// Write the script for `shell` (or the detected shell) to stdout.
pub fn completions_command(shell: Option<&str>) -> Result<()> {
    let shell = match shell {
        Some(name) => ShellType::from_name(name)?,
        None => detect_shell()?,
    };
    let script = generate_completion_script(shell);
    std::io::stdout().write_all(script.as_bytes())?;
    Ok(())
}
