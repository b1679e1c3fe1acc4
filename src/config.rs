//! Configuration management for ghi.
//!
//! Settings live in `~/.config/ghi/config.toml`. Every key is optional, so a
//! missing file and an empty one behave the same.

use crate::error::{GhiError, Result};
use crate::pager::DEFAULT_PAGER;
use crate::style::ColorMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "ghi";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// User configuration, read from `~/.config/ghi/config.toml`.
///
/// Every key is optional; a missing file behaves like an empty one.
///
/// ```toml
/// username = "octocat"
/// token = "ghp_..."
/// api_url = "https://api.github.com"
/// pager = "less -R"
/// color = "auto"   # auto | truecolor | ansi8 | never
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Account name used for basic auth and for `--mine` / `--me`.
    #[serde(default)]
    pub username: Option<String>,

    /// Personal access token (or password) paired with `username`.
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_pager")]
    pub pager: String,

    #[serde(default)]
    pub color: ColorMode,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_pager() -> String {
    DEFAULT_PAGER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: None,
            token: None,
            api_url: default_api_url(),
            pager: default_pager(),
            color: ColorMode::default(),
        }
    }
}

/// Stored credentials for authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Config {
    /// Both `username` and `token`, or nothing.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.token) {
            (Some(username), Some(token)) if !username.is_empty() && !token.is_empty() => {
                Some(Credentials {
                    username: username.clone(),
                    token: token.clone(),
                })
            }
            _ => None,
        }
    }

    /// The configured username, required by `--mine` and `--me`.
    pub fn require_username(&self) -> Result<&str> {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                GhiError::Config(format!(
                    "`username` is not set in {}",
                    display_config_path()
                ))
            })
    }

    /// Color capability after applying the `NO_COLOR` convention.
    ///
    /// # Arguments
    ///
    /// * `no_color_env` - whether `--no-color` was given or `NO_COLOR` is set
    ///   to a non-empty value; either one wins over the configured mode
    pub fn effective_color(&self, no_color_env: bool) -> ColorMode {
        if no_color_env {
            ColorMode::Never
        } else {
            self.color
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unset = "(not set)".to_string();
        writeln!(f, "username = {}", self.username.as_ref().unwrap_or(&unset))?;
        let token = match &self.token {
            Some(t) if !t.is_empty() => mask(t),
            _ => unset,
        };
        writeln!(f, "token    = {}", token)?;
        writeln!(f, "api_url  = {}", self.api_url)?;
        writeln!(f, "pager    = {}", self.pager)?;
        write!(f, "color    = {}", self.color)
    }
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{}{}", visible, "*".repeat(secret.chars().count().saturating_sub(4)))
}

/// Get the ghi config directory path (~/.config/ghi/).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| GhiError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Get the path to the config file.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Config path for messages, even when the home directory is unknown.
pub fn display_config_path() -> String {
    config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| format!("~/.config/{}/{}", CONFIG_DIR_NAME, CONFIG_FILE_NAME))
}

/// Load a config file. A missing file yields the defaults.
///
/// # Arguments
///
/// * `path` - Location of the TOML file
///
/// # Returns
///
/// * `Ok(Config)` with defaults filled in for absent keys
/// * `Err(GhiError::Config)` if the file exists but cannot be read or parsed
pub fn load_config_at(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        GhiError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    toml::from_str(&content)
        .map_err(|e| GhiError::Config(format!("Couldn't parse {}: {}", path.display(), e)))
}

/// Load the user config.
///
/// Returns the defaults together with the problem when the file exists but
/// cannot be read or parsed; callers report it as a warning and carry on.
pub fn load_config() -> (Config, Option<GhiError>) {
    match config_path().and_then(|path| load_config_at(&path)) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_at(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.pager, "less -R");
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "username = \"octocat\"\n");
        let config = load_config_at(&path).unwrap();
        assert_eq!(config.username.as_deref(), Some("octocat"));
        assert_eq!(config.token, None);
        assert_eq!(config.pager, "less -R");
    }

    #[test]
    fn test_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
username = "octocat"
token = "secret"
api_url = "https://ghe.example.com/api/v3"
pager = "more"
color = "ansi8"
"#,
        );
        let config = load_config_at(&path).unwrap();
        assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.pager, "more");
        assert_eq!(config.color, ColorMode::Ansi8);
        assert_eq!(
            config.credentials(),
            Some(Credentials {
                username: "octocat".to_string(),
                token: "secret".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_config_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "username = [unterminated");
        let err = load_config_at(&path).unwrap_err();
        assert!(matches!(err, GhiError::Config(_)));
        assert!(err.to_string().contains("Couldn't parse"));
    }

    #[test]
    fn test_credentials_need_both_halves() {
        let config = Config {
            username: Some("octocat".to_string()),
            ..Config::default()
        };
        assert_eq!(config.credentials(), None);

        let config = Config {
            username: Some("octocat".to_string()),
            token: Some(String::new()),
            ..Config::default()
        };
        assert_eq!(config.credentials(), None);
    }

    #[test]
    fn test_require_username() {
        let config = Config::default();
        assert!(matches!(config.require_username(), Err(GhiError::Config(_))));

        let config = Config {
            username: Some("octocat".to_string()),
            ..Config::default()
        };
        assert_eq!(config.require_username().unwrap(), "octocat");
    }

    #[test]
    fn test_no_color_env_forces_never() {
        let config = Config {
            color: ColorMode::TrueColor,
            ..Config::default()
        };
        assert_eq!(config.effective_color(true), ColorMode::Never);
        assert_eq!(config.effective_color(false), ColorMode::TrueColor);
    }

    #[test]
    fn test_display_masks_token() {
        let config = Config {
            username: Some("octocat".to_string()),
            token: Some("ghp_abcdefgh".to_string()),
            ..Config::default()
        };
        let shown = config.to_string();
        assert!(shown.contains("username = octocat"));
        assert!(shown.contains("token    = ghp_********"));
        assert!(!shown.contains("abcdefgh"));
    }

    #[test]
    fn test_display_marks_unset_values() {
        let shown = Config::default().to_string();
        assert!(shown.contains("username = (not set)"));
        assert!(shown.contains("token    = (not set)"));
    }

    #[test]
    fn test_config_dir_ends_with_ghi() {
        let dir = config_dir().unwrap();
        assert!(dir.ends_with(".config/ghi"));
    }
}
