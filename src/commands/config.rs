//! Config command handler.
//!
//! Shows the effective configuration and where it was read from.

use std::path::Path;

use crate::config::{config_path, Config};
use crate::error::Result;
use crate::output::{BOLD, RESET, YELLOW};

/// The text printed by `ghi config`.
pub fn config_report(config: &Config, path: &Path) -> String {
    let mut report = format!("{BOLD}# {}{RESET}\n", path.display());
    if !path.exists() {
        report.push_str(&format!("{YELLOW}# (file does not exist, using defaults){RESET}\n"));
    }
    report.push('\n');
    report.push_str(&config.to_string());
    report
}

pub fn config_command(config: &Config) -> Result<()> {
    let path = config_path()?;
    println!("{}", config_report(config, &path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_notes_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let report = config_report(&Config::default(), &path);
        assert!(report.contains("file does not exist"));
        assert!(report.contains("api_url  = https://api.github.com"));
    }

    #[test]
    fn test_report_for_existing_file_masks_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();
        let config = Config {
            username: Some("octocat".to_string()),
            token: Some("secret-token".to_string()),
            ..Config::default()
        };
        let report = config_report(&config, &path);
        assert!(!report.contains("file does not exist"));
        assert!(report.contains(&path.display().to_string()));
        assert!(report.contains("token    = secr********"));
    }
}
