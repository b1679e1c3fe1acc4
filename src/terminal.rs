//! Terminal dimensions.
//!
//! Everything that lays text out (wrapping, paging, spinner clearing) asks this
//! module for the size of the display instead of querying the OS itself.

use terminal_size::{terminal_size, Height, Width};

pub const DEFAULT_COLUMNS: usize = 80;
pub const DEFAULT_ROWS: usize = 25;

/// Width and height of the output terminal, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalMetrics {
    pub columns: usize,
    pub rows: usize,
}

impl Default for TerminalMetrics {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl TerminalMetrics {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Query the attached terminal.
    ///
    /// Falls back to the `COLUMNS`/`LINES` environment variables when no
    /// terminal is attached, and to 80x25 when those are missing too.
    pub fn detect() -> Self {
        if let Some((Width(w), Height(h))) = terminal_size() {
            if w > 0 && h > 0 {
                return Self::new(w as usize, h as usize);
            }
        }

        Self::from_env(
            std::env::var("COLUMNS").ok().as_deref(),
            std::env::var("LINES").ok().as_deref(),
        )
    }

    fn from_env(columns: Option<&str>, lines: Option<&str>) -> Self {
        let parse = |v: Option<&str>| v.and_then(|s| s.trim().parse::<usize>().ok()).filter(|n| *n > 0);

        match (parse(columns), parse(lines)) {
            (Some(columns), Some(rows)) => Self::new(columns, rows),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_80_by_25() {
        let m = TerminalMetrics::default();
        assert_eq!(m.columns, 80);
        assert_eq!(m.rows, 25);
    }

    #[test]
    fn test_from_env_uses_both_values() {
        let m = TerminalMetrics::from_env(Some("120"), Some("40"));
        assert_eq!(m, TerminalMetrics::new(120, 40));
    }

    #[test]
    fn test_from_env_requires_both_values() {
        assert_eq!(
            TerminalMetrics::from_env(Some("120"), None),
            TerminalMetrics::default()
        );
    }

    #[test]
    fn test_from_env_rejects_garbage_and_zero() {
        assert_eq!(
            TerminalMetrics::from_env(Some("wide"), Some("40")),
            TerminalMetrics::default()
        );
        assert_eq!(
            TerminalMetrics::from_env(Some("0"), Some("40")),
            TerminalMetrics::default()
        );
    }
}
