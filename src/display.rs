//! Where command output goes.
//!
//! The `Presenter` trait lets commands write headings, paged bodies and open
//! web pages without knowing whether they talk to a real terminal or to a
//! test recorder.

use crate::error::{GhiError, Result};
use crate::pager;
use crate::terminal::TerminalMetrics;

// ============================================================================
// Presenter Trait
// ============================================================================

pub trait Presenter {
    /// Print one already styled line immediately, e.g. a heading shown while
    /// the request is still running.
    fn line(&mut self, text: &str);

    /// Show a formatted body, paging it when it is taller than the screen.
    fn page(&mut self, text: &str);

    /// Open `url` in the user's browser.
    fn open_url(&mut self, url: &str) -> Result<()>;
}

// ============================================================================
// TerminalPresenter
// ============================================================================

/// Presenter for interactive use: stdout, the configured pager and the
/// system browser.
#[derive(Debug)]
pub struct TerminalPresenter {
    metrics: TerminalMetrics,
    pager_command: String,
}

impl TerminalPresenter {
    pub fn new(metrics: TerminalMetrics, pager_command: impl Into<String>) -> Self {
        Self {
            metrics,
            pager_command: pager_command.into(),
        }
    }
}

impl Presenter for TerminalPresenter {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn page(&mut self, text: &str) {
        pager::page(text, &self.metrics, &self.pager_command);
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        open::that(url)
            .map_err(|e| GhiError::Io(std::io::Error::new(e.kind(), format!("cannot open {}: {}", url, e))))
    }
}

// ============================================================================
// Recorder (tests)
// ============================================================================


#[cfg(test)]
mod tests {
    use super::recorder::{Output, Recorder};
    use super::*;

    #[test]
    fn test_recorder_keeps_order() {
        let mut recorder = Recorder::default();
        recorder.line("heading");
        recorder.page("body");
        recorder.open_url("https://github.com").unwrap();

        assert_eq!(
            recorder.outputs,
            vec![
                Output::Line("heading".to_string()),
                Output::Page("body".to_string()),
                Output::Browser("https://github.com".to_string()),
            ]
        );
        assert_eq!(recorder.lines(), ["heading"]);
        assert_eq!(recorder.pages(), ["body"]);
    }

    #[test]
    fn test_terminal_presenter_keeps_pager_command() {
        let presenter = TerminalPresenter::new(TerminalMetrics::new(100, 40), "more");
        assert_eq!(presenter.pager_command, "more");
        assert_eq!(presenter.metrics.rows, 40);
    }
}
