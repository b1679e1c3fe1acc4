//! Shared inputs for the record renderers.

use chrono::{DateTime, Utc};

use crate::style::{Style, Stylizer};
use crate::terminal::TerminalMetrics;
use crate::text::{wrap, DEFAULT_INDENT};

/// Everything a renderer needs besides its own record.
///
/// Built once per invocation so rendering stays a pure function of the
/// record, the color capability, the terminal size and the current time.
#[derive(Debug)]
pub struct RenderContext {
    pub stylizer: Stylizer,
    pub metrics: TerminalMetrics,
    pub now: DateTime<Utc>,
}

impl RenderContext {
    pub fn new(stylizer: Stylizer, metrics: TerminalMetrics, now: DateTime<Utc>) -> Self {
        Self {
            stylizer,
            metrics,
            now,
        }
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        self.stylizer.paint(text, style)
    }

    pub fn bold(&self, text: &str) -> String {
        self.stylizer.bold(text)
    }

    /// Wrap a body to the terminal width with the default margin.
    pub fn wrap(&self, text: &str) -> String {
        wrap(text, DEFAULT_INDENT, self.metrics.columns)
    }

    pub fn relative_time(&self, at: DateTime<Utc>) -> String {
        crate::time::relative_time(at, self.now)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Colorless 80x25 context anchored at 2024-06-15 12:00 UTC.
    pub(crate) fn plain_context() -> RenderContext {
        RenderContext::new(
            Stylizer::plain(),
            TerminalMetrics::new(80, 25),
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_plain_context_leaves_text_alone() {
        let ctx = plain_context();
        assert_eq!(ctx.bold("title"), "title");
        assert_eq!(ctx.paint(" O ", Style::new().bg(0x00AA00)), " O ");
    }

    #[test]
    fn test_wrap_uses_terminal_width() {
        let ctx = RenderContext::new(
            Stylizer::plain(),
            TerminalMetrics::new(20, 25),
            Utc::now(),
        );
        assert_eq!(
            ctx.wrap("aaaaaaaaaa bbbbbbbbbb"),
            "  aaaaaaaaaa\n  bbbbbbbbbb"
        );
    }

    #[test]
    fn test_relative_time_uses_injected_now() {
        let ctx = plain_context();
        let at = Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
        assert_eq!(ctx.relative_time(at), "2 hours ago");
    }
}
