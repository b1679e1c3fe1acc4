//! Milestones and their progress bars.
//!
//! A bar is 30 columns wide. The highlighted share is
//! `closed / (open + closed)`, floored.

use serde::Deserialize;
use serde_json::Value;

use super::{decode, State};
use crate::error::Result;
use crate::render::RenderContext;
use crate::style::Style;
use crate::text::{pad_left, pad_right};

const BAR_WIDTH: u64 = 30;
const TITLE_WIDTH: usize = 14;
const COUNT_WIDTH: usize = 14;
const FILL_COLOR: u32 = 0x00DD00;

/// A milestone and its issue counts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
    pub state: State,
    pub open_issues: u64,
    pub closed_issues: u64,
}

impl Milestone {
    pub fn from_value(value: Value) -> Result<Self> {
        decode(value, "milestone")
    }

    pub fn total(&self) -> u64 {
        self.open_issues + self.closed_issues
    }

    /// Completion in percent, 0 when the milestone has no issues.
    pub fn percentage(&self) -> u64 {
        match self.total() {
            0 => 0,
            total => (self.closed_issues as f64 * 100.0 / total as f64).round_ties_even() as u64,
        }
    }

    /// How many leading characters of the bar are highlighted.
    pub fn filled_width(&self) -> usize {
        match self.total() {
            0 => 0,
            total => (BAR_WIDTH * self.closed_issues / total) as usize,
        }
    }

    /// `[ title        75% (3/4) ]` with the completed part highlighted.
    pub fn progress_bar(&self, ctx: &RenderContext) -> String {
        let counts = format!(
            "{}% ({}/{})",
            self.percentage(),
            self.closed_issues,
            self.total()
        );
        let inner = format!(
            " {}{} ",
            pad_right(&self.title, TITLE_WIDTH),
            pad_left(&counts, COUNT_WIDTH)
        );

        let split = inner
            .char_indices()
            .nth(self.filled_width())
            .map_or(inner.len(), |(i, _)| i);
        let (filled, unfilled) = inner.split_at(split);
        let filled = if filled.is_empty() {
            String::new()
        } else {
            ctx.paint(filled, Style::new().bg(FILL_COLOR))
        };

        format!("{}{}{}{}", ctx.bold("["), filled, unfilled, ctx.bold("]"))
    }

    /// Number, state chip and progress bar for the `milestone` listing.
    pub fn print_line(&self, ctx: &RenderContext) -> String {
        let number = ctx.bold(&pad_left(&format!("#{}", self.number), 4));
        let chip = match self.state {
            State::Open => ctx.paint(" O ", Style::new().fg(0xFFFFFF).bg(0x00AA00)),
            State::Closed => ctx.paint(" C ", Style::new().fg(0xFFFFFF).bg(0xDD0000)),
        };
        format!("{} {} {}\n", number, chip, self.progress_bar(ctx))
    }
}
