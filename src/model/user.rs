//! GitHub accounts, as they appear in issue and comment payloads.

use serde::Deserialize;

use crate::render::RenderContext;
use crate::style::Style;

const NAME_COLOR: u32 = 0xFFFF00;

/// A GitHub account, as referenced by issues and comments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
}

impl User {
    pub fn print_name(&self, ctx: &RenderContext) -> String {
        ctx.paint(&self.login, Style::new().fg(NAME_COLOR).bold())
    }
}
