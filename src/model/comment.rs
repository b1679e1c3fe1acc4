//! Issue comments.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::{decode, User};
use crate::error::Result;
use crate::render::RenderContext;

#[derive(Debug, Deserialize)]
struct CommentPayload {
    user: User,
    #[serde(default)]
    body: Option<String>,
    created_at: DateTime<Utc>,
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub author: User,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentPayload> for Comment {
    fn from(payload: CommentPayload) -> Self {
        Self {
            author: payload.user,
            body: payload.body.unwrap_or_default(),
            created_at: payload.created_at,
        }
    }
}

impl Comment {
    pub fn from_value(value: Value) -> Result<Self> {
        decode::<CommentPayload>(value, "comment").map(Comment::from)
    }

    /// Blank line, "`author` wrote `when`:", then the wrapped body.
    pub fn print_detail(&self, ctx: &RenderContext) -> String {
        let header = ctx.bold(&format!(" wrote {}:", ctx.relative_time(self.created_at)));
        format!(
            "\n{}{}\n{}\n",
            self.author.print_name(ctx),
            header,
            ctx.wrap(&self.body)
        )
    }
}
