//! Repository labels and their colored chips.

use serde::Deserialize;
use serde_json::Value;

use super::decode;
use crate::error::{GhiError, Result};
use crate::render::RenderContext;
use crate::style::{Rgb, Style};
use crate::text::width;

/// Column the color swatch starts at in `label` listings.
const NAME_WIDTH: usize = 30;

#[derive(Debug, Deserialize)]
struct LabelPayload {
    name: String,
    color: String,
}

/// A repository label with its color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub color: Rgb,
}

impl TryFrom<LabelPayload> for Label {
    type Error = GhiError;

    fn try_from(payload: LabelPayload) -> Result<Self> {
        let color = Rgb::parse(&payload.color).ok_or_else(|| {
            GhiError::InvalidPayload(format!(
                "label \"{}\" has invalid color \"{}\"",
                payload.name, payload.color
            ))
        })?;
        Ok(Self {
            name: payload.name,
            color,
        })
    }
}

impl Label {
    pub fn from_value(value: Value) -> Result<Self> {
        decode::<LabelPayload>(value, "label")?.try_into()
    }

    /// Bold name, padded, followed by a `#RRGGBB` swatch in the label's color.
    pub fn print_line(&self, ctx: &RenderContext) -> String {
        let padding = " ".repeat(NAME_WIDTH.saturating_sub(width(&self.name)));
        let swatch = ctx.paint(&format!(" {} ", self.color), Style::new().on(self.color));
        format!("{}{}{}\n", ctx.bold(&self.name), padding, swatch)
    }

    /// The name as a chip on the label's color.
    pub fn print_name(&self, ctx: &RenderContext) -> String {
        ctx.paint(&format!(" {} ", self.name), Style::new().on(self.color))
    }

    /// A blank one-cell chip in the label's color.
    pub fn print_swatch(&self, ctx: &RenderContext) -> String {
        ctx.paint(" ", Style::new().on(self.color))
    }
}
