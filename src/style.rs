//! Terminal text styling.
//!
//! A [`Stylizer`] turns a logical style request (foreground, background, bold)
//! into escape sequences. How a 24-bit color is encoded depends on what the
//! terminal can show, so that decision lives behind [`ColorEncoder`], picked
//! once at startup from [`ColorMode`].

use serde::{Deserialize, Serialize};
use std::fmt;

const BOLD_ON: &str = "\x1b[1m";
const BOLD_OFF: &str = "\x1b[22m";
const RESET_FG: &str = "\x1b[39m";
const RESET_BG: &str = "\x1b[49m";

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::from_hex(0x000000);
    pub const WHITE: Rgb = Rgb::from_hex(0xFFFFFF);

    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Parse a six-digit hex string such as `"fc2929"` (a leading `#` is allowed).
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }

    /// Perceived brightness in `[0, 1]`.
    pub fn brightness(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// The legible text color to put on top of this color.
    pub fn contrast(&self) -> Rgb {
        if self.brightness() > 0.5 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }

    fn distance(&self, other: &Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Encodes colors as terminal escape sequences.
pub trait ColorEncoder: Send + Sync + fmt::Debug {
    fn foreground(&self, color: Rgb) -> String;
    fn background(&self, color: Rgb) -> String;
}

/// Direct 24-bit escape sequences.
#[derive(Debug, Default)]
pub struct TrueColor;

impl ColorEncoder for TrueColor {
    fn foreground(&self, color: Rgb) -> String {
        format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }

    fn background(&self, color: Rgb) -> String {
        format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// The eight base colors, in SGR order. Ties resolve to the earlier entry.
const ANSI8_PALETTE: [Rgb; 8] = [
    Rgb::from_hex(0x000000),
    Rgb::from_hex(0xFF0000),
    Rgb::from_hex(0x00FF00),
    Rgb::from_hex(0xFFFF00),
    Rgb::from_hex(0x0000FF),
    Rgb::from_hex(0xFF00FF),
    Rgb::from_hex(0x00FFFF),
    Rgb::from_hex(0xFFFFFF),
];

/// Nearest-match mapping onto the fixed 8-color palette.
#[derive(Debug, Default)]
pub struct Ansi8;

impl Ansi8 {
    /// Index into the base palette of the color closest to `color`.
    pub fn nearest(color: Rgb) -> usize {
        let mut best = 0;
        let mut best_distance = u32::MAX;
        for (index, candidate) in ANSI8_PALETTE.iter().enumerate() {
            let distance = color.distance(candidate);
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }
}

impl ColorEncoder for Ansi8 {
    fn foreground(&self, color: Rgb) -> String {
        format!("\x1b[{}m", 30 + Self::nearest(color))
    }

    fn background(&self, color: Rgb) -> String {
        format!("\x1b[{}m", 40 + Self::nearest(color))
    }
}

/// Which color capability to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Pick based on the platform.
    #[default]
    Auto,
    TrueColor,
    Ansi8,
    /// No escape sequences at all.
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Auto => "auto",
            ColorMode::TrueColor => "truecolor",
            ColorMode::Ansi8 => "ansi8",
            ColorMode::Never => "never",
        };
        f.write_str(name)
    }
}

/// A style request: optional colors and a bold flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, hex: u32) -> Self {
        self.fg = Some(Rgb::from_hex(hex));
        self
    }

    pub fn bg(mut self, hex: u32) -> Self {
        self.bg = Some(Rgb::from_hex(hex));
        self
    }

    pub fn on(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Applies [`Style`]s to text using the capability chosen at startup.
#[derive(Debug)]
pub struct Stylizer {
    encoder: Option<Box<dyn ColorEncoder>>,
}

impl Stylizer {
    pub fn new(encoder: Box<dyn ColorEncoder>) -> Self {
        Self {
            encoder: Some(encoder),
        }
    }

    /// A stylizer that returns text untouched.
    pub fn plain() -> Self {
        Self { encoder: None }
    }

    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::TrueColor => Self::new(Box::new(TrueColor)),
            ColorMode::Ansi8 => Self::new(Box::new(Ansi8)),
            ColorMode::Never => Self::plain(),
            ColorMode::Auto if cfg!(windows) => Self::new(Box::new(Ansi8)),
            ColorMode::Auto => Self::new(Box::new(TrueColor)),
        }
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        let Some(encoder) = &self.encoder else {
            return text.to_string();
        };

        let text = if style.bold {
            format!("{BOLD_ON}{text}{BOLD_OFF}")
        } else {
            text.to_string()
        };

        match (style.fg, style.bg) {
            (fg, Some(bg)) => {
                let fg = fg.unwrap_or_else(|| bg.contrast());
                format!(
                    "{}{}{text}{RESET_FG}{RESET_BG}",
                    encoder.background(bg),
                    encoder.foreground(fg)
                )
            }
            (Some(fg), None) => format!("{}{text}{RESET_FG}", encoder.foreground(fg)),
            (None, None) => text,
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }
}
