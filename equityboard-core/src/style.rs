//! Shared style tokens threaded identically into every panel.
//!
//! # Palette
//! - **Positive / Negative**: chart marks for gains and losses (monthly bars)
//! - **Profit bar / Loss bar**: translucent per-trade bars on the equity chart
//! - **Equity / Drawdown stroke**: line colours of the two time-series panels
//! - **Text positive / negative / neutral**: card values and table accents
//! - **Muted**: captions and secondary text

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::Accent;

/// An sRGB colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour '{0}': expected #rrggbb, rgb(r, g, b) or rgba(r, g, b, a)")]
pub struct ColorParseError(pub String);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let text = s.trim();

        if let Some(hex) = text.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(err());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let (args, with_alpha) = if let Some(rest) = text.strip_prefix("rgba(") {
            (rest.strip_suffix(')').ok_or_else(err)?, true)
        } else if let Some(rest) = text.strip_prefix("rgb(") {
            (rest.strip_suffix(')').ok_or_else(err)?, false)
        } else {
            return Err(err());
        };

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(err());
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| err());
        let a = if with_alpha {
            let a: f32 = parts[3].parse().map_err(|_| err())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(err());
            }
            a
        } else {
            1.0
        };
        Ok(Color::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub positive: Color,
    pub negative: Color,
    pub profit_bar: Color,
    pub loss_bar: Color,
    pub equity_stroke: Color,
    pub drawdown_stroke: Color,
    pub text_positive: Color,
    pub text_negative: Color,
    pub text_neutral: Color,
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            positive: Color::rgb(0x82, 0xca, 0x9d),
            negative: Color::rgb(0xff, 0x6b, 0x6b),
            profit_bar: Color::rgba(76, 175, 80, 0.6),
            loss_bar: Color::rgba(244, 67, 54, 0.6),
            equity_stroke: Color::rgb(0x82, 0xca, 0x9d),
            drawdown_stroke: Color::rgb(0xff, 0x6b, 0x6b),
            text_positive: Color::rgb(0x22, 0xc5, 0x5e),
            text_negative: Color::rgb(0xef, 0x44, 0x44),
            text_neutral: Color::rgb(0xe5, 0xe7, 0xeb),
            muted: Color::rgb(0x6b, 0x72, 0x80),
        }
    }
}

impl Palette {
    /// Colour for card values and table text.
    pub fn text(&self, accent: Accent) -> Color {
        match accent {
            Accent::Positive => self.text_positive,
            Accent::Negative => self.text_negative,
            Accent::Neutral => self.text_neutral,
        }
    }

    /// Colour for solid chart marks such as monthly bars.
    pub fn mark(&self, accent: Accent) -> Color {
        match accent {
            Accent::Positive => self.positive,
            Accent::Negative => self.negative,
            Accent::Neutral => self.muted,
        }
    }

    /// Colour for the translucent per-trade bars.
    pub fn trade_bar(&self, accent: Accent) -> Color {
        match accent {
            Accent::Positive => self.profit_bar,
            Accent::Negative => self.loss_bar,
            Accent::Neutral => self.muted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    pub background: Color,
    /// `None` draws no border.
    pub border: Option<Color>,
    pub border_radius: u16,
    pub font_size: u16,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x1a, 0x1a, 0x1a),
            border: None,
            border_radius: 4,
            font_size: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub stroke: Color,
    pub font_size: u16,
    pub tick_line: bool,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            stroke: Color::rgb(0x66, 0x66, 0x66),
            font_size: 12,
            tick_line: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    pub dash: [u8; 2],
    pub opacity: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            dash: [3, 3],
            opacity: 0.2,
        }
    }
}

/// The bundle handed to every panel builder.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTokens {
    pub palette: Palette,
    pub tooltip: TooltipStyle,
    pub axis: AxisStyle,
    pub grid: GridStyle,
}
