//! Terminal theme derived from the dashboard's style tokens.
//!
//! Terminals have no alpha channel, so translucent palette entries are
//! blended over the panel background before they reach ratatui.

use ratatui::style::{Color, Modifier, Style};

use equityboard_core::format::Accent;
use equityboard_core::style::{Color as TokenColor, Palette, StyleTokens};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Panel surface (the tooltip background token).
    pub background: Color,
    /// Borders and axis lines.
    pub axis: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    palette: Palette,
    background_rgb: (u8, u8, u8),
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_tokens(&StyleTokens::default())
    }
}

impl Theme {
    pub fn from_tokens(tokens: &StyleTokens) -> Self {
        let bg = tokens.tooltip.background;
        let background_rgb = (bg.r, bg.g, bg.b);
        let opaque = |c: TokenColor| blend(c, background_rgb);
        Self {
            background: opaque(bg),
            axis: opaque(tokens.axis.stroke),
            text: opaque(tokens.palette.text_neutral),
            muted: opaque(tokens.palette.muted),
            error: opaque(tokens.palette.text_negative),
            palette: tokens.palette,
            background_rgb,
        }
    }

    /// Resolve a token colour to a terminal colour.
    pub fn color(&self, c: TokenColor) -> Color {
        blend(c, self.background_rgb)
    }

    /// Text colour for an accent.
    pub fn accent(&self, accent: Accent) -> Color {
        self.color(self.palette.text(accent))
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.axis)
    }

    pub fn surface(&self) -> Style {
        Style::default().bg(self.background)
    }
}

fn blend(c: TokenColor, bg: (u8, u8, u8)) -> Color {
    let a = c.a.clamp(0.0, 1.0);
    let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
    Color::Rgb(mix(c.r, bg.0), mix(c.g, bg.1), mix(c.b, bg.2))
}
