//! Widgets for each kind of panel body.
//!
//! - ChartPanel: time-series and categorical charts, one plot per y axis
//! - CardsPanel: statistic cards side by side
//! - TablePanel: the trade ledger
//!
//! [`PanelView`] picks the right one for a [`PanelSpec`] and draws the shared
//! frame: title on the left, headline figures on the right.

pub mod cards;
pub mod chart;
pub mod table;

pub use cards::CardsPanel;
pub use chart::ChartPanel;
pub use table::TablePanel;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Widget,
    },
};

use equityboard_core::panel::{PanelBody, PanelSpec, StatCard};

use crate::theme::Theme;

/// One composed panel with its frame.
pub struct PanelView<'a> {
    panel: &'a PanelSpec,
    theme: &'a Theme,
}

impl<'a> PanelView<'a> {
    pub fn new(panel: &'a PanelSpec, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }
}

impl<'a> Widget for PanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .style(self.theme.surface())
            .title(Span::styled(format!(" {} ", self.panel.title), self.theme.title()));
        if !self.panel.headline.is_empty() {
            block = block.title(
                Title::from(headline_line(&self.panel.headline, self.theme))
                    .alignment(Alignment::Right)
                    .position(Position::Top),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        match &self.panel.body {
            PanelBody::Chart(chart) => ChartPanel::new(chart, self.theme).render(inner, buf),
            PanelBody::Cards { cards } => CardsPanel::new(cards, self.theme).render(inner, buf),
            PanelBody::Table(table) => TablePanel::new(table, self.theme).render(inner, buf),
        }
    }
}

/// `Net Profit +$334.61  Win Rate 65.4%  ...`
fn headline_line<'a>(cards: &'a [StatCard], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(cards.len() * 3 + 1);
    for card in cards {
        spans.push(Span::styled(format!(" {} ", card.label), theme.muted));
        spans.push(Span::styled(card.value.as_str(), theme.color(card.color)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
