//! Whole-dashboard widgets: the composed layout and the error panel.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use equityboard_core::composer::{DashboardSpec, LayoutRow};
use equityboard_core::panel::PanelId;

use crate::panels::PanelView;
use crate::theme::Theme;

/// Relative height of a layout row, keyed on the first panel in it.
fn row_weight(row: &LayoutRow) -> u16 {
    match row.slots.first().map(|s| s.panel) {
        Some(PanelId::Equity) => 3,
        _ => 2,
    }
}

/// Paints every panel of a composed dashboard following its layout rows.
pub struct DashboardView<'a> {
    spec: &'a DashboardSpec,
    theme: &'a Theme,
}

impl<'a> DashboardView<'a> {
    pub fn new(spec: &'a DashboardSpec, theme: &'a Theme) -> Self {
        Self { spec, theme }
    }
}

impl<'a> Widget for DashboardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                self.spec
                    .layout
                    .iter()
                    .map(|r| Constraint::Fill(row_weight(r)))
                    .collect::<Vec<_>>(),
            )
            .split(area);

        for (row, &row_area) in self.spec.layout.iter().zip(rows.iter()) {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(
                    row.slots
                        .iter()
                        .map(|s| Constraint::Fill(s.weight))
                        .collect::<Vec<_>>(),
                )
                .split(row_area);

            for (slot, &slot_area) in row.slots.iter().zip(cols.iter()) {
                if let Some(panel) = self.spec.panel(slot.panel) {
                    PanelView::new(panel, self.theme).render(slot_area, buf);
                }
            }
        }
    }
}

/// Shown instead of the dashboard when composition fails.
pub struct ErrorView<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ErrorView<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl<'a> Widget for ErrorView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.error))
            .style(self.theme.surface())
            .title(Span::styled(
                " Dashboard unavailable ",
                Style::default()
                    .fg(self.theme.error)
                    .add_modifier(Modifier::BOLD),
            ));

        let lines = vec![
            Line::from(Span::styled(self.message, Style::default().fg(self.theme.text))),
            Line::default(),
            Line::from(Span::styled(
                "r: regenerate   q: quit",
                Style::default().fg(self.theme.muted),
            )),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
