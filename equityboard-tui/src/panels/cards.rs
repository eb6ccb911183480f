//! Statistic cards laid out side by side.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use equityboard_core::panel::StatCard;

use crate::theme::Theme;

pub struct CardsPanel<'a> {
    cards: &'a [StatCard],
    theme: &'a Theme,
}

impl<'a> CardsPanel<'a> {
    pub fn new(cards: &'a [StatCard], theme: &'a Theme) -> Self {
        Self { cards, theme }
    }
}

impl<'a> Widget for CardsPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() {
            return;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Fill(1); self.cards.len()])
            .split(area);

        for (card, &rect) in self.cards.iter().zip(cols.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title(Span::styled(card.label.as_str(), Style::default().fg(self.theme.muted)));

            let mut lines = vec![Line::from(Span::styled(
                card.value.as_str(),
                Style::default()
                    .fg(self.theme.color(card.color))
                    .add_modifier(Modifier::BOLD),
            ))];
            if let Some(caption) = &card.caption {
                lines.push(Line::from(Span::styled(
                    caption.as_str(),
                    Style::default().fg(self.theme.muted),
                )));
            }

            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block)
                .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, reference_spec};
    use equityboard_core::panel::PanelId;

    #[test]
    fn test_cards_show_values_and_captions() {
        let spec = reference_spec();
        let cards = spec.panel(PanelId::Statistics).unwrap().cards().unwrap();
        let theme = Theme::default();

        let area = Rect::new(0, 0, 100, 5);
        let mut buf = Buffer::empty(area);
        CardsPanel::new(cards, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        for needle in ["Total Return", "+8.34%", "(+$834.61)", "1.45", "-12.30%", "(129/196)"] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_value_uses_card_colour() {
        let spec = reference_spec();
        let cards = spec.panel(PanelId::Statistics).unwrap().cards().unwrap();
        let theme = Theme::default();

        let area = Rect::new(0, 0, 100, 5);
        let mut buf = Buffer::empty(area);
        CardsPanel::new(cards, &theme).render(area, &mut buf);

        let drawdown = &cards[2];
        let value_cell = (0..area.width)
            .filter_map(|x| buf.cell((x, 1)))
            .find(|c| c.symbol() == "-")
            .map(|c| c.fg);
        assert_eq!(value_cell, Some(theme.color(drawdown.color)));
    }
}
