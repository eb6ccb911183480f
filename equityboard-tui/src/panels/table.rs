//! Trade ledger table. Cell colours come from the panel spec as-is.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Row, Table, Widget},
};

use equityboard_core::panel::{Align, TableSpec};

use crate::theme::Theme;

pub struct TablePanel<'a> {
    table: &'a TableSpec,
    theme: &'a Theme,
}

impl<'a> TablePanel<'a> {
    pub fn new(table: &'a TableSpec, theme: &'a Theme) -> Self {
        Self { table, theme }
    }

    /// Each column is as wide as its widest header or cell.
    fn widths(&self) -> Vec<Constraint> {
        self.table
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .table
                    .rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(|c| c.text.chars().count())
                    .chain(std::iter::once(col.header.chars().count()))
                    .max()
                    .unwrap_or(0);
                Constraint::Length(widest as u16)
            })
            .collect()
    }
}

fn aligned(text: &str, align: Align) -> Line<'_> {
    let line = Line::from(text);
    match align {
        Align::Left => line.alignment(Alignment::Left),
        Align::Right => line.alignment(Alignment::Right),
    }
}

impl<'a> Widget for TablePanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header_style = Style::default()
            .fg(self.theme.muted)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(
            self.table
                .columns
                .iter()
                .map(|c| Cell::from(aligned(&c.header, c.align)).style(header_style)),
        );

        let rows = self.table.rows.iter().map(|row| {
            let cells = row.cells.iter().zip(&self.table.columns).map(|(cell, col)| {
                let fg = cell.color.map_or(self.theme.text, |c| self.theme.color(c));
                Cell::from(aligned(&cell.text, col.align)).style(Style::default().fg(fg))
            });
            Row::new(cells)
        });

        Table::new(rows, self.widths())
            .header(header)
            .column_spacing(2)
            .style(self.theme.surface())
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{buffer_text, reference_spec};
    use equityboard_core::panel::PanelId;

    #[test]
    fn test_rows_render_in_table_order() {
        let spec = reference_spec();
        let table = spec.panel(PanelId::TradeHistory).unwrap().table().unwrap();
        let theme = Theme::default();

        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        TablePanel::new(table, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        let first = text.find("2024-01-15").unwrap();
        let last = text.find("2024-01-19").unwrap();
        assert!(first < last);
        assert!(text.contains("-0.98%"));
        assert!(text.contains("P&L %"));
    }

    #[test]
    fn test_losing_long_colours() {
        let spec = reference_spec();
        let table = spec.panel(PanelId::TradeHistory).unwrap().table().unwrap();
        let theme = Theme::default();

        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        TablePanel::new(table, &theme).render(area, &mut buf);

        // Header is row 0; trade 3 is row 3.
        let row: Vec<_> = (0..area.width).filter_map(|x| buf.cell((x, 3))).collect();
        let line: String = row.iter().map(|c| c.symbol()).collect();
        let long_at = line.find("Long").unwrap();
        let pnl_at = line.find("-100.00").unwrap();
        assert_eq!(row[long_at].fg, theme.accent(equityboard_core::format::Accent::Positive));
        assert_eq!(row[pnl_at].fg, theme.accent(equityboard_core::format::Accent::Negative));
    }

    #[test]
    fn test_widths_fit_content() {
        let spec = reference_spec();
        let table = spec.panel(PanelId::TradeHistory).unwrap().table().unwrap();
        let theme = Theme::default();
        let widths = TablePanel::new(table, &theme).widths();
        assert_eq!(widths[0], Constraint::Length(10));
        assert_eq!(widths[1], Constraint::Length(5));
    }
}
