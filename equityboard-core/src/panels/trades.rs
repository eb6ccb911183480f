//! Trade ledger table.
//!
//! Two colour rules live side by side here. The Type column is tinted by
//! direction (Long positive, Short negative) and never looks at P&L. The two
//! P&L columns are tinted by their own sign. A losing Long shows a positive
//! direction next to negative P&L.

use crate::domain::{validate_trades, Direction, TradeRecord};
use crate::error::DashboardError;
use crate::format::{color_for, format_number, format_signed, Accent, SignedKind};
use crate::panel::{
    Align, PanelBody, PanelId, PanelSpec, TableCell, TableColumn, TableRow, TableSpec,
};
use crate::style::StyleTokens;

pub const COLUMNS: [(&str, Align); 6] = [
    ("Date", Align::Left),
    ("Type", Align::Left),
    ("Entry", Align::Right),
    ("Exit", Align::Right),
    ("P&L", Align::Right),
    ("P&L %", Align::Right),
];

pub fn direction_accent(direction: Direction) -> Accent {
    match direction {
        Direction::Long => Accent::Positive,
        Direction::Short => Accent::Negative,
    }
}

/// Rows follow the input order. Sources that want id order sort before
/// handing the trades over; the builder never reorders.
pub fn build_trade_table(
    trades: &[TradeRecord],
    style: &StyleTokens,
) -> Result<PanelSpec, DashboardError> {
    validate_trades(trades)?;
    let palette = &style.palette;

    let rows = trades
        .iter()
        .map(|t| -> Result<TableRow, DashboardError> {
            let dir_accent = direction_accent(t.direction);
            let pnl_accent = color_for(t.pnl);
            let pct_accent = color_for(t.pnl_pct);
            Ok(TableRow {
                key: t.id,
                cells: vec![
                    TableCell::plain(t.date.clone()),
                    TableCell::tinted(t.direction.to_string(), dir_accent, palette.text(dir_accent)),
                    TableCell::plain(format_number(t.entry_price, 2)?),
                    TableCell::plain(format_number(t.exit_price, 2)?),
                    TableCell::tinted(
                        format_signed(t.pnl, SignedKind::Currency)?,
                        pnl_accent,
                        palette.text(pnl_accent),
                    ),
                    TableCell::tinted(
                        format_signed(t.pnl_pct, SignedKind::Percent)?,
                        pct_accent,
                        palette.text(pct_accent),
                    ),
                ],
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let columns = COLUMNS
        .iter()
        .map(|&(header, align)| TableColumn {
            header: header.to_string(),
            align,
        })
        .collect();

    Ok(PanelSpec {
        id: PanelId::TradeHistory,
        title: PanelId::TradeHistory.title().to_string(),
        headline: Vec::new(),
        body: PanelBody::Table(TableSpec { columns, rows }),
        style: *style,
    })
}
