//! Panel builders.
//!
//! Each builder is a pure function of its data and the shared
//! [`StyleTokens`](crate::style::StyleTokens). Builders validate what they are
//! handed and fail instead of emitting a partial panel.
//!
//! - Equity: equity area (left axis) with per-trade bars (right axis)
//! - Drawdown: drawdown line over the equity panel's x-domain
//! - MonthlyReturns: one bar per month, input order
//! - Statistics: summary figures as cards
//! - TradeHistory: trade ledger table

pub mod drawdown;
pub mod equity;
pub mod monthly;
pub mod statistics;
pub mod trades;

pub use drawdown::build_drawdown_panel;
pub use equity::build_equity_panel;
pub use monthly::build_monthly_panel;
pub use statistics::build_statistics_panel;
pub use trades::{build_trade_table, direction_accent};

use crate::format::Accent;
use crate::panel::StatCard;
use crate::style::Palette;

pub(crate) fn card(
    label: &str,
    value: String,
    caption: Option<String>,
    accent: Accent,
    palette: &Palette,
) -> StatCard {
    StatCard {
        label: label.to_string(),
        value,
        caption,
        accent,
        color: palette.text(accent),
    }
}

/// Win rates at or above one half read as positive.
pub(crate) fn win_rate_accent(win_rate_pct: f64) -> Accent {
    if win_rate_pct >= 50.0 {
        Accent::Positive
    } else {
        Accent::Negative
    }
}
