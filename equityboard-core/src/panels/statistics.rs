//! Key statistics cards.

use crate::domain::SummaryStatistics;
use crate::error::DashboardError;
use crate::format::{
    color_for, format_money, format_number, format_percent, format_signed, format_signed_money,
    Accent, SignedKind,
};
use crate::panel::{PanelBody, PanelId, PanelSpec};
use crate::style::StyleTokens;

use super::{card, win_rate_accent};

/// Total Return, Sharpe Ratio, Max Drawdown and Win Rate, in that order.
///
/// Signed figures go through [`format_signed`] (or [`format_signed_money`] for
/// currency) and take their accent from the
/// same value, so the sign shown and the colour always agree.
pub fn build_statistics_panel(
    stats: &SummaryStatistics,
    style: &StyleTokens,
) -> Result<PanelSpec, DashboardError> {
    stats.validate()?;
    let palette = &style.palette;

    let cards = vec![
        card(
            "Total Return",
            format_signed(stats.total_return_pct, SignedKind::Percent)?,
            Some(format!("({})", format_signed_money(stats.total_return_abs)?)),
            color_for(stats.total_return_pct),
            palette,
        ),
        card(
            "Sharpe Ratio",
            format_number(stats.sharpe_ratio, 2)?,
            Some("Risk Adjusted".to_string()),
            Accent::Neutral,
            palette,
        ),
        card(
            "Max Drawdown",
            format_signed(stats.max_drawdown_pct, SignedKind::Percent)?,
            Some(format!("({})", format_money(stats.max_drawdown_abs)?)),
            color_for(stats.max_drawdown_pct),
            palette,
        ),
        card(
            "Win Rate",
            format_percent(stats.win_rate, 1)?,
            Some(format!("({}/{})", stats.win_count, stats.total_count)),
            win_rate_accent(stats.win_rate),
            palette,
        ),
    ];

    Ok(PanelSpec {
        id: PanelId::Statistics,
        title: PanelId::Statistics.title().to_string(),
        headline: Vec::new(),
        body: PanelBody::Cards { cards },
        style: *style,
    })
}
