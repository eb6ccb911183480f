//! Equity composite panel: equity area with per-trade bars.
//!
//! Both series share one x-domain spanning the full sample range. Each trade
//! bar carries its own colour, resolved from the sign of its delta.

use tracing::debug;

use crate::domain::{EquitySample, SummaryStatistics};
use crate::error::DashboardError;
use crate::format::{color_for, format_percent, format_signed, format_signed_money, SignedKind};
use crate::panel::{
    AxisSide, ChartSpec, DataPoint, GradientFill, Mark, PanelBody, PanelId, PanelSpec,
    SeriesBinding, TickFormat, XAxis, YAxis, YDomain,
};
use crate::series::time_domain;
use crate::style::StyleTokens;

use super::{card, win_rate_accent};

pub const EQUITY_SERIES: &str = "equity";
pub const TRADE_SERIES: &str = "trade";

pub fn build_equity_panel(
    samples: &[EquitySample],
    stats: &SummaryStatistics,
    style: &StyleTokens,
) -> Result<PanelSpec, DashboardError> {
    let domain = time_domain(samples)?;
    let palette = &style.palette;

    let equity_points: Vec<DataPoint> = samples
        .iter()
        .map(|s| DataPoint::new(s.time, s.equity))
        .collect();

    let trade_points = samples
        .iter()
        .map(|s| -> Result<DataPoint, DashboardError> {
            Ok(DataPoint::new(s.time, s.trade_delta)
                .labelled(format_signed(s.trade_delta, SignedKind::Currency)?)
                .colored(palette.trade_bar(color_for(s.trade_delta))))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let headline = vec![
        card(
            "Net Profit",
            format_signed_money(stats.net_profit)?,
            None,
            color_for(stats.net_profit),
            palette,
        ),
        card(
            "Win Rate",
            format_percent(stats.win_rate, 1)?,
            None,
            win_rate_accent(stats.win_rate),
            palette,
        ),
        card(
            "Drawdown",
            format_signed(stats.max_drawdown_pct, SignedKind::Percent)?,
            None,
            color_for(stats.max_drawdown_pct),
            palette,
        ),
    ];

    let chart = ChartSpec {
        x_axis: XAxis {
            domain: Some(domain),
            tick_format: TickFormat::Integer,
            categories: Vec::new(),
        },
        y_axes: vec![
            YAxis {
                side: AxisSide::Left,
                domain: YDomain::fit(samples.iter().map(|s| s.equity), false),
                tick_format: TickFormat::Currency,
            },
            YAxis {
                side: AxisSide::Right,
                domain: YDomain::fit(samples.iter().map(|s| s.trade_delta), true),
                tick_format: TickFormat::Currency,
            },
        ],
        series: vec![
            SeriesBinding {
                name: EQUITY_SERIES.to_string(),
                mark: Mark::Area,
                axis: AxisSide::Left,
                color: palette.equity_stroke,
                stroke_width: Some(2.0),
                fill: Some(GradientFill {
                    color: palette.equity_stroke,
                    top_opacity: 0.2,
                    bottom_opacity: 0.0,
                }),
                opacity: 1.0,
                points: equity_points,
            },
            SeriesBinding {
                name: TRADE_SERIES.to_string(),
                mark: Mark::Bar,
                axis: AxisSide::Right,
                color: palette.positive,
                stroke_width: None,
                fill: None,
                opacity: 0.8,
                points: trade_points,
            },
        ],
    };

    debug!(samples = samples.len(), min = domain.min, max = domain.max, "built equity panel");

    Ok(PanelSpec {
        id: PanelId::Equity,
        title: PanelId::Equity.title().to_string(),
        headline,
        body: PanelBody::Chart(chart),
        style: *style,
    })
}
