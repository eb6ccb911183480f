//! Monthly returns panel: one bar per month on a categorical axis.

use crate::domain::MonthlyReturn;
use crate::error::DashboardError;
use crate::format::{color_for, format_signed, SignedKind};
use crate::panel::{
    AxisSide, ChartSpec, DataPoint, Mark, PanelBody, PanelId, PanelSpec, SeriesBinding,
    TickFormat, XAxis, XDomain, YAxis, YDomain,
};
use crate::style::StyleTokens;

pub const RETURN_SERIES: &str = "return";

/// Bars keep the input order; x is the position in `returns`.
///
/// No months means no x-domain at all: the axis carries `None` and no
/// categories, and the return series is empty.
pub fn build_monthly_panel(
    returns: &[MonthlyReturn],
    style: &StyleTokens,
) -> Result<PanelSpec, DashboardError> {
    let palette = &style.palette;

    let points = returns
        .iter()
        .enumerate()
        .map(|(i, m)| -> Result<DataPoint, DashboardError> {
            Ok(DataPoint::new(i as u64, m.return_pct)
                .labelled(format_signed(m.return_pct, SignedKind::Percent)?)
                .colored(palette.mark(color_for(m.return_pct))))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let chart = ChartSpec {
        x_axis: XAxis {
            domain: XDomain::spanning(0..returns.len() as u64),
            tick_format: TickFormat::Category,
            categories: returns.iter().map(|m| m.month.clone()).collect(),
        },
        y_axes: vec![YAxis {
            side: AxisSide::Left,
            domain: YDomain::fit(returns.iter().map(|m| m.return_pct), true),
            tick_format: TickFormat::Percent,
        }],
        series: vec![SeriesBinding {
            name: RETURN_SERIES.to_string(),
            mark: Mark::Bar,
            axis: AxisSide::Left,
            color: palette.positive,
            stroke_width: None,
            fill: None,
            opacity: 1.0,
            points,
        }],
    };

    Ok(PanelSpec {
        id: PanelId::MonthlyReturns,
        title: PanelId::MonthlyReturns.title().to_string(),
        headline: Vec::new(),
        body: PanelBody::Chart(chart),
        style: *style,
    })
}
