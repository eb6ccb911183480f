//! Drawdown panel: a single line over the same x-domain as the equity panel.

use crate::domain::EquitySample;
use crate::error::DashboardError;
use crate::format::{format_signed, SignedKind};
use crate::panel::{
    AxisSide, ChartSpec, DataPoint, Mark, PanelBody, PanelId, PanelSpec, SeriesBinding,
    TickFormat, XAxis, YAxis, YDomain,
};
use crate::series::time_domain;
use crate::style::StyleTokens;

pub const DRAWDOWN_SERIES: &str = "drawdown";

pub fn build_drawdown_panel(
    samples: &[EquitySample],
    style: &StyleTokens,
) -> Result<PanelSpec, DashboardError> {
    let domain = time_domain(samples)?;

    let points = samples
        .iter()
        .map(|s| -> Result<DataPoint, DashboardError> {
            Ok(DataPoint::new(s.time, s.drawdown)
                .labelled(format_signed(s.drawdown, SignedKind::Currency)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let chart = ChartSpec {
        x_axis: XAxis {
            domain: Some(domain),
            tick_format: TickFormat::Integer,
            categories: Vec::new(),
        },
        y_axes: vec![YAxis {
            side: AxisSide::Left,
            domain: YDomain::fit(samples.iter().map(|s| s.drawdown), true),
            tick_format: TickFormat::Number { decimals: 2 },
        }],
        series: vec![SeriesBinding {
            name: DRAWDOWN_SERIES.to_string(),
            mark: Mark::Line,
            axis: AxisSide::Left,
            color: style.palette.drawdown_stroke,
            stroke_width: Some(2.0),
            fill: None,
            opacity: 1.0,
            points,
        }],
    };

    Ok(PanelSpec {
        id: PanelId::Drawdown,
        title: PanelId::Drawdown.title().to_string(),
        headline: Vec::new(),
        body: PanelBody::Chart(chart),
        style: *style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reference;
    use crate::domain::RawPoint;
    use crate::panels::build_equity_panel;
    use crate::series::derive_equity_series;

    #[test]
    fn test_drawdown_line_never_above_zero() {
        let samples = derive_equity_series(&[
            RawPoint::new(0, 100.0, 0.0),
            RawPoint::new(1, 90.0, -10.0),
            RawPoint::new(2, 95.0, 5.0),
        ])
        .unwrap();
        let panel = build_drawdown_panel(&samples, &StyleTokens::default()).unwrap();
        let chart = panel.chart().unwrap();
        let line = chart.series(DRAWDOWN_SERIES).unwrap();

        assert_eq!(line.mark, Mark::Line);
        let ys: Vec<f64> = line.points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, -10.0, -5.0]);
        assert_eq!(chart.y_axes[0].domain.max, 0.0);
        assert_eq!(line.points[1].label.as_deref(), Some("-10.00"));
    }

    #[test]
    fn test_domain_matches_equity_panel() {
        let samples = derive_equity_series(&[
            RawPoint::new(3, 100.0, 0.0),
            RawPoint::new(7, 120.0, 20.0),
            RawPoint::new(9, 80.0, -40.0),
        ])
        .unwrap();
        let style = StyleTokens::default();
        let dd = build_drawdown_panel(&samples, &style).unwrap();
        let eq = build_equity_panel(&samples, &reference::statistics(), &style).unwrap();
        assert_eq!(dd.chart().unwrap().x_axis.domain, eq.chart().unwrap().x_axis.domain);
    }
}
