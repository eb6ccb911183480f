//! Dashboard composition.
//!
//! Derives the equity series once, runs every builder with the same style
//! tokens and assembles the panels in display order. The first failing builder
//! aborts composition; no partial dashboard is ever returned.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::{DashboardInputs, DashboardSource};
use crate::error::DashboardError;
use crate::panel::{PanelId, PanelSpec};
use crate::panels::{
    build_drawdown_panel, build_equity_panel, build_monthly_panel, build_statistics_panel,
    build_trade_table,
};
use crate::series::derive_equity_series;
use crate::style::StyleTokens;

/// Display order of the panels. Rendering surfaces must keep it.
pub const PANEL_ORDER: [PanelId; 5] = [
    PanelId::Equity,
    PanelId::Drawdown,
    PanelId::MonthlyReturns,
    PanelId::Statistics,
    PanelId::TradeHistory,
];

/// One panel placed in a layout row. Weights are relative widths within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSlot {
    pub panel: PanelId,
    pub weight: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRow {
    pub slots: Vec<LayoutSlot>,
}

impl LayoutRow {
    fn single(panel: PanelId) -> Self {
        Self {
            slots: vec![LayoutSlot { panel, weight: 1 }],
        }
    }
}

/// The composed dashboard: panels in display order plus their arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSpec {
    pub style: StyleTokens,
    pub panels: Vec<PanelSpec>,
    pub layout: Vec<LayoutRow>,
}

impl DashboardSpec {
    pub fn panel(&self, id: PanelId) -> Option<&PanelSpec> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id).collect()
    }

    /// The JSON handed to external renderers.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Rows: equity, drawdown, monthly returns beside statistics (1:2), trades.
pub fn standard_layout() -> Vec<LayoutRow> {
    vec![
        LayoutRow::single(PanelId::Equity),
        LayoutRow::single(PanelId::Drawdown),
        LayoutRow {
            slots: vec![
                LayoutSlot {
                    panel: PanelId::MonthlyReturns,
                    weight: 1,
                },
                LayoutSlot {
                    panel: PanelId::Statistics,
                    weight: 2,
                },
            ],
        },
        LayoutRow::single(PanelId::TradeHistory),
    ]
}

pub fn compose_dashboard(
    inputs: &DashboardInputs,
    style: &StyleTokens,
) -> Result<DashboardSpec, DashboardError> {
    debug!(
        points = inputs.points.len(),
        months = inputs.monthly_returns.len(),
        trades = inputs.trades.len(),
        "composing dashboard"
    );

    let result = compose_panels(inputs, style);
    match result {
        Ok(panels) => Ok(DashboardSpec {
            style: *style,
            panels,
            layout: standard_layout(),
        }),
        Err(e) => {
            warn!(error = %e, "dashboard composition aborted");
            Err(e)
        }
    }
}

/// Load inputs from `source` and compose them.
pub fn compose_from_source(
    source: &dyn DashboardSource,
    style: &StyleTokens,
) -> Result<DashboardSpec, DashboardError> {
    debug!(source = source.name(), "loading dashboard inputs");
    let inputs = source.load()?;
    compose_dashboard(&inputs, style)
}

fn compose_panels(
    inputs: &DashboardInputs,
    style: &StyleTokens,
) -> Result<Vec<PanelSpec>, DashboardError> {
    let samples = derive_equity_series(&inputs.points)?;
    Ok(vec![
        build_equity_panel(&samples, &inputs.statistics, style)?,
        build_drawdown_panel(&samples, style)?,
        build_monthly_panel(&inputs.monthly_returns, style)?,
        build_statistics_panel(&inputs.statistics, style)?,
        build_trade_table(&inputs.trades, style)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{reference, SyntheticSource};
    use crate::domain::RawPoint;

    fn inputs() -> DashboardInputs {
        DashboardInputs {
            points: vec![RawPoint::new(0, 10000.0, 50.0), RawPoint::new(1, 10050.0, -30.0)],
            monthly_returns: reference::monthly_returns(),
            trades: reference::trades(),
            statistics: reference::statistics(),
        }
    }

    #[test]
    fn test_panel_order_is_fixed() {
        let spec = compose_dashboard(&inputs(), &StyleTokens::default()).unwrap();
        assert_eq!(spec.panel_ids(), PANEL_ORDER.to_vec());
    }

    #[test]
    fn test_layout_rows() {
        let spec = compose_dashboard(&inputs(), &StyleTokens::default()).unwrap();
        let rows: Vec<Vec<(PanelId, u16)>> = spec
            .layout
            .iter()
            .map(|r| r.slots.iter().map(|s| (s.panel, s.weight)).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec![(PanelId::Equity, 1)],
                vec![(PanelId::Drawdown, 1)],
                vec![(PanelId::MonthlyReturns, 1), (PanelId::Statistics, 2)],
                vec![(PanelId::TradeHistory, 1)],
            ]
        );
        // layout order flattens to panel order
        let flat: Vec<PanelId> = spec.layout.iter().flat_map(|r| r.slots.iter().map(|s| s.panel)).collect();
        assert_eq!(flat, spec.panel_ids());
    }

    #[test]
    fn test_every_panel_gets_same_tokens() {
        let mut style = StyleTokens::default();
        style.tooltip.border_radius = 8;
        let spec = compose_dashboard(&inputs(), &style).unwrap();
        assert_eq!(spec.style, style);
        assert!(spec.panels.iter().all(|p| p.style == style));
    }

    #[test]
    fn test_equity_and_drawdown_share_x_domain() {
        let spec = compose_from_source(&SyntheticSource::default(), &StyleTokens::default())
            .unwrap();
        let eq = spec.panel(PanelId::Equity).unwrap().chart().unwrap();
        let dd = spec.panel(PanelId::Drawdown).unwrap().chart().unwrap();
        assert_eq!(eq.x_axis.domain, dd.x_axis.domain);
        assert_eq!(eq.x_axis.domain.map(|d| d.max), Some(199));
    }

    #[test]
    fn test_to_json_compact_and_pretty() {
        let spec = compose_dashboard(&inputs(), &StyleTokens::default()).unwrap();
        let compact = spec.to_json(false).unwrap();
        let pretty = spec.to_json(true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_invalid_panel_aborts() {
        let mut bad = inputs();
        bad.trades[2].pnl_pct = 0.98;
        assert!(compose_dashboard(&bad, &StyleTokens::default()).is_err());
    }
}
