//! Renderable panel descriptions.
//!
//! A [`PanelSpec`] says what to draw, never how: axes with their domains,
//! series bound to those axes, cards and tables with resolved colours. The
//! rendering surface decides pixels.

use serde::{Deserialize, Serialize};

use crate::format::Accent;
use crate::style::{Color, StyleTokens};

/// Stable identity of each dashboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    Equity,
    Drawdown,
    MonthlyReturns,
    Statistics,
    TradeHistory,
}

impl PanelId {
    pub fn title(&self) -> &'static str {
        match self {
            PanelId::Equity => "Strategy Equity",
            PanelId::Drawdown => "Drawdown",
            PanelId::MonthlyReturns => "Monthly Returns (%)",
            PanelId::Statistics => "Key Statistics",
            PanelId::TradeHistory => "Trade History",
        }
    }
}

/// Inclusive x-axis range over ordinal time indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XDomain {
    pub min: u64,
    pub max: u64,
}

impl XDomain {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Domain spanning every value, `None` when empty.
    pub fn spanning(times: impl IntoIterator<Item = u64>) -> Option<Self> {
        times.into_iter().fold(None, |acc, t| match acc {
            None => Some(Self::new(t, t)),
            Some(d) => Some(Self::new(d.min.min(t), d.max.max(t))),
        })
    }

    pub fn contains(&self, t: u64) -> bool {
        (self.min..=self.max).contains(&t)
    }
}

/// Value-axis range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YDomain {
    pub min: f64,
    pub max: f64,
}

impl YDomain {
    /// Fit values with 5% padding on each side.
    ///
    /// Flat series are padded by 5% of their magnitude (1.0 at zero). With
    /// `include_zero` the domain always covers the bar baseline. Empty input
    /// yields `[0, 1]`. Values must be finite.
    pub fn fit(values: impl IntoIterator<Item = f64>, include_zero: bool) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo > hi {
            return Self { min: 0.0, max: 1.0 };
        }
        if include_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }

        let range = hi - lo;
        let pad = if range > 0.0 {
            range * 0.05
        } else if lo != 0.0 {
            lo.abs() * 0.05
        } else {
            1.0
        };

        let min = if include_zero && lo == 0.0 { 0.0 } else { lo - pad };
        let mut max = if include_zero && hi == 0.0 { 0.0 } else { hi + pad };
        if max <= min {
            max = min + 1.0;
        }
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TickFormat {
    Integer,
    Number { decimals: u8 },
    Currency,
    Percent,
    Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    /// `None` when the chart has no points to span.
    pub domain: Option<XDomain>,
    pub tick_format: TickFormat,
    /// Category labels indexed by x, for categorical axes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxis {
    pub side: AxisSide,
    pub domain: YDomain,
    pub tick_format: TickFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Area,
    Bar,
    Line,
}

/// Vertical gradient fill under an area mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientFill {
    pub color: Color,
    pub top_opacity: f32,
    pub bottom_opacity: f32,
}

/// One plotted value. `color` overrides the series colour for this point only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: u64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl DataPoint {
    pub fn new(x: u64, y: f64) -> Self {
        Self {
            x,
            y,
            label: None,
            color: None,
        }
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A named series bound to one y axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesBinding {
    pub name: String,
    pub mark: Mark,
    pub axis: AxisSide,
    /// Series-level colour; stroke for lines and areas, fill for bars.
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<GradientFill>,
    pub opacity: f32,
    pub points: Vec<DataPoint>,
}

impl SeriesBinding {
    /// Colour a renderer must use for `point`: its override, else the series colour.
    pub fn color_of(&self, point: &DataPoint) -> Color {
        point.color.unwrap_or(self.color)
    }

    pub fn x_domain(&self) -> Option<XDomain> {
        XDomain::spanning(self.points.iter().map(|p| p.x))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub x_axis: XAxis,
    pub y_axes: Vec<YAxis>,
    pub series: Vec<SeriesBinding>,
}

impl ChartSpec {
    pub fn y_axis(&self, side: AxisSide) -> Option<&YAxis> {
        self.y_axes.iter().find(|a| a.side == side)
    }

    pub fn series(&self, name: &str) -> Option<&SeriesBinding> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// A labelled figure with its resolved colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub accent: Accent,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub header: String,
    pub align: Align,
}

/// One table cell. `accent`/`color` are set only where the cell is tinted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Accent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl TableCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            accent: None,
            color: None,
        }
    }

    pub fn tinted(text: impl Into<String>, accent: Accent, color: Color) -> Self {
        Self {
            text: text.into(),
            accent: Some(accent),
            color: Some(color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Stable row key (the trade id).
    pub key: u64,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl TableSpec {
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.header == header)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelBody {
    Chart(ChartSpec),
    Cards { cards: Vec<StatCard> },
    Table(TableSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub id: PanelId,
    pub title: String,
    /// Figures shown in the panel header, next to the title.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headline: Vec<StatCard>,
    pub body: PanelBody,
    pub style: StyleTokens,
}

impl PanelSpec {
    pub fn chart(&self) -> Option<&ChartSpec> {
        match &self.body {
            PanelBody::Chart(chart) => Some(chart),
            _ => None,
        }
    }

    pub fn cards(&self) -> Option<&[StatCard]> {
        match &self.body {
            PanelBody::Cards { cards } => Some(cards),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&TableSpec> {
        match &self.body {
            PanelBody::Table(table) => Some(table),
            _ => None,
        }
    }
}
