//! Chart panel.
//!
//! Ratatui charts have a single y axis, so a chart with series on both sides
//! is drawn as two stacked plots sharing the x bounds: the left-axis plot on
//! top, the right-axis plot below it. Points that carry their own colour are
//! grouped into one dataset per colour.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Widget},
};

use equityboard_core::format::format_number;
use equityboard_core::panel::{
    AxisSide, ChartSpec, Mark, SeriesBinding, TickFormat, XAxis, YAxis, YDomain,
};

use crate::theme::Theme;

pub struct ChartPanel<'a> {
    chart: &'a ChartSpec,
    theme: &'a Theme,
}

/// Points of one series that resolve to the same colour.
struct Group {
    name: Option<String>,
    graph: GraphType,
    marker: symbols::Marker,
    color: Color,
    points: Vec<(f64, f64)>,
}

impl<'a> ChartPanel<'a> {
    pub fn new(chart: &'a ChartSpec, theme: &'a Theme) -> Self {
        Self { chart, theme }
    }

    fn x_bounds(&self) -> [f64; 2] {
        let Some(d) = self.chart.x_axis.domain else {
            return [-0.5, 0.5];
        };
        let (min, max) = (d.min as f64, d.max as f64);
        if self.chart.x_axis.tick_format == TickFormat::Category || min == max {
            [min - 0.5, max + 0.5]
        } else {
            [min, max]
        }
    }

    fn groups(&self, side: AxisSide) -> Vec<Group> {
        let mut groups: Vec<Group> = Vec::new();
        for series in self.chart.series.iter().filter(|s| s.axis == side) {
            if let Some(fill) = series.fill {
                // Terminal stand-in for a gradient area: solid bars at the top opacity.
                let mut color = fill.color;
                color.a = fill.top_opacity;
                groups.push(Group {
                    name: None,
                    graph: GraphType::Bar,
                    marker: symbols::Marker::Braille,
                    color: self.theme.color(color),
                    points: series.points.iter().map(|p| (p.x as f64, p.y)).collect(),
                });
            }
            groups.extend(self.series_groups(series));
        }
        groups
    }

    fn series_groups(&self, series: &SeriesBinding) -> Vec<Group> {
        let (graph, marker) = match series.mark {
            Mark::Area | Mark::Line => (GraphType::Line, symbols::Marker::Braille),
            Mark::Bar => (GraphType::Bar, symbols::Marker::HalfBlock),
        };
        let mut out: Vec<Group> = Vec::new();
        for point in &series.points {
            let color = self.theme.color(series.color_of(point));
            let xy = (point.x as f64, point.y);
            match out.iter_mut().find(|g| g.color == color) {
                Some(group) => group.points.push(xy),
                None => out.push(Group {
                    name: None,
                    graph,
                    marker,
                    color,
                    points: vec![xy],
                }),
            }
        }
        if let Some(first) = out.first_mut() {
            first.name = Some(series.name.clone());
        }
        out
    }

    fn render_plot(&self, side: AxisSide, show_x_labels: bool, area: Rect, buf: &mut Buffer) {
        let groups = self.groups(side);
        let y_axis = self.chart.y_axis(side).cloned().unwrap_or(YAxis {
            side,
            domain: YDomain { min: 0.0, max: 1.0 },
            tick_format: TickFormat::Number { decimals: 2 },
        });

        let datasets: Vec<Dataset> = groups
            .iter()
            .map(|g| {
                let mut ds = Dataset::default()
                    .marker(g.marker)
                    .graph_type(g.graph)
                    .style(Style::default().fg(g.color))
                    .data(&g.points);
                if let Some(name) = &g.name {
                    ds = ds.name(name.clone());
                }
                ds
            })
            .collect();

        let axis_style = Style::default().fg(self.theme.axis);
        let label_style = Style::default().fg(self.theme.muted);
        let mut x = Axis::default().style(axis_style).bounds(self.x_bounds());
        if show_x_labels {
            x = x.labels(
                x_labels(&self.chart.x_axis)
                    .into_iter()
                    .map(|l| Span::styled(l, label_style))
                    .collect::<Vec<_>>(),
            );
        }
        let y = Axis::default()
            .style(axis_style)
            .bounds([y_axis.domain.min, y_axis.domain.max])
            .labels(
                y_labels(&y_axis)
                    .into_iter()
                    .map(|l| Span::styled(l, label_style))
                    .collect::<Vec<_>>(),
            );

        Chart::new(datasets)
            .style(self.theme.surface())
            .x_axis(x)
            .y_axis(y)
            .hidden_legend_constraints((Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)))
            .render(area, buf);
    }
}

impl<'a> Widget for ChartPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let has = |side| self.chart.series.iter().any(|s| s.axis == side);
        match (has(AxisSide::Left), has(AxisSide::Right)) {
            (true, true) => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Fill(3), Constraint::Fill(1)])
                    .split(area);
                self.render_plot(AxisSide::Left, false, rows[0], buf);
                self.render_plot(AxisSide::Right, true, rows[1], buf);
            }
            (false, true) => self.render_plot(AxisSide::Right, true, area, buf),
            _ => self.render_plot(AxisSide::Left, true, area, buf),
        }
    }
}

/// Tick text for a value under `format`.
pub fn format_tick(value: f64, format: &TickFormat) -> String {
    let text = match format {
        TickFormat::Integer | TickFormat::Category => format_number(value, 0),
        TickFormat::Number { decimals } => format_number(value, *decimals as usize),
        TickFormat::Currency => format_number(value, 0).map(|s| format!("${s}")),
        TickFormat::Percent => format_number(value, 1).map(|s| format!("{s}%")),
    };
    text.unwrap_or_else(|_| "-".to_string())
}

fn y_labels(axis: &YAxis) -> Vec<String> {
    let d = axis.domain;
    [d.min, (d.min + d.max) / 2.0, d.max]
        .iter()
        .map(|&v| format_tick(v, &axis.tick_format))
        .collect()
}

fn x_labels(axis: &XAxis) -> Vec<String> {
    if axis.tick_format == TickFormat::Category {
        return axis.categories.clone();
    }
    let Some(d) = axis.domain else {
        return Vec::new();
    };
    let mid = d.min + (d.max - d.min) / 2;
    let mut labels = vec![d.min, mid, d.max];
    labels.dedup();
    labels
        .into_iter()
        .map(|v| format_tick(v as f64, &axis.tick_format))
        .collect()
}
