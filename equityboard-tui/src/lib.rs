//! Equityboard TUI - terminal rendering surface for composed dashboards
//!
//! Paints a `DashboardSpec` from `equityboard-core` with ratatui:
//! - Equity chart with per-trade bars
//! - Drawdown line
//! - Monthly return bars
//! - Statistic cards
//! - Trade ledger
//!
//! Composition failures are shown in an error panel instead of a dashboard.

pub mod app;
pub mod dashboard;
pub mod navigation;
pub mod panels;
pub mod theme;

pub use app::{App, Feed};
pub use dashboard::{DashboardView, ErrorView};
pub use navigation::handle_key_event;
pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the dashboard (or its error) plus a one-line status bar.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    match &app.dashboard {
        Ok(spec) => f.render_widget(DashboardView::new(spec, &app.theme), chunks[0]),
        Err(message) => f.render_widget(ErrorView::new(message, &app.theme), chunks[0]),
    }

    let mut spans = vec![Span::styled(
        format!(" {} ", app.feed.describe()),
        Style::default().fg(app.theme.text),
    )];
    for (key, action) in navigation::key_bindings_help() {
        spans.push(Span::styled(
            format!(" {key}: {action} "),
            Style::default().fg(app.theme.muted),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

#[cfg(test)]
mod test_helpers;
