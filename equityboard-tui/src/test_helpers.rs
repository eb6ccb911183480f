//! Test helpers for rendering composed dashboards.

use ratatui::buffer::Buffer;

use equityboard_core::composer::{compose_from_source, DashboardSpec};
use equityboard_core::data::SyntheticSource;
use equityboard_core::style::StyleTokens;

/// The default synthetic dashboard.
pub fn reference_spec() -> DashboardSpec {
    compose_from_source(&SyntheticSource::default(), &StyleTokens::default()).unwrap()
}

/// Every cell symbol, row by row, with rows separated by newlines.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut content = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                content.push_str(cell.symbol());
            }
        }
        content.push('\n');
    }
    content
}
