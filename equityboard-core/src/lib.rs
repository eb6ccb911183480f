//! Equityboard Core: data model to renderable dashboard description.
//!
//! Turns an equity/trade time series, monthly returns, a trade ledger and
//! externally supplied summary statistics into an ordered set of panel specs:
//! - Financial formatting (signed strings, sign-based accents)
//! - Series derivation (classification, running-peak drawdown, validation)
//! - Panel builders (equity composite, drawdown, monthly returns, statistics, trade table)
//! - Dashboard composition (fixed order, shared style tokens, fail-fast)
//!
//! Everything here is synchronous and side-effect free. Painting pixels is left
//! to a rendering surface such as `equityboard-tui`.

pub mod composer;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod format;
pub mod panel;
pub mod panels;
pub mod rng;
pub mod series;
pub mod style;

pub use composer::{compose_dashboard, compose_from_source, DashboardSpec, LayoutRow, LayoutSlot, PANEL_ORDER};
pub use config::{ConfigError, DashboardConfig};
pub use data::{DashboardInputs, DashboardSource, FixtureSource, SyntheticConfig, SyntheticSource};
pub use domain::{Classification, Direction, EquitySample, MonthlyReturn, RawPoint, SummaryStatistics, TradeRecord};
pub use error::{DashboardError, FormattingError, ValidationError};
pub use format::{color_for, format_signed, format_signed_money, Accent, SignedKind};
pub use panel::{PanelBody, PanelId, PanelSpec};
pub use series::derive_equity_series;
pub use style::{Color, Palette, StyleTokens, TooltipStyle};
