//! Domain types for the dashboard.

pub mod monthly;
pub mod sample;
pub mod statistics;
pub mod trade;

pub use monthly::MonthlyReturn;
pub use sample::{Classification, EquitySample, RawPoint};
pub use statistics::SummaryStatistics;
pub use trade::{validate_trades, Direction, TradeRecord};
