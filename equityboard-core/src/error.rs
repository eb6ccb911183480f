//! Error taxonomy for dashboard composition.
//!
//! Every builder and the composer return [`DashboardError`]. There is no local
//! recovery: the first malformed input aborts the whole composition.

use thiserror::Error;

/// Malformed input detected before anything is rendered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{series} series is empty")]
    EmptySeries { series: &'static str },

    #[error("duplicate time index {time} at position {index}")]
    DuplicateTime { index: usize, time: u64 },

    #[error("time index decreases at position {index}: {previous} -> {current}")]
    NonMonotonicTime {
        index: usize,
        previous: u64,
        current: u64,
    },

    #[error("{series} series has {actual} values, expected {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("drawdown must be <= 0, got {value} at time {time}")]
    PositiveDrawdown { time: u64, value: f64 },

    #[error("non-finite {field} at position {index}")]
    NonFinite { field: &'static str, index: usize },

    #[error("trade {id}: non-finite {field}")]
    NonFiniteTrade { id: u64, field: &'static str },

    #[error("trade {id}: pnl ({pnl}) and pnl % ({pnl_pct}) disagree in sign")]
    SignMismatch { id: u64, pnl: f64, pnl_pct: f64 },

    #[error("duplicate trade id {id}")]
    DuplicateTradeId { id: u64 },

    #[error("trade {id}: date '{date}' is not a YYYY-MM-DD calendar date")]
    InvalidTradeDate { id: u64, date: String },

    #[error("trade {id}: {field} must be a positive finite price, got {value}")]
    InvalidPrice {
        id: u64,
        field: &'static str,
        value: f64,
    },

    #[error("cannot parse signed amount '{0}'")]
    UnparseableAmount(String),

    #[error("statistics: {0}")]
    Statistics(String),
}

/// A signed quantity could not be rendered as text.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot format non-finite value {value}")]
pub struct FormattingError {
    pub value: f64,
}

/// Umbrella error returned by panel builders and the composer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("formatting error: {0}")]
    Formatting(#[from] FormattingError),
}

impl DashboardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_))
    }

    pub fn is_formatting(&self) -> bool {
        matches!(self, DashboardError::Formatting(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_offending_index() {
        let err = ValidationError::DuplicateTime { index: 6, time: 5 };
        assert_eq!(err.to_string(), "duplicate time index 5 at position 6");

        let err = ValidationError::NonMonotonicTime {
            index: 3,
            previous: 9,
            current: 4,
        };
        assert!(err.to_string().contains("9 -> 4"));
    }

    #[test]
    fn dashboard_error_wraps_both_kinds() {
        let v: DashboardError = ValidationError::EmptySeries { series: "equity" }.into();
        assert!(v.is_validation());
        assert!(!v.is_formatting());
        assert_eq!(v.to_string(), "validation error: equity series is empty");

        let f: DashboardError = FormattingError { value: f64::NAN }.into();
        assert!(f.is_formatting());
        assert!(f.to_string().starts_with("formatting error: cannot format non-finite value"));
    }
}
