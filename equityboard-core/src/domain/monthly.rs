//! Monthly return bars.

use serde::{Deserialize, Serialize};

/// Return for one calendar month, kept in the order the source supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReturn {
    /// Axis label, e.g. `"Jan"`.
    pub month: String,
    pub return_pct: f64,
}

impl MonthlyReturn {
    pub fn new(month: impl Into<String>, return_pct: f64) -> Self {
        Self {
            month: month.into(),
            return_pct,
        }
    }
}
