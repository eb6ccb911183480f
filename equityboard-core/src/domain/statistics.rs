//! Externally supplied summary statistics.
//!
//! These figures are aggregates computed elsewhere (a backtester or a live
//! account). The dashboard formats and colours them but never re-derives them
//! from the equity samples or the trade ledger.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub net_profit: f64,
    /// Percentage of winning trades, `0..=100`.
    pub win_rate: f64,
    /// Worst peak-to-trough decline in percent; `<= 0`.
    pub max_drawdown_pct: f64,
    /// Worst peak-to-trough decline as an unsigned amount.
    #[serde(default)]
    pub max_drawdown_abs: f64,
    pub total_return_pct: f64,
    pub total_return_abs: f64,
    pub sharpe_ratio: f64,
    pub win_count: u32,
    pub total_count: u32,
}

impl SummaryStatistics {
    /// Structural checks only. Non-finite figures surface later as
    /// formatting errors when the cards are rendered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.win_count > self.total_count {
            return Err(ValidationError::Statistics(format!(
                "win count {} exceeds total count {}",
                self.win_count, self.total_count
            )));
        }
        if self.max_drawdown_pct > 0.0 {
            return Err(ValidationError::Statistics(format!(
                "max drawdown must be <= 0, got {}",
                self.max_drawdown_pct
            )));
        }
        if !(0.0..=100.0).contains(&self.win_rate) && self.win_rate.is_finite() {
            return Err(ValidationError::Statistics(format!(
                "win rate must be within 0..=100, got {}",
                self.win_rate
            )));
        }
        Ok(())
    }
}
