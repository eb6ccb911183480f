//! Equity samples: raw observations and their derived form.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One raw observation as supplied by a data source.
///
/// `drawdown` is optional: when no point carries it, the derivation step
/// computes it from the running equity peak.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub time: u64,
    pub equity: f64,
    #[serde(default)]
    pub trade_delta: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawdown: Option<f64>,
}

impl RawPoint {
    pub fn new(time: u64, equity: f64, trade_delta: f64) -> Self {
        Self {
            time,
            equity,
            trade_delta,
            drawdown: None,
        }
    }

    pub fn with_drawdown(mut self, drawdown: f64) -> Self {
        self.drawdown = Some(drawdown);
        self
    }

    /// Zip columnar input into points. Every column must match `times` in length.
    pub fn from_columns(
        times: &[u64],
        equity: &[f64],
        trade_delta: &[f64],
        drawdown: Option<&[f64]>,
    ) -> Result<Vec<RawPoint>, ValidationError> {
        let expected = times.len();
        check_len("equity", expected, equity.len())?;
        check_len("trade_delta", expected, trade_delta.len())?;
        if let Some(dd) = drawdown {
            check_len("drawdown", expected, dd.len())?;
        }

        Ok(times
            .iter()
            .enumerate()
            .map(|(i, &time)| RawPoint {
                time,
                equity: equity[i],
                trade_delta: trade_delta[i],
                drawdown: drawdown.map(|dd| dd[i]),
            })
            .collect())
    }
}

fn check_len(series: &'static str, expected: usize, actual: usize) -> Result<(), ValidationError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ValidationError::LengthMismatch {
            series,
            expected,
            actual,
        })
    }
}

/// Sign class of the trade realized at a sample.
///
/// Derivation only ever yields `Profit` or `Loss`: a zero delta (no trade)
/// is non-negative and therefore `Profit`. `Neutral` exists for sources that
/// classify samples themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Profit,
    Loss,
    Neutral,
}

impl Classification {
    pub fn from_delta(trade_delta: f64) -> Self {
        if trade_delta >= 0.0 {
            Classification::Profit
        } else {
            Classification::Loss
        }
    }
}

/// A validated, time-indexed observation with its derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquitySample {
    pub time: u64,
    pub equity: f64,
    pub trade_delta: f64,
    /// Decline from the running equity peak; always `<= 0`.
    pub drawdown: f64,
    pub classification: Classification,
}
