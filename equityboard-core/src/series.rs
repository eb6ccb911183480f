//! Series derivation: raw points to validated, classified equity samples.
//!
//! Drawdown is either taken from the source or computed against a running
//! peak that only ever moves up.

use tracing::{debug, warn};

use crate::domain::{Classification, EquitySample, RawPoint};
use crate::error::ValidationError;
use crate::panel::XDomain;

/// Validate `points` and derive one [`EquitySample`] per point, in order.
///
/// Fails on an empty series, duplicate or decreasing time indices, non-finite
/// values, a drawdown column present on only some points, or a supplied
/// drawdown above zero.
pub fn derive_equity_series(points: &[RawPoint]) -> Result<Vec<EquitySample>, ValidationError> {
    debug!(points = points.len(), "deriving equity series");

    if points.is_empty() {
        return Err(ValidationError::EmptySeries { series: "equity" });
    }
    if let Err(e) = check_times(points.iter().map(|p| p.time)) {
        warn!(error = %e, "rejecting equity series");
        return Err(e);
    }

    for (index, p) in points.iter().enumerate() {
        if !p.equity.is_finite() {
            return Err(ValidationError::NonFinite { field: "equity", index });
        }
        if !p.trade_delta.is_finite() {
            return Err(ValidationError::NonFinite {
                field: "trade_delta",
                index,
            });
        }
    }

    let supplied = points.iter().filter(|p| p.drawdown.is_some()).count();
    let drawdowns = if supplied == 0 {
        running_drawdown(points.iter().map(|p| p.equity))
    } else if supplied == points.len() {
        let mut out = Vec::with_capacity(points.len());
        for (index, p) in points.iter().enumerate() {
            let dd = p.drawdown.unwrap_or_default();
            if !dd.is_finite() {
                return Err(ValidationError::NonFinite {
                    field: "drawdown",
                    index,
                });
            }
            if dd > 0.0 {
                warn!(time = p.time, drawdown = dd, "supplied drawdown above zero");
                return Err(ValidationError::PositiveDrawdown {
                    time: p.time,
                    value: dd,
                });
            }
            out.push(dd);
        }
        out
    } else {
        return Err(ValidationError::LengthMismatch {
            series: "drawdown",
            expected: points.len(),
            actual: supplied,
        });
    };

    Ok(points
        .iter()
        .zip(drawdowns)
        .map(|(p, drawdown)| EquitySample {
            time: p.time,
            equity: p.equity,
            trade_delta: p.trade_delta,
            drawdown,
            classification: Classification::from_delta(p.trade_delta),
        })
        .collect())
}

/// `min(0, equity[i] - max(equity[0..=i]))` for every index.
pub fn running_drawdown(equity: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    equity
        .into_iter()
        .map(|e| {
            peak = peak.max(e);
            (e - peak).min(0.0)
        })
        .collect()
}

/// Re-check a sample series handed directly to a panel builder.
pub fn validate_samples(samples: &[EquitySample]) -> Result<(), ValidationError> {
    if samples.is_empty() {
        return Err(ValidationError::EmptySeries { series: "equity" });
    }
    check_times(samples.iter().map(|s| s.time))?;
    for (index, s) in samples.iter().enumerate() {
        for (field, value) in [
            ("equity", s.equity),
            ("trade_delta", s.trade_delta),
            ("drawdown", s.drawdown),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field, index });
            }
        }
        if s.drawdown > 0.0 {
            return Err(ValidationError::PositiveDrawdown {
                time: s.time,
                value: s.drawdown,
            });
        }
    }
    Ok(())
}

/// The shared x-domain of every time-series panel: first to last sample.
pub fn time_domain(samples: &[EquitySample]) -> Result<XDomain, ValidationError> {
    validate_samples(samples)?;
    XDomain::spanning(samples.iter().map(|s| s.time))
        .ok_or(ValidationError::EmptySeries { series: "equity" })
}

fn check_times(times: impl IntoIterator<Item = u64>) -> Result<(), ValidationError> {
    let mut previous: Option<u64> = None;
    for (index, current) in times.into_iter().enumerate() {
        if let Some(prev) = previous {
            if current == prev {
                return Err(ValidationError::DuplicateTime {
                    index,
                    time: current,
                });
            }
            if current < prev {
                return Err(ValidationError::NonMonotonicTime {
                    index,
                    previous: prev,
                    current,
                });
            }
        }
        previous = Some(current);
    }
    Ok(())
}
