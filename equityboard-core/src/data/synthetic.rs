//! Seeded synthetic source.
//!
//! Produces a wavy equity walk with random per-period trade results and a
//! noisy drawdown overlay, paired with the reference monthly returns, trades
//! and statistics. Randomness comes only from the RNGs handed in, so callers
//! (and tests) control it completely.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::provider::{DashboardInputs, DashboardSource};
use crate::data::reference;
use crate::domain::RawPoint;
use crate::error::DashboardError;
use crate::rng::RngHierarchy;

const TRADE_STREAM: &str = "trade";
const DRAWDOWN_STREAM: &str = "drawdown";

/// How the equity column is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquityModel {
    /// `base + sin(i / wave_period) * wave_amplitude + i * trend_per_point`
    #[default]
    Wave,
    /// `base + i * trend_per_point + sum(trade deltas so far)`
    Cumulative,
}

/// How the drawdown column is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawdownModel {
    /// `-(u * drawdown_depth + sin(i / drawdown_period) * drawdown_wave)`, capped at zero.
    #[default]
    Noise,
    /// No drawdown column; derivation computes it from the running peak.
    Derived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub points: usize,
    pub seed: u64,
    pub base_equity: f64,
    pub trend_per_point: f64,
    pub wave_amplitude: f64,
    pub wave_period: f64,
    /// Trade deltas are uniform in `[-trade_spread, trade_spread)`.
    pub trade_spread: f64,
    pub drawdown_depth: f64,
    pub drawdown_wave: f64,
    pub drawdown_period: f64,
    pub equity_model: EquityModel,
    pub drawdown_model: DrawdownModel,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            points: 200,
            seed: 42,
            base_equity: 10_000.0,
            trend_per_point: 2.0,
            wave_amplitude: 200.0,
            wave_period: 20.0,
            trade_spread: 20.0,
            drawdown_depth: 5.0,
            drawdown_wave: 2.0,
            drawdown_period: 30.0,
            equity_model: EquityModel::Wave,
            drawdown_model: DrawdownModel::Noise,
        }
    }
}

/// Generate `config.points` raw points from the two given streams.
///
/// `trades` is drawn once per point. `drawdowns` is drawn once per point in
/// [`DrawdownModel::Noise`] and never touched otherwise.
pub fn generate_points<R: Rng>(
    config: &SyntheticConfig,
    trades: &mut R,
    drawdowns: &mut R,
) -> Vec<RawPoint> {
    let mut cumulative = 0.0;
    (0..config.points)
        .map(|i| {
            let x = i as f64;
            let u: f64 = trades.gen();
            let trade_delta = u * 2.0 * config.trade_spread - config.trade_spread;
            cumulative += trade_delta;

            let equity = match config.equity_model {
                EquityModel::Wave => {
                    config.base_equity
                        + (x / config.wave_period).sin() * config.wave_amplitude
                        + x * config.trend_per_point
                }
                EquityModel::Cumulative => {
                    config.base_equity + x * config.trend_per_point + cumulative
                }
            };

            let point = RawPoint::new(i as u64, equity, trade_delta);
            match config.drawdown_model {
                DrawdownModel::Noise => {
                    let v: f64 = drawdowns.gen();
                    let dd = -(v * config.drawdown_depth
                        + (x / config.drawdown_period).sin() * config.drawdown_wave);
                    point.with_drawdown(dd.min(0.0))
                }
                DrawdownModel::Derived => point,
            }
        })
        .collect()
}

/// Synthetic source. Each `iteration` is a distinct but reproducible draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticSource {
    config: SyntheticConfig,
    iteration: u64,
}

impl SyntheticSource {
    pub fn new(config: SyntheticConfig) -> Self {
        Self {
            config,
            iteration: 0,
        }
    }

    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// The same source, one regeneration step later.
    pub fn next_iteration(&self) -> Self {
        Self {
            config: self.config.clone(),
            iteration: self.iteration + 1,
        }
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new(SyntheticConfig::default())
    }
}

impl DashboardSource for SyntheticSource {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn load(&self) -> Result<DashboardInputs, DashboardError> {
        let hierarchy = RngHierarchy::new(self.config.seed);
        let mut trade_rng = hierarchy.rng_for(TRADE_STREAM, self.iteration);
        let mut drawdown_rng = hierarchy.rng_for(DRAWDOWN_STREAM, self.iteration);
        let points = generate_points(&self.config, &mut trade_rng, &mut drawdown_rng);

        debug!(
            points = points.len(),
            seed = self.config.seed,
            iteration = self.iteration,
            "generated synthetic inputs"
        );

        Ok(DashboardInputs {
            points,
            monthly_returns: reference::monthly_returns(),
            trades: reference::trades(),
            statistics: reference::statistics(),
        })
    }
}
