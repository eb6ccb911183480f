//! Data source trait and the inputs it yields.
//!
//! The `DashboardSource` trait abstracts over where a render cycle's data comes
//! from (the seeded synthetic generator, a file, a live backend) so that tests
//! can substitute fixed fixtures.

use serde::{Deserialize, Serialize};

use crate::domain::{MonthlyReturn, RawPoint, SummaryStatistics, TradeRecord};
use crate::error::DashboardError;

/// Everything one render cycle needs. Built fresh per render, then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInputs {
    pub points: Vec<RawPoint>,
    #[serde(default)]
    pub monthly_returns: Vec<MonthlyReturn>,
    #[serde(default)]
    pub trades: Vec<TradeRecord>,
    pub statistics: SummaryStatistics,
}

/// Trait for dashboard data sources.
///
/// `load` must be repeatable: the same source with the same parameters yields
/// identical inputs on every call.
pub trait DashboardSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    fn load(&self) -> Result<DashboardInputs, DashboardError>;
}

/// A source that hands back fixed inputs.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    name: String,
    inputs: DashboardInputs,
}

impl FixtureSource {
    pub fn new(inputs: DashboardInputs) -> Self {
        Self::named("fixture", inputs)
    }

    pub fn named(name: impl Into<String>, inputs: DashboardInputs) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }
}

impl DashboardSource for FixtureSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<DashboardInputs, DashboardError> {
        Ok(self.inputs.clone())
    }
}
