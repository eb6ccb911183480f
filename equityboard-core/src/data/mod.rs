//! Data sources for a render cycle.

pub mod provider;
pub mod reference;
pub mod synthetic;

pub use provider::{DashboardInputs, DashboardSource, FixtureSource};
pub use synthetic::{generate_points, DrawdownModel, EquityModel, SyntheticConfig, SyntheticSource};
