//! TOML configuration.
//!
//! ```toml
//! [source]
//! points = 200
//! seed = 42
//! equity_model = "wave"       # or "cumulative"
//! drawdown_model = "noise"    # or "derived"
//!
//! [palette]
//! positive = "#82ca9d"
//! loss_bar = "rgba(244, 67, 54, 0.6)"
//!
//! [tooltip]
//! background = "#1a1a1a"
//! ```
//!
//! Every key is optional. Parsing is pure; reading the file is the caller's job.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::SyntheticConfig;
use crate::style::{AxisStyle, GridStyle, Palette, StyleTokens, TooltipStyle};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub source: SyntheticConfig,
    pub palette: Palette,
    pub tooltip: TooltipStyle,
    pub axis: AxisStyle,
    pub grid: GridStyle,
}

impl DashboardConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.source;
        if s.points == 0 {
            return Err(ConfigError::Invalid("source.points must be at least 1".into()));
        }
        for (name, value) in [
            ("base_equity", s.base_equity),
            ("trend_per_point", s.trend_per_point),
            ("wave_amplitude", s.wave_amplitude),
            ("drawdown_wave", s.drawdown_wave),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("source.{name} must be finite")));
            }
        }
        for (name, value) in [
            ("wave_period", s.wave_period),
            ("drawdown_period", s.drawdown_period),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("source.{name} must be positive")));
            }
        }
        for (name, value) in [
            ("trade_spread", s.trade_spread),
            ("drawdown_depth", s.drawdown_depth),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!("source.{name} must be >= 0")));
            }
        }
        if !(0.0..=1.0).contains(&self.grid.opacity) {
            return Err(ConfigError::Invalid("grid.opacity must be within 0..=1".into()));
        }
        Ok(())
    }

    pub fn style_tokens(&self) -> StyleTokens {
        StyleTokens {
            palette: self.palette,
            tooltip: self.tooltip,
            axis: self.axis,
            grid: self.grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DrawdownModel, EquityModel};
    use crate::style::Color;

    #[test]
    fn test_empty_config_is_reference() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.style_tokens(), StyleTokens::default());
        assert_eq!(config.source.points, 200);
    }

    #[test]
    fn test_partial_overrides() {
        let config = DashboardConfig::from_toml_str(
            r##"
            [source]
            points = 50
            seed = 7
            equity_model = "cumulative"
            drawdown_model = "derived"

            [palette]
            positive = "#00ff80"
            loss_bar = "rgba(255, 20, 147, 0.5)"

            [tooltip]
            font_size = 14
            "##,
        )
        .unwrap();

        assert_eq!(config.source.points, 50);
        assert_eq!(config.source.seed, 7);
        assert_eq!(config.source.equity_model, EquityModel::Cumulative);
        assert_eq!(config.source.drawdown_model, DrawdownModel::Derived);
        assert_eq!(config.source.base_equity, 10_000.0);
        assert_eq!(config.palette.positive, Color::rgb(0, 255, 128));
        assert_eq!(config.palette.loss_bar, Color::rgba(255, 20, 147, 0.5));
        assert_eq!(config.palette.negative, Palette::default().negative);
        assert_eq!(config.tooltip.font_size, 14);
        assert_eq!(config.tooltip.border_radius, 4);
    }

    #[test]
    fn test_bad_colour_is_parse_error() {
        let err = DashboardConfig::from_toml_str("[palette]\npositive = \"green\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = DashboardConfig::from_toml_str("[source]\npoints = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = DashboardConfig::from_toml_str("[source]\nwave_period = 0.0").unwrap_err();
        assert!(err.to_string().contains("wave_period"));

        let err = DashboardConfig::from_toml_str("[source]\ntrade_spread = -1.0").unwrap_err();
        assert!(err.to_string().contains("trade_spread"));
    }
}
