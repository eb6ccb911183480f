//! TradeRecord: one closed trade as shown in the trade ledger.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::format::parse_signed;

/// Trade direction. Drives the direction column's accent on its own,
/// independently of whether the trade made money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "Long"),
            Direction::Short => write!(f, "Short"),
        }
    }
}

/// A closed trade.
///
/// `pnl` and `pnl_pct` deserialize from either numbers or signed display
/// strings (`"+150"`, `"-0.98%"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: u64,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub direction: Direction,
    pub entry_price: f64,
    pub exit_price: f64,
    #[serde(deserialize_with = "signed_amount")]
    pub pnl: f64,
    #[serde(deserialize_with = "signed_amount")]
    pub pnl_pct: f64,
}

impl TradeRecord {
    /// Build a record from the display strings a ledger would carry.
    pub fn from_display(
        id: u64,
        date: impl Into<String>,
        direction: Direction,
        entry_price: f64,
        exit_price: f64,
        pnl: &str,
        pnl_pct: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            date: date.into(),
            direction,
            entry_price,
            exit_price,
            pnl: parse_signed(pnl)?,
            pnl_pct: parse_signed(pnl_pct)?,
        })
    }

    pub fn is_winner(&self) -> bool {
        self.pnl >= 0.0
    }

    /// Check the per-record rules: ISO date, positive prices, finite P&L and
    /// agreeing signs between `pnl` and `pnl_pct`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(ValidationError::InvalidTradeDate {
                id: self.id,
                date: self.date.clone(),
            });
        }
        for (field, value) in [("entry_price", self.entry_price), ("exit_price", self.exit_price)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidPrice {
                    id: self.id,
                    field,
                    value,
                });
            }
        }
        if !self.pnl.is_finite() {
            return Err(ValidationError::NonFiniteTrade {
                id: self.id,
                field: "pnl",
            });
        }
        if !self.pnl_pct.is_finite() {
            return Err(ValidationError::NonFiniteTrade {
                id: self.id,
                field: "pnl_pct",
            });
        }
        if (self.pnl < 0.0) != (self.pnl_pct < 0.0) {
            return Err(ValidationError::SignMismatch {
                id: self.id,
                pnl: self.pnl,
                pnl_pct: self.pnl_pct,
            });
        }
        Ok(())
    }
}

/// Validate every record and reject duplicate ids.
pub fn validate_trades(trades: &[TradeRecord]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(trades.len());
    for trade in trades {
        trade.validate()?;
        if !seen.insert(trade.id) {
            return Err(ValidationError::DuplicateTradeId { id: trade.id });
        }
    }
    Ok(())
}

fn signed_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(v) => Ok(v),
        Amount::Text(s) => parse_signed(&s).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn losing_long() -> TradeRecord {
        TradeRecord::from_display(3, "2024-01-17", Direction::Long, 10250.0, 10150.0, "-100", "-0.98%")
            .unwrap()
    }

    #[test]
    fn test_from_display_parses_signs() {
        let trade = losing_long();
        assert_eq!(trade.pnl, -100.0);
        assert_eq!(trade.pnl_pct, -0.98);
        assert!(!trade.is_winner());
        assert!(trade.validate().is_ok());
    }

    #[test]
    fn test_sign_mismatch_rejected() {
        let mut trade = losing_long();
        trade.pnl_pct = 0.98;
        assert!(matches!(
            trade.validate(),
            Err(ValidationError::SignMismatch { id: 3, .. })
        ));
    }

    #[test]
    fn test_zero_pnl_agrees_with_positive_pct() {
        let mut trade = losing_long();
        trade.pnl = 0.0;
        trade.pnl_pct = 0.0;
        assert!(trade.validate().is_ok());
    }

    #[test]
    fn test_bad_date_and_price_rejected() {
        let mut trade = losing_long();
        trade.date = "17/01/2024".into();
        assert!(matches!(trade.validate(), Err(ValidationError::InvalidTradeDate { .. })));

        let mut trade = losing_long();
        trade.exit_price = 0.0;
        assert!(matches!(
            trade.validate(),
            Err(ValidationError::InvalidPrice { field: "exit_price", .. })
        ));
    }

    #[test]
    fn test_non_finite_amount_names_trade_id() {
        let mut trade = losing_long();
        trade.pnl = f64::NAN;
        assert_eq!(
            trade.validate(),
            Err(ValidationError::NonFiniteTrade { id: 3, field: "pnl" })
        );

        let mut trade = losing_long();
        trade.pnl_pct = f64::NEG_INFINITY;
        let err = trade.validate().unwrap_err();
        assert_eq!(err, ValidationError::NonFiniteTrade { id: 3, field: "pnl_pct" });
        assert_eq!(err.to_string(), "trade 3: non-finite pnl_pct");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let trades = vec![losing_long(), losing_long()];
        assert_eq!(
            validate_trades(&trades),
            Err(ValidationError::DuplicateTradeId { id: 3 })
        );
    }

    #[test]
    fn test_deserialize_from_strings_and_numbers() {
        let json = r#"{
            "id": 1, "date": "2024-01-15", "direction": "Long",
            "entry_price": 10200, "exit_price": 10350,
            "pnl": "+150", "pnl_pct": 1.47
        }"#;
        let trade: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(trade.pnl, 150.0);
        assert_eq!(trade.pnl_pct, 1.47);
        assert_eq!(trade.direction, Direction::Long);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Long.to_string(), "Long");
        assert_eq!(Direction::Short.to_string(), "Short");
    }
}
