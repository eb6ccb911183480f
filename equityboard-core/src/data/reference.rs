//! Reference dashboard figures used by the synthetic source.
//!
//! The statistics are illustrative and do not derive from the generated
//! equity walk or from these trades.

use crate::domain::{Direction, MonthlyReturn, SummaryStatistics, TradeRecord};

pub fn monthly_returns() -> Vec<MonthlyReturn> {
    vec![
        MonthlyReturn::new("Jan", 5.2),
        MonthlyReturn::new("Feb", -2.1),
        MonthlyReturn::new("Mar", 4.8),
        MonthlyReturn::new("Apr", -1.5),
        MonthlyReturn::new("May", 3.2),
        MonthlyReturn::new("Jun", -0.8),
    ]
}

pub fn trades() -> Vec<TradeRecord> {
    vec![
        trade(1, "2024-01-15", Direction::Long, 10200.0, 10350.0, 150.0, 1.47),
        trade(2, "2024-01-16", Direction::Short, 10400.0, 10300.0, 100.0, 0.96),
        trade(3, "2024-01-17", Direction::Long, 10250.0, 10150.0, -100.0, -0.98),
        trade(4, "2024-01-18", Direction::Long, 10100.0, 10300.0, 200.0, 1.98),
        trade(5, "2024-01-19", Direction::Short, 10350.0, 10200.0, 150.0, 1.45),
    ]
}

pub fn statistics() -> SummaryStatistics {
    SummaryStatistics {
        net_profit: 334.61,
        win_rate: 65.4,
        max_drawdown_pct: -12.3,
        max_drawdown_abs: 1230.0,
        total_return_pct: 8.34,
        total_return_abs: 834.61,
        sharpe_ratio: 1.45,
        win_count: 129,
        total_count: 196,
    }
}

fn trade(
    id: u64,
    date: &str,
    direction: Direction,
    entry_price: f64,
    exit_price: f64,
    pnl: f64,
    pnl_pct: f64,
) -> TradeRecord {
    TradeRecord {
        id,
        date: date.to_string(),
        direction,
        entry_price,
        exit_price,
        pnl,
        pnl_pct,
    }
}
