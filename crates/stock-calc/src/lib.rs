//! # Stock Calculation Engine
//!
//! 核心覆蓋/補貨計算引擎

pub mod aggregate;
pub mod alerts;
pub mod calculator;
pub mod classify;
pub mod metrics;
pub mod restock_plan;

// Re-export 主要類型
pub use aggregate::{AggregateCalculator, CategoryStock, DashboardStats};
pub use alerts::AlertCalculator;
pub use calculator::CoverageCalculator;
pub use classify::StatusClassifier;
pub use metrics::MetricsCalculator;
pub use restock_plan::{RestockLine, RestockPlan, RestockPlanCalculator};
