//! # StockFlow
//!
//! 庫存規劃儀表板的覆蓋/補貨計算引擎與目錄儲存
//!
//! Re-export 成員 crate 的主要類型

pub use stock_calc::{
    AggregateCalculator, AlertCalculator, CategoryStock, CoverageCalculator, DashboardStats,
    MetricsCalculator, RestockLine, RestockPlan, RestockPlanCalculator, StatusClassifier,
};
pub use stock_catalog::{
    parse_quantity, parse_sea_freight_days, seed_products, Catalog, CatalogRepository,
    CatalogSnapshot, FieldEdit, MemoryRepository, SavedCatalog,
};
pub use stock_core::{
    Category, Coverage, LeadTimeConfig, Product, ProductCalculation, Result, StockError,
    StockStatus, DEFAULT_SEA_FREIGHT_DAYS, PRODUCTION_DAYS, SAFETY_STOCK_DAYS,
};
