//! # Stock Catalog
//!
//! 商品目錄儲存、欄位編輯與持久化介面

pub mod catalog;
pub mod edit;
pub mod repository;
pub mod seed;

// Re-export 主要類型
pub use catalog::{Catalog, CatalogSnapshot};
pub use edit::{parse_quantity, parse_sea_freight_days, FieldEdit};
pub use repository::{CatalogRepository, MemoryRepository, SavedCatalog};
pub use seed::seed_products;
