//! # Stock Core
//!
//! 核心資料模型與類型定義

pub mod calc;
pub mod config;
pub mod coverage;
pub mod product;

// Re-export 主要類型
pub use calc::{ProductCalculation, StockStatus};
pub use config::{LeadTimeConfig, DEFAULT_SEA_FREIGHT_DAYS, PRODUCTION_DAYS, SAFETY_STOCK_DAYS};
pub use coverage::Coverage;
pub use product::{Category, Product};

/// 庫存規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum StockError {
    #[error("找不到商品: {0}")]
    ProductNotFound(uuid::Uuid),

    #[error("商品 ID 重複: {0}")]
    DuplicateProduct(uuid::Uuid),

    #[error("無效的海運天數: {0}（至少 1 天）")]
    InvalidLeadTime(u64),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
