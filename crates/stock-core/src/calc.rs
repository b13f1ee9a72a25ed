//! 計算結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coverage::Coverage;

/// 庫存狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// 危急（補貨到貨前將斷貨）
    Critical,
    /// 警告（低於目標覆蓋但尚未危急）
    Warning,
    /// 健康
    Healthy,
    /// 積壓（呆滯庫存或超過目標覆蓋兩倍）
    Overstocked,
}

impl StockStatus {
    /// 是否屬於補貨預警層級（危急或警告）
    pub fn needs_attention(&self) -> bool {
        matches!(self, StockStatus::Critical | StockStatus::Warning)
    }
}

/// 單一商品的計算結果
///
/// 每次輸入變更時全量重算，不持久化、不做增量快取。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCalculation {
    /// 日均銷量（近 7 日銷量 / 7）
    pub daily_sales: Decimal,

    /// 管道總庫存（現有 + 在途 + 計劃發貨）
    pub total_pipeline_stock: u64,

    /// 覆蓋天數
    pub days_coverage: Coverage,

    /// 覆蓋月數
    pub months_coverage: Coverage,

    /// 目標庫存水位（日均銷量 × 目標覆蓋天數）
    pub target_stock_level: Decimal,

    /// 系統建議補貨量（向上取整，不為負）
    pub restock_needed_qty: u64,

    /// 顯示補貨量（使用者覆寫優先於系統建議）
    pub display_restock_qty: u64,

    /// 是否低於目標覆蓋
    pub is_low_stock: bool,

    /// 庫存狀態
    pub status: StockStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_attention() {
        assert!(StockStatus::Critical.needs_attention());
        assert!(StockStatus::Warning.needs_attention());
        assert!(!StockStatus::Healthy.needs_attention());
        assert!(!StockStatus::Overstocked.needs_attention());
    }
}
