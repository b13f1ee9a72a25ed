//! 庫存狀態分類

use rust_decimal::Decimal;
use stock_core::{Coverage, StockStatus};

/// 狀態分類器
///
/// 規則鏈按固定優先順序評估，首個命中即返回；順序不可調換。
/// 總前置時間與目標覆蓋天數作為兩個獨立門檻傳入；
/// 目前的配置令兩者相等，警告帶因此為空，但規則 2 與規則 3
/// 仍分別對應各自的門檻。
pub struct StatusClassifier;

impl StatusClassifier {
    /// 分類單一商品的庫存狀態
    ///
    /// # 規則（依優先順序）
    /// 1. 無銷售速度但有管道庫存 → 積壓（呆滯庫存）
    /// 2. 覆蓋天數 < 總前置時間 → 危急（補貨到貨前將斷貨）
    /// 3. 覆蓋天數 < 目標覆蓋天數 → 警告
    /// 4. 覆蓋天數 > 目標覆蓋天數 × 2 → 積壓
    /// 5. 其餘 → 健康
    ///
    /// 無上限覆蓋只會出現在銷售速度為零時，由規則 1 處理；
    /// 規則 2–4 對無上限值一律不命中，零銷售零庫存因此落到健康。
    pub fn classify(
        daily_sales: Decimal,
        total_pipeline_stock: u64,
        days_coverage: Coverage,
        total_lead_time: Decimal,
        target_coverage_days: Decimal,
    ) -> StockStatus {
        if daily_sales.is_zero() && total_pipeline_stock > 0 {
            return StockStatus::Overstocked;
        }
        if days_coverage.is_below(total_lead_time) {
            return StockStatus::Critical;
        }
        if days_coverage.is_below(target_coverage_days) {
            return StockStatus::Warning;
        }
        if days_coverage.is_above(target_coverage_days * Decimal::from(2)) {
            return StockStatus::Overstocked;
        }

        StockStatus::Healthy
    }
}
