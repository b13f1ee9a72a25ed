//! 單品覆蓋指標計算

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use stock_core::{Coverage, LeadTimeConfig, Product, ProductCalculation};

use crate::classify::StatusClassifier;

/// 單品指標計算器
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// 計算單一商品的覆蓋指標、補貨建議與狀態
    pub fn compute(product: &Product, lead_time: &LeadTimeConfig) -> ProductCalculation {
        let daily_sales = Decimal::from(product.sales_last_7_days) / Decimal::from(7);
        let total_pipeline_stock = product.total_pipeline_stock();

        let days_coverage = if daily_sales > Decimal::ZERO {
            Coverage::Finite(Decimal::from(total_pipeline_stock) / daily_sales)
        } else {
            Coverage::Unbounded
        };
        let months_coverage = days_coverage.months();

        let total_lead_time = Decimal::from(lead_time.total_lead_time());
        let target_coverage_days = Decimal::from(lead_time.target_coverage_days());
        let target_stock_level = daily_sales * target_coverage_days;

        // 建議補貨量：目標水位與管道庫存的差額向上取整，下限為 0
        let shortfall = target_stock_level - Decimal::from(total_pipeline_stock);
        let restock_needed_qty = if shortfall > Decimal::ZERO {
            shortfall.ceil().to_u64().unwrap_or(0)
        } else {
            0
        };

        // 使用者覆寫在計算時解析，不落盤
        let display_restock_qty = product.custom_restock_qty.unwrap_or(restock_needed_qty);

        let status = StatusClassifier::classify(
            daily_sales,
            total_pipeline_stock,
            days_coverage,
            total_lead_time,
            target_coverage_days,
        );

        ProductCalculation {
            daily_sales,
            total_pipeline_stock,
            days_coverage,
            months_coverage,
            target_stock_level,
            restock_needed_qty,
            display_restock_qty,
            is_low_stock: days_coverage.is_below(target_coverage_days),
            status,
        }
    }
}
