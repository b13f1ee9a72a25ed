//! 補貨計劃彙總

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stock_core::{Product, ProductCalculation};
use uuid::Uuid;

/// 補貨計劃行（對應一筆商品）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockLine {
    /// 商品ID
    pub product_id: Uuid,

    /// SKU 編號
    pub sku: String,

    /// 補貨數量（顯示補貨量，覆寫優先）
    pub quantity: u64,

    /// 箱數（未設定裝箱率時為 0）
    pub cartons: u64,
}

/// 補貨計劃彙總
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockPlan {
    /// 計劃行
    pub lines: Vec<RestockLine>,

    /// 補貨總量
    pub total_quantity: u64,

    /// 總箱數
    pub total_cartons: u64,
}

/// 補貨計劃計算器
pub struct RestockPlanCalculator;

impl RestockPlanCalculator {
    /// 彙總一組商品（通常為使用者勾選的集合）的補貨計劃
    ///
    /// 箱數 = ceil(補貨數量 / 裝箱率)；裝箱率未設定或為 0 時記 0 箱。
    pub fn summarize(
        products: &[Product],
        calculations: &HashMap<Uuid, ProductCalculation>,
    ) -> RestockPlan {
        let mut lines = Vec::with_capacity(products.len());
        let mut total_quantity: u64 = 0;
        let mut total_cartons: u64 = 0;

        for product in products {
            let Some(calc) = calculations.get(&product.id) else {
                continue;
            };

            let quantity = calc.display_restock_qty;
            let cartons = match product.qty_per_carton {
                Some(per_carton) if per_carton > 0 => quantity.div_ceil(per_carton),
                _ => 0,
            };

            total_quantity += quantity;
            total_cartons += cartons;
            lines.push(RestockLine {
                product_id: product.id,
                sku: product.sku.clone(),
                quantity,
                cartons,
            });
        }

        RestockPlan {
            lines,
            total_quantity,
            total_cartons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CoverageCalculator;
    use stock_core::{Category, LeadTimeConfig};

    #[test]
    fn test_carton_rounding() {
        // 建議補貨 430（日均 10 × 44 - 10），裝箱率 100 → 5 箱
        let products = vec![
            Product::new("SF-001", "耳機", "Amazon US", Category::Electronics)
                .with_stock(10, 0, 0)
                .with_sales_last_7_days(70)
                .with_qty_per_carton(100),
        ];
        let config = LeadTimeConfig::new(30).unwrap();
        let calculations = CoverageCalculator::compute(&products, &config);

        let plan = RestockPlanCalculator::summarize(&products, &calculations);

        assert_eq!(plan.lines.len(), 1);
        assert_eq!(plan.lines[0].quantity, 430);
        assert_eq!(plan.lines[0].cartons, 5);
        assert_eq!(plan.total_quantity, 430);
        assert_eq!(plan.total_cartons, 5);
    }

    #[test]
    fn test_missing_carton_rate_counts_zero() {
        let products = vec![
            Product::new("SF-002", "辦公椅", "Shopify 獨立站", Category::Home)
                .with_stock(10, 0, 0)
                .with_sales_last_7_days(70),
        ];
        let config = LeadTimeConfig::new(30).unwrap();
        let calculations = CoverageCalculator::compute(&products, &config);

        let plan = RestockPlanCalculator::summarize(&products, &calculations);

        assert_eq!(plan.lines[0].cartons, 0);
        assert_eq!(plan.total_cartons, 0);
    }

    #[test]
    fn test_override_quantity_in_plan() {
        let products = vec![
            Product::new("SF-003", "T恤", "Amazon US", Category::Apparel)
                .with_stock(10, 0, 0)
                .with_sales_last_7_days(70)
                .with_custom_restock_qty(120)
                .with_qty_per_carton(50),
        ];
        let config = LeadTimeConfig::new(30).unwrap();
        let calculations = CoverageCalculator::compute(&products, &config);

        let plan = RestockPlanCalculator::summarize(&products, &calculations);

        // 覆寫 120 → ceil(120 / 50) = 3 箱
        assert_eq!(plan.lines[0].quantity, 120);
        assert_eq!(plan.lines[0].cartons, 3);
    }

    #[test]
    fn test_totals_across_lines() {
        let products = vec![
            Product::new("A", "甲", "Amazon US", Category::Toys)
                .with_stock(10, 0, 0)
                .with_sales_last_7_days(70)
                .with_qty_per_carton(100), // 430 → 5 箱
            Product::new("B", "乙", "Amazon US", Category::Toys)
                .with_stock(439, 0, 0)
                .with_sales_last_7_days(70)
                .with_qty_per_carton(10), // 1 → 1 箱
        ];
        let config = LeadTimeConfig::new(30).unwrap();
        let calculations = CoverageCalculator::compute(&products, &config);

        let plan = RestockPlanCalculator::summarize(&products, &calculations);

        assert_eq!(plan.total_quantity, 431);
        assert_eq!(plan.total_cartons, 6);
    }
}
