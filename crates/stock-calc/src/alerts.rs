//! 補貨預警清單

use std::collections::HashMap;
use stock_core::{Product, ProductCalculation};
use uuid::Uuid;

/// 預警清單計算器
pub struct AlertCalculator;

impl AlertCalculator {
    /// 取出危急/警告商品，按覆蓋天數升冪排列
    ///
    /// 排序必須穩定：覆蓋天數相同時維持目錄原始順序。
    pub fn alert_list(
        products: &[Product],
        calculations: &HashMap<Uuid, ProductCalculation>,
    ) -> Vec<(Product, ProductCalculation)> {
        let mut alerts: Vec<(Product, ProductCalculation)> = products
            .iter()
            .filter_map(|product| {
                // 沒有對應計算結果的商品跳過，不視為錯誤
                let calc = calculations.get(&product.id)?;
                calc.status
                    .needs_attention()
                    .then(|| (product.clone(), calc.clone()))
            })
            .collect();

        // Vec::sort_by 為穩定排序
        alerts.sort_by(|a, b| a.1.days_coverage.cmp(&b.1.days_coverage));

        alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CoverageCalculator;
    use stock_core::{Category, LeadTimeConfig, StockStatus};

    fn product(sku: &str, available: u64, sales_7d: u64) -> Product {
        Product::new(sku, "商品", "Amazon US", Category::Electronics)
            .with_stock(available, 0, 0)
            .with_sales_last_7_days(sales_7d)
    }

    #[test]
    fn test_soonest_stockout_first() {
        // 覆蓋天數：A = 5、B = 3、C = 3（B、C 平手）
        let products = vec![
            product("A", 50, 70),
            product("B", 30, 70),
            product("C", 30, 70),
        ];
        let config = LeadTimeConfig::new(30).unwrap();
        let calculations = CoverageCalculator::compute(&products, &config);

        let alerts = AlertCalculator::alert_list(&products, &calculations);

        // 平手的 B、C 維持目錄順序，A 最後
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].0.sku, "B");
        assert_eq!(alerts[1].0.sku, "C");
        assert_eq!(alerts[2].0.sku, "A");
    }

    #[test]
    fn test_only_attention_statuses_included() {
        let products = vec![
            // 覆蓋 1 天 → 危急
            product("CRIT", 10, 70),
            // 覆蓋 50 天（44 ≤ 50 ≤ 88）→ 健康
            product("OK", 500, 70),
            // 無銷售、有庫存 → 積壓，不列入預警
            product("DEAD", 40, 0),
        ];
        let config = LeadTimeConfig::new(30).unwrap();
        let calculations = CoverageCalculator::compute(&products, &config);

        let alerts = AlertCalculator::alert_list(&products, &calculations);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].0.sku, "CRIT");
        assert_eq!(alerts[0].1.status, StockStatus::Critical);
    }

    #[test]
    fn test_missing_calculation_is_skipped() {
        let products = vec![product("A", 10, 70), product("B", 20, 70)];
        let config = LeadTimeConfig::new(30).unwrap();
        let mut calculations = CoverageCalculator::compute(&products, &config);
        calculations.remove(&products[0].id);

        let alerts = AlertCalculator::alert_list(&products, &calculations);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].0.sku, "B");
    }

    #[test]
    fn test_empty_when_all_healthy() {
        let products = vec![product("OK", 500, 70)];
        let config = LeadTimeConfig::new(30).unwrap();
        let calculations = CoverageCalculator::compute(&products, &config);

        assert!(AlertCalculator::alert_list(&products, &calculations).is_empty());
    }
}
