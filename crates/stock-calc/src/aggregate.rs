//! 儀表板彙總統計

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stock_core::{Category, Product, ProductCalculation};
use uuid::Uuid;

/// 單一分類的現有庫存合計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStock {
    /// 分類
    pub category: Category,

    /// 現有庫存合計
    pub available_stock: u64,
}

/// 儀表板統計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// SKU 總數
    pub total_skus: usize,

    /// 補貨預警數（危急與警告兩層的合計）
    pub critical_alerts: usize,

    /// 建議補貨總量（使用者覆寫優先）
    pub total_restock_qty: u64,

    /// 各分類現有庫存，按分類首次出現順序
    pub category_stock: Vec<CategoryStock>,
}

/// 彙總統計計算器
pub struct AggregateCalculator;

impl AggregateCalculator {
    /// 由商品序列與計算結果彙總儀表板統計
    pub fn compute(
        products: &[Product],
        calculations: &HashMap<Uuid, ProductCalculation>,
    ) -> DashboardStats {
        let mut critical_alerts = 0;
        let mut total_restock_qty: u64 = 0;
        let mut category_stock: Vec<CategoryStock> = Vec::new();

        for product in products {
            // 找不到計算結果的商品跳過統計，不視為錯誤
            if let Some(calc) = calculations.get(&product.id) {
                if calc.status.needs_attention() {
                    critical_alerts += 1;
                }
                total_restock_qty += calc.display_restock_qty;
            }

            match category_stock
                .iter_mut()
                .find(|entry| entry.category == product.category)
            {
                Some(entry) => entry.available_stock += product.available_stock,
                None => category_stock.push(CategoryStock {
                    category: product.category,
                    available_stock: product.available_stock,
                }),
            }
        }

        DashboardStats {
            total_skus: products.len(),
            critical_alerts,
            total_restock_qty,
            category_stock,
        }
    }
}
