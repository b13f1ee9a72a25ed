//! 覆蓋計算主入口

use rayon::prelude::*;
use std::collections::HashMap;
use stock_core::{LeadTimeConfig, Product, ProductCalculation};
use uuid::Uuid;

use crate::metrics::MetricsCalculator;

/// 超過此商品數改用平行計算
const PARALLEL_THRESHOLD: usize = 256;

/// 覆蓋計算器
///
/// 無內部狀態。每次輸入變更時以呼叫方提供的一致性快照全量重算，
/// 不跨變更快取結果；相同輸入必得相同輸出。
pub struct CoverageCalculator;

impl CoverageCalculator {
    /// 計算整個目錄的覆蓋指標
    ///
    /// 對任何數量欄位非負的商品序列皆為全函數，不產生錯誤；
    /// 每個商品恰好對應一筆計算結果。
    pub fn compute(
        products: &[Product],
        lead_time: &LeadTimeConfig,
    ) -> HashMap<Uuid, ProductCalculation> {
        tracing::debug!(
            "開始覆蓋計算：商品 {} 筆，總前置時間 {} 天",
            products.len(),
            lead_time.total_lead_time()
        );

        let calculations: HashMap<Uuid, ProductCalculation> =
            if products.len() >= PARALLEL_THRESHOLD {
                products
                    .par_iter()
                    .map(|p| (p.id, MetricsCalculator::compute(p, lead_time)))
                    .collect()
            } else {
                products
                    .iter()
                    .map(|p| (p.id, MetricsCalculator::compute(p, lead_time)))
                    .collect()
            };

        tracing::debug!("覆蓋計算完成：{} 筆結果", calculations.len());

        calculations
    }
}
