//! 儀表板計算示例

use stockflow::{
    AggregateCalculator, AlertCalculator, Catalog, CoverageCalculator, seed_products,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== StockFlow 儀表板計算示例 ===\n");

    // 建立示範目錄（海運預設 30 天 → 總前置時間 44 天）
    let mut catalog = Catalog::new();
    for product in seed_products() {
        catalog.add(product)?;
    }

    let snapshot = catalog.snapshot();
    println!(
        "目錄：{} 筆商品，總前置時間 {} 天\n",
        snapshot.products.len(),
        snapshot.lead_time.total_lead_time()
    );

    // 執行覆蓋計算
    let calculations = CoverageCalculator::compute(&snapshot.products, &snapshot.lead_time);

    println!("商品明細:");
    for product in &snapshot.products {
        let calc = &calculations[&product.id];
        println!(
            "  - {} {}：管道庫存 {}，覆蓋 {} 天，狀態 {:?}，建議補貨 {}",
            product.sku,
            product.name,
            calc.total_pipeline_stock,
            calc.days_coverage,
            calc.status,
            calc.display_restock_qty
        );
    }

    // 彙總統計
    let stats = AggregateCalculator::compute(&snapshot.products, &calculations);
    println!("\n儀表板統計:");
    println!("  SKU 總數: {}", stats.total_skus);
    println!("  補貨預警: {}", stats.critical_alerts);
    println!("  建議補貨總量: {}", stats.total_restock_qty);
    println!("  分類庫存分佈:");
    for entry in &stats.category_stock {
        println!("    {}: {}", entry.category, entry.available_stock);
    }

    // 預警清單（最緊急在前）
    let alerts = AlertCalculator::alert_list(&snapshot.products, &calculations);
    println!("\n補貨預警（{} 項）:", alerts.len());
    for (product, calc) in &alerts {
        println!(
            "  - {}：餘 {} 天，建議補貨 {}",
            product.name, calc.days_coverage, calc.restock_needed_qty
        );
    }

    Ok(())
}
