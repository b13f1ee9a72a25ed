//! 補貨計劃與持久化示例

use stockflow::{
    Catalog, CatalogRepository, CoverageCalculator, FieldEdit, MemoryRepository,
    RestockPlanCalculator, seed_products,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== StockFlow 補貨計劃示例 ===\n");

    let mut catalog = Catalog::new();
    for product in seed_products() {
        catalog.add(product)?;
    }

    // 全選並批次設定裝箱率 50
    catalog.toggle_select_all();
    let edited = catalog.apply_edit_to_selection(&FieldEdit::QtyPerCarton(Some(50)));
    println!("批次設定裝箱率：{} 筆商品\n", edited);

    // 彙總補貨計劃
    let snapshot = catalog.snapshot();
    let calculations = CoverageCalculator::compute(&snapshot.products, &snapshot.lead_time);
    let plan = RestockPlanCalculator::summarize(&catalog.selected_products(), &calculations);

    println!("補貨計劃:");
    for line in &plan.lines {
        println!("  - {}：{} 件，{} 箱", line.sku, line.quantity, line.cartons);
    }
    println!("合計：{} 件 / {} 箱\n", plan.total_quantity, plan.total_cartons);

    // 保存到注入的儲存介面並還原
    let mut repo = MemoryRepository::new();
    repo.save("demo", &catalog.to_saved(chrono::Utc::now()))?;

    let restored = Catalog::from_saved(repo.load("demo")?.expect("剛保存的帳號應存在"))?;
    println!("還原目錄：{} 筆商品", restored.len());

    Ok(())
}
