//! 欄位編輯請求

use serde::{Deserialize, Serialize};
use stock_core::{Category, Product};

/// 單一欄位的編輯請求
///
/// 套用語義為整筆替換：命中 ID 後以更新完欄位的記錄整筆覆蓋原記錄。
/// 數量變體攜帶已箝位的非負值；覆寫變體攜帶 Option，清除覆寫可表達。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldEdit {
    /// SKU 編號
    Sku(String),
    /// 商品名稱
    Name(String),
    /// 店鋪名稱
    Store(String),
    /// 商品分類
    Category(Category),
    /// 商品圖片
    Image(Option<String>),
    /// 現有庫存
    AvailableStock(u64),
    /// 在途庫存
    InTransitStock(u64),
    /// 計劃發貨量
    PlannedShipment(u64),
    /// 近 7 日銷量
    SalesLast7Days(u64),
    /// 覆寫補貨量（None 清除覆寫，回到系統建議）
    CustomRestockQty(Option<u64>),
    /// 規格備註
    Specs(Option<String>),
    /// 裝箱率
    QtyPerCarton(Option<u64>),
}

impl FieldEdit {
    /// 將編輯套用到商品記錄
    pub(crate) fn apply(&self, product: &mut Product) {
        match self {
            FieldEdit::Sku(sku) => product.sku = sku.clone(),
            FieldEdit::Name(name) => product.name = name.clone(),
            FieldEdit::Store(store) => product.store = store.clone(),
            FieldEdit::Category(category) => product.category = *category,
            FieldEdit::Image(image) => product.image = image.clone(),
            FieldEdit::AvailableStock(qty) => product.available_stock = *qty,
            FieldEdit::InTransitStock(qty) => product.in_transit_stock = *qty,
            FieldEdit::PlannedShipment(qty) => product.planned_shipment = *qty,
            FieldEdit::SalesLast7Days(qty) => product.sales_last_7_days = *qty,
            FieldEdit::CustomRestockQty(qty) => product.custom_restock_qty = *qty,
            FieldEdit::Specs(specs) => product.specs = specs.clone(),
            FieldEdit::QtyPerCarton(qty) => product.qty_per_carton = *qty,
        }
    }
}

/// 解析使用者輸入的數量欄位
///
/// 非數字與負數一律箝位為 0；小數輸入取整數部分。
/// 負值與 NaN 因此永不進入引擎。
pub fn parse_quantity(raw: &str) -> u64 {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => value.max(0) as u64,
        Err(_) => trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
            .map(|value| value.trunc() as u64)
            .unwrap_or(0),
    }
}

/// 解析海運天數輸入（下限 1 天）
pub fn parse_sea_freight_days(raw: &str) -> u64 {
    parse_quantity(raw).max(1)
}
