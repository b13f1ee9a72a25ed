//! 商品模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 商品分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 電子產品
    Electronics,
    /// 家居用品
    Home,
    /// 服飾鞋包
    Apparel,
    /// 數碼配件
    Accessories,
    /// 母嬰玩具
    Toys,
}

impl Category {
    /// 分類顯示名稱
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "電子產品",
            Category::Home => "家居用品",
            Category::Apparel => "服飾鞋包",
            Category::Accessories => "數碼配件",
            Category::Toys => "母嬰玩具",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 商品（單一店鋪下的一個 SKU）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 商品ID（目錄生命週期內唯一）
    pub id: Uuid,

    /// SKU 編號
    pub sku: String,

    /// 商品名稱
    pub name: String,

    /// 店鋪名稱
    pub store: String,

    /// 商品分類
    pub category: Category,

    /// 商品圖片連結
    pub image: Option<String>,

    /// 現有庫存
    pub available_stock: u64,

    /// 在途庫存
    pub in_transit_stock: u64,

    /// 計劃發貨量
    pub planned_shipment: u64,

    /// 近 7 日銷量
    pub sales_last_7_days: u64,

    /// 使用者覆寫的補貨量（未設定時採用系統建議值）
    pub custom_restock_qty: Option<u64>,

    /// 規格備註（如 "90x120"）
    pub specs: Option<String>,

    /// 裝箱率（每箱數量）
    pub qty_per_carton: Option<u64>,
}

impl Product {
    /// 創建新的商品記錄（自動生成 ID）
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        store: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sku: sku.into(),
            name: name.into(),
            store: store.into(),
            category,
            image: None,
            available_stock: 0,
            in_transit_stock: 0,
            planned_shipment: 0,
            sales_last_7_days: 0,
            custom_restock_qty: None,
            specs: None,
            qty_per_carton: None,
        }
    }

    /// 建構器模式：設置商品圖片
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// 建構器模式：設置庫存數量（現有 / 在途 / 計劃發貨）
    pub fn with_stock(mut self, available: u64, in_transit: u64, planned: u64) -> Self {
        self.available_stock = available;
        self.in_transit_stock = in_transit;
        self.planned_shipment = planned;
        self
    }

    /// 建構器模式：設置近 7 日銷量
    pub fn with_sales_last_7_days(mut self, sales: u64) -> Self {
        self.sales_last_7_days = sales;
        self
    }

    /// 建構器模式：設置覆寫補貨量
    pub fn with_custom_restock_qty(mut self, qty: u64) -> Self {
        self.custom_restock_qty = Some(qty);
        self
    }

    /// 建構器模式：設置規格備註
    pub fn with_specs(mut self, specs: impl Into<String>) -> Self {
        self.specs = Some(specs.into());
        self
    }

    /// 建構器模式：設置裝箱率
    pub fn with_qty_per_carton(mut self, qty: u64) -> Self {
        self.qty_per_carton = Some(qty);
        self
    }

    /// 管道總庫存（現有 + 在途 + 計劃發貨）
    pub fn total_pipeline_stock(&self) -> u64 {
        self.available_stock + self.in_transit_stock + self.planned_shipment
    }

    /// 檢查使用者是否設定了補貨量覆寫
    pub fn has_restock_override(&self) -> bool {
        self.custom_restock_qty.is_some()
    }
}
