//! 商品目錄

use std::collections::HashSet;
use stock_core::{LeadTimeConfig, Product, StockError};
use uuid::Uuid;

use crate::edit::FieldEdit;
use crate::repository::SavedCatalog;

/// 商品目錄（記憶體內的有序商品序列 + 前置時間配置 + 勾選集合）
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// 商品序列（維持加入順序）
    products: Vec<Product>,

    /// 勾選集合
    selected: HashSet<Uuid>,

    /// 前置時間配置
    lead_time: LeadTimeConfig,
}

/// 交給計算引擎的一致性快照
///
/// 引擎不讀取共享狀態；每次重算都以快照的值傳遞完整輸入。
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    /// 商品序列副本
    pub products: Vec<Product>,

    /// 前置時間配置副本
    pub lead_time: LeadTimeConfig,
}

impl Catalog {
    /// 創建空目錄（預設前置時間配置）
    pub fn new() -> Self {
        Self::default()
    }

    /// 創建指定前置時間配置的空目錄
    pub fn with_lead_time(lead_time: LeadTimeConfig) -> Self {
        Self {
            products: Vec::new(),
            selected: HashSet::new(),
            lead_time,
        }
    }

    /// 由持久化資料還原目錄
    ///
    /// 驗證 ID 唯一性與海運天數下限。
    pub fn from_saved(saved: SavedCatalog) -> stock_core::Result<Self> {
        let lead_time = LeadTimeConfig::new(saved.sea_freight_days)?;

        let mut seen = HashSet::with_capacity(saved.products.len());
        for product in &saved.products {
            if !seen.insert(product.id) {
                return Err(StockError::DuplicateProduct(product.id));
            }
        }

        Ok(Self {
            products: saved.products,
            selected: HashSet::new(),
            lead_time,
        })
    }

    /// 商品序列（目錄順序）
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// 商品數量
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// 目錄是否為空
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 按 ID 查找商品
    pub fn get(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 前置時間配置
    pub fn lead_time(&self) -> &LeadTimeConfig {
        &self.lead_time
    }

    /// 設置海運天數（下限 1 天）
    pub fn set_sea_freight_days(&mut self, days: u64) {
        self.lead_time.sea_freight_days = days.max(1);
        tracing::debug!("海運天數更新為 {} 天", self.lead_time.sea_freight_days);
    }

    /// 加入商品（ID 重複時拒絕）
    pub fn add(&mut self, product: Product) -> stock_core::Result<Uuid> {
        if self.get(product.id).is_some() {
            return Err(StockError::DuplicateProduct(product.id));
        }

        let id = product.id;
        tracing::debug!("加入商品 {}（{}）", product.sku, id);
        self.products.push(product);

        Ok(id)
    }

    /// 套用欄位編輯（整筆替換語義）
    pub fn apply_edit(&mut self, id: Uuid, edit: FieldEdit) -> stock_core::Result<()> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StockError::ProductNotFound(id))?;

        let mut updated = self.products[index].clone();
        edit.apply(&mut updated);
        self.products[index] = updated;

        Ok(())
    }

    /// 對勾選集合批次套用同一筆欄位編輯，返回實際更新筆數
    pub fn apply_edit_to_selection(&mut self, edit: &FieldEdit) -> usize {
        let mut edited = 0;
        for product in &mut self.products {
            if self.selected.contains(&product.id) {
                let mut updated = product.clone();
                edit.apply(&mut updated);
                *product = updated;
                edited += 1;
            }
        }

        tracing::debug!("批次編輯套用到 {} 筆商品", edited);
        edited
    }

    /// 刪除商品，同時移出勾選集合
    pub fn remove(&mut self, id: Uuid) -> stock_core::Result<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StockError::ProductNotFound(id))?;

        self.selected.remove(&id);
        let removed = self.products.remove(index);
        tracing::debug!("刪除商品 {}（{}）", removed.sku, id);

        Ok(removed)
    }

    /// 勾選/取消勾選單筆商品；未知 ID 不動作
    pub fn toggle_select(&mut self, id: Uuid) {
        if self.get(id).is_none() {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// 全選/全取消：已全選時清空，否則選取全部
    pub fn toggle_select_all(&mut self) {
        if self.selected.len() == self.products.len() {
            self.selected.clear();
        } else {
            self.selected = self.products.iter().map(|p| p.id).collect();
        }
    }

    /// 清空勾選集合
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// 檢查商品是否被勾選
    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    /// 勾選的商品數
    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    /// 勾選的商品（目錄順序）
    pub fn selected_products(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| self.selected.contains(&p.id))
            .cloned()
            .collect()
    }

    /// 取得一致性快照
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            products: self.products.clone(),
            lead_time: self.lead_time,
        }
    }

    /// 轉為持久化資料
    pub fn to_saved(&self, last_updated: chrono::DateTime<chrono::Utc>) -> SavedCatalog {
        SavedCatalog {
            products: self.products.clone(),
            sea_freight_days: self.lead_time.sea_freight_days,
            last_updated,
        }
    }
}
