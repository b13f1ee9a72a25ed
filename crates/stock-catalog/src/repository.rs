//! 目錄持久化介面

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stock_core::Product;

/// 持久化資料負載（一個帳號的完整目錄）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCatalog {
    /// 商品序列
    pub products: Vec<Product>,

    /// 海運天數
    pub sea_freight_days: u64,

    /// 最後更新時間
    pub last_updated: DateTime<Utc>,
}

/// 目錄儲存介面
///
/// 以顯式注入的儲存介面取代行程級單例，
/// 儲存的生命週期與測試隔離因此是明確的。
pub trait CatalogRepository {
    /// 載入帳號的目錄資料；帳號不存在時返回 None
    fn load(&self, account: &str) -> stock_core::Result<Option<SavedCatalog>>;

    /// 保存帳號的目錄資料
    fn save(&mut self, account: &str, data: &SavedCatalog) -> stock_core::Result<()>;
}

/// 記憶體內儲存（測試與示例用）
///
/// 以 JSON 字串存放負載，序列化路徑與真實儲存一致。
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    entries: HashMap<String, String>,
}

impl MemoryRepository {
    /// 創建空的記憶體儲存
    pub fn new() -> Self {
        Self::default()
    }

    /// 已存放的帳號數
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 儲存是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogRepository for MemoryRepository {
    fn load(&self, account: &str) -> stock_core::Result<Option<SavedCatalog>> {
        match self.entries.get(account) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, account: &str, data: &SavedCatalog) -> stock_core::Result<()> {
        let json = serde_json::to_string(data)?;
        self.entries.insert(account.to_string(), json);
        tracing::debug!("保存帳號 {} 的目錄資料（{} 筆商品）", account, data.products.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_core::Category;

    fn saved() -> SavedCatalog {
        SavedCatalog {
            products: vec![
                Product::new("SF-001", "無線降噪耳機", "Amazon US", Category::Electronics)
                    .with_stock(120, 50, 0)
                    .with_sales_last_7_days(85),
            ],
            sea_freight_days: 30,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut repo = MemoryRepository::new();
        let data = saved();

        repo.save("alice", &data).unwrap();
        let loaded = repo.load("alice").unwrap().unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn test_unknown_account_is_none() {
        let repo = MemoryRepository::new();

        assert!(repo.load("nobody").unwrap().is_none());
    }

    #[test]
    fn test_accounts_are_isolated() {
        let mut repo = MemoryRepository::new();
        let data = saved();
        repo.save("alice", &data).unwrap();

        let mut other = data.clone();
        other.sea_freight_days = 15;
        repo.save("bob", &other).unwrap();

        assert_eq!(repo.load("alice").unwrap().unwrap().sea_freight_days, 30);
        assert_eq!(repo.load("bob").unwrap().unwrap().sea_freight_days, 15);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_save_overwrites_existing() {
        let mut repo = MemoryRepository::new();
        let data = saved();
        repo.save("alice", &data).unwrap();

        let mut updated = data.clone();
        updated.products.clear();
        repo.save("alice", &updated).unwrap();

        assert!(repo.load("alice").unwrap().unwrap().products.is_empty());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_repository_as_trait_object() {
        // 以注入的介面形態使用，不依賴具體型別
        let mut repo: Box<dyn CatalogRepository> = Box::new(MemoryRepository::new());
        let data = saved();

        repo.save("alice", &data).unwrap();

        assert!(repo.load("alice").unwrap().is_some());
    }
}
