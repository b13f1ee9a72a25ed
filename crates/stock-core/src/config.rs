//! 補貨前置時間配置

use serde::{Deserialize, Serialize};

/// 生產天數（固定常數）
pub const PRODUCTION_DAYS: u64 = 7;

/// 安全庫存天數（固定常數）
pub const SAFETY_STOCK_DAYS: u64 = 7;

/// 預設海運天數
pub const DEFAULT_SEA_FREIGHT_DAYS: u64 = 30;

/// 前置時間配置（行程級、使用者可調整）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadTimeConfig {
    /// 海運天數（>= 1）
    pub sea_freight_days: u64,
}

impl LeadTimeConfig {
    /// 創建新的前置時間配置
    pub fn new(sea_freight_days: u64) -> crate::Result<Self> {
        if sea_freight_days == 0 {
            return Err(crate::StockError::InvalidLeadTime(sea_freight_days));
        }
        Ok(Self { sea_freight_days })
    }

    /// 總前置時間 = 海運 + 生產 + 安全庫存緩衝
    pub fn total_lead_time(&self) -> u64 {
        self.sea_freight_days + PRODUCTION_DAYS + SAFETY_STOCK_DAYS
    }

    /// 目標覆蓋天數
    ///
    /// 目標覆蓋窗口定義為等於總前置時間。
    pub fn target_coverage_days(&self) -> u64 {
        self.total_lead_time()
    }
}

impl Default for LeadTimeConfig {
    fn default() -> Self {
        Self {
            sea_freight_days: DEFAULT_SEA_FREIGHT_DAYS,
        }
    }
}
