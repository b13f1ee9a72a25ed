//! 覆蓋天數模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 庫存覆蓋天數
///
/// 銷售速度為零時覆蓋天數沒有上限，以獨立變體表示，
/// 不依賴浮點無窮大的比較語義。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coverage {
    /// 有限覆蓋（天）
    Finite(Decimal),

    /// 無上限覆蓋（無銷售速度）
    Unbounded,
}

impl Coverage {
    /// 檢查是否為無上限覆蓋
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Coverage::Unbounded)
    }

    /// 檢查覆蓋是否低於門檻天數
    ///
    /// 無上限覆蓋不低於任何門檻。
    pub fn is_below(&self, days: Decimal) -> bool {
        match self {
            Coverage::Finite(d) => *d < days,
            Coverage::Unbounded => false,
        }
    }

    /// 檢查覆蓋是否高於門檻天數
    ///
    /// 無上限覆蓋不參與數值比較，一律返回 false；
    /// 呆滯庫存由分類規則鏈的第一條規則處理。
    pub fn is_above(&self, days: Decimal) -> bool {
        match self {
            Coverage::Finite(d) => *d > days,
            Coverage::Unbounded => false,
        }
    }

    /// 覆蓋月數（天數 / 30），無上限值原樣傳遞
    pub fn months(&self) -> Coverage {
        match self {
            Coverage::Finite(d) => Coverage::Finite(d / Decimal::from(30)),
            Coverage::Unbounded => Coverage::Unbounded,
        }
    }

    /// 取得有限覆蓋天數
    pub fn as_days(&self) -> Option<Decimal> {
        match self {
            Coverage::Finite(d) => Some(*d),
            Coverage::Unbounded => None,
        }
    }
}

/// 全序比較：有限值按天數排序，無上限值排在所有有限值之後
impl Ord for Coverage {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Coverage::Finite(a), Coverage::Finite(b)) => a.cmp(b),
            (Coverage::Finite(_), Coverage::Unbounded) => Ordering::Less,
            (Coverage::Unbounded, Coverage::Finite(_)) => Ordering::Greater,
            (Coverage::Unbounded, Coverage::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Coverage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Coverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coverage::Finite(d) => write!(f, "{}", d.round_dp(1)),
            Coverage::Unbounded => f.write_str("∞"),
        }
    }
}
