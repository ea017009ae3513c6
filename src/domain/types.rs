// ==========================================
// 门店库存调拨决策支持系统 - 领域类型定义
// ==========================================
// 职责: 调拨业务的枚举类型
// 红线: 枚举制,不在字符串上做分支
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 库存状态 (Stock Status)
// ==========================================
// 门店卖通率与款式卖通率的对比结论
// 序列化格式: 与导出报表一致 ("High"/"Low")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    High, // 门店卖通率不低于款式卖通率
    Low,  // 门店卖通率低于款式卖通率
}

impl StockStatus {
    /// 由门店/款式卖通率对比得出状态
    pub fn from_sell_through(shop_pct: i64, design_pct: i64) -> Self {
        if shop_pct >= design_pct {
            StockStatus::High
        } else {
            StockStatus::Low
        }
    }
}

impl Default for StockStatus {
    fn default() -> Self {
        StockStatus::Low
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockStatus::High => write!(f, "High"),
            StockStatus::Low => write!(f, "Low"),
        }
    }
}

// ==========================================
// 分组口径 (Group Scope)
// ==========================================
// Network = 全网口径, 款式级聚合只按 SKU
// City    = 城市口径, 款式级聚合按 (SKU, 城市), 调拨不跨城市
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupScope {
    Network, // 全网
    City,    // 城市内
}

impl GroupScope {
    /// 从字符串解析（大小写不敏感）
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "NETWORK" => Some(GroupScope::Network),
            "CITY" => Some(GroupScope::City),
            _ => None,
        }
    }

    /// 该口径下区域是否参与分组与配对
    pub fn uses_region(&self) -> bool {
        matches!(self, GroupScope::City)
    }
}

impl Default for GroupScope {
    fn default() -> Self {
        GroupScope::Network
    }
}

impl fmt::Display for GroupScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupScope::Network => write!(f, "NETWORK"),
            GroupScope::City => write!(f, "CITY"),
        }
    }
}

// ==========================================
// 配对顺序 (Match Ordering)
// ==========================================
// 贪心配对对行序敏感,顺序必须是显式参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOrdering {
    InputOrder,       // 保持工作集原始行序
    SkuThenMagnitude, // 按 (SKU, |调拨量| 降序, 门店名) 排序,结果可复现
}

impl MatchOrdering {
    /// 从字符串解析（大小写不敏感, 允许连字符写法）
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().replace('-', "_").as_str() {
            "INPUT_ORDER" | "INPUT" => Some(MatchOrdering::InputOrder),
            "SKU_THEN_MAGNITUDE" | "SKU_MAGNITUDE" => Some(MatchOrdering::SkuThenMagnitude),
            _ => None,
        }
    }
}

impl Default for MatchOrdering {
    fn default() -> Self {
        MatchOrdering::InputOrder
    }
}

impl fmt::Display for MatchOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOrdering::InputOrder => write!(f, "INPUT_ORDER"),
            MatchOrdering::SkuThenMagnitude => write!(f, "SKU_THEN_MAGNITUDE"),
        }
    }
}

// ==========================================
// 调拨角色 (Transfer Role)
// ==========================================
// 由 transfer_qty 符号推导: 负=调出, 正=调入, 零=平衡
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferRole {
    Sender,   // 库存富余,候选调出门店
    Receiver, // 库存缺口,候选调入门店
    Balanced, // 持平,不参与配对
}

impl TransferRole {
    /// 由带符号调拨量推导角色
    pub fn from_transfer_qty(transfer_qty: i64) -> Self {
        match transfer_qty {
            q if q < 0 => TransferRole::Sender,
            q if q > 0 => TransferRole::Receiver,
            _ => TransferRole::Balanced,
        }
    }
}

impl fmt::Display for TransferRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferRole::Sender => write!(f, "SENDER"),
            TransferRole::Receiver => write!(f, "RECEIVER"),
            TransferRole::Balanced => write!(f, "BALANCED"),
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_from_sell_through() {
        assert_eq!(StockStatus::from_sell_through(80, 60), StockStatus::High);
        assert_eq!(StockStatus::from_sell_through(60, 60), StockStatus::High);
        assert_eq!(StockStatus::from_sell_through(59, 60), StockStatus::Low);
    }

    #[test]
    fn test_stock_status_display() {
        assert_eq!(StockStatus::High.to_string(), "High");
        assert_eq!(StockStatus::Low.to_string(), "Low");
    }

    #[test]
    fn test_group_scope_parse() {
        assert_eq!(GroupScope::from_str_opt("network"), Some(GroupScope::Network));
        assert_eq!(GroupScope::from_str_opt("CITY"), Some(GroupScope::City));
        assert_eq!(GroupScope::from_str_opt("zone"), None);
    }

    #[test]
    fn test_group_scope_uses_region() {
        assert!(!GroupScope::Network.uses_region());
        assert!(GroupScope::City.uses_region());
    }

    #[test]
    fn test_match_ordering_parse() {
        assert_eq!(
            MatchOrdering::from_str_opt("input-order"),
            Some(MatchOrdering::InputOrder)
        );
        assert_eq!(
            MatchOrdering::from_str_opt("sku_then_magnitude"),
            Some(MatchOrdering::SkuThenMagnitude)
        );
        assert_eq!(MatchOrdering::from_str_opt("random"), None);
    }

    #[test]
    fn test_transfer_role_from_qty() {
        assert_eq!(TransferRole::from_transfer_qty(-5), TransferRole::Sender);
        assert_eq!(TransferRole::from_transfer_qty(3), TransferRole::Receiver);
        assert_eq!(TransferRole::from_transfer_qty(0), TransferRole::Balanced);
    }

    #[test]
    fn test_scope_serde_screaming_snake() {
        let json = serde_json::to_string(&GroupScope::City).unwrap();
        assert_eq!(json, "\"CITY\"");
        let back: GroupScope = serde_json::from_str("\"NETWORK\"").unwrap();
        assert_eq!(back, GroupScope::Network);
    }
}
