// ==========================================
// 门店库存调拨决策支持系统 - 库存领域实体
// ==========================================
// 职责: 定义调拨管线各阶段的行记录
// 红线: 实体不含计算逻辑,派生字段由引擎逐阶段填充
// ==========================================

use crate::domain::types::{GroupScope, StockStatus, TransferRole};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// InventoryRecord - 库存原始记录 (一行观测)
// ==========================================

/// 单条 (门店, SKU) 库存观测记录
///
/// 上游查询服务或文件导入产出的原始行。脏数值在导入层
/// 已清洗为非负整数, 无法解析的日期保留为 None。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    // ===== 聚合键 =====
    pub sku: String,               // UPC/条码/SKU, 跨店比较的唯一口径
    pub store_name: String,        // 门店名称
    pub design: String,            // 款式
    pub color: String,             // 颜色
    pub size: String,              // 尺码
    pub category_volume: String,   // 销量分层 (Volume)
    pub product_type: String,      // 品类

    // ===== 可选维度 =====
    #[serde(default)]
    pub season: Option<String>,    // 季节, 仅用于数据源过滤
    #[serde(default)]
    pub region: Option<String>,    // 城市, 仅城市口径下参与分组/配对

    // ===== 日期 =====
    pub first_receipt_date: Option<NaiveDate>, // 首次收货日期, 解析失败为 None
    #[serde(default)]
    pub adjusted_date: Option<NaiveDate>,      // 归一化日期, 由日期归一器填充

    // ===== 数量 =====
    pub received_qty: i64,  // 收货数量
    pub displaced_qty: i64, // 移出/损耗数量
    pub on_hand_qty: i64,   // 在库数量
    pub sold_qty: i64,      // 售出数量
}

impl InventoryRecord {
    /// 净收货 = 收货 - 移出
    pub fn net_receiving(&self) -> i64 {
        self.received_qty - self.displaced_qty
    }
}

// ==========================================
// AggregatedRecord - 聚合后的管线行
// ==========================================

/// 聚合键唯一的一行, 派生字段由阶段 3-6 逐步填充
///
/// 字段填充顺序: 聚合(数量) → 卖通率/状态 → 库龄 → 目标覆盖 → 调拨量。
/// `shop_days` 在库龄阶段前为 None; 无有效日期的行在库龄阶段被剔除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedRecord {
    // ===== 聚合键 =====
    pub sku: String,
    pub store_name: String,
    pub design: String,
    pub color: String,
    pub size: String,
    pub category_volume: String,
    pub product_type: String,
    #[serde(default)]
    pub region: Option<String>,            // 城市口径下的分组键
    pub adjusted_date: Option<NaiveDate>,  // 归一化日期 (聚合键之一)

    // ===== 聚合数量 =====
    pub received_qty: i64,
    pub displaced_qty: i64,
    pub on_hand_qty: i64,
    pub sold_qty: i64,

    // ===== 派生字段 =====
    #[serde(default)]
    pub shop_sell_through: i64,            // 门店卖通率 (%)
    #[serde(default)]
    pub design_sell_through: i64,          // 款式卖通率 (%)
    #[serde(default)]
    pub status: StockStatus,               // High/Low
    #[serde(default)]
    pub shop_days: Option<i64>,            // 门店库龄 (天)
    #[serde(default)]
    pub max_design_days: i64,              // 款式最大库龄 (天)
    #[serde(default)]
    pub targeted_cover: i64,               // 目标覆盖天数
    #[serde(default)]
    pub transfer_qty: i64,                 // 带符号调拨量: 负=调出, 正=调入
}

impl AggregatedRecord {
    /// 净收货 = 收货 - 移出
    pub fn net_receiving(&self) -> i64 {
        self.received_qty - self.displaced_qty
    }

    /// 款式级分组键: 全网口径按 SKU, 城市口径按 (SKU, 城市)
    pub fn design_key(&self, scope: GroupScope) -> (String, Option<String>) {
        if scope.uses_region() {
            (self.sku.clone(), self.region.clone())
        } else {
            (self.sku.clone(), None)
        }
    }

    /// 当前调拨角色 (由 transfer_qty 符号推导)
    pub fn transfer_role(&self) -> TransferRole {
        TransferRole::from_transfer_qty(self.transfer_qty)
    }
}

// ==========================================
// TransferRecommendation - 调拨建议 (阶段 8 输出)
// ==========================================

/// 一条调出门店 → 调入门店的调拨建议
///
/// 构造后不可变; 描述性属性取自调出行; quantity 恒为正。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRecommendation {
    pub sku: String,             // UPC/SKU
    pub from_store: String,      // 调出门店
    pub to_store: String,        // 调入门店
    pub design: String,          // 款式
    pub size: String,            // 尺码
    pub color: String,           // 颜色
    pub category_volume: String, // 销量分层
    pub product_type: String,    // 品类
    #[serde(default)]
    pub region: Option<String>,  // 城市 (城市口径)
    pub quantity: i64,           // 调拨数量, > 0
}

// ==========================================
// RawInventoryRecord - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物 (文件解析 → 字段映射 → 此结构)
// 生命周期: 仅在导入流程内, 清洗后转为 InventoryRecord
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInventoryRecord {
    // 源字段 (已按列别名映射, 未清洗)
    pub sku: Option<String>,
    pub store_name: Option<String>,
    pub design: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub category_volume: Option<String>,
    pub product_type: Option<String>,
    pub season: Option<String>,
    pub region: Option<String>,
    pub first_receipt_date_raw: Option<String>,
    pub received_qty_raw: Option<String>,
    pub displaced_qty_raw: Option<String>,
    pub on_hand_qty_raw: Option<String>,
    pub sold_qty_raw: Option<String>,

    // 元信息
    pub row_number: usize, // 原始文件行号 (用于报错定位)
}
