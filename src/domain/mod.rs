// ==========================================
// 门店库存调拨决策支持系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod inventory;
pub mod types;

// 重导出核心类型
pub use inventory::{AggregatedRecord, InventoryRecord, RawInventoryRecord, TransferRecommendation};
pub use types::{GroupScope, MatchOrdering, StockStatus, TransferRole};
