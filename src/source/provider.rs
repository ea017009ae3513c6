// ==========================================
// 门店库存调拨决策支持系统 - 数据源 Trait
// ==========================================
// 职责: 定义库存快照取数接口 (不包含实现)
// ==========================================

use crate::domain::inventory::InventoryRecord;
use crate::source::error::SourceResult;
use crate::source::filter::FilterSelection;
use async_trait::async_trait;

// ==========================================
// InventoryProvider Trait
// ==========================================
// 用途: 库存快照取数主接口
// 实现者: FileSource, InMemorySource
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    /// 按过滤条件取库存快照
    ///
    /// # 参数
    /// - filters: 维度过滤条件 (空条件 = 全量)
    ///
    /// # 返回
    /// - Ok(Vec<InventoryRecord>): 满足条件的记录 (可为空)
    /// - Err(SourceError): 文件或上游服务错误
    async fn fetch_records(&self, filters: &FilterSelection) -> SourceResult<Vec<InventoryRecord>>;
}
