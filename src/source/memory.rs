// ==========================================
// 门店库存调拨决策支持系统 - 内存数据源
// ==========================================
// 职责: 以内存中的记录集合充当数据源
// 用途: 测试与嵌入式调用方
// ==========================================

use crate::domain::inventory::InventoryRecord;
use crate::source::error::SourceResult;
use crate::source::filter::FilterSelection;
use crate::source::provider::InventoryProvider;
use async_trait::async_trait;
use tracing::debug;

pub struct InMemorySource {
    records: Vec<InventoryRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self { records }
    }

    /// 空数据源 (零记录)
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl InventoryProvider for InMemorySource {
    async fn fetch_records(&self, filters: &FilterSelection) -> SourceResult<Vec<InventoryRecord>> {
        let matched: Vec<InventoryRecord> = self
            .records
            .iter()
            .filter(|record| filters.matches(record))
            .cloned()
            .collect();

        debug!(
            total = self.records.len(),
            matched = matched.len(),
            "内存数据源取数完成"
        );
        Ok(matched)
    }
}
