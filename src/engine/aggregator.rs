// ==========================================
// 门店库存调拨决策支持系统 - 记录聚合器
// ==========================================
// 职责: 按 (SKU, 门店, 款式, 归一化日期, 分层, 品类, 尺码, 颜色[, 城市]) 聚合数量
// 红线: 只合并数量, 不做任何派生计算; 组顺序 = 首次出现顺序
// ==========================================

use crate::domain::inventory::{AggregatedRecord, InventoryRecord};
use crate::domain::types::{GroupScope, StockStatus};
use crate::engine::error::{EngineError, EngineResult};
use chrono::NaiveDate;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// GroupKey - 聚合键
// ==========================================
// 全网口径 region 恒为 None; 城市口径 region 参与分组
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct GroupKey {
    sku: String,
    store_name: String,
    design: String,
    adjusted_date: Option<NaiveDate>,
    category_volume: String,
    product_type: String,
    size: String,
    color: String,
    region: Option<String>,
}

// ==========================================
// RecordAggregator - 聚合引擎
// ==========================================
pub struct RecordAggregator;

impl RecordAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 将原始观测行折叠为聚合键唯一的管线行
    ///
    /// # 规则
    /// - 四个数量字段按组求和, 其余字段取首次出现的值
    /// - 城市口径: 无城市的行剔除; 输入非空但全部无城市视为缺列
    /// - 全网口径: 聚合行的 region 统一置 None (城市不参与比较)
    /// - 输出顺序 = 组首次出现顺序 (决定后续撮合的遍历顺序)
    #[instrument(skip(self, records), fields(input_rows = records.len()))]
    pub fn aggregate(
        &self,
        records: Vec<InventoryRecord>,
        scope: GroupScope,
    ) -> EngineResult<Vec<AggregatedRecord>> {
        if scope.uses_region()
            && !records.is_empty()
            && records.iter().all(|r| r.region.is_none())
        {
            return Err(EngineError::MissingColumn {
                column: "City".to_string(),
            });
        }

        let mut rows: Vec<AggregatedRecord> = Vec::new();
        let mut index: HashMap<GroupKey, usize> = HashMap::new();
        let mut dropped_no_region = 0usize;

        for record in records {
            let region = if scope.uses_region() {
                match record.region.clone() {
                    Some(city) => Some(city),
                    None => {
                        // 城市口径下无城市的行无法归组, 剔除
                        dropped_no_region += 1;
                        continue;
                    }
                }
            } else {
                None
            };

            let key = GroupKey {
                sku: record.sku.clone(),
                store_name: record.store_name.clone(),
                design: record.design.clone(),
                adjusted_date: record.adjusted_date,
                category_volume: record.category_volume.clone(),
                product_type: record.product_type.clone(),
                size: record.size.clone(),
                color: record.color.clone(),
                region: region.clone(),
            };

            match index.entry(key) {
                Entry::Occupied(occupied) => {
                    let row = &mut rows[*occupied.get()];
                    row.received_qty += record.received_qty;
                    row.displaced_qty += record.displaced_qty;
                    row.on_hand_qty += record.on_hand_qty;
                    row.sold_qty += record.sold_qty;
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(rows.len());
                    rows.push(AggregatedRecord {
                        sku: record.sku,
                        store_name: record.store_name,
                        design: record.design,
                        color: record.color,
                        size: record.size,
                        category_volume: record.category_volume,
                        product_type: record.product_type,
                        region,
                        adjusted_date: record.adjusted_date,
                        received_qty: record.received_qty,
                        displaced_qty: record.displaced_qty,
                        on_hand_qty: record.on_hand_qty,
                        sold_qty: record.sold_qty,
                        shop_sell_through: 0,
                        design_sell_through: 0,
                        status: StockStatus::Low,
                        shop_days: None,
                        max_design_days: 0,
                        targeted_cover: 0,
                        transfer_qty: 0,
                    });
                }
            }
        }

        debug!(
            groups = rows.len(),
            dropped_no_region,
            scope = %scope,
            "聚合完成"
        );
        Ok(rows)
    }
}

impl Default for RecordAggregator {
    fn default() -> Self {
        Self::new()
    }
}
