// ==========================================
// 门店库存调拨决策支持系统 - 目标覆盖计算器
// ==========================================
// 职责: 按款式组计算目标覆盖天数并回填到每一行
// 红线: date_difference 在本阶段独立重算, 不复用 max_design_days
// ==========================================

use crate::domain::inventory::AggregatedRecord;
use crate::domain::types::GroupScope;
use crate::engine::ratio;
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// DesignTotals - 款式组合计
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
struct DesignTotals {
    on_hand_sum: i64,
    sold_sum: i64,
    date_difference: i64, // 组内最大 shop_days
}

// ==========================================
// CoverCalculator - 覆盖引擎
// ==========================================
pub struct CoverCalculator;

impl CoverCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 填充 targeted_cover
    ///
    /// # 规则
    /// - 款式组 (SKU[, 城市]) 合计: on_hand_sum / (sold_sum / date_difference)
    /// - date_difference = 组内最大 shop_days
    /// - 日销速率不可得 (sold_sum <= 0 或 date_difference <= 0) → 0
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn apply(
        &self,
        mut rows: Vec<AggregatedRecord>,
        scope: GroupScope,
    ) -> Vec<AggregatedRecord> {
        let mut totals: HashMap<(String, Option<String>), DesignTotals> = HashMap::new();
        for row in &rows {
            let entry = totals.entry(row.design_key(scope)).or_default();
            entry.on_hand_sum += row.on_hand_qty;
            entry.sold_sum += row.sold_qty;
            entry.date_difference = entry.date_difference.max(row.shop_days.unwrap_or(0));
        }

        for row in &mut rows {
            row.targeted_cover = totals
                .get(&row.design_key(scope))
                .map(|t| ratio::days_of_cover(t.on_hand_sum, t.sold_sum, t.date_difference))
                .unwrap_or(0);
        }

        debug!(designs = totals.len(), "目标覆盖计算完成");
        rows
    }
}

impl Default for CoverCalculator {
    fn default() -> Self {
        Self::new()
    }
}
