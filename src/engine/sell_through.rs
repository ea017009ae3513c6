// ==========================================
// 门店库存调拨决策支持系统 - 卖通率计算器
// ==========================================
// 职责: 填充门店卖通率、款式卖通率与 High/Low 状态
// 红线: 款式合计在库龄剔除之前计算 (含无日期行); 比值按统一置零规则
// ==========================================

use crate::domain::inventory::AggregatedRecord;
use crate::domain::types::{GroupScope, StockStatus};
use crate::engine::ratio;
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// SellThroughCalculator - 卖通率引擎
// ==========================================
pub struct SellThroughCalculator;

impl SellThroughCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 逐行填充 shop_sell_through / design_sell_through / status
    ///
    /// # 规则
    /// - 门店卖通率 = sold / (received - displaced) * 100, 向零截断
    /// - 款式卖通率 = 款式组 (SKU[, 城市]) 内合计口径的同一比值
    /// - status: 门店 >= 款式 → High, 否则 Low
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn apply(
        &self,
        mut rows: Vec<AggregatedRecord>,
        scope: GroupScope,
    ) -> Vec<AggregatedRecord> {
        // 款式级合计: (sold_sum, net_receiving_sum)
        let mut design_totals: HashMap<(String, Option<String>), (i64, i64)> = HashMap::new();
        for row in &rows {
            let totals = design_totals.entry(row.design_key(scope)).or_insert((0, 0));
            totals.0 += row.sold_qty;
            totals.1 += row.net_receiving();
        }

        let mut high_count = 0usize;
        for row in &mut rows {
            row.shop_sell_through = ratio::sell_through_pct(row.sold_qty, row.net_receiving());

            let (sold_sum, net_sum) = design_totals
                .get(&row.design_key(scope))
                .copied()
                .unwrap_or((0, 0));
            row.design_sell_through = ratio::sell_through_pct(sold_sum, net_sum);

            row.status =
                StockStatus::from_sell_through(row.shop_sell_through, row.design_sell_through);
            if row.status == StockStatus::High {
                high_count += 1;
            }
        }

        debug!(
            designs = design_totals.len(),
            high_count,
            "卖通率计算完成"
        );
        rows
    }
}

impl Default for SellThroughCalculator {
    fn default() -> Self {
        Self::new()
    }
}
