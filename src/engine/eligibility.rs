// ==========================================
// 门店库存调拨决策支持系统 - 准入过滤器
// ==========================================
// 职责: 只放行"卖得动且库龄足够"的款式行进入配对
// 红线: 两个阈值都是严格大于; 不满足的行整行剔除, 即使调拨量非零
// ==========================================

use crate::config::TransferThresholds;
use crate::domain::inventory::AggregatedRecord;
use tracing::{debug, instrument};

// ==========================================
// EligibilityFilter - 准入引擎
// ==========================================
pub struct EligibilityFilter;

impl EligibilityFilter {
    pub fn new() -> Self {
        Self
    }

    /// 保留 design_sell_through > 阈值 且 max_design_days > 阈值 的行
    #[instrument(skip(self, rows, thresholds), fields(rows = rows.len()))]
    pub fn apply(
        &self,
        rows: Vec<AggregatedRecord>,
        thresholds: &TransferThresholds,
    ) -> Vec<AggregatedRecord> {
        let input = rows.len();
        let kept: Vec<AggregatedRecord> = rows
            .into_iter()
            .filter(|row| {
                row.design_sell_through > thresholds.sell_through_threshold
                    && row.max_design_days > thresholds.days_threshold
            })
            .collect();

        debug!(
            input,
            kept = kept.len(),
            sell_through_threshold = thresholds.sell_through_threshold,
            days_threshold = thresholds.days_threshold,
            "准入过滤完成"
        );
        kept
    }
}

impl Default for EligibilityFilter {
    fn default() -> Self {
        Self::new()
    }
}
