// ==========================================
// 门店库存调拨决策支持系统 - 调拨需求计算器
// ==========================================
// 职责: 逐行计算带符号调拨量 (负=调出, 正=调入)
// 红线: 行级独立计算, 不做任何跨行合计
// ==========================================

use crate::domain::inventory::AggregatedRecord;
use crate::domain::types::TransferRole;
use crate::engine::ratio;
use tracing::{debug, instrument};

// ==========================================
// RequirementCalculator - 需求引擎
// ==========================================
pub struct RequirementCalculator;

impl RequirementCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 填充 transfer_qty = targeted_cover * (sold / shop_days) - on_hand
    ///
    /// # 规则
    /// - shop_days 缺失或 <= 0 → 0 (速率不可得)
    /// - 向零截断, 保留符号
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn apply(&self, mut rows: Vec<AggregatedRecord>) -> Vec<AggregatedRecord> {
        let mut sender_count = 0usize;
        let mut receiver_count = 0usize;

        for row in &mut rows {
            row.transfer_qty = ratio::transfer_requirement(
                row.targeted_cover,
                row.sold_qty,
                row.shop_days.unwrap_or(0),
                row.on_hand_qty,
            );
            match row.transfer_role() {
                TransferRole::Sender => sender_count += 1,
                TransferRole::Receiver => receiver_count += 1,
                TransferRole::Balanced => {}
            }
        }

        debug!(sender_count, receiver_count, "调拨需求计算完成");
        rows
    }
}

impl Default for RequirementCalculator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::StockStatus;
    use chrono::NaiveDate;

    fn row(on_hand: i64, sold: i64, days: Option<i64>, cover: i64) -> AggregatedRecord {
        AggregatedRecord {
            sku: "A1".to_string(),
            store_name: "Store X".to_string(),
            design: "D1".to_string(),
            color: "Red".to_string(),
            size: "M".to_string(),
            category_volume: "V1".to_string(),
            product_type: "Lawn".to_string(),
            region: None,
            adjusted_date: NaiveDate::from_ymd_opt(2026, 2, 1),
            received_qty: on_hand + sold,
            displaced_qty: 0,
            on_hand_qty: on_hand,
            sold_qty: sold,
            shop_sell_through: 0,
            design_sell_through: 0,
            status: StockStatus::Low,
            shop_days: days,
            max_design_days: days.unwrap_or(0),
            targeted_cover: cover,
            transfer_qty: 0,
        }
    }

    #[test]
    fn test_deficit_store_gets_positive_qty() {
        let calculator = RequirementCalculator::new();
        // 10 * (50/10) - 0 = 50 → 调入
        let rows = calculator.apply(vec![row(0, 50, Some(10), 10)]);
        assert_eq!(rows[0].transfer_qty, 50);
        assert_eq!(rows[0].transfer_role(), TransferRole::Receiver);
    }

    #[test]
    fn test_surplus_store_gets_negative_qty() {
        let calculator = RequirementCalculator::new();
        // 5 * (10/10) - 30 = -25 → 调出
        let rows = calculator.apply(vec![row(30, 10, Some(10), 5)]);
        assert_eq!(rows[0].transfer_qty, -25);
        assert_eq!(rows[0].transfer_role(), TransferRole::Sender);
    }

    #[test]
    fn test_missing_shop_days_yields_zero() {
        let calculator = RequirementCalculator::new();
        let rows = calculator.apply(vec![row(30, 10, None, 5)]);
        assert_eq!(rows[0].transfer_qty, 0);
        assert_eq!(rows[0].transfer_role(), TransferRole::Balanced);
    }

    #[test]
    fn test_zero_shop_days_yields_zero() {
        let calculator = RequirementCalculator::new();
        let rows = calculator.apply(vec![row(30, 10, Some(0), 5)]);
        assert_eq!(rows[0].transfer_qty, 0);
    }

    #[test]
    fn test_result_truncates_toward_zero() {
        let calculator = RequirementCalculator::new();
        // 7 * (10/3) - 20 = 23.33.. - 20 = 3.33.. → 3
        let rows = calculator.apply(vec![row(20, 10, Some(3), 7)]);
        assert_eq!(rows[0].transfer_qty, 3);
    }
}
