// ==========================================
// 门店库存调拨决策支持系统 - 库龄计算器
// ==========================================
// 职责: 填充门店库龄与款式最大库龄, 剔除无归一化日期的行
// 红线: 库龄以显式 as_of 日期计算, 不读系统时钟
// ==========================================

use crate::domain::inventory::AggregatedRecord;
use crate::domain::types::GroupScope;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// AgeCalculator - 库龄引擎
// ==========================================
pub struct AgeCalculator;

impl AgeCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 填充 shop_days / max_design_days
    ///
    /// # 规则
    /// - shop_days = as_of - adjusted_date 的整天数 (可为负, 由需求阶段兜底)
    /// - adjusted_date 为 None 的行剔除 (无法计龄, 不参与后续阶段)
    /// - max_design_days = 款式组 (SKU[, 城市]) 内 shop_days 最大值
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn apply(
        &self,
        rows: Vec<AggregatedRecord>,
        as_of: NaiveDate,
        scope: GroupScope,
    ) -> Vec<AggregatedRecord> {
        let mut kept: Vec<AggregatedRecord> = Vec::with_capacity(rows.len());
        let mut dropped_no_date = 0usize;

        for mut row in rows {
            match row.adjusted_date {
                Some(date) => {
                    row.shop_days = Some(as_of.signed_duration_since(date).num_days());
                    kept.push(row);
                }
                None => dropped_no_date += 1,
            }
        }

        // 款式最大库龄
        let mut design_max: HashMap<(String, Option<String>), i64> = HashMap::new();
        for row in &kept {
            let days = row.shop_days.unwrap_or(0);
            design_max
                .entry(row.design_key(scope))
                .and_modify(|max_days| *max_days = (*max_days).max(days))
                .or_insert(days);
        }
        for row in &mut kept {
            row.max_design_days = design_max
                .get(&row.design_key(scope))
                .copied()
                .unwrap_or(0);
        }

        debug!(
            kept = kept.len(),
            dropped_no_date,
            as_of = %as_of,
            "库龄计算完成"
        );
        kept
    }
}

impl Default for AgeCalculator {
    fn default() -> Self {
        Self::new()
    }
}
