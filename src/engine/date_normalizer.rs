// ==========================================
// 门店库存调拨决策支持系统 - 日期归一器
// ==========================================
// 职责: 首次收货日期按下限日期截断 (阶段 1)
// 输入: 原始库存记录 + threshold_date
// 输出: 填充 adjusted_date 的记录
// ==========================================

use crate::domain::inventory::InventoryRecord;
use chrono::NaiveDate;

// ==========================================
// DateNormalizer - 日期归一器
// ==========================================
pub struct DateNormalizer {
    // 无状态引擎
}

impl DateNormalizer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 归一化首次收货日期
    ///
    /// # 规则
    /// - adjusted_date = max(first_receipt_date, threshold_date)
    /// - 日期为空的行原样通过 (adjusted_date 保持 None),
    ///   由库龄阶段剔除, 不在此处报错
    /// - 幂等: 相同阈值重复执行结果不变
    ///
    /// # 参数
    /// - `records`: 库存记录 (取得所有权)
    /// - `threshold_date`: 日期下限 (如季节上市日)
    ///
    /// # 返回
    /// 填充 adjusted_date 后的记录表
    pub fn normalize(
        &self,
        records: Vec<InventoryRecord>,
        threshold_date: NaiveDate,
    ) -> Vec<InventoryRecord> {
        records
            .into_iter()
            .map(|mut record| {
                record.adjusted_date = record
                    .first_receipt_date
                    .map(|date| date.max(threshold_date));
                record
            })
            .collect()
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
