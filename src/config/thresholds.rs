// ==========================================
// 门店库存调拨决策支持系统 - 调拨参数配置
// ==========================================
// 职责: 管线入口的全部显式参数 (阈值/口径/顺序/基准日)
// 红线: 管线不读任何环境或全局状态, 参数全部经由此结构传入
// ==========================================

use crate::domain::types::{GroupScope, MatchOrdering};
use crate::engine::error::{EngineError, EngineResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// TransferThresholds - 业务阈值
// ==========================================

/// 日期归一与准入筛选的阈值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferThresholds {
    /// 日期下限: 早于该日的首次收货日期一律抬升到该日
    pub threshold_date: NaiveDate,

    /// 款式卖通率准入阈值 (%), 严格大于才保留
    #[serde(default = "default_sell_through_threshold")]
    pub sell_through_threshold: i64,

    /// 款式最大库龄准入阈值 (天), 严格大于才保留
    #[serde(default = "default_days_threshold")]
    pub days_threshold: i64,
}

fn default_sell_through_threshold() -> i64 {
    60
}

fn default_days_threshold() -> i64 {
    30
}

impl TransferThresholds {
    /// 以默认阈值 (60%, 30 天) 构造
    pub fn new(threshold_date: NaiveDate) -> Self {
        Self {
            threshold_date,
            sell_through_threshold: default_sell_through_threshold(),
            days_threshold: default_days_threshold(),
        }
    }

    /// 阈值边界检查
    ///
    /// 卖通率阈值限定 0..=100, 库龄阈值非负
    pub fn validate(&self) -> EngineResult<()> {
        if !(0..=100).contains(&self.sell_through_threshold) {
            return Err(EngineError::InvalidThreshold {
                field: "sell_through_threshold".to_string(),
                message: format!(
                    "卖通率阈值必须在 0..=100 之间, 实际为 {}",
                    self.sell_through_threshold
                ),
            });
        }
        if self.days_threshold < 0 {
            return Err(EngineError::InvalidThreshold {
                field: "days_threshold".to_string(),
                message: format!("库龄阈值不能为负, 实际为 {}", self.days_threshold),
            });
        }
        Ok(())
    }
}

// ==========================================
// PipelineConfig - 管线运行配置
// ==========================================

/// 一次管线运行的完整参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// 业务阈值
    pub thresholds: TransferThresholds,

    /// 分组口径 (默认全网)
    #[serde(default)]
    pub scope: GroupScope,

    /// 配对遍历顺序 (默认保持输入行序)
    #[serde(default)]
    pub ordering: MatchOrdering,

    /// 库龄基准日 (显式传入, 不读系统时钟)
    pub as_of: NaiveDate,
}

impl PipelineConfig {
    /// 以默认口径/顺序构造
    pub fn new(threshold_date: NaiveDate, as_of: NaiveDate) -> Self {
        Self {
            thresholds: TransferThresholds::new(threshold_date),
            scope: GroupScope::default(),
            ordering: MatchOrdering::default(),
            as_of,
        }
    }

    /// 边界检查 (透传阈值检查)
    pub fn validate(&self) -> EngineResult<()> {
        self.thresholds.validate()
    }
}
