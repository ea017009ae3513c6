// ==========================================
// 门店库存调拨决策支持系统 - API 数据传输对象
// ==========================================
// 职责: 定义调拨决策 API 的请求/响应结构
// ==========================================

use crate::config::thresholds::PipelineConfig;
use crate::domain::inventory::{AggregatedRecord, TransferRecommendation};
use crate::engine::orchestrator::RunStats;
use crate::source::filter::FilterSelection;
use serde::{Deserialize, Serialize};

/// 调拨决策请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDataRequest {
    /// 取数过滤条件 (缺省 = 全量)
    #[serde(default)]
    pub filters: FilterSelection,
    /// 管道配置 (阈值/口径/配对顺序/基准日)
    pub config: PipelineConfig,
    /// 是否同时生成 CSV 导出字节流
    #[serde(default)]
    pub include_exports: bool,
}

/// 调拨决策响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDataResponse {
    /// 本次运行ID
    pub run_id: String,
    /// 用户提示 (无数据等非致命情形)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// 运行统计
    pub stats: RunStats,
    /// 达标明细表 (过滤后)
    pub eligible_rows: Vec<AggregatedRecord>,
    /// 调拨建议表
    pub recommendations: Vec<TransferRecommendation>,
    /// 达标明细表 CSV (include_exports 时)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_csv: Option<Vec<u8>>,
    /// 调拨建议表 CSV (include_exports 时)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_csv: Option<Vec<u8>>,
    /// 处理耗时 (毫秒)
    pub elapsed_ms: i64,
}

impl ProcessDataResponse {
    /// 无数据时的空响应
    pub fn no_data(run_id: String, notice: String, elapsed_ms: i64) -> Self {
        Self {
            run_id,
            notice: Some(notice),
            stats: RunStats::default(),
            eligible_rows: Vec::new(),
            recommendations: Vec::new(),
            eligible_csv: None,
            transfer_csv: None,
            elapsed_ms,
        }
    }
}
