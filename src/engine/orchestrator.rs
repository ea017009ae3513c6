// ==========================================
// 门店库存调拨决策支持系统 - 管线编排器
// ==========================================
// 职责: 按固定顺序串联八个阶段引擎, 产出一次完整的调拨运行结果
// 红线: 阶段顺序不可调换; 空输入返回空结果而不是错误
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::inventory::{AggregatedRecord, InventoryRecord, TransferRecommendation};
use crate::engine::{
    AgeCalculator, CoverCalculator, DateNormalizer, EligibilityFilter, RecordAggregator,
    RequirementCalculator, SellThroughCalculator, TransferMatcher,
};
use crate::engine::error::EngineResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// RunStats - 运行统计
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub input_rows: usize,       // 原始观测行数
    pub aggregated_rows: usize,  // 聚合后行数
    pub eligible_rows: usize,    // 通过准入过滤的行数
    pub sender_rows: usize,      // 调出候选行数
    pub receiver_rows: usize,    // 调入候选行数
    pub recommendation_count: usize, // 调拨建议条数
    pub units_moved: i64,        // 实际搬动件数
    pub open_deficit: i64,       // 撮合后未满足缺口
    pub open_surplus: i64,       // 撮合后未消化富余
}

// ==========================================
// PipelineRunResult - 管线运行结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRunResult {
    /// 本次运行标识 (UUID v4)
    pub run_id: String,
    /// 准入过滤后的明细行 (撮合前状态, 供报表导出)
    pub eligible_rows: Vec<AggregatedRecord>,
    /// 调拨建议
    pub recommendations: Vec<TransferRecommendation>,
    /// 运行统计
    pub stats: RunStats,
}

// ==========================================
// TransferOrchestrator - 管线编排器
// ==========================================
pub struct TransferOrchestrator {
    normalizer: DateNormalizer,
    aggregator: RecordAggregator,
    sell_through: SellThroughCalculator,
    age: AgeCalculator,
    cover: CoverCalculator,
    requirement: RequirementCalculator,
    eligibility: EligibilityFilter,
    matcher: TransferMatcher,
}

impl TransferOrchestrator {
    /// 创建新的编排器实例
    pub fn new() -> Self {
        Self {
            normalizer: DateNormalizer::new(),
            aggregator: RecordAggregator::new(),
            sell_through: SellThroughCalculator::new(),
            age: AgeCalculator::new(),
            cover: CoverCalculator::new(),
            requirement: RequirementCalculator::new(),
            eligibility: EligibilityFilter::new(),
            matcher: TransferMatcher::new(),
        }
    }

    /// 执行完整调拨管线
    ///
    /// # 参数
    /// - `records`: 原始库存观测行 (取得所有权)
    /// - `config`: 本次运行的全部参数
    ///
    /// # 返回
    /// 准入明细 + 调拨建议 + 统计; 结构性问题 (缺列/非法阈值) 返回错误
    pub fn run(
        &self,
        records: Vec<InventoryRecord>,
        config: &PipelineConfig,
    ) -> EngineResult<PipelineRunResult> {
        config.validate()?;

        let run_id = Uuid::new_v4().to_string();
        let input_rows = records.len();

        info!(
            run_id = %run_id,
            input_rows,
            scope = %config.scope,
            ordering = %config.ordering,
            as_of = %config.as_of,
            threshold_date = %config.thresholds.threshold_date,
            "开始执行调拨管线"
        );

        if records.is_empty() {
            info!(run_id = %run_id, "输入为空, 返回空结果");
            return Ok(PipelineRunResult {
                run_id,
                eligible_rows: Vec::new(),
                recommendations: Vec::new(),
                stats: RunStats::default(),
            });
        }

        // ==========================================
        // 步骤1: 日期归一
        // ==========================================
        debug!("步骤1: 日期归一");
        let normalized = self
            .normalizer
            .normalize(records, config.thresholds.threshold_date);

        // ==========================================
        // 步骤2: 聚合
        // ==========================================
        debug!("步骤2: 按聚合键折叠数量");
        let aggregated = self.aggregator.aggregate(normalized, config.scope)?;
        let aggregated_rows = aggregated.len();
        info!(aggregated_rows, "聚合完成");

        // ==========================================
        // 步骤3: 卖通率与状态
        // ==========================================
        debug!("步骤3: 卖通率与 High/Low 状态");
        let rated = self.sell_through.apply(aggregated, config.scope);

        // ==========================================
        // 步骤4: 库龄
        // ==========================================
        debug!("步骤4: 库龄与款式最大库龄");
        let aged = self.age.apply(rated, config.as_of, config.scope);

        // ==========================================
        // 步骤5: 目标覆盖
        // ==========================================
        debug!("步骤5: 目标覆盖天数");
        let covered = self.cover.apply(aged, config.scope);

        // ==========================================
        // 步骤6: 调拨需求
        // ==========================================
        debug!("步骤6: 带符号调拨量");
        let required = self.requirement.apply(covered);

        // ==========================================
        // 步骤7: 准入过滤
        // ==========================================
        debug!("步骤7: 准入过滤");
        let eligible = self.eligibility.apply(required, &config.thresholds);
        info!(eligible_rows = eligible.len(), "准入过滤完成");

        // ==========================================
        // 步骤8: 调拨撮合
        // ==========================================
        debug!("步骤8: 贪心撮合");
        let outcome = self
            .matcher
            .match_transfers(&eligible, config.scope, config.ordering);

        let stats = RunStats {
            input_rows,
            aggregated_rows,
            eligible_rows: eligible.len(),
            sender_rows: eligible.iter().filter(|r| r.transfer_qty < 0).count(),
            receiver_rows: eligible.iter().filter(|r| r.transfer_qty > 0).count(),
            recommendation_count: outcome.recommendations.len(),
            units_moved: outcome.units_moved,
            open_deficit: outcome.open_deficit,
            open_surplus: outcome.open_surplus,
        };

        info!(
            run_id = %run_id,
            recommendation_count = stats.recommendation_count,
            units_moved = stats.units_moved,
            open_deficit = stats.open_deficit,
            open_surplus = stats.open_surplus,
            "调拨管线执行完成"
        );

        Ok(PipelineRunResult {
            run_id,
            eligible_rows: eligible,
            recommendations: outcome.recommendations,
            stats,
        })
    }
}

impl Default for TransferOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
