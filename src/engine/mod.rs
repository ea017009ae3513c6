// ==========================================
// 门店库存调拨决策支持系统 - 引擎层
// ==========================================
// 职责: 实现调拨管线的八个阶段引擎
// 红线: 引擎不做 IO; 比值退化按统一置零规则消化, 不抛错
// ==========================================

pub mod age_calculator;
pub mod aggregator;
pub mod cover_calculator;
pub mod date_normalizer;
pub mod eligibility;
pub mod error;
pub mod orchestrator;
pub mod ratio;
pub mod requirement;
pub mod sell_through;
pub mod transfer_matcher;

// 重导出核心引擎
pub use age_calculator::AgeCalculator;
pub use aggregator::RecordAggregator;
pub use cover_calculator::CoverCalculator;
pub use date_normalizer::DateNormalizer;
pub use eligibility::EligibilityFilter;
pub use error::{EngineError, EngineResult};
pub use orchestrator::{PipelineRunResult, RunStats, TransferOrchestrator};
pub use requirement::RequirementCalculator;
pub use sell_through::SellThroughCalculator;
pub use transfer_matcher::{TransferMatchOutcome, TransferMatcher};
