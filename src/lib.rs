// ==========================================
// 门店库存调拨决策支持系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (调拨建议仅供参考, 人工最终控制权)
// 技术栈: Rust + tokio
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 调拨决策管道
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 数据源层 - 取数接口与实现
pub mod source;

// 导出层 - 结果表序列化
pub mod export;

// 配置层 - 阈值与管道配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{GroupScope, MatchOrdering, StockStatus, TransferRole};

// 领域实体
pub use domain::{AggregatedRecord, InventoryRecord, RawInventoryRecord, TransferRecommendation};

// 引擎
pub use engine::{
    AgeCalculator, CoverCalculator, DateNormalizer, EligibilityFilter, PipelineRunResult,
    RecordAggregator, RequirementCalculator, RunStats, SellThroughCalculator, TransferMatcher,
    TransferOrchestrator,
};

// 配置
pub use config::{PipelineConfig, TransferThresholds};

// 数据源与导出
pub use export::CsvExporter;
pub use source::{FileSource, FilterSelection, InMemorySource, InventoryProvider};

// API
pub use api::{ProcessDataRequest, ProcessDataResponse, TransferApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "门店库存调拨决策支持系统";
