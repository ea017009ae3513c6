// ==========================================
// 门店库存调拨决策支持系统 - 配置层
// ==========================================
// 职责: 管线运行参数的结构化定义与边界检查
// 红线: 纯数据结构, 不含任何计算或 IO
// ==========================================

pub mod thresholds;

// 重导出核心配置类型
pub use thresholds::{PipelineConfig, TransferThresholds};
