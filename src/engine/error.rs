// ==========================================
// 门店库存调拨决策支持系统 - 引擎层错误类型
// ==========================================
// 职责: 管线阶段边界的输入校验错误
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
///
/// 比值退化 (除零/非有限) 不是错误, 按置零规则在阶段内消化;
/// 这里只承载必须中止整次运行的结构性问题。
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 结构错误 (致命, 中止运行) =====
    #[error("缺少必需列: {column}")]
    MissingColumn { column: String },

    // ===== 参数错误 =====
    #[error("阈值参数非法 ({field}): {message}")]
    InvalidThreshold { field: String, message: String },

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
