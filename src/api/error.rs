// ==========================================
// 门店库存调拨决策支持系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 转换下层错误为用户可读的错误消息
// ==========================================

use crate::engine::error::EngineError;
use crate::export::error::ExportError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 输入表缺少必需列 (致命, 中止本次运行)
    #[error("缺少必需列: {0}")]
    MissingColumn(String),

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("结果导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从下层错误转换
// 目的: 将引擎/导出层的技术错误转换为用户可读的业务错误
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::MissingColumn { column } => ApiError::MissingColumn(column),
            EngineError::InvalidThreshold { field, message } => {
                ApiError::InvalidInput(format!("{}: {}", field, message))
            }
            EngineError::InternalError(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::MissingRequiredColumns { columns } => {
                ApiError::MissingColumn(columns.join(", "))
            }
            other => ApiError::InvalidInput(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
