// ==========================================
// 门店库存调拨决策支持系统 - 导出错误类型
// ==========================================
// 职责: 定义导出层的错误
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV 序列化失败
    #[error("CSV 写出失败: {0}")]
    CsvError(#[from] csv::Error),

    /// 写出缓冲回收失败
    #[error("导出缓冲回收失败: {0}")]
    Finalize(String),
}

/// 导出层 Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
