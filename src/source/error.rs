// ==========================================
// 门店库存调拨决策支持系统 - 数据源错误类型
// ==========================================
// 职责: 定义数据源层的错误
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// 文件导入失败
    #[error("数据导入失败: {0}")]
    Import(#[from] crate::importer::error::ImportError),

    /// 上游数据服务不可用
    #[error("数据源不可用: {0}")]
    Unavailable(String),
}

/// 数据源层 Result 类型别名
pub type SourceResult<T> = Result<T, SourceError>;
