// ==========================================
// 门店库存调拨决策支持系统 - 导出层
// ==========================================
// 职责: 结果表序列化为可下载的字节流
// ==========================================

// 模块声明
pub mod csv_writer;
pub mod error;

// 重导出核心类型
pub use csv_writer::CsvExporter;
pub use error::{ExportError, ExportResult};
