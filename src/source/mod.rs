// ==========================================
// 门店库存调拨决策支持系统 - 数据源层
// ==========================================
// 职责: 库存快照取数接口与实现
// 实现: 文件数据源 (CSV/Excel), 内存数据源
// ==========================================

// 模块声明
pub mod error;
pub mod file;
pub mod filter;
pub mod memory;
pub mod provider;

// 重导出核心类型
pub use error::{SourceError, SourceResult};
pub use file::FileSource;
pub use filter::FilterSelection;
pub use memory::InMemorySource;
pub use provider::InventoryProvider;
