// ==========================================
// 门店库存调拨决策支持系统 - 导入层
// ==========================================
// 职责: 外部数据导入, 生成内部库存记录
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod inventory_importer;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, ParsedTable, UniversalFileParser};
pub use inventory_importer::{ImportOutcome, InventoryImporter};
