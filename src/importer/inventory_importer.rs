// ==========================================
// 门店库存调拨决策支持系统 - 库存快照导入器
// ==========================================
// 职责: 整合导入流程, 从文件到内部库存记录
// 流程: 解析 → 表头检查 → 字段映射 → 清洗
// ==========================================

use crate::domain::inventory::InventoryRecord;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use std::path::Path;
use tracing::{info, instrument, warn};

// ==========================================
// ImportOutcome - 导入结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    /// 清洗后的库存记录
    pub records: Vec<InventoryRecord>,
    /// 文件中的数据行数 (不含表头与空行)
    pub total_rows: usize,
    /// 因缺聚合键属性被剔除的行数
    pub skipped_rows: usize,
    /// 文件是否带城市列
    pub has_region_column: bool,
}

// ==========================================
// InventoryImporter - 库存快照导入器
// ==========================================
pub struct InventoryImporter {
    parser: UniversalFileParser,
    cleaner: DataCleaner,
}

impl InventoryImporter {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            cleaner: DataCleaner::new(),
        }
    }

    /// 从 CSV/Excel 文件导入库存快照
    ///
    /// # 规则
    /// - 必需列缺失 → MissingRequiredColumns (规范列名), 即使文件无数据行
    /// - 缺聚合键属性的行剔除并计数, 不中断导入
    /// - 行号从 2 起 (1 为表头), 与表格软件一致
    #[instrument(skip(self), fields(file = %file_path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path> + std::fmt::Debug>(&self, file_path: P) -> ImportResult<ImportOutcome> {
        let table = self.parser.parse(file_path.as_ref())?;

        let mapper = FieldMapper::from_headers(&table.headers);
        let missing = mapper.missing_required_columns();
        if !missing.is_empty() {
            warn!(?missing, "表头缺少必需列");
            return Err(ImportError::MissingRequiredColumns { columns: missing });
        }

        let total_rows = table.rows.len();
        let mut records = Vec::with_capacity(total_rows);
        let mut skipped_rows = 0usize;

        for (index, row) in table.rows.iter().enumerate() {
            let raw = mapper.map_row(row, index + 2);
            match self.cleaner.clean_record(raw) {
                Some(record) => records.push(record),
                None => skipped_rows += 1,
            }
        }

        info!(
            total_rows,
            imported = records.len(),
            skipped_rows,
            has_region_column = mapper.has_region_column(),
            "库存快照导入完成"
        );

        Ok(ImportOutcome {
            records,
            total_rows,
            skipped_rows,
            has_region_column: mapper.has_region_column(),
        })
    }
}

impl Default for InventoryImporter {
    fn default() -> Self {
        Self::new()
    }
}
