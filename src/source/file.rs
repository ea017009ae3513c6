// ==========================================
// 门店库存调拨决策支持系统 - 文件数据源
// ==========================================
// 职责: 从 CSV/Excel 快照文件取数并应用过滤
// ==========================================

use crate::domain::inventory::InventoryRecord;
use crate::importer::inventory_importer::InventoryImporter;
use crate::source::error::SourceResult;
use crate::source::filter::FilterSelection;
use crate::source::provider::InventoryProvider;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

pub struct FileSource {
    file_path: PathBuf,
    importer: InventoryImporter,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(file_path: P) -> Self {
        Self {
            file_path: file_path.into(),
            importer: InventoryImporter::new(),
        }
    }
}

#[async_trait]
impl InventoryProvider for FileSource {
    async fn fetch_records(&self, filters: &FilterSelection) -> SourceResult<Vec<InventoryRecord>> {
        let outcome = self.importer.import_file(&self.file_path)?;

        let total = outcome.records.len();
        let matched: Vec<InventoryRecord> = if filters.is_unconstrained() {
            outcome.records
        } else {
            outcome
                .records
                .into_iter()
                .filter(|record| filters.matches(record))
                .collect()
        };

        info!(
            file = %self.file_path.display(),
            imported = total,
            matched = matched.len(),
            skipped = outcome.skipped_rows,
            "文件数据源取数完成"
        );
        Ok(matched)
    }
}
