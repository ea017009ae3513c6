// ==========================================
// 门店库存调拨决策支持系统 - CSV 导出器
// ==========================================
// 职责: 将两张结果表序列化为可下载的 CSV 字节流
// 红线: 表头使用业务口径列名, 与报表文件一致
// ==========================================

use crate::domain::inventory::{AggregatedRecord, TransferRecommendation};
use crate::export::error::{ExportError, ExportResult};
use chrono::NaiveDate;
use tracing::debug;

/// 达标明细表表头 (业务口径)
const ELIGIBLE_HEADERS: &[&str] = &[
    "City",
    "UPC/Barcode/SKU",
    "STORE_NAME",
    "DESIGN",
    "Adjusted 1st Rcv Date",
    "Volume",
    "product_type",
    "Size",
    "Color",
    "Shop Rcv Qty",
    "Disp. Qty",
    "O.H Qty",
    "Sold Qty",
    "shop Sell Through",
    "design Sell Through",
    "Status",
    "Shop Days",
    "Max Design Days",
    "Targeted Cover",
    "Transfer in/out",
];

/// 调拨建议表表头 (业务口径)
const TRANSFER_HEADERS: &[&str] = &[
    "City",
    "UPC/Barcode/SKU",
    "From Store",
    "To Store",
    "DESIGN",
    "Size",
    "Color",
    "Volume",
    "product_type",
    "Quantity Transferred",
];

// ==========================================
// CsvExporter - 结果表 CSV 导出器
// ==========================================
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// 导出达标明细表
    ///
    /// 全网口径下 City 列留空
    pub fn write_eligible_csv(&self, rows: &[AggregatedRecord]) -> ExportResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(ELIGIBLE_HEADERS)?;

        for row in rows {
            writer.write_record(&[
                row.region.clone().unwrap_or_default(),
                row.sku.clone(),
                row.store_name.clone(),
                row.design.clone(),
                format_date(row.adjusted_date),
                row.category_volume.clone(),
                row.product_type.clone(),
                row.size.clone(),
                row.color.clone(),
                row.received_qty.to_string(),
                row.displaced_qty.to_string(),
                row.on_hand_qty.to_string(),
                row.sold_qty.to_string(),
                row.shop_sell_through.to_string(),
                row.design_sell_through.to_string(),
                row.status.to_string(),
                row.shop_days.map(|d| d.to_string()).unwrap_or_default(),
                row.max_design_days.to_string(),
                row.targeted_cover.to_string(),
                row.transfer_qty.to_string(),
            ])?;
        }

        let bytes = Self::finish(writer)?;
        debug!(rows = rows.len(), bytes = bytes.len(), "达标明细表导出完成");
        Ok(bytes)
    }

    /// 导出调拨建议表
    pub fn write_transfer_csv(&self, recommendations: &[TransferRecommendation]) -> ExportResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(TRANSFER_HEADERS)?;

        for rec in recommendations {
            writer.write_record(&[
                rec.region.clone().unwrap_or_default(),
                rec.sku.clone(),
                rec.from_store.clone(),
                rec.to_store.clone(),
                rec.design.clone(),
                rec.size.clone(),
                rec.color.clone(),
                rec.category_volume.clone(),
                rec.product_type.clone(),
                rec.quantity.to_string(),
            ])?;
        }

        let bytes = Self::finish(writer)?;
        debug!(
            rows = recommendations.len(),
            bytes = bytes.len(),
            "调拨建议表导出完成"
        );
        Ok(bytes)
    }

    fn finish(writer: csv::Writer<Vec<u8>>) -> ExportResult<Vec<u8>> {
        writer
            .into_inner()
            .map_err(|e| ExportError::Finalize(e.to_string()))
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
