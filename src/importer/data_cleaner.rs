// ==========================================
// 门店库存调拨决策支持系统 - 数据清洗器实现
// ==========================================
// 职责: 脏数量归 0 / 多格式日期解析 / 缺键整行剔除
// 红线: 清洗绝不报错: 坏数量得 0, 坏日期得 None, 缺聚合键的行丢弃
// ==========================================

use crate::domain::inventory::{InventoryRecord, RawInventoryRecord};
use chrono::{NaiveDate, NaiveDateTime};

// 依次尝试的日期写法 (数据库导出与报表两种方言)
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%d-%m-%Y", "%d/%m/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub struct DataCleaner;

impl DataCleaner {
    pub fn new() -> Self {
        Self
    }

    /// 数量清洗: 去掉千分位与空白后解析, 脏值一律归 0
    ///
    /// "1,234" → 1234; "12.0" → 12; "abc" / 空白 → 0; 负数保留
    pub fn parse_quantity(&self, value: Option<&str>) -> i64 {
        let raw = match value {
            Some(v) => v,
            None => return 0,
        };
        let cleaned: String = raw.chars().filter(|c| !matches!(c, ',' | ' ')).collect();
        if cleaned.is_empty() {
            return 0;
        }
        if let Ok(parsed) = cleaned.parse::<i64>() {
            return parsed;
        }
        if let Ok(parsed) = cleaned.parse::<f64>() {
            if parsed.is_finite() {
                return parsed.trunc() as i64;
            }
        }
        0
    }

    /// 日期清洗: 常见格式依次尝试, 全部失败得 None
    pub fn parse_date(&self, value: Option<&str>) -> Option<NaiveDate> {
        let raw = value?.trim();
        if raw.is_empty() {
            return None;
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                return Some(date);
            }
        }
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(datetime.date());
            }
        }
        None
    }

    /// 原始行 → 库存记录
    ///
    /// 任一聚合键属性 (SKU/门店/款式/颜色/尺码/分层/品类) 缺失时
    /// 整行剔除返回 None; 日期与城市/季节保持可选
    pub fn clean_record(&self, raw: RawInventoryRecord) -> Option<InventoryRecord> {
        let first_receipt_date = self.parse_date(raw.first_receipt_date_raw.as_deref());
        let received_qty = self.parse_quantity(raw.received_qty_raw.as_deref());
        let displaced_qty = self.parse_quantity(raw.displaced_qty_raw.as_deref());
        let on_hand_qty = self.parse_quantity(raw.on_hand_qty_raw.as_deref());
        let sold_qty = self.parse_quantity(raw.sold_qty_raw.as_deref());

        Some(InventoryRecord {
            sku: raw.sku?,
            store_name: raw.store_name?,
            design: raw.design?,
            color: raw.color?,
            size: raw.size?,
            category_volume: raw.category_volume?,
            product_type: raw.product_type?,
            season: raw.season,
            region: raw.region,
            first_receipt_date,
            adjusted_date: None,
            received_qty,
            displaced_qty,
            on_hand_qty,
            sold_qty,
        })
    }
}

impl Default for DataCleaner {
    fn default() -> Self {
        Self::new()
    }
}
