// ==========================================
// 门店库存调拨决策支持系统 - 字段映射器实现
// ==========================================
// 职责: 源表头 → 规范字段映射 (表头方言归一 + 别名解析)
// 红线: 映射不做类型转换, 清洗器统一处理脏值
// ==========================================

use crate::domain::inventory::RawInventoryRecord;
use std::collections::HashMap;

// 规范列名 → 接受的表头写法 (比较前都经过 normalize_header)
// 覆盖数据库导出 (下划线) 与报表 (斜杠/点号/空格) 两种方言
const COLUMN_ALIASES: &[(&str, &[&str])] = &[
    ("UPC_Barcode_SKU", &["UPC_Barcode_SKU", "UPC/Barcode/SKU", "SKU"]),
    ("STORE_NAME", &["STORE_NAME", "Store Name"]),
    ("DESIGN", &["DESIGN"]),
    ("Color", &["Color"]),
    ("Size", &["Size"]),
    ("Volume", &["Volume"]),
    ("product_type", &["product_type", "Product Type"]),
    ("first_rcv_date", &["first_rcv_date", "1st Rcv Date", "First Rcv Date"]),
    ("Shop_Rcv_Qty", &["Shop_Rcv_Qty", "Shop Rcv Qty"]),
    ("Disp_Qty", &["Disp_Qty", "Disp. Qty"]),
    ("OH_Qty", &["OH_Qty", "O.H Qty", "O.H. Qty"]),
    ("Sold_Qty", &["Sold_Qty", "Sold Qty"]),
    ("City", &["City"]),
    ("Season", &["Season"]),
];

// 缺一不可的列 (City/Season 可选)
const REQUIRED_COLUMNS: &[&str] = &[
    "UPC_Barcode_SKU",
    "STORE_NAME",
    "DESIGN",
    "Color",
    "Size",
    "Volume",
    "product_type",
    "first_rcv_date",
    "Shop_Rcv_Qty",
    "Disp_Qty",
    "OH_Qty",
    "Sold_Qty",
];

/// 表头归一: 去空白/下划线/点/斜杠/连字符后转小写
///
/// "O.H Qty" 与 "OH_Qty"、"UPC/Barcode/SKU" 与 "UPC_Barcode_SKU"
/// 归一后相等, 两种表头方言共用一套别名表
fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '.' | '/' | '-'))
        .collect::<String>()
        .to_lowercase()
}

// ==========================================
// FieldMapper - 字段映射器
// ==========================================
// 构造时解析一次表头, 之后逐行查表
pub struct FieldMapper {
    // 规范列名 → 文件中的实际表头
    resolved: HashMap<&'static str, String>,
}

impl FieldMapper {
    /// 从文件表头构造映射器
    pub fn from_headers(headers: &[String]) -> Self {
        let normalized: Vec<(String, &String)> = headers
            .iter()
            .map(|h| (normalize_header(h), h))
            .collect();

        let mut resolved: HashMap<&'static str, String> = HashMap::new();
        for (canonical, aliases) in COLUMN_ALIASES {
            'alias: for alias in *aliases {
                let want = normalize_header(alias);
                for (have, original) in &normalized {
                    if *have == want {
                        resolved.insert(canonical, (*original).clone());
                        break 'alias;
                    }
                }
            }
        }

        Self { resolved }
    }

    /// 未能解析到的必需列 (规范名)
    pub fn missing_required_columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|canonical| !self.resolved.contains_key(*canonical))
            .map(|canonical| canonical.to_string())
            .collect()
    }

    /// 是否解析到了城市列
    pub fn has_region_column(&self) -> bool {
        self.resolved.contains_key("City")
    }

    /// 把一行字符串映射为导入中间结构
    pub fn map_row(&self, row: &HashMap<String, String>, row_number: usize) -> RawInventoryRecord {
        RawInventoryRecord {
            sku: self.get(row, "UPC_Barcode_SKU"),
            store_name: self.get(row, "STORE_NAME"),
            design: self.get(row, "DESIGN"),
            color: self.get(row, "Color"),
            size: self.get(row, "Size"),
            category_volume: self.get(row, "Volume"),
            product_type: self.get(row, "product_type"),
            season: self.get(row, "Season"),
            region: self.get(row, "City"),
            first_receipt_date_raw: self.get(row, "first_rcv_date"),
            received_qty_raw: self.get(row, "Shop_Rcv_Qty"),
            displaced_qty_raw: self.get(row, "Disp_Qty"),
            on_hand_qty_raw: self.get(row, "OH_Qty"),
            sold_qty_raw: self.get(row, "Sold_Qty"),
            row_number,
        }
    }

    /// 取字段原值 (空白视为缺失)
    fn get(&self, row: &HashMap<String, String>, canonical: &str) -> Option<String> {
        let header = self.resolved.get(canonical)?;
        let value = row.get(header)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}
