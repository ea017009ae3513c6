// ==========================================
// 门店库存调拨决策支持系统 - 数据源过滤条件
// ==========================================
// 职责: 取数时的维度过滤 (波段/品类/季节/年份/城市)
// 红线: 空列表与 None 等价, 均表示不过滤
// ==========================================

use crate::domain::inventory::InventoryRecord;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

// ==========================================
// FilterSelection - 取数过滤条件
// ==========================================
// 语义: 各维度为集合成员匹配; 年份作用于首收货日期的年份
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    /// 波段 (Volume)
    #[serde(default)]
    pub volumes: Option<Vec<String>>,
    /// 品类 (product_type)
    #[serde(default)]
    pub product_types: Option<Vec<String>>,
    /// 季节 (Season)
    #[serde(default)]
    pub seasons: Option<Vec<String>>,
    /// 年份 (按首收货日期的年份匹配)
    #[serde(default)]
    pub years: Option<Vec<i32>>,
    /// 城市 (City)
    #[serde(default)]
    pub regions: Option<Vec<String>>,
}

impl FilterSelection {
    /// 无过滤条件 (全量取数)
    pub fn none() -> Self {
        Self::default()
    }

    /// 是否未设置任何过滤条件
    pub fn is_unconstrained(&self) -> bool {
        !Self::active(&self.volumes)
            && !Self::active(&self.product_types)
            && !Self::active(&self.seasons)
            && !Self::active(&self.years)
            && !Self::active(&self.regions)
    }

    /// 记录是否满足全部已设置的过滤条件
    ///
    /// 过滤维度已设置而记录对应属性缺失时, 记录不匹配
    pub fn matches(&self, record: &InventoryRecord) -> bool {
        if let Some(volumes) = Self::constraint(&self.volumes) {
            if !volumes.contains(&record.category_volume) {
                return false;
            }
        }
        if let Some(product_types) = Self::constraint(&self.product_types) {
            if !product_types.contains(&record.product_type) {
                return false;
            }
        }
        if let Some(seasons) = Self::constraint(&self.seasons) {
            match &record.season {
                Some(season) if seasons.contains(season) => {}
                _ => return false,
            }
        }
        if let Some(years) = Self::constraint(&self.years) {
            match record.first_receipt_date {
                Some(date) if years.contains(&date.year()) => {}
                _ => return false,
            }
        }
        if let Some(regions) = Self::constraint(&self.regions) {
            match &record.region {
                Some(region) if regions.contains(region) => {}
                _ => return false,
            }
        }
        true
    }

    fn active<T>(values: &Option<Vec<T>>) -> bool {
        values.as_ref().map(|v| !v.is_empty()).unwrap_or(false)
    }

    fn constraint<T>(values: &Option<Vec<T>>) -> Option<&Vec<T>> {
        values.as_ref().filter(|v| !v.is_empty())
    }
}
