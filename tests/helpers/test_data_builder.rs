// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use store_transfer_dss::domain::inventory::InventoryRecord;

// ==========================================
// InventoryRecord 构建器
// ==========================================

pub struct InventoryRecordBuilder {
    sku: String,
    store_name: String,
    design: String,
    color: String,
    size: String,
    category_volume: String,
    product_type: String,
    season: Option<String>,
    region: Option<String>,
    first_receipt_date: Option<NaiveDate>,
    received_qty: i64,
    displaced_qty: i64,
    on_hand_qty: i64,
    sold_qty: i64,
}

impl InventoryRecordBuilder {
    pub fn new(sku: &str, store_name: &str) -> Self {
        Self {
            sku: sku.to_string(),
            store_name: store_name.to_string(),
            design: "Design001".to_string(),
            color: "Red".to_string(),
            size: "M".to_string(),
            category_volume: "Casual".to_string(),
            product_type: "Lawn".to_string(),
            season: None,
            region: None,
            first_receipt_date: None,
            received_qty: 0,
            displaced_qty: 0,
            on_hand_qty: 0,
            sold_qty: 0,
        }
    }

    pub fn design(mut self, design: &str) -> Self {
        self.design = design.to_string();
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn size(mut self, size: &str) -> Self {
        self.size = size.to_string();
        self
    }

    pub fn volume(mut self, volume: &str) -> Self {
        self.category_volume = volume.to_string();
        self
    }

    pub fn product_type(mut self, product_type: &str) -> Self {
        self.product_type = product_type.to_string();
        self
    }

    pub fn season(mut self, season: &str) -> Self {
        self.season = Some(season.to_string());
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn received_on(mut self, date: NaiveDate) -> Self {
        self.first_receipt_date = Some(date);
        self
    }

    pub fn quantities(mut self, received: i64, displaced: i64, on_hand: i64, sold: i64) -> Self {
        self.received_qty = received;
        self.displaced_qty = displaced;
        self.on_hand_qty = on_hand;
        self.sold_qty = sold;
        self
    }

    pub fn build(self) -> InventoryRecord {
        InventoryRecord {
            sku: self.sku,
            store_name: self.store_name,
            design: self.design,
            color: self.color,
            size: self.size,
            category_volume: self.category_volume,
            product_type: self.product_type,
            season: self.season,
            region: self.region,
            first_receipt_date: self.first_receipt_date,
            adjusted_date: None,
            received_qty: self.received_qty,
            displaced_qty: self.displaced_qty,
            on_hand_qty: self.on_hand_qty,
            sold_qty: self.sold_qty,
        }
    }
}

// ==========================================
// 便捷函数
// ==========================================

/// 同一 SKU 的盈余/缺货门店对
///
/// 盈余店: 收货110, 在库100, 售出10 (低卖通, 调出候选)
/// 缺货店: 收货100, 在库0, 售出100 (高卖通, 调入候选)
pub fn surplus_deficit_pair(
    sku: &str,
    surplus_store: &str,
    deficit_store: &str,
    receipt_date: NaiveDate,
) -> Vec<InventoryRecord> {
    vec![
        InventoryRecordBuilder::new(sku, surplus_store)
            .received_on(receipt_date)
            .quantities(110, 0, 100, 10)
            .build(),
        InventoryRecordBuilder::new(sku, deficit_store)
            .received_on(receipt_date)
            .quantities(100, 0, 0, 100)
            .build(),
    ]
}
