// ==========================================
// 样例库存快照生成器
// ==========================================
// 用途: 生成库存快照 CSV 样例文件, 供手工运行与导入测试
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use chrono::{Duration, NaiveDate};
use csv::Writer;
use std::error::Error;
use std::fs::File;

// CSV 表头 (数据库口径列名)
const CSV_HEADER: &[&str] = &[
    "UPC_Barcode_SKU",
    "STORE_NAME",
    "DESIGN",
    "City",
    "Season",
    "first_rcv_date",
    "Shop_Rcv_Qty",
    "Disp_Qty",
    "OH_Qty",
    "Sold_Qty",
    "Color",
    "Size",
    "Volume",
    "product_type",
];

const STORES: &[&str] = &["Store Alpha", "Store Beta", "Store Gamma", "Store Delta"];
const CITIES: &[&str] = &["Lahore", "Karachi", "Islamabad"];
const COLORS: &[&str] = &["Red", "Blue", "Green", "Black"];
const SIZES: &[&str] = &["Small", "Medium", "Large"];
const VOLUMES: &[&str] = &["Casual", "Fancy"];
const PRODUCT_TYPES: &[&str] = &["Lawn", "Chiffon", "Silk"];
const SEASONS: &[&str] = &["SS26", "FW25"];

// 库存快照行
#[derive(Clone)]
struct InventoryRow {
    sku: String,
    store_name: String,
    design: String,
    city: String,
    season: String,
    first_rcv_date: String,
    shop_rcv_qty: String,
    disp_qty: String,
    oh_qty: String,
    sold_qty: String,
    color: String,
    size: String,
    volume: String,
    product_type: String,
}

impl InventoryRow {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.sku.clone(),
            self.store_name.clone(),
            self.design.clone(),
            self.city.clone(),
            self.season.clone(),
            self.first_rcv_date.clone(),
            self.shop_rcv_qty.clone(),
            self.disp_qty.clone(),
            self.oh_qty.clone(),
            self.sold_qty.clone(),
            self.color.clone(),
            self.size.clone(),
            self.volume.clone(),
            self.product_type.clone(),
        ]
    }
}

// 生成正常库存行
// 同一 SKU 在不同门店给出高卖通与低卖通的组合, 保证产生调出/调入双方
fn generate_normal_record(index: usize) -> InventoryRow {
    let base_date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default();
    let first_rcv = base_date + Duration::days((index % 90) as i64);

    let sku_no = index / STORES.len();
    let store = STORES[index % STORES.len()];
    let received = 80 + (sku_no % 5) as i64 * 20;
    // 偶数门店高售出 (缺货方), 奇数门店低售出 (盈余方)
    let sold = if index % 2 == 0 {
        received * 3 / 4
    } else {
        received / 5
    };
    let displaced = (sku_no % 3) as i64;
    let on_hand = received - displaced - sold;

    InventoryRow {
        sku: format!("SKU{:05}", sku_no + 1),
        store_name: store.to_string(),
        design: format!("Design{:03}", sku_no % 12 + 1),
        city: CITIES[sku_no % CITIES.len()].to_string(),
        season: SEASONS[sku_no % SEASONS.len()].to_string(),
        first_rcv_date: first_rcv.format("%Y-%m-%d").to_string(),
        shop_rcv_qty: received.to_string(),
        disp_qty: displaced.to_string(),
        oh_qty: on_hand.to_string(),
        sold_qty: sold.to_string(),
        color: COLORS[sku_no % COLORS.len()].to_string(),
        size: SIZES[sku_no % SIZES.len()].to_string(),
        volume: VOLUMES[sku_no % VOLUMES.len()].to_string(),
        product_type: PRODUCT_TYPES[sku_no % PRODUCT_TYPES.len()].to_string(),
    }
}

// 生成脏数据行 (数量带千分位/空白, 日期非法, 缺关键属性)
fn generate_dirty_records() -> Vec<InventoryRow> {
    let mut base = generate_normal_record(200);
    base.shop_rcv_qty = "1,200".to_string();
    base.disp_qty = " ".to_string();
    base.sold_qty = "350.0".to_string();
    base.oh_qty = "850".to_string();

    let mut bad_date = generate_normal_record(201);
    bad_date.first_rcv_date = "not-a-date".to_string();

    let mut missing_sku = generate_normal_record(202);
    missing_sku.sku = "".to_string();

    let mut missing_store = generate_normal_record(203);
    missing_store.store_name = "".to_string();

    vec![base, bad_date, missing_sku, missing_store]
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成样例库存快照...");

    std::fs::create_dir_all("tests/fixtures/datasets")?;

    generate_sample_inventory()?;
    generate_city_scenario()?;
    generate_missing_columns()?;

    println!("✓ 所有样例数据集生成完成！");
    Ok(())
}

// 主样例: 60 条正常行 + 4 条脏行
fn generate_sample_inventory() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/01_sample_inventory.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    for i in 0..60 {
        let record = generate_normal_record(i);
        wtr.write_record(&record.to_row())?;
    }
    for record in generate_dirty_records() {
        wtr.write_record(&record.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 01_sample_inventory.csv (64条, 含4条脏行)");
    Ok(())
}

// 城市场景: 两城市各一组同 SKU 盈余/缺货门店对
fn generate_city_scenario() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/02_city_scenario.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;

    for (city, surplus_store, deficit_store) in [
        ("Lahore", "Store Alpha", "Store Beta"),
        ("Karachi", "Store Gamma", "Store Delta"),
    ] {
        let mut surplus = generate_normal_record(0);
        surplus.sku = "SKU90001".to_string();
        surplus.city = city.to_string();
        surplus.store_name = surplus_store.to_string();
        surplus.shop_rcv_qty = "200".to_string();
        surplus.disp_qty = "0".to_string();
        surplus.sold_qty = "20".to_string();
        surplus.oh_qty = "180".to_string();
        wtr.write_record(&surplus.to_row())?;

        let mut deficit = surplus.clone();
        deficit.store_name = deficit_store.to_string();
        deficit.shop_rcv_qty = "200".to_string();
        deficit.sold_qty = "190".to_string();
        deficit.oh_qty = "10".to_string();
        wtr.write_record(&deficit.to_row())?;
    }

    wtr.flush()?;
    println!("✓ 生成 02_city_scenario.csv (4条, 两城市盈缺对)");
    Ok(())
}

// 缺列样例: 表头缺 Sold_Qty, 导入应报缺列错误
fn generate_missing_columns() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/datasets/03_missing_columns.csv";
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    let header: Vec<&str> = CSV_HEADER
        .iter()
        .copied()
        .filter(|h| *h != "Sold_Qty")
        .collect();
    wtr.write_record(&header)?;

    let record = generate_normal_record(0);
    let row: Vec<String> = record
        .to_row()
        .into_iter()
        .enumerate()
        .filter(|(i, _)| CSV_HEADER[*i] != "Sold_Qty")
        .map(|(_, v)| v)
        .collect();
    wtr.write_record(&row)?;

    wtr.flush()?;
    println!("✓ 生成 03_missing_columns.csv (表头缺 Sold_Qty)");
    Ok(())
}
