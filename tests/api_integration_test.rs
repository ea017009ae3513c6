// ==========================================
// 调拨决策 API 集成测试
// ==========================================
// 职责: 验证取数 → 管道 → 导出的完整 API 行为
// 覆盖: 正常路径, 无数据提示, 上游故障降级, 导出字节流, 参数校验
// ==========================================

mod helpers;

use async_trait::async_trait;
use chrono::NaiveDate;
use helpers::test_data_builder::{surplus_deficit_pair, InventoryRecordBuilder};
use std::sync::Arc;
use store_transfer_dss::api::{ApiError, ProcessDataRequest, TransferApi};
use store_transfer_dss::config::PipelineConfig;
use store_transfer_dss::domain::inventory::InventoryRecord;
use store_transfer_dss::domain::types::GroupScope;
use store_transfer_dss::source::{
    FilterSelection, InMemorySource, InventoryProvider, SourceError, SourceResult,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn test_config() -> PipelineConfig {
    let mut config = PipelineConfig::new(date(2026, 1, 1), date(2026, 3, 1));
    config.thresholds.sell_through_threshold = 50;
    config
}

fn request(config: PipelineConfig) -> ProcessDataRequest {
    ProcessDataRequest {
        filters: FilterSelection::none(),
        config,
        include_exports: false,
    }
}

/// 模拟上游故障的数据源
struct FailingSource;

#[async_trait]
impl InventoryProvider for FailingSource {
    async fn fetch_records(&self, _filters: &FilterSelection) -> SourceResult<Vec<InventoryRecord>> {
        Err(SourceError::Unavailable("连接超时".to_string()))
    }
}

// ==========================================
// 测试1: 正常路径返回建议与统计
// ==========================================
#[tokio::test]
async fn test_process_data_happy_path() {
    let records = surplus_deficit_pair("SKU001", "Store X", "Store Y", date(2026, 1, 1));
    let api = TransferApi::new(Arc::new(InMemorySource::new(records)));

    let response = api.process_data(request(test_config())).await.unwrap();

    assert!(!response.run_id.is_empty());
    assert_eq!(response.notice, None);
    assert_eq!(response.recommendations.len(), 1);
    assert_eq!(response.recommendations[0].quantity, 89);
    assert_eq!(response.stats.input_rows, 2);
    assert_eq!(response.stats.recommendation_count, 1);
    assert!(response.elapsed_ms >= 0);
    // 未要求导出时无字节流
    assert!(response.eligible_csv.is_none());
    assert!(response.transfer_csv.is_none());
}

// ==========================================
// 测试2: 空数据源返回空结果与提示
// ==========================================
#[tokio::test]
async fn test_empty_source_yields_notice_not_error() {
    let api = TransferApi::new(Arc::new(InMemorySource::empty()));

    let response = api.process_data(request(test_config())).await.unwrap();

    assert!(response.notice.is_some());
    assert!(response.eligible_rows.is_empty());
    assert!(response.recommendations.is_empty());
    assert_eq!(response.stats.input_rows, 0);
}

// ==========================================
// 测试3: 上游故障降级为空结果与提示
// ==========================================
#[tokio::test]
async fn test_upstream_failure_degrades_to_notice() {
    let api = TransferApi::new(Arc::new(FailingSource));

    let response = api.process_data(request(test_config())).await.unwrap();

    assert!(response.notice.is_some());
    assert!(response.recommendations.is_empty());
}

// ==========================================
// 测试4: 过滤条件不匹配时同样给提示
// ==========================================
#[tokio::test]
async fn test_filters_without_matches_yield_notice() {
    let records = surplus_deficit_pair("SKU002", "Store X", "Store Y", date(2026, 1, 1));
    let api = TransferApi::new(Arc::new(InMemorySource::new(records)));

    let mut req = request(test_config());
    req.filters.volumes = Some(vec!["Premium".to_string()]);

    let response = api.process_data(req).await.unwrap();
    assert!(response.notice.is_some());
    assert!(response.recommendations.is_empty());
}

// ==========================================
// 测试5: 要求导出时返回两张 CSV 字节流
// ==========================================
#[tokio::test]
async fn test_include_exports_returns_csv_bytes() {
    let records = surplus_deficit_pair("SKU003", "Store X", "Store Y", date(2026, 1, 1));
    let api = TransferApi::new(Arc::new(InMemorySource::new(records)));

    let mut req = request(test_config());
    req.include_exports = true;

    let response = api.process_data(req).await.unwrap();

    let eligible = String::from_utf8(response.eligible_csv.unwrap()).unwrap();
    assert!(eligible.starts_with("City,UPC/Barcode/SKU,STORE_NAME"));
    // 表头 + 两行达标明细
    assert_eq!(eligible.lines().count(), 3);

    let transfers = String::from_utf8(response.transfer_csv.unwrap()).unwrap();
    assert!(transfers.starts_with("City,UPC/Barcode/SKU,From Store,To Store"));
    assert!(transfers.contains("Store X,Store Y"));
}

// ==========================================
// 测试6: 非法阈值报无效输入
// ==========================================
#[tokio::test]
async fn test_invalid_threshold_is_rejected() {
    let records = surplus_deficit_pair("SKU004", "Store X", "Store Y", date(2026, 1, 1));
    let api = TransferApi::new(Arc::new(InMemorySource::new(records)));

    let mut config = test_config();
    config.thresholds.sell_through_threshold = 150;

    let result = api.process_data(request(config)).await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

// ==========================================
// 测试7: 城市口径下无城市列报缺列错误
// ==========================================
#[tokio::test]
async fn test_city_scope_without_region_values_is_schema_error() {
    // 记录均无城市属性
    let records = vec![
        InventoryRecordBuilder::new("SKU005", "Store X")
            .received_on(date(2026, 1, 1))
            .quantities(110, 0, 100, 10)
            .build(),
        InventoryRecordBuilder::new("SKU005", "Store Y")
            .received_on(date(2026, 1, 1))
            .quantities(100, 0, 0, 100)
            .build(),
    ];
    let api = TransferApi::new(Arc::new(InMemorySource::new(records)));

    let mut config = test_config();
    config.scope = GroupScope::City;

    let result = api.process_data(request(config)).await;
    match result {
        Err(ApiError::MissingColumn(column)) => assert_eq!(column, "City"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}
