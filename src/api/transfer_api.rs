// ==========================================
// 门店库存调拨决策支持系统 - 调拨决策 API
// ==========================================
// 职责: 封装取数 → 管道 → 导出的完整调用
// 红线: 上游无数据/不可用不报错, 返回空结果加提示
// ==========================================

use crate::api::dto::{ProcessDataRequest, ProcessDataResponse};
use crate::api::error::ApiResult;
use crate::engine::orchestrator::TransferOrchestrator;
use crate::export::csv_writer::CsvExporter;
use crate::i18n::t;
use crate::source::provider::InventoryProvider;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// 调拨决策 API
pub struct TransferApi<P: InventoryProvider> {
    provider: Arc<P>,
    orchestrator: TransferOrchestrator,
    exporter: CsvExporter,
}

impl<P: InventoryProvider> TransferApi<P> {
    /// 创建新的 TransferApi 实例
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            orchestrator: TransferOrchestrator::new(),
            exporter: CsvExporter::new(),
        }
    }

    /// 执行一次完整的调拨决策
    ///
    /// # 参数
    /// - request: 过滤条件 + 管道配置 + 是否导出
    ///
    /// # 返回
    /// - Ok(ProcessDataResponse): 结果表与统计; 无数据时表为空且带提示
    /// - Err(ApiError): 阈值非法、缺列等致命错误
    #[instrument(skip(self, request), fields(scope = %request.config.scope))]
    pub async fn process_data(&self, request: ProcessDataRequest) -> ApiResult<ProcessDataResponse> {
        let started = Instant::now();

        // 取数是唯一的挂起点; 上游错误降级为空结果
        let records = match self.provider.fetch_records(&request.filters).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "上游取数失败, 返回空结果");
                return Ok(ProcessDataResponse::no_data(
                    Uuid::new_v4().to_string(),
                    t("pipeline.no_data"),
                    elapsed_ms(started),
                ));
            }
        };

        if records.is_empty() {
            info!("过滤条件下无数据");
            return Ok(ProcessDataResponse::no_data(
                Uuid::new_v4().to_string(),
                t("pipeline.no_data"),
                elapsed_ms(started),
            ));
        }

        let result = self.orchestrator.run(records, &request.config)?;

        let (eligible_csv, transfer_csv) = if request.include_exports {
            let eligible = self.exporter.write_eligible_csv(&result.eligible_rows)?;
            let transfers = self.exporter.write_transfer_csv(&result.recommendations)?;
            (Some(eligible), Some(transfers))
        } else {
            (None, None)
        };

        info!(
            run_id = %result.run_id,
            eligible = result.eligible_rows.len(),
            recommendations = result.recommendations.len(),
            "调拨决策完成"
        );

        Ok(ProcessDataResponse {
            run_id: result.run_id,
            notice: None,
            stats: result.stats,
            eligible_rows: result.eligible_rows,
            recommendations: result.recommendations,
            eligible_csv,
            transfer_csv,
            elapsed_ms: elapsed_ms(started),
        })
    }
}

fn elapsed_ms(started: Instant) -> i64 {
    started.elapsed().as_millis() as i64
}
