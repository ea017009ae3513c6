// ==========================================
// 门店库存调拨决策支持系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供 CLI 与嵌入式调用方使用
// ==========================================

pub mod dto;
pub mod error;
pub mod transfer_api;

// 重导出核心类型
pub use dto::{ProcessDataRequest, ProcessDataResponse};
pub use error::{ApiError, ApiResult};
pub use transfer_api::TransferApi;
