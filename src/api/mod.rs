// ==========================================
// OEE 计算器 - API 层
// ==========================================
// 职责: 输入采集与校验, 驾驶舱报表组装, 供命令行及其他前端调用
// ==========================================

pub mod dto;
pub mod error;
pub mod oee_api;
pub mod validator;

// 重导出核心类型
pub use dto::{AuditDto, AuditValueDto, CalculateRequest, DashboardResponse, KpiCard, WarningDto};
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use oee_api::OeeApi;
pub use validator::InputValidator;
