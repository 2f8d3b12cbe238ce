// ==========================================
// OEE 计算器 - 核心库
// ==========================================
// 系统定位: 设备综合效率 (OEE) 计算与驾驶舱展示
// 分层: domain → engine → api → app
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 输入/结果/类型
pub mod domain;

// 引擎层 - 计算与规则
pub mod engine;

// 配置层 - 默认值/阈值/下限
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 校验与报表
pub mod api;

// 应用层 - 命令行
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    AuditNotice, CalculationInput, CalculationResult, FactorApplicationMode, InputWarning,
    KpiTier, Metric,
};

pub use engine::{AuditEngine, InputCheckEngine, KpiClassifier, OeeEngine};

pub use config::{CalculatorConfig, ConfigManager};

pub use api::{ApiError, ApiResult, CalculateRequest, DashboardResponse, OeeApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "OEE 计算器";

/// 计算 OEE (无状态快捷入口)
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    OeeEngine::new().calculate(input)
}
