// ==========================================
// OEE 计算器 - 引擎层
// ==========================================
// 职责: 计算、输入检查、封顶审计、分级
// 红线: 引擎无状态, 不读配置文件, 不做展示
// ==========================================

pub mod audit;
pub mod classifier;
pub mod input_check;
pub mod oee;

// 重导出核心引擎
pub use audit::AuditEngine;
pub use classifier::KpiClassifier;
pub use input_check::InputCheckEngine;
pub use oee::{clamp01, OeeEngine};
