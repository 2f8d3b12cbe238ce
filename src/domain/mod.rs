// ==========================================
// OEE 计算器 - 领域模型层
// ==========================================
// 职责: 定义计算输入/结果、类型、警告
// 红线: 不含计算逻辑, 不含展示逻辑
// ==========================================

pub mod calculation;
pub mod types;
pub mod warning;

// 重导出核心类型
pub use calculation::{CalculationInput, CalculationResult};
pub use types::{FactorApplicationMode, KpiTier, Metric};
pub use warning::{AuditNotice, InputWarning, OverCapValue};
