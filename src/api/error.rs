// ==========================================
// OEE 计算器 - API层错误类型
// ==========================================
// 职责: 输入采集层的失败关闭 (拒绝并要求重新输入)
// 说明: 计算器本身没有错误路径, 输入警告也不属于错误
// ==========================================

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须指明字段与原因
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("输入低于下限: field={field}, min={min}, value={value}")]
    BelowMinimum { field: String, min: f64, value: f64 },

    /// 多个字段同时违规
    #[error("输入校验失败: {reason}")]
    ValidationFailed {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

pub const VIOLATION_NON_FINITE: &str = "NON_FINITE";
pub const VIOLATION_BELOW_MINIMUM: &str = "BELOW_MINIMUM";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationViolation {
    /// 违规类型（NON_FINITE / BELOW_MINIMUM）
    pub violation_type: String,
    /// 字段名
    pub field: String,
    /// 违规原因
    pub reason: String,
    pub value: f64,
    /// 下限（仅 BELOW_MINIMUM）
    pub min: Option<f64>,
}

impl ApiError {
    /// 由违规列表构造错误
    ///
    /// 单个违规时返回具体错误, 多个时汇总为 ValidationFailed
    pub fn from_violations(mut violations: Vec<ValidationViolation>) -> Self {
        if violations.len() == 1 {
            let v = violations.remove(0);
            return match v.min {
                Some(min) if v.violation_type == VIOLATION_BELOW_MINIMUM => ApiError::BelowMinimum {
                    field: v.field,
                    min,
                    value: v.value,
                },
                _ => ApiError::InvalidInput(v.reason),
            };
        }

        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        ApiError::ValidationFailed {
            reason: format!("{}个字段不合法: {}", violations.len(), fields.join(", ")),
            violations,
        }
    }

    /// 违规明细（单个违规的错误也展开为列表）
    pub fn violations(&self) -> Vec<ValidationViolation> {
        match self {
            ApiError::ValidationFailed { violations, .. } => violations.clone(),
            ApiError::BelowMinimum { field, min, value } => vec![ValidationViolation {
                violation_type: VIOLATION_BELOW_MINIMUM.to_string(),
                field: field.clone(),
                reason: format!("{} 必须 >= {}", field, min),
                value: *value,
                min: Some(*min),
            }],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn below(field: &str) -> ValidationViolation {
        ValidationViolation {
            violation_type: VIOLATION_BELOW_MINIMUM.to_string(),
            field: field.to_string(),
            reason: format!("{} 必须 >= 0", field),
            value: -1.0,
            min: Some(0.0),
        }
    }

    #[test]
    fn test_single_violation_is_specific() {
        let err = ApiError::from_violations(vec![below("downtime_min")]);
        match err {
            ApiError::BelowMinimum { field, min, value } => {
                assert_eq!(field, "downtime_min");
                assert_eq!(min, 0.0);
                assert_eq!(value, -1.0);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_multiple_violations_aggregate() {
        let err = ApiError::from_violations(vec![below("downtime_min"), below("factor_a")]);
        assert!(err.to_string().contains("downtime_min, factor_a"));
        assert_eq!(err.violations().len(), 2);
    }
}
