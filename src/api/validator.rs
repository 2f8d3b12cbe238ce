// ==========================================
// OEE 计算器 - 输入校验器
// ==========================================
// 职责: 将原始请求转换为 CalculationInput, 失败关闭
// 规则:
// - 所有浮点字段必须为有限数 (拒绝 NaN / ±inf)
// - 时间与节拍 >= 0
// - 因子 >= 当前模式下限 (惩罚模式 0.1, 其他模式 0)
// - 产量为无符号整数, 天然 >= 0
// ==========================================

use crate::api::error::{
    ApiError, ApiResult, ValidationViolation, VIOLATION_BELOW_MINIMUM, VIOLATION_NON_FINITE,
};
use crate::api::dto::CalculateRequest;
use crate::config::calculator_config::InputLimits;
use crate::domain::calculation::CalculationInput;

// ==========================================
// InputValidator - 输入校验器
// ==========================================
#[derive(Debug, Clone)]
pub struct InputValidator {
    defaults: CalculationInput,
    limits: InputLimits,
}

impl InputValidator {
    pub fn new(defaults: CalculationInput, limits: InputLimits) -> Self {
        Self { defaults, limits }
    }

    /// 校验请求并合并默认值
    ///
    /// # 返回
    /// - Ok(CalculationInput): 可直接交给计算引擎
    /// - Err(ApiError): 收集全部违规后一次性返回
    pub fn validate(&self, request: &CalculateRequest) -> ApiResult<CalculationInput> {
        let d = &self.defaults;
        let input = CalculationInput {
            planned_time_min: request.planned_time_min.unwrap_or(d.planned_time_min),
            downtime_min: request.downtime_min.unwrap_or(d.downtime_min),
            ideal_cycle_sec_per_unit: request
                .ideal_cycle_sec_per_unit
                .unwrap_or(d.ideal_cycle_sec_per_unit),
            total_units: request.total_units.unwrap_or(d.total_units),
            good_units: request.good_units.unwrap_or(d.good_units),
            factor_a: request.factor_a.unwrap_or(d.factor_a),
            factor_b: request.factor_b.unwrap_or(d.factor_b),
            clamp_to_100_percent: request
                .clamp_to_100_percent
                .unwrap_or(d.clamp_to_100_percent),
            factor_application_mode: request
                .factor_application_mode
                .unwrap_or(d.factor_application_mode),
        };

        let violations = self.check(&input);
        if violations.is_empty() {
            Ok(input)
        } else {
            tracing::warn!(count = violations.len(), "输入校验未通过");
            Err(ApiError::from_violations(violations))
        }
    }

    /// 逐字段检查, 返回全部违规
    pub fn check(&self, input: &CalculationInput) -> Vec<ValidationViolation> {
        let factor_min = self.limits.factor_min(input.factor_application_mode);

        let fields = [
            ("planned_time_min", input.planned_time_min, 0.0),
            ("downtime_min", input.downtime_min, 0.0),
            ("ideal_cycle_sec_per_unit", input.ideal_cycle_sec_per_unit, 0.0),
            ("factor_a", input.factor_a, factor_min),
            ("factor_b", input.factor_b, factor_min),
        ];

        fields
            .iter()
            .filter_map(|&(field, value, min)| check_field(field, value, min))
            .collect()
    }
}

fn check_field(field: &str, value: f64, min: f64) -> Option<ValidationViolation> {
    if !value.is_finite() {
        return Some(ValidationViolation {
            violation_type: VIOLATION_NON_FINITE.to_string(),
            field: field.to_string(),
            reason: format!("{} 必须为有限数值, 实际 {}", field, value),
            value,
            min: None,
        });
    }
    if value < min {
        return Some(ValidationViolation {
            violation_type: VIOLATION_BELOW_MINIMUM.to_string(),
            field: field.to_string(),
            reason: format!("{} 必须 >= {}, 实际 {}", field, min, value),
            value,
            min: Some(min),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::FactorApplicationMode;

    fn validator() -> InputValidator {
        InputValidator::new(CalculationInput::default(), InputLimits::default())
    }

    #[test]
    fn test_empty_request_yields_defaults() {
        let input = validator().validate(&CalculateRequest::default()).unwrap();
        assert_eq!(input, CalculationInput::default());
    }

    #[test]
    fn test_nan_rejected() {
        let req = CalculateRequest {
            planned_time_min: Some(f64::NAN),
            ..CalculateRequest::default()
        };
        match validator().validate(&req) {
            Err(ApiError::InvalidInput(msg)) => assert!(msg.contains("planned_time_min")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_factor_minimum_depends_on_mode() {
        let req = CalculateRequest {
            factor_a: Some(0.05),
            factor_application_mode: Some(FactorApplicationMode::PenalizePerformance),
            ..CalculateRequest::default()
        };
        match validator().validate(&req) {
            Err(ApiError::BelowMinimum { field, min, .. }) => {
                assert_eq!(field, "factor_a");
                assert_eq!(min, 0.1);
            }
            other => panic!("unexpected: {:?}", other),
        }

        let req = CalculateRequest {
            factor_a: Some(0.0),
            factor_application_mode: Some(FactorApplicationMode::MultiplyOee),
            ..CalculateRequest::default()
        };
        assert!(validator().validate(&req).is_ok(), "MULTIPLY_OEE 允许因子为 0");
    }

    #[test]
    fn test_negative_time_and_factor_collected() {
        let req = CalculateRequest {
            downtime_min: Some(-1.0),
            factor_b: Some(-0.5),
            factor_application_mode: Some(FactorApplicationMode::None),
            ..CalculateRequest::default()
        };
        let err = validator().validate(&req).unwrap_err();
        let fields: Vec<String> = err.violations().into_iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["downtime_min", "factor_b"]);
    }
}
