// ==========================================
// OEE 计算器 - OEE 计算引擎
// ==========================================
// 职责: A / P / Q / OEE 与运行时间计算
// 输入: CalculationInput
// 输出: CalculationResult (最终值 + 原始值)
// 红线: 纯函数, 所有除法有零保护, 任何输入组合都不 panic
// ==========================================

use crate::domain::calculation::{CalculationInput, CalculationResult};
use crate::domain::types::FactorApplicationMode;
use tracing::instrument;

/// 每分钟秒数 (节拍为秒, 时间为分钟)
const SECONDS_PER_MINUTE: f64 = 60.0;

// ==========================================
// OeeEngine - OEE 计算引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct OeeEngine {
    // 无状态引擎, 可跨线程共享
}

impl OeeEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算 OEE
    ///
    /// 步骤:
    /// 1) 运行时间 = max(计划 - 停机, 0)
    /// 2) A_raw = 运行时间 / 计划时间 (计划为 0 时取 0)
    /// 3) P_raw 按因子应用模式计算 (运行时间为 0 时取 0)
    /// 4) Q_raw = 合格品 / 总产量 (总产量为 0 时取 0)
    /// 5) 封顶时 OEE 由封顶后的 A/P/Q 重新相乘, 而不是直接封顶 OEE_raw
    #[instrument(level = "debug", skip(self, input), fields(mode = %input.factor_application_mode, clamp = input.clamp_to_100_percent))]
    pub fn calculate(&self, input: &CalculationInput) -> CalculationResult {
        let operating_time_min = self.operating_time(input.planned_time_min, input.downtime_min);

        let availability_raw = if input.planned_time_min > 0.0 {
            operating_time_min / input.planned_time_min
        } else {
            0.0
        };

        let performance_raw = self.performance_raw(input, operating_time_min);

        let quality_raw = if input.total_units > 0 {
            input.good_units as f64 / input.total_units as f64
        } else {
            0.0
        };

        let oee_base = availability_raw * performance_raw * quality_raw;
        let oee_raw = match input.factor_application_mode {
            FactorApplicationMode::MultiplyOee => oee_base * input.factor_a * input.factor_b,
            // PENALIZE_PERFORMANCE 的因子已计入 P_raw
            FactorApplicationMode::None | FactorApplicationMode::PenalizePerformance => oee_base,
        };

        let result = if input.clamp_to_100_percent {
            let availability = clamp01(availability_raw);
            let performance = clamp01(performance_raw);
            let quality = clamp01(quality_raw);
            CalculationResult {
                availability,
                performance,
                quality,
                oee: clamp01(availability * performance * quality),
                operating_time_min,
                availability_raw,
                performance_raw,
                quality_raw,
                oee_raw,
            }
        } else {
            CalculationResult {
                availability: availability_raw,
                performance: performance_raw,
                quality: quality_raw,
                oee: oee_raw,
                operating_time_min,
                availability_raw,
                performance_raw,
                quality_raw,
                oee_raw,
            }
        };

        tracing::debug!(
            availability = result.availability,
            performance = result.performance,
            quality = result.quality,
            oee = result.oee,
            oee_raw = result.oee_raw,
            "oee calculated"
        );

        result
    }

    // ==========================================
    // 分项计算
    // ==========================================

    /// 运行时间 (分钟), 不小于 0
    pub fn operating_time(&self, planned_time_min: f64, downtime_min: f64) -> f64 {
        (planned_time_min - downtime_min).max(0.0)
    }

    /// 性能率原始值
    ///
    /// - NONE / MULTIPLY_OEE: (节拍 × 总产量) / (运行时间 × 60)
    /// - PENALIZE_PERFORMANCE: (节拍 × 总产量 × FO1 × FO2) / (运行时间 × 60)
    fn performance_raw(&self, input: &CalculationInput, operating_time_min: f64) -> f64 {
        let denom = operating_time_min * SECONDS_PER_MINUTE;
        if denom <= 0.0 {
            return 0.0;
        }

        let ideal_output_sec = input.ideal_cycle_sec_per_unit * input.total_units as f64;
        let numer = match input.factor_application_mode {
            FactorApplicationMode::PenalizePerformance => {
                ideal_output_sec * (input.factor_a * input.factor_b)
            }
            FactorApplicationMode::None | FactorApplicationMode::MultiplyOee => ideal_output_sec,
        };

        numer / denom
    }
}

/// 封顶到 [0, 1]
pub fn clamp01(x: f64) -> f64 {
    x.max(0.0).min(1.0)
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn baseline(mode: FactorApplicationMode) -> CalculationInput {
        CalculationInput {
            factor_application_mode: mode,
            ..CalculationInput::default()
        }
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.42), 0.42);
        assert_eq!(clamp01(1.7), 1.0);
    }

    #[test]
    fn test_operating_time_never_negative() {
        let engine = OeeEngine::new();
        assert_eq!(engine.operating_time(480.0, 60.0), 420.0);
        assert_eq!(engine.operating_time(60.0, 480.0), 0.0);
        assert_eq!(engine.operating_time(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_baseline_none_mode() {
        let engine = OeeEngine::new();
        let r = engine.calculate(&baseline(FactorApplicationMode::None));

        assert!(approx(r.operating_time_min, 420.0));
        assert!(approx(r.availability_raw, 0.875));
        assert!(approx(r.performance_raw, 27_000.0 / 25_200.0));
        assert!(approx(r.quality_raw, 17_500.0 / 18_000.0));

        assert!(approx(r.availability, 0.875));
        assert_eq!(r.performance, 1.0, "性能率应封顶为 1.0");
        assert!(approx(r.oee, 0.875 * 1.0 * (17_500.0 / 18_000.0)));
        assert!(r.oee_raw > r.oee, "原始 OEE 未封顶, 应大于最终值");
    }

    #[test]
    fn test_penalize_performance_folds_factors() {
        let engine = OeeEngine::new();
        let mut input = baseline(FactorApplicationMode::PenalizePerformance);
        input.factor_a = 0.9;
        input.factor_b = 0.95;

        let r = engine.calculate(&input);
        assert!(approx(r.performance_raw, 23_085.0 / 25_200.0));
        assert!(approx(r.performance, r.performance_raw));
        assert!(approx(r.oee_raw, r.availability_raw * r.performance_raw * r.quality_raw));
    }

    #[test]
    fn test_multiply_oee_keeps_performance_untouched() {
        let engine = OeeEngine::new();
        let mut input = baseline(FactorApplicationMode::MultiplyOee);
        input.factor_a = 0.5;

        let with_factor = engine.calculate(&input);
        let without = engine.calculate(&baseline(FactorApplicationMode::None));

        assert!(approx(with_factor.performance_raw, without.performance_raw));
        assert!(approx(with_factor.oee_raw, without.oee_raw * 0.5));
        // 封顶 OEE 由封顶后的 A/P/Q 计算, 因子不参与
        assert!(approx(with_factor.oee, without.oee));
    }

    #[test]
    fn test_zero_denominators() {
        let engine = OeeEngine::new();
        let input = CalculationInput {
            planned_time_min: 0.0,
            downtime_min: 0.0,
            ideal_cycle_sec_per_unit: 0.0,
            total_units: 0,
            good_units: 0,
            ..CalculationInput::default()
        };

        let r = engine.calculate(&input);
        assert_eq!(r.availability_raw, 0.0);
        assert_eq!(r.performance_raw, 0.0);
        assert_eq!(r.quality_raw, 0.0);
        assert_eq!(r.oee, 0.0);
    }

    #[test]
    fn test_negative_factor_is_not_bounded_by_engine() {
        // 下限由输入层保证, 引擎按公式计算
        let engine = OeeEngine::new();
        let mut input = baseline(FactorApplicationMode::PenalizePerformance);
        input.factor_a = -1.0;
        input.clamp_to_100_percent = false;

        let r = engine.calculate(&input);
        assert!(r.performance_raw < 0.0);
        assert_eq!(r.performance, r.performance_raw);
    }
}
