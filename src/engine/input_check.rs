// ==========================================
// OEE 计算器 - 输入检查引擎
// ==========================================
// 职责: 计算前对原始输入给出提示性警告
// 红线: 警告不阻断计算, 顺序固定
// ==========================================

use crate::domain::calculation::CalculationInput;
use crate::domain::warning::InputWarning;
use tracing::instrument;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputCheckEngine {}

impl InputCheckEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 检查输入并返回警告列表
    ///
    /// 规则 (按顺序):
    /// 1) 计划时间 = 0
    /// 2) 停机时间 > 计划时间 (计划时间 > 0 时)
    /// 3) 总产量 > 0 且 合格品 > 总产量
    /// 4) 理想节拍 = 0 且 总产量 > 0
    #[instrument(level = "debug", skip(self, input))]
    pub fn check(&self, input: &CalculationInput) -> Vec<InputWarning> {
        let mut warnings = Vec::new();

        if input.planned_time_min == 0.0 {
            warnings.push(InputWarning::PlannedTimeZero);
        }
        if input.planned_time_min > 0.0 && input.downtime_min > input.planned_time_min {
            warnings.push(InputWarning::DowntimeExceedsPlanned);
        }
        if input.total_units > 0 && input.good_units > input.total_units {
            warnings.push(InputWarning::GoodUnitsExceedTotal);
        }
        if input.ideal_cycle_sec_per_unit == 0.0 && input.total_units > 0 {
            warnings.push(InputWarning::IdealCycleZero);
        }

        warnings
    }
}
