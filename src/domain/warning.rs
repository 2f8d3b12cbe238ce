// ==========================================
// OEE 计算器 - 输入警告与审计提示
// ==========================================
// 警告仅提示, 不阻断计算
// ==========================================

use crate::domain::types::Metric;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// InputWarning - 输入警告
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputWarning {
    PlannedTimeZero,        // 计划时间为 0, 无法计算可用率
    DowntimeExceedsPlanned, // 停机时间超过计划时间
    GoodUnitsExceedTotal,   // 合格品超过总产量
    IdealCycleZero,         // 理想节拍为 0 但有产量
}

impl InputWarning {
    pub fn code(&self) -> &'static str {
        match self {
            InputWarning::PlannedTimeZero => "PLANNED_TIME_ZERO",
            InputWarning::DowntimeExceedsPlanned => "DOWNTIME_EXCEEDS_PLANNED",
            InputWarning::GoodUnitsExceedTotal => "GOOD_UNITS_EXCEED_TOTAL",
            InputWarning::IdealCycleZero => "IDEAL_CYCLE_ZERO",
        }
    }

    /// i18n 键
    pub fn message_key(&self) -> &'static str {
        match self {
            InputWarning::PlannedTimeZero => "warning.planned_time_zero",
            InputWarning::DowntimeExceedsPlanned => "warning.downtime_exceeds_planned",
            InputWarning::GoodUnitsExceedTotal => "warning.good_units_exceed_total",
            InputWarning::IdealCycleZero => "warning.ideal_cycle_zero",
        }
    }
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ==========================================
// AuditNotice - 封顶审计提示
// ==========================================
// 仅在封顶开启且存在原始值 > 1.0 时生成
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditNotice {
    pub values: Vec<OverCapValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverCapValue {
    pub metric: Metric,
    pub raw: f64,
}

