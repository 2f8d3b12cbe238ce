// ==========================================
// OEE 计算器 - 计算输入/结果领域模型
// ==========================================
// 生命周期: 每次计算请求新建, 不持久化, 不共享可变状态
// ==========================================

use crate::domain::types::{FactorApplicationMode, Metric};
use serde::{Deserialize, Serialize};

// ==========================================
// CalculationInput - 计算输入
// ==========================================
// 下限约束 (时间/数量 >= 0, 惩罚模式因子 >= 0.1) 由输入层负责, 计算器不做截断
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationInput {
    pub planned_time_min: f64,          // 计划生产时间 (分钟)
    pub downtime_min: f64,              // 停机时间 (分钟)
    pub ideal_cycle_sec_per_unit: f64,  // 理想节拍 (秒/件)
    pub total_units: u64,               // 总产量
    pub good_units: u64,                // 合格品数量 (应 <= total_units, 仅警告)

    // ===== 运营因子 =====
    pub factor_a: f64,
    pub factor_b: f64,

    // ===== 计算口径 =====
    pub clamp_to_100_percent: bool,
    pub factor_application_mode: FactorApplicationMode,
}

impl Default for CalculationInput {
    /// 操作员表单默认值
    fn default() -> Self {
        Self {
            planned_time_min: 480.0,
            downtime_min: 60.0,
            ideal_cycle_sec_per_unit: 1.5,
            total_units: 18_000,
            good_units: 17_500,
            factor_a: 1.0,
            factor_b: 1.0,
            clamp_to_100_percent: true,
            factor_application_mode: FactorApplicationMode::PenalizePerformance,
        }
    }
}

// ==========================================
// CalculationResult - 计算结果
// ==========================================
// raw 值无论是否封顶都会填充, 供"超过 100%"审计提示使用
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    // ===== 最终值 (封顶时位于 [0, 1]) =====
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,

    pub operating_time_min: f64,

    // ===== 未封顶原始值 =====
    pub availability_raw: f64,
    pub performance_raw: f64,
    pub quality_raw: f64,
    pub oee_raw: f64,
}

impl CalculationResult {
    /// 按指标取最终值
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Availability => self.availability,
            Metric::Performance => self.performance,
            Metric::Quality => self.quality,
            Metric::Oee => self.oee,
            Metric::OperatingTime => self.operating_time_min,
        }
    }

    /// 按指标取原始值 (运行时间无封顶概念, 原样返回)
    pub fn raw(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Availability => self.availability_raw,
            Metric::Performance => self.performance_raw,
            Metric::Quality => self.quality_raw,
            Metric::Oee => self.oee_raw,
            Metric::OperatingTime => self.operating_time_min,
        }
    }
}
