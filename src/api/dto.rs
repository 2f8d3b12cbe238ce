// ==========================================
// OEE 计算器 - API 数据传输对象
// ==========================================
// 职责: 计算请求与驾驶舱响应的序列化结构
// ==========================================

use crate::domain::calculation::{CalculationInput, CalculationResult};
use crate::domain::types::{FactorApplicationMode, KpiTier, Metric};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// ==========================================
// 请求
// ==========================================

/// 计算请求
///
/// 所有字段可缺省, 缺省时取配置中的表单默认值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculateRequest {
    pub planned_time_min: Option<f64>,
    pub downtime_min: Option<f64>,
    pub ideal_cycle_sec_per_unit: Option<f64>,
    pub total_units: Option<u64>,
    pub good_units: Option<u64>,
    pub factor_a: Option<f64>,
    pub factor_b: Option<f64>,
    pub clamp_to_100_percent: Option<bool>,
    pub factor_application_mode: Option<FactorApplicationMode>,
    /// 报表语言, 缺省取配置
    pub locale: Option<String>,
}

// ==========================================
// 响应
// ==========================================

/// 驾驶舱响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub title: String,
    pub intro: String,
    pub locale: String,
    pub mode: FactorApplicationMode,
    pub mode_description: String,

    pub input: CalculationInput,
    pub result: CalculationResult,

    /// 顺序: A, P, Q, OEE, 运行时间
    pub cards: Vec<KpiCard>,
    pub warnings: Vec<WarningDto>,
    pub audit: Option<AuditDto>,
    pub concepts: Vec<String>,

    pub caption: String,
    pub generated_at: DateTime<Local>,
}

impl DashboardResponse {
    pub fn card(&self, metric: Metric) -> Option<&KpiCard> {
        self.cards.iter().find(|c| c.metric == metric)
    }
}

/// 指标卡片
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub metric: Metric,
    pub title: String,
    pub value: f64,
    /// 比率: "87.50%"; 运行时间: "420.00"
    pub display: String,
    /// 运行时间无分级
    pub tier: Option<KpiTier>,
    pub formula: String,
    /// 卡片附注 (MULTIPLY_OEE 且封顶时给出含因子的原始 OEE)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningDto {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditDto {
    pub message: String,
    pub values: Vec<AuditValueDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditValueDto {
    pub metric: Metric,
    pub raw: f64,
    pub display: String,
    pub message: String,
}

// ==========================================
// 格式化
// ==========================================

/// 比率格式化为百分比, 保留两位小数
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// 分钟格式化, 保留两位小数
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.2}", minutes)
}

pub fn format_metric(metric: Metric, value: f64) -> String {
    if metric.is_ratio() {
        format_percent(value)
    } else {
        format_minutes(value)
    }
}
