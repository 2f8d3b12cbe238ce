// ==========================================
// OEE 计算器 - 领域类型定义
// ==========================================
// 职责: 因子应用模式、指标种类、驾驶舱分级
// 红线: 三种历史公式口径统一为一个枚举，不复制计算函数
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 因子应用模式 (Factor Application Mode)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与配置文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactorApplicationMode {
    /// 不使用运营因子
    None,
    /// 因子只作用于 OEE 结果 (不受限, 可大于 1)
    MultiplyOee,
    /// 因子折算进性能率 (FO < 1 惩罚, FO > 1 提升)
    #[default]
    PenalizePerformance,
}

impl FactorApplicationMode {
    pub const ALL: [FactorApplicationMode; 3] = [
        FactorApplicationMode::None,
        FactorApplicationMode::MultiplyOee,
        FactorApplicationMode::PenalizePerformance,
    ];

    /// i18n 键后缀
    pub fn key(&self) -> &'static str {
        match self {
            FactorApplicationMode::None => "none",
            FactorApplicationMode::MultiplyOee => "multiply_oee",
            FactorApplicationMode::PenalizePerformance => "penalize_performance",
        }
    }
}

impl fmt::Display for FactorApplicationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorApplicationMode::None => write!(f, "NONE"),
            FactorApplicationMode::MultiplyOee => write!(f, "MULTIPLY_OEE"),
            FactorApplicationMode::PenalizePerformance => write!(f, "PENALIZE_PERFORMANCE"),
        }
    }
}

impl FromStr for FactorApplicationMode {
    type Err = String;

    /// 接受 `MULTIPLY_OEE` / `multiply-oee` / `multiply_oee` 等写法
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        match normalized.as_str() {
            "NONE" => Ok(FactorApplicationMode::None),
            "MULTIPLY_OEE" => Ok(FactorApplicationMode::MultiplyOee),
            "PENALIZE_PERFORMANCE" => Ok(FactorApplicationMode::PenalizePerformance),
            _ => Err(format!("未知的因子应用模式: {}", s)),
        }
    }
}

// ==========================================
// 指标种类 (Metric)
// ==========================================
// 顺序即驾驶舱卡片顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    Availability,
    Performance,
    Quality,
    Oee,
    OperatingTime,
}

impl Metric {
    pub const CARDS: [Metric; 5] = [
        Metric::Availability,
        Metric::Performance,
        Metric::Quality,
        Metric::Oee,
        Metric::OperatingTime,
    ];

    /// 比率类指标参与分级, 运行时间不参与
    pub fn is_ratio(&self) -> bool {
        !matches!(self, Metric::OperatingTime)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Metric::Availability => "availability",
            Metric::Performance => "performance",
            Metric::Quality => "quality",
            Metric::Oee => "oee",
            Metric::OperatingTime => "operating_time",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Availability => write!(f, "AVAILABILITY"),
            Metric::Performance => write!(f, "PERFORMANCE"),
            Metric::Quality => write!(f, "QUALITY"),
            Metric::Oee => write!(f, "OEE"),
            Metric::OperatingTime => write!(f, "OPERATING_TIME"),
        }
    }
}

// ==========================================
// 驾驶舱分级 (KPI Tier)
// ==========================================
// 顺序: Poor < Medium < Good
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KpiTier {
    Poor,   // 差
    Medium, // 中
    Good,   // 良
}

impl KpiTier {
    pub fn key(&self) -> &'static str {
        match self {
            KpiTier::Poor => "poor",
            KpiTier::Medium => "medium",
            KpiTier::Good => "good",
        }
    }
}

impl fmt::Display for KpiTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiTier::Poor => write!(f, "POOR"),
            KpiTier::Medium => write!(f, "MEDIUM"),
            KpiTier::Good => write!(f, "GOOD"),
        }
    }
}
