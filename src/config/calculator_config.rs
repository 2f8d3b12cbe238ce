// ==========================================
// OEE 计算器 - 计算器配置对象
// ==========================================
// 存储: JSON 文件 (见 ConfigManager)
// 缺失的段/字段取默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::calculation::CalculationInput;
use crate::domain::types::FactorApplicationMode;
use crate::engine::classifier::{KpiClassifier, DEFAULT_GOOD_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD};
use serde::{Deserialize, Serialize};

/// 计算器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// 表单默认值 (请求中缺失的字段取此值)
    pub defaults: CalculationInput,

    /// 驾驶舱分级阈值
    pub thresholds: TierThresholds,

    /// 输入下限
    pub limits: InputLimits,

    /// 界面语言 (zh-CN / en / es)
    pub locale: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            defaults: CalculationInput::default(),
            thresholds: TierThresholds::default(),
            limits: InputLimits::default(),
            locale: "zh-CN".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub good: f64,
    pub medium: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            good: DEFAULT_GOOD_THRESHOLD,
            medium: DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}

/// 运营因子下限
///
/// 惩罚模式下因子 >= 0.1, 避免 0 或负数使性能率整体失效;
/// 其他模式下因子 >= 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub factor_min_penalize: f64,
    pub factor_min_other: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            factor_min_penalize: 0.1,
            factor_min_other: 0.0,
        }
    }
}

impl InputLimits {
    pub fn factor_min(&self, mode: FactorApplicationMode) -> f64 {
        match mode {
            FactorApplicationMode::PenalizePerformance => self.factor_min_penalize,
            FactorApplicationMode::None | FactorApplicationMode::MultiplyOee => {
                self.factor_min_other
            }
        }
    }
}

impl CalculatorConfig {
    pub fn classifier(&self) -> KpiClassifier {
        KpiClassifier::new(self.thresholds.good, self.thresholds.medium)
    }

    /// 校验配置
    ///
    /// # 规则
    /// - 阈值有限且 0 <= medium <= good
    /// - 因子下限有限且 >= 0
    /// - 默认值中的时间/节拍有限且 >= 0, 因子不低于当前模式下限
    /// - locale 必须是已内置的语言
    pub fn validate(&self) -> ConfigResult<()> {
        let t = &self.thresholds;
        if !t.good.is_finite() || !t.medium.is_finite() {
            return Err(ConfigError::invalid("thresholds", "阈值必须为有限数"));
        }
        if t.medium < 0.0 || t.medium > t.good {
            return Err(ConfigError::invalid(
                "thresholds",
                format!("要求 0 <= medium <= good, 实际 medium={}, good={}", t.medium, t.good),
            ));
        }

        for (key, v) in [
            ("limits.factor_min_penalize", self.limits.factor_min_penalize),
            ("limits.factor_min_other", self.limits.factor_min_other),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::invalid(key, format!("下限必须为非负有限数, 实际 {}", v)));
            }
        }

        let d = &self.defaults;
        for (key, v) in [
            ("defaults.planned_time_min", d.planned_time_min),
            ("defaults.downtime_min", d.downtime_min),
            ("defaults.ideal_cycle_sec_per_unit", d.ideal_cycle_sec_per_unit),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::invalid(key, format!("必须为非负有限数, 实际 {}", v)));
            }
        }

        let factor_min = self.limits.factor_min(d.factor_application_mode);
        for (key, v) in [("defaults.factor_a", d.factor_a), ("defaults.factor_b", d.factor_b)] {
            if !v.is_finite() || v < factor_min {
                return Err(ConfigError::invalid(
                    key,
                    format!("{} 模式下因子必须 >= {}, 实际 {}", d.factor_application_mode, factor_min, v),
                ));
            }
        }

        if !crate::i18n::is_supported_locale(&self.locale) {
            return Err(ConfigError::invalid(
                "locale",
                format!("不支持的语言: {}", self.locale),
            ));
        }

        Ok(())
    }
}
