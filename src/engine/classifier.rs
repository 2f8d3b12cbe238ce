// ==========================================
// OEE 计算器 - 驾驶舱分级引擎
// ==========================================
// 规则: ratio >= good → GOOD; ratio >= medium → MEDIUM; 其他 → POOR
// 运行时间不分级
// ==========================================

use crate::domain::types::{KpiTier, Metric};

pub const DEFAULT_GOOD_THRESHOLD: f64 = 0.85;
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 0.60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiClassifier {
    good_threshold: f64,
    medium_threshold: f64,
}

impl Default for KpiClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_GOOD_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD)
    }
}

impl KpiClassifier {
    /// 阈值合法性 (0 <= medium <= good) 由配置层校验
    pub fn new(good_threshold: f64, medium_threshold: f64) -> Self {
        Self {
            good_threshold,
            medium_threshold,
        }
    }

    pub fn tier(&self, ratio: f64) -> KpiTier {
        if ratio >= self.good_threshold {
            KpiTier::Good
        } else if ratio >= self.medium_threshold {
            KpiTier::Medium
        } else {
            KpiTier::Poor
        }
    }

    /// 按指标分级, 运行时间返回 None
    pub fn classify(&self, metric: Metric, value: f64) -> Option<KpiTier> {
        metric.is_ratio().then(|| self.tier(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let c = KpiClassifier::default();
        assert_eq!(c.tier(0.85), KpiTier::Good);
        assert_eq!(c.tier(1.2), KpiTier::Good);
        assert_eq!(c.tier(0.8499), KpiTier::Medium);
        assert_eq!(c.tier(0.60), KpiTier::Medium);
        assert_eq!(c.tier(0.5999), KpiTier::Poor);
        assert_eq!(c.tier(0.0), KpiTier::Poor);
    }

    #[test]
    fn test_operating_time_has_no_tier() {
        let c = KpiClassifier::default();
        assert_eq!(c.classify(Metric::OperatingTime, 420.0), None);
        assert_eq!(c.classify(Metric::Oee, 0.9), Some(KpiTier::Good));
    }

    #[test]
    fn test_custom_thresholds() {
        let c = KpiClassifier::new(0.9, 0.7);
        assert_eq!(c.tier(0.88), KpiTier::Medium);
        assert_eq!(c.tier(0.65), KpiTier::Poor);
    }
}
