// ==========================================
// OEE 计算器 - 封顶审计引擎
// ==========================================
// 职责: 封顶开启时, 列出原始值超过 100% 的指标
// ==========================================

use crate::domain::calculation::{CalculationInput, CalculationResult};
use crate::domain::types::Metric;
use crate::domain::warning::{AuditNotice, OverCapValue};

const AUDITED: [Metric; 4] = [
    Metric::Availability,
    Metric::Performance,
    Metric::Quality,
    Metric::Oee,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AuditEngine {}

impl AuditEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 生成封顶审计提示
    ///
    /// # 返回
    /// - None: 未封顶, 或所有原始值 <= 1.0
    pub fn over_cap(
        &self,
        input: &CalculationInput,
        result: &CalculationResult,
    ) -> Option<AuditNotice> {
        if !input.clamp_to_100_percent {
            return None;
        }

        let values: Vec<OverCapValue> = AUDITED
            .iter()
            .map(|&metric| OverCapValue {
                metric,
                raw: result.raw(metric),
            })
            .filter(|v| v.raw > 1.0)
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(AuditNotice { values })
        }
    }
}
