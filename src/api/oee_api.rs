// ==========================================
// OEE 计算器 - 驾驶舱 API
// ==========================================
// 流程: 校验 → 输入警告 → 计算 → 分级 → 封顶审计 → 驾驶舱响应
// 红线: 警告不阻断计算; 报表语言显式传递, 不依赖全局 locale
// ==========================================

use chrono::{DateTime, Datelike, Local};

use crate::api::dto::{
    format_metric, format_percent, AuditDto, AuditValueDto, CalculateRequest, DashboardResponse,
    KpiCard, WarningDto,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::InputValidator;
use crate::config::calculator_config::CalculatorConfig;
use crate::domain::calculation::{CalculationInput, CalculationResult};
use crate::domain::types::{FactorApplicationMode, Metric};
use crate::domain::warning::{AuditNotice, InputWarning};
use crate::engine::{AuditEngine, InputCheckEngine, KpiClassifier, OeeEngine};
use crate::i18n::{is_supported_locale, t_in, t_in_with_args};

// ==========================================
// OeeApi - 驾驶舱 API
// ==========================================

/// 驾驶舱 API
///
/// 无可变状态, 可在多线程间共享同一实例
pub struct OeeApi {
    config: CalculatorConfig,
    validator: InputValidator,
    classifier: KpiClassifier,
    engine: OeeEngine,
    input_check: InputCheckEngine,
    audit: AuditEngine,
}

impl OeeApi {
    /// 创建 OeeApi
    ///
    /// 配置须已通过 `CalculatorConfig::validate`（ConfigManager::load 会保证这一点）
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            validator: InputValidator::new(config.defaults.clone(), config.limits),
            classifier: config.classifier(),
            config,
            engine: OeeEngine::new(),
            input_check: InputCheckEngine::new(),
            audit: AuditEngine::new(),
        }
    }

    // ==========================================
    // 计算接口
    // ==========================================

    /// 计算并生成驾驶舱响应
    pub fn calculate(&self, request: &CalculateRequest) -> ApiResult<DashboardResponse> {
        self.calculate_at(request, Local::now())
    }

    /// 同 `calculate`, 生成时间由调用方给定
    pub fn calculate_at(
        &self,
        request: &CalculateRequest,
        now: DateTime<Local>,
    ) -> ApiResult<DashboardResponse> {
        let locale = self.resolve_locale(request.locale.as_deref())?;
        let input = self.validator.validate(request)?;
        Ok(self.build_dashboard(input, &locale, now))
    }

    /// 由已校验的输入生成驾驶舱响应
    pub fn build_dashboard(
        &self,
        input: CalculationInput,
        locale: &str,
        now: DateTime<Local>,
    ) -> DashboardResponse {
        // 1. 输入警告 (计算前, 基于原始输入)
        let warnings = self.input_check.check(&input);
        for w in &warnings {
            tracing::warn!(code = w.code(), "输入提示");
        }

        // 2. 计算
        let result = self.engine.calculate(&input);

        // 3. 封顶审计
        let audit = self.audit.over_cap(&input, &result);
        if let Some(notice) = &audit {
            tracing::info!(count = notice.values.len(), "原始值超过 100%, 已封顶");
        }

        let mode = input.factor_application_mode;
        let year = now.year().to_string();
        DashboardResponse {
            title: t_in(locale, "app.title"),
            intro: t_in(locale, "app.intro"),
            locale: locale.to_string(),
            mode,
            mode_description: t_in(locale, &format!("mode.{}", mode.key())),
            cards: self.cards(&input, &result, locale),
            warnings: warning_dtos(&warnings, locale),
            audit: audit.map(|notice| audit_dto(&notice, locale)),
            concepts: concepts(mode, locale),
            caption: t_in_with_args(locale, "app.caption", &[("year", year.as_str())]),
            generated_at: now,
            input,
            result,
        }
    }

    // ==========================================
    // 内部方法
    // ==========================================

    fn resolve_locale(&self, requested: Option<&str>) -> ApiResult<String> {
        let locale = requested
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(self.config.locale.as_str());
        if !is_supported_locale(locale) {
            return Err(ApiError::InvalidInput(format!("不支持的语言: {}", locale)));
        }
        Ok(locale.to_string())
    }

    fn cards(
        &self,
        input: &CalculationInput,
        result: &CalculationResult,
        locale: &str,
    ) -> Vec<KpiCard> {
        let mode = input.factor_application_mode;
        let clamp = input.clamp_to_100_percent;
        Metric::CARDS
            .iter()
            .map(|&metric| {
                let value = result.value(metric);
                KpiCard {
                    metric,
                    title: t_in(locale, &format!("metric.{}", metric.key())),
                    value,
                    display: format_metric(metric, value),
                    tier: self.classifier.classify(metric, value),
                    formula: t_in(locale, formula_key(metric, mode, clamp)),
                    note: card_note(metric, mode, clamp, result, locale),
                }
            })
            .collect()
    }
}

/// 卡片公式
///
/// MULTIPLY_OEE 且封顶时, 最终 OEE 由封顶后的 A/P/Q 相乘, 因子只体现在原始 OEE
fn formula_key(metric: Metric, mode: FactorApplicationMode, clamp: bool) -> &'static str {
    match (metric, mode) {
        (Metric::Availability, _) => "formula.availability",
        (Metric::Performance, FactorApplicationMode::PenalizePerformance) => {
            "formula.performance_penalize"
        }
        (Metric::Performance, _) => "formula.performance_plain",
        (Metric::Quality, _) => "formula.quality",
        (Metric::Oee, FactorApplicationMode::MultiplyOee) if !clamp => "formula.oee_multiply",
        (Metric::Oee, _) => "formula.oee_plain",
        (Metric::OperatingTime, _) => "formula.operating_time",
    }
}

/// 卡片附注: MULTIPLY_OEE 且封顶时, 在 OEE 卡片上给出含因子的原始 OEE
fn card_note(
    metric: Metric,
    mode: FactorApplicationMode,
    clamp: bool,
    result: &CalculationResult,
    locale: &str,
) -> Option<String> {
    if metric != Metric::Oee || mode != FactorApplicationMode::MultiplyOee || !clamp {
        return None;
    }
    let value = format_percent(result.oee_raw);
    Some(t_in_with_args(
        locale,
        "note.oee_factored",
        &[("value", value.as_str())],
    ))
}

fn concept_keys(mode: FactorApplicationMode) -> &'static [&'static str] {
    match mode {
        FactorApplicationMode::None => &[
            "concept.availability",
            "concept.performance_plain",
            "concept.quality",
            "concept.oee_plain",
        ],
        FactorApplicationMode::MultiplyOee => &[
            "concept.availability",
            "concept.performance_plain",
            "concept.quality",
            "concept.factors_multiply",
            "concept.oee_multiply",
        ],
        FactorApplicationMode::PenalizePerformance => &[
            "concept.availability",
            "concept.performance_penalize",
            "concept.quality",
            "concept.factors_penalize",
            "concept.oee_plain",
        ],
    }
}

/// 概念说明 (公式释义)
pub fn concepts(mode: FactorApplicationMode, locale: &str) -> Vec<String> {
    concept_keys(mode).iter().map(|key| t_in(locale, key)).collect()
}

fn warning_dtos(warnings: &[InputWarning], locale: &str) -> Vec<WarningDto> {
    warnings
        .iter()
        .map(|w| WarningDto {
            code: w.code().to_string(),
            message: t_in(locale, w.message_key()),
        })
        .collect()
}

fn audit_dto(notice: &AuditNotice, locale: &str) -> AuditDto {
    let values = notice
        .values
        .iter()
        .map(|v| {
            let display = format_percent(v.raw);
            let title = t_in(locale, &format!("metric.{}", v.metric.key()));
            AuditValueDto {
                metric: v.metric,
                raw: v.raw,
                message: t_in_with_args(
                    locale,
                    "audit.item",
                    &[("metric", title.as_str()), ("value", display.as_str())],
                ),
                display,
            }
        })
        .collect();

    AuditDto {
        message: t_in(locale, "audit.header"),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::KpiTier;

    fn api() -> OeeApi {
        OeeApi::new(CalculatorConfig::default())
    }

    #[test]
    fn test_default_request_builds_five_cards() {
        let resp = api().calculate(&CalculateRequest::default()).unwrap();
        assert_eq!(resp.cards.len(), 5);
        assert_eq!(resp.cards[4].metric, Metric::OperatingTime);
        assert_eq!(resp.cards[4].tier, None);
        assert_eq!(resp.cards[4].display, "420.00");
        assert_eq!(resp.locale, "zh-CN");
    }

    #[test]
    fn test_unsupported_locale_rejected() {
        let req = CalculateRequest {
            locale: Some("fr".to_string()),
            ..CalculateRequest::default()
        };
        assert!(matches!(api().calculate(&req), Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_formula_follows_mode() {
        assert_eq!(
            formula_key(Metric::Performance, FactorApplicationMode::PenalizePerformance, true),
            "formula.performance_penalize"
        );
        assert_eq!(
            formula_key(Metric::Performance, FactorApplicationMode::MultiplyOee, true),
            "formula.performance_plain"
        );
        assert_eq!(
            formula_key(Metric::Oee, FactorApplicationMode::MultiplyOee, false),
            "formula.oee_multiply"
        );
        // 封顶时最终 OEE 不含因子
        assert_eq!(
            formula_key(Metric::Oee, FactorApplicationMode::MultiplyOee, true),
            "formula.oee_plain"
        );
    }

    #[test]
    fn test_card_note_only_for_clamped_multiply_oee() {
        let result = OeeEngine::new().calculate(&CalculationInput {
            factor_a: 0.5,
            factor_application_mode: FactorApplicationMode::MultiplyOee,
            ..CalculationInput::default()
        });
        assert!(card_note(Metric::Oee, FactorApplicationMode::MultiplyOee, true, &result, "en")
            .is_some());
        assert!(card_note(Metric::Oee, FactorApplicationMode::MultiplyOee, false, &result, "en")
            .is_none());
        assert!(card_note(Metric::Oee, FactorApplicationMode::None, true, &result, "en").is_none());
        assert!(card_note(
            Metric::Performance,
            FactorApplicationMode::MultiplyOee,
            true,
            &result,
            "en"
        )
        .is_none());
    }

    #[test]
    fn test_concepts_count_by_mode() {
        assert_eq!(concepts(FactorApplicationMode::None, "en").len(), 4);
        assert_eq!(concepts(FactorApplicationMode::MultiplyOee, "en").len(), 5);
        assert_eq!(concepts(FactorApplicationMode::PenalizePerformance, "en").len(), 5);
    }

    #[test]
    fn test_baseline_tiers() {
        let req = CalculateRequest {
            factor_application_mode: Some(FactorApplicationMode::None),
            locale: Some("en".to_string()),
            ..CalculateRequest::default()
        };
        let resp = api().calculate(&req).unwrap();

        assert_eq!(resp.card(Metric::Availability).unwrap().tier, Some(KpiTier::Good));
        assert_eq!(resp.card(Metric::Performance).unwrap().display, "100.00%");
        assert_eq!(resp.card(Metric::Oee).unwrap().tier, Some(KpiTier::Good));
        assert!(resp.audit.is_some());
    }
}
