// ==========================================
// OEE 计算器 - 文本报表渲染
// ==========================================
// 职责: 将 DashboardResponse 渲染为终端文本
// 顺序: 标题 → 口径 → 指标卡片 → 输入提示 → 封顶审计 → 概念 → 页脚
// ==========================================

use crate::api::dto::DashboardResponse;
use crate::i18n::{t_in, t_in_with_args};

/// 渲染驾驶舱文本
pub fn render_text(resp: &DashboardResponse) -> String {
    let locale = resp.locale.as_str();
    let mut lines: Vec<String> = Vec::new();

    lines.push(resp.title.clone());
    lines.push(resp.intro.clone());
    let clamp_key = if resp.input.clamp_to_100_percent {
        "app.clamp_on"
    } else {
        "app.clamp_off"
    };
    lines.push(format!(
        "{} | {}",
        t_in_with_args(
            locale,
            "app.mode_line",
            &[("mode", resp.mode_description.as_str())]
        ),
        t_in(locale, clamp_key)
    ));
    lines.push(String::new());

    // ===== 指标卡片 =====
    let title_width = resp
        .cards
        .iter()
        .map(|c| c.title.chars().count())
        .max()
        .unwrap_or(0);
    for card in &resp.cards {
        let tier = card
            .tier
            .map(|t| format!("[{}]", t_in(locale, &format!("tier.{}", t.key()))))
            .unwrap_or_default();
        let pad = title_width.saturating_sub(card.title.chars().count());
        lines.push(format!(
            "  {}{}  {:>10}  {:<10}  {}",
            card.title,
            " ".repeat(pad),
            card.display,
            tier,
            card.formula
        ));
        if let Some(note) = &card.note {
            lines.push(format!("  {}  {}", " ".repeat(title_width), note));
        }
    }

    // ===== 输入提示 =====
    if !resp.warnings.is_empty() {
        lines.push(String::new());
        lines.push(t_in(locale, "app.warnings_header"));
        lines.extend(resp.warnings.iter().map(|w| format!("  ! {}", w.message)));
    }

    // ===== 封顶审计 =====
    if let Some(audit) = &resp.audit {
        lines.push(String::new());
        lines.push(audit.message.clone());
        lines.extend(audit.values.iter().map(|v| format!("  - {}", v.message)));
    }

    // ===== 概念 =====
    lines.push(String::new());
    lines.push(t_in(locale, "app.concepts_header"));
    lines.extend(resp.concepts.iter().map(|c| format!("  * {}", c)));

    lines.push(String::new());
    lines.push(resp.caption.clone());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
