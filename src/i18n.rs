// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）、英文、西班牙文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 内置语言
pub const SUPPORTED_LOCALES: [&str; 3] = ["zh-CN", "en", "es"];

pub fn is_supported_locale(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 按指定语言翻译
///
/// 不读写 rust-i18n 的全局 locale, 多线程下各报表语言互不影响
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 按指定语言翻译（带参数）
///
/// # 示例
/// ```no_run
/// use oee_calculator::i18n::t_in_with_args;
/// let msg = t_in_with_args("es", "app.caption", &[("year", "2026")]);
/// ```
pub fn t_in_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    fill_args(rust_i18n::t!(key, locale = locale).to_string(), args)
}

fn fill_args(mut result: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
