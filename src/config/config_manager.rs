// ==========================================
// OEE 计算器 - 配置管理器
// ==========================================
// 职责: 配置文件定位、加载、校验、写出
// 路径优先级: 显式路径 > OEE_CALCULATOR_CONFIG > 用户配置目录
// ==========================================

use crate::config::calculator_config::CalculatorConfig;
use crate::config::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};

/// 配置文件路径环境变量
pub const ENV_CONFIG_PATH: &str = "OEE_CALCULATOR_CONFIG";
/// 语言覆写环境变量
pub const ENV_LOCALE: &str = "OEE_CALCULATOR_LOCALE";

const APP_DIR: &str = "oee-calculator";
const CONFIG_FILE: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// 创建 ConfigManager
    ///
    /// # 参数
    /// - explicit_path: 命令行等显式指定的路径, None 时按环境变量/用户目录解析
    pub fn new(explicit_path: Option<&Path>) -> Self {
        Self {
            path: resolve_config_path(explicit_path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置
    ///
    /// - 文件不存在: 返回默认配置
    /// - 文件存在: 解析 JSON, 应用环境变量覆写, 再校验
    pub fn load(&self) -> ConfigResult<CalculatorConfig> {
        let mut config = if self.path.exists() {
            let raw = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
                path: self.path.clone(),
                source,
            })?;
            let parsed: CalculatorConfig =
                serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: self.path.clone(),
                    source,
                })?;
            tracing::debug!(path = %self.path.display(), "配置文件已加载");
            parsed
        } else {
            tracing::debug!(path = %self.path.display(), "配置文件不存在, 使用默认配置");
            CalculatorConfig::default()
        };

        apply_overrides(&mut config, std::env::var(ENV_LOCALE).ok());
        config.validate()?;
        Ok(config)
    }

    /// 写出配置 (pretty JSON), 自动创建父目录
    ///
    /// # 参数
    /// - overwrite: false 时若文件已存在返回 AlreadyExists
    pub fn save(&self, config: &CalculatorConfig, overwrite: bool) -> ConfigResult<()> {
        config.validate()?;

        if self.path.exists() && !overwrite {
            return Err(ConfigError::AlreadyExists(self.path.clone()));
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), "配置文件已写出");
        Ok(())
    }
}

/// 应用覆写 (空白值忽略)
pub fn apply_overrides(config: &mut CalculatorConfig, locale: Option<String>) {
    if let Some(locale) = locale {
        let trimmed = locale.trim();
        if !trimmed.is_empty() {
            config.locale = trimmed.to_string();
        }
    }
}

/// 解析配置文件路径
pub fn resolve_config_path(explicit_path: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit_path {
        return path.to_path_buf();
    }

    // 允许通过环境变量显式指定路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    default_config_path()
}

/// 默认路径: 用户配置目录/oee-calculator/config.json, 取不到时回退到当前目录
pub fn default_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join(APP_DIR).join(CONFIG_FILE),
        None => PathBuf::from(format!("./{}", CONFIG_FILE)),
    }
}
