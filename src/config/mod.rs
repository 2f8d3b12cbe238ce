// ==========================================
// OEE 计算器 - 配置层
// ==========================================
// 职责: 表单默认值、分级阈值、输入下限、语言
// 存储: JSON 配置文件
// ==========================================

pub mod calculator_config;
pub mod config_manager;
pub mod error;

// 重导出核心配置类型
pub use calculator_config::{CalculatorConfig, InputLimits, TierThresholds};
pub use config_manager::{ConfigManager, ENV_CONFIG_PATH, ENV_LOCALE};
pub use error::{ConfigError, ConfigResult};
