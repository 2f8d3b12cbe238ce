// ==========================================
// OEE 计算器 - 命令行前端
// ==========================================
// 子命令:
// - calc: 计算并输出驾驶舱 (text / json)
// - defaults: 输出当前生效配置
// - init-config: 写出默认配置文件
// ==========================================

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::api::dto::CalculateRequest;
use crate::api::OeeApi;
use crate::app::render::render_text;
use crate::config::{CalculatorConfig, ConfigManager};
use crate::domain::types::FactorApplicationMode;

// ==========================================
// 命令行定义
// ==========================================

#[derive(Debug, Parser)]
#[command(name = "oee-calculator", version, about = "设备综合效率 (OEE) 计算器")]
pub struct Cli {
    /// 配置文件路径 (默认: $OEE_CALCULATOR_CONFIG 或用户配置目录)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 计算 OEE 并输出驾驶舱
    Calc(CalcArgs),
    /// 以 JSON 输出当前生效配置
    Defaults,
    /// 写出默认配置文件
    InitConfig {
        /// 覆盖已存在的文件
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 未指定的字段取配置中的默认值
#[derive(Debug, Args)]
pub struct CalcArgs {
    /// 计划生产时间 (分钟)
    #[arg(long, allow_negative_numbers = true)]
    pub planned: Option<f64>,
    /// 停机时间 (分钟)
    #[arg(long, allow_negative_numbers = true)]
    pub downtime: Option<f64>,
    /// 理想节拍 (秒/件)
    #[arg(long, allow_negative_numbers = true)]
    pub cycle: Option<f64>,
    /// 总产量 (件)
    #[arg(long)]
    pub total: Option<u64>,
    /// 合格品数量 (件)
    #[arg(long)]
    pub good: Option<u64>,
    /// 运营因子 FO1
    #[arg(long = "factor-a", allow_negative_numbers = true)]
    pub factor_a: Option<f64>,
    /// 运营因子 FO2
    #[arg(long = "factor-b", allow_negative_numbers = true)]
    pub factor_b: Option<f64>,
    /// 因子应用模式: none | multiply-oee | penalize-performance
    #[arg(long)]
    pub mode: Option<FactorApplicationMode>,
    /// 比率封顶到 100%
    #[arg(long, conflicts_with = "no_clamp")]
    pub clamp: bool,
    /// 比率不封顶
    #[arg(long)]
    pub no_clamp: bool,
    /// 输出格式
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// 报表语言: zh-CN | en | es
    #[arg(long)]
    pub locale: Option<String>,
}

impl CalcArgs {
    pub fn to_request(&self) -> CalculateRequest {
        let clamp_to_100_percent = match (self.clamp, self.no_clamp) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        CalculateRequest {
            planned_time_min: self.planned,
            downtime_min: self.downtime,
            ideal_cycle_sec_per_unit: self.cycle,
            total_units: self.total,
            good_units: self.good,
            factor_a: self.factor_a,
            factor_b: self.factor_b,
            clamp_to_100_percent,
            factor_application_mode: self.mode,
            locale: self.locale.clone(),
        }
    }
}

// ==========================================
// 命令执行
// ==========================================

/// 执行命令, 报表写入 `out`
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let manager = ConfigManager::new(cli.config.as_deref());

    match cli.command {
        Commands::Calc(args) => {
            let config = manager
                .load()
                .with_context(|| format!("加载配置失败: {}", manager.path().display()))?;
            let api = OeeApi::new(config);
            let response = api
                .calculate(&args.to_request())
                .context("计算请求未通过校验")?;

            match args.format {
                OutputFormat::Text => write!(out, "{}", render_text(&response))?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, &response)
                        .context("序列化驾驶舱响应失败")?;
                    writeln!(out)?;
                }
            }
        }
        Commands::Defaults => {
            let config = manager
                .load()
                .with_context(|| format!("加载配置失败: {}", manager.path().display()))?;
            serde_json::to_writer_pretty(&mut *out, &config).context("序列化配置失败")?;
            writeln!(out)?;
        }
        Commands::InitConfig { force } => {
            manager
                .save(&CalculatorConfig::default(), force)
                .with_context(|| format!("写出配置失败: {}", manager.path().display()))?;
            writeln!(out, "{}", manager.path().display())?;
        }
    }

    Ok(())
}
