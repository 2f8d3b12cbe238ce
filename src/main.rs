// ==========================================
// OEE 计算器 - 命令行主入口
// ==========================================
// 用法:
//   oee-calculator calc --planned 480 --downtime 60 --cycle 1.5 --total 18000 --good 17500
//   oee-calculator calc --mode multiply-oee --factor-a 1.2 --no-clamp --format json
//   oee-calculator defaults
//   oee-calculator init-config [--force]
// ==========================================

use clap::Parser;
use oee_calculator::app::{run, Cli};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统 (stderr); 输入提示已在报表中展示, 默认只输出 error
    oee_calculator::logging::init_with_default("error");

    let cli = Cli::parse();
    tracing::debug!(version = oee_calculator::VERSION, "{}", oee_calculator::APP_NAME);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}
