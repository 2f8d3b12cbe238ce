// ==========================================
// OEE 计算器 - 应用层
// ==========================================
// 职责: 命令行前端与文本渲染, 连接用户与 API 层
// ==========================================

pub mod cli;
pub mod render;

// 重导出
pub use cli::{run, Cli};
pub use render::render_text;
