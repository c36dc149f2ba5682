//! 日志工具模块
//!
//! 提供进度日志格式化和输出的辅助函数（写到 stderr，不影响 stdout 上的 JSON）

use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::models::Curriculum;
use crate::workflow::GroupCtx;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 路线图抓取");
    info!("🌐 目标页面: {}", config.roadmap_url);
    match config.browser_debug_port {
        Some(port) => info!("🔌 连接已有浏览器, 端口: {}", port),
        None => info!("🖥️ 启动新浏览器, 无头模式: {}", config.headless),
    }
    info!("⏱️ 单行渲染超时: {}ms", config.render_timeout_ms);
    info!("{}", "=".repeat(60));
}

/// 记录发现的分组
pub fn log_groups_discovered(names: &[String]) {
    info!("✓ 找到 {} 个分组: {:?}", names.len(), names);
}

/// 记录分组开始处理
pub fn log_group_start(ctx: &GroupCtx) {
    info!("\n{} {}", ctx, "─".repeat(30));
    info!("{} 📂 正在处理", ctx);
}

/// 记录分组处理完成
pub fn log_group_complete(ctx: &GroupCtx, question_count: usize) {
    info!("{} ✓ 完成, 共 {} 道题目", ctx, question_count);
}

/// 打印最终统计信息
///
/// # 参数
/// - `curriculum`: 排序后的课程表
/// - `target`: 输出位置
/// - `elapsed`: 总耗时
pub fn print_final_stats(curriculum: &Curriculum, target: &str, elapsed: Duration) {
    info!("\n{}", "=".repeat(60));
    info!("📊 抓取完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    for group in curriculum.groups() {
        info!(
            "  {:<24} {:>3} 道",
            truncate_text(&group.group_name, 24),
            group.questions.len()
        );
    }
    info!("{}", "=".repeat(60));
    info!("✅ 分组: {}", curriculum.groups().len());
    info!("✅ 题目: {}", curriculum.total_questions());
    info!("⏱️ 耗时: {:.1}s", elapsed.as_secs_f64());
    info!("{}", "=".repeat(60));
    info!("\n课程表已输出至: {}", target);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
