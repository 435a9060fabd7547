//! 日志工具模块
//!
//! tracing 订阅器在 main 里配置一次，整次运行内到处可用；
//! 同时落到终端和调用方指定的日志文件。

use anyhow::Result;
use std::fs;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅器，只输出到终端
///
/// 默认 info 级别，可用 RUST_LOG 覆盖。重复调用不报错（测试里会多次进来）。
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_target(false)
        .try_init();
}

/// 初始化 tracing 订阅器，同时输出到终端和日志文件
///
/// 先写入本次运行的文件头（截断旧内容），之后的日志行追加在文件头之后。
pub fn init_with_log_file(log_file_path: &str) -> Result<()> {
    init_log_file(log_file_path)?;

    let file = fs::OpenOptions::new()
        .append(true)
        .open(log_file_path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_target(false)
        .with_writer(std::io::stdout.and(Arc::new(file)))
        .try_init();
    Ok(())
}

/// 写入日志文件头
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n签到日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(total_accounts: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量签到模式");
    info!("📊 账号数量: {}", total_accounts);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(success: usize, failed: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
