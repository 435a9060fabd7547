use anyhow::Result;
use t00ls_auto_sign::config::default_config_path;
use t00ls_auto_sign::utils::logging;
use t00ls_auto_sign::App;

/// 运行日志文件，写在当前目录
const LOG_FILE: &str = "sign.log";

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志（终端 + 日志文件）
    logging::init_with_log_file(LOG_FILE)?;

    // 配置文件路径：第一个命令行参数，缺省取可执行文件同目录的 config.json
    let config_path = std::env::args()
        .nth(1)
        .map(Into::into)
        .unwrap_or_else(default_config_path);

    // 初始化并运行应用；任何失败都以非零退出码结束
    App::initialize(&config_path).await?.run().await?;

    Ok(())
}
