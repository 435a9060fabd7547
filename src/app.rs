//! 应用编排层
//!
//! 按配置顺序逐个跑账号签到流程，收集失败记录，最后给出整次运行的二元结果。
//! 账号之间严格串行，失败记录就是一个普通的有序 Vec。

use crate::clients::ForumClient;
use crate::config::{load_config_file, ConfigInfo};
use crate::error::{AppError, AppResult};
use crate::utils::logging;
use crate::workflow::{AccountCtx, Outcome, SignFlow};
use std::path::Path;
use tracing::warn;

/// 一条失败记录
#[derive(Debug)]
pub struct FailureRecord {
    pub username: String,
    pub outcome: Outcome,
}

/// 应用主结构
pub struct App {
    config: ConfigInfo,
    client: ForumClient,
    flow: SignFlow,
}

impl App {
    /// 初始化应用：读配置、建客户端
    ///
    /// 配置读取/解析失败和代理解析失败都在这里终止，
    /// 此时还没有发出过任何 HTTP 请求。
    pub async fn initialize(config_path: &Path) -> AppResult<Self> {
        let config = load_config_file(config_path).await?;
        let client = ForumClient::new(&config.proxy)?;
        Ok(Self::from_parts(config, client))
    }

    /// 用现成的配置和客户端组装应用，测试入口
    pub fn from_parts(config: ConfigInfo, client: ForumClient) -> Self {
        Self {
            config,
            client,
            flow: SignFlow::new(),
        }
    }

    /// 运行批量签到
    ///
    /// 账号列表为空时直接成功；任一账号失败只记录不中断，
    /// 全部跑完后如有失败返回 [`AppError::BatchHadFailures`]。
    pub async fn run(&self) -> AppResult<()> {
        let total = self.config.account_base64_text.len();
        logging::log_startup(total);

        let mut failures: Vec<FailureRecord> = Vec::new();

        for (i, base64_text) in self.config.account_base64_text.iter().enumerate() {
            let account = base64_text.to_account_info();
            let ctx = AccountCtx::new(account.username.clone(), i + 1);

            if account.is_blank() {
                // 条目多半是坏的 base64/JSON；按设计不中断，
                // 空账号照常去登录、在远端失败
                warn!("{} 账号条目格式错误, 将以空凭据尝试登录", ctx);
            }

            let outcome = self.flow.run(&self.client, &account, &ctx).await;

            if outcome.is_failure() {
                failures.push(FailureRecord {
                    username: ctx.display_name(),
                    outcome,
                });
            }
        }

        logging::print_final_stats(total - failures.len(), failures.len(), total);

        if failures.is_empty() {
            Ok(())
        } else {
            Err(AppError::BatchHadFailures {
                count: failures.len(),
            })
        }
    }
}
