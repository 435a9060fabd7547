//! 单账号签到流程 - 流程层
//!
//! 核心职责：定义"一个账号"的完整签到流程
//!
//! 流程顺序：
//! 1. 登录（不带 cookie 的首次接触）
//! 2. 从登录响应提取 formhash + 会话 cookie
//! 3. 带会话状态发起签到
//! 4. 按 status/message 分类结果
//!
//! 任一步的网络错误都是该账号的终态，不重试，批量继续跑下一个账号。

use tracing::{error, info, warn};

use crate::api::{LoginResp, LoginRespSuccess, SignResp};
use crate::clients::ForumClient;
use crate::models::AccountInfo;
use crate::workflow::account_ctx::AccountCtx;

/// 单个账号的签到结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 签到成功
    Succeeded,
    /// 今日已签到（对调用方仍算作需要上报的非成功结果）
    AlreadySigned,
    /// 登录被远端拒绝
    LoginFailed(String),
    /// 签到被远端拒绝
    SignFailed(String),
    /// 网络/传输错误（DNS、连接、超时）
    Transport(String),
}

impl Outcome {
    /// 是否算这次批量运行的失败
    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Succeeded)
    }

    /// 人类可读的失败原因，成功时为 None
    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Succeeded => None,
            Outcome::AlreadySigned => Some("今日已签到~"),
            Outcome::LoginFailed(msg) | Outcome::SignFailed(msg) | Outcome::Transport(msg) => {
                Some(msg)
            }
        }
    }
}

/// 单账号签到流程
///
/// - 编排登录 → 签到两步，持有会话状态仅在一次 run 内
/// - 不持有客户端，由编排层传入
pub struct SignFlow;

impl SignFlow {
    pub fn new() -> Self {
        Self
    }

    /// 跑完一个账号的完整流程，返回终态
    pub async fn run(
        &self,
        client: &ForumClient,
        account: &AccountInfo,
        ctx: &AccountCtx,
    ) -> Outcome {
        info!("{} 用户 {} 开始登录...", ctx, ctx.display_name());

        // ========== 第一步：登录 ==========
        let reply = match client.login(account).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("{} 客户端请求出错: {}", ctx, e);
                return Outcome::Transport(e.to_string());
            }
        };

        // 无条件做两种形状的解析：远端在 status 非 success 时
        // 也可能带上部分成功形状的数据（formhash 等）
        let login_resp = LoginResp::parse_lenient(&reply.body);
        let login_success = LoginRespSuccess::parse_lenient(&reply.body);

        if login_resp.status != "success" {
            warn!(
                "{} 用户 {} 登录失败: {}",
                ctx,
                ctx.display_name(),
                login_resp.message
            );
            return Outcome::LoginFailed(login_resp.message);
        }

        info!("{} 用户 {} 登录成功~", ctx, ctx.display_name());

        // ========== 第二步：签到 ==========
        let body = match client.sign_in(&login_success.formhash, &reply.cookies).await {
            Ok(body) => body,
            Err(e) => {
                error!("{} 客户端请求出错: {}", ctx, e);
                return Outcome::Transport(e.to_string());
            }
        };

        let outcome = classify_sign_response(&SignResp::parse_lenient(&body));

        match &outcome {
            Outcome::Succeeded => {
                info!("{} 用户 {} 签到成功~", ctx, ctx.display_name());
            }
            Outcome::AlreadySigned => {
                warn!("{} 用户 {} 签到失败: 今日已签到~", ctx, ctx.display_name());
            }
            Outcome::SignFailed(msg) => {
                warn!("{} 用户 {} 签到失败: {}", ctx, ctx.display_name(), msg);
            }
            _ => {}
        }

        outcome
    }
}

impl Default for SignFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// 按 status/message 对签到响应分类
///
/// 成功对、fail/alreadysign 对之外的任何组合（残缺 body、未知 status）
/// 都归为显式失败，不允许静默落空。
fn classify_sign_response(resp: &SignResp) -> Outcome {
    match (resp.status.as_str(), resp.message.as_str()) {
        ("success", "success") => Outcome::Succeeded,
        ("fail", "alreadysign") => Outcome::AlreadySigned,
        ("fail", other) => Outcome::SignFailed(other.to_string()),
        _ => Outcome::SignFailed("无法识别的签到响应".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(status: &str, message: &str) -> SignResp {
        SignResp::parse_lenient(&format!(
            r#"{{"status":"{}","message":"{}"}}"#,
            status, message
        ))
    }

    #[test]
    fn test_classify_success() {
        assert_eq!(
            classify_sign_response(&resp("success", "success")),
            Outcome::Succeeded
        );
    }

    #[test]
    fn test_classify_already_signed() {
        let outcome = classify_sign_response(&resp("fail", "alreadysign"));
        assert_eq!(outcome, Outcome::AlreadySigned);
        assert_eq!(outcome.reason(), Some("今日已签到~"));
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_classify_other_fail_carries_message() {
        assert_eq!(
            classify_sign_response(&resp("fail", "other")),
            Outcome::SignFailed("other".to_string())
        );
    }

    #[test]
    fn test_classify_unrecognized_is_explicit_failure() {
        // success/alreadysign 之外的组合不允许静默落空
        assert_eq!(
            classify_sign_response(&resp("success", "什么鬼")),
            Outcome::SignFailed("无法识别的签到响应".to_string())
        );
        assert_eq!(
            classify_sign_response(&SignResp::default()),
            Outcome::SignFailed("无法识别的签到响应".to_string())
        );
    }
}
