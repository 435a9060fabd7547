//! 论坛 HTTP 客户端
//!
//! 整次运行只构建一个 `reqwest::Client`（代理、5 秒超时），所有账号共用。
//! 刻意不开 cookie jar：会话 cookie 从登录响应头里显式取出，
//! 由 workflow 层手工带进签到请求，保证账号之间互不串话。

use crate::error::{AppError, AppResult};
use crate::models::AccountInfo;
use reqwest::header::{COOKIE, SET_COOKIE};
use std::time::Duration;
use tracing::{debug, info};

/// 论坛默认地址
const DEFAULT_BASE_URL: &str = "https://www.t00ls.com";
/// 单个请求的超时时间
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// 登录响应头里捕获的一个会话 cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
}

/// 登录请求的原始结果：响应 body + 响应设置的全部 cookie
#[derive(Debug)]
pub struct LoginReply {
    pub body: String,
    pub cookies: Vec<SessionCookie>,
}

/// 论坛 API 客户端
#[derive(Debug)]
pub struct ForumClient {
    http: reqwest::Client,
    base_url: String,
}

impl ForumClient {
    /// 创建客户端
    ///
    /// `proxy` 为空串表示直连；非空但解析失败是致命错误，
    /// 整次运行在发出任何请求前终止。
    pub fn new(proxy: &str) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder().timeout(REQUEST_TIMEOUT);

        if proxy.is_empty() {
            info!("未发现代理配置, 将正常运行");
        } else {
            let proxy_cfg = reqwest::Proxy::all(proxy).map_err(|e| AppError::ProxyConfig {
                url: proxy.to_string(),
                source: e,
            })?;
            info!("配置代理: {}", proxy);
            builder = builder.proxy(proxy_cfg);
        }

        // builder 在这里只可能因 TLS 后端初始化失败而报错，归为代理/传输配置问题
        let http = builder.build().map_err(|e| AppError::ProxyConfig {
            url: proxy.to_string(),
            source: e,
        })?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// 替换论坛地址，测试时指向本地 mock 服务
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 登录请求
    ///
    /// 首次接触，不带任何 cookie；返回原始 body 和响应设置的全部 cookie。
    pub async fn login(&self, account: &AccountInfo) -> Result<LoginReply, reqwest::Error> {
        let url = format!("{}/login.json", self.base_url);
        let form = [
            ("action", "login"),
            ("username", account.username.as_str()),
            ("password", account.password.as_str()),
            ("questionid", account.question_id.as_str()),
            ("answer", account.answer.as_str()),
        ];

        // 非 2xx 一律按传输错误处理，不去解析 body
        let resp = self.http.post(&url).form(&form).send().await?.error_for_status()?;
        let cookies = collect_cookies(resp.headers());
        let body = resp.text().await?;

        debug!("登录响应: {}", body);

        Ok(LoginReply { body, cookies })
    }

    /// 签到请求
    ///
    /// 带上登录步骤捕获的 cookie 和 formhash。
    pub async fn sign_in(
        &self,
        formhash: &str,
        cookies: &[SessionCookie],
    ) -> Result<String, reqwest::Error> {
        let url = format!("{}/ajax-sign.json", self.base_url);
        let form = [("formhash", formhash), ("signsubmit", "true")];

        let mut req = self.http.post(&url).form(&form);
        if !cookies.is_empty() {
            req = req.header(COOKIE, cookie_header(cookies));
        }

        let resp = req.send().await?.error_for_status()?;
        let body = resp.text().await?;

        debug!("签到响应: {}", body);

        Ok(body)
    }
}

/// 从响应头收集全部 Set-Cookie，只保留 name=value 部分
fn collect_cookies(headers: &reqwest::header::HeaderMap) -> Vec<SessionCookie> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(parse_set_cookie)
        .collect()
}

/// 解析一条 Set-Cookie 头，丢弃 Path/Expires 等属性
fn parse_set_cookie(raw: &str) -> Option<SessionCookie> {
    let pair = raw.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(SessionCookie {
        name: name.to_string(),
        value: value.trim().to_string(),
    })
}

/// 拼接 Cookie 请求头
fn cookie_header(cookies: &[SessionCookie]) -> String {
    cookies
        .iter()
        .map(|c| format!("{}={}", c.name, c.value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_cookie_with_attributes() {
        let cookie = parse_set_cookie("t00ls_auth=abc123; Path=/; HttpOnly").unwrap();
        assert_eq!(cookie.name, "t00ls_auth");
        assert_eq!(cookie.value, "abc123");
    }

    #[test]
    fn test_parse_set_cookie_bare_pair() {
        let cookie = parse_set_cookie("sid=1").unwrap();
        assert_eq!(cookie.name, "sid");
        assert_eq!(cookie.value, "1");
    }

    #[test]
    fn test_parse_set_cookie_invalid() {
        assert!(parse_set_cookie("没有等号").is_none());
        assert!(parse_set_cookie("=裸值").is_none());
    }

    #[test]
    fn test_cookie_header_joins_all() {
        let cookies = vec![
            SessionCookie { name: "a".into(), value: "1".into() },
            SessionCookie { name: "b".into(), value: "2".into() },
        ];
        assert_eq!(cookie_header(&cookies), "a=1; b=2");
    }

    #[test]
    fn test_bad_proxy_is_fatal() {
        let err = ForumClient::new("这不是一个URL").unwrap_err();
        assert!(matches!(err, crate::error::AppError::ProxyConfig { .. }));
    }
}
