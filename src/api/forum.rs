//! 论坛接口的响应结构
//!
//! 登录和签到接口都返回很小的 JSON，核心是 `status` / `message` 两个字段。
//! 所有结构带 `#[serde(default)]`：远端偶尔会返回残缺甚至不成形的 body，
//! 解析时缺什么补什么零值，分类逻辑统一在 workflow 层兜底。

use serde::Deserialize;

/// 登录响应的通用部分
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginResp {
    pub status: String,
    pub message: String,
}

/// 登录成功时额外携带的会话数据
///
/// 注意远端在 `status != "success"` 时也可能带上部分成功形状的数据，
/// 所以这个结构总是和 [`LoginResp`] 一起无条件解析。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRespSuccess {
    pub status: String,
    pub message: String,
    /// 签到请求必须带的防伪 token
    pub formhash: String,
    pub cookie: LoginCookie,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginCookie {
    pub auth: String,
}

/// 签到响应
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignResp {
    pub status: String,
    pub message: String,
}

impl LoginResp {
    /// 宽松解析：body 不是合法 JSON 时退化为零值
    pub fn parse_lenient(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

impl LoginRespSuccess {
    pub fn parse_lenient(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

impl SignResp {
    pub fn parse_lenient(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_login() {
        let body = r#"{"status":"success","message":"ok","formhash":"F","cookie":{"auth":"A"}}"#;
        let resp = LoginRespSuccess::parse_lenient(body);
        assert_eq!(resp.formhash, "F");
        assert_eq!(resp.cookie.auth, "A");
    }

    #[test]
    fn test_parse_garbage_body() {
        let resp = LoginResp::parse_lenient("<html>502 Bad Gateway</html>");
        assert!(resp.status.is_empty());
        assert!(resp.message.is_empty());
    }

    #[test]
    fn test_parse_partial_success_shape() {
        // status 非 success 但带了 formhash，也要能取到
        let body = r#"{"status":"fail","message":"x","formhash":"F2"}"#;
        let resp = LoginRespSuccess::parse_lenient(body);
        assert_eq!(resp.status, "fail");
        assert_eq!(resp.formhash, "F2");
        assert!(resp.cookie.auth.is_empty());
    }
}
