//! 账号处理上下文
//!
//! 封装"我正在处理第几个账号、用户名是什么"这一信息，只用于日志显示。

use std::fmt::Display;

/// 账号处理上下文
#[derive(Debug, Clone)]
pub struct AccountCtx {
    /// 用户名（格式错误的条目可能为空）
    pub username: String,

    /// 账号在配置中的序号（从1开始，仅用于日志显示）
    pub index: usize,
}

impl AccountCtx {
    pub fn new(username: impl Into<String>, index: usize) -> Self {
        Self {
            username: username.into(),
            index,
        }
    }

    /// 日志里的展示名，空用户名兜底显示序号
    pub fn display_name(&self) -> String {
        if self.username.is_empty() {
            format!("<账号 {}>", self.index)
        } else {
            self.username.clone()
        }
    }
}

impl Display for AccountCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[账号 {}/{}]", self.index, self.display_name())
    }
}
