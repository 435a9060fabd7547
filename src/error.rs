//! 应用程序错误类型
//!
//! 只包含会让整次运行失败的"致命"错误：配置、代理、以及批量结果。
//! 单个账号的登录/签到失败不在这里，它们走 [`crate::workflow::Outcome`]，
//! 只记日志、不向上抛。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置文件读取失败（文件不存在、无权限等）
    #[error("配置文件读取错误 ({path}): {source}, 请检查配置文件后再次运行")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件不是合法的 JSON
    #[error("配置文件格式错误 ({path}): {source}, 请检查配置文件后再次运行")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// 代理 URL 无法解析，整次运行在发出任何请求前终止
    #[error("代理配置错误 ({url}): {source}, 请检查配置文件后再次运行")]
    ProxyConfig {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// 批量签到结束后存在至少一个失败账号
    ///
    /// 具体每个账号的失败原因只写进日志，不在这里重新汇总。
    #[error("存在 {count} 个错误, 请查看日志")]
    BatchHadFailures { count: usize },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
