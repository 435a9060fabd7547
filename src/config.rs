//! 程序配置
//!
//! 配置文件为 JSON，形如：
//!
//! ```json
//! {
//!     "Proxy": "http://127.0.0.1:7890",
//!     "accountBase64Text": ["eyJ1c2VybmFtZSI6Li4ufQ==", "..."]
//! }
//! ```
//!
//! `Proxy` 为空串或缺省表示不走代理；未知字段忽略，缺失字段取零值。

use crate::error::{AppError, AppResult};
use crate::models::Base64Text;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// 配置文件内容
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigInfo {
    /// HTTP/HTTPS 代理地址，空串表示直连
    #[serde(rename = "Proxy")]
    pub proxy: String,
    /// 账号列表，每项是 base64 编码的账号 JSON
    #[serde(rename = "accountBase64Text")]
    pub account_base64_text: Vec<Base64Text>,
}

/// 读取并解析配置文件
pub async fn load_config_file(path: &Path) -> AppResult<ConfigInfo> {
    info!("开始读取配置文件: {}", path.display());

    let content = fs::read_to_string(path).await.map_err(|e| AppError::ConfigRead {
        path: path.display().to_string(),
        source: e,
    })?;

    let config: ConfigInfo =
        serde_json::from_str(&content).map_err(|e| AppError::ConfigParse {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(config)
}

/// 未指定配置文件路径时，默认取可执行文件同目录下的 config.json
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{"Proxy":"http://127.0.0.1:7890","accountBase64Text":["YWJj","ZGVm"]}"#;
        let config: ConfigInfo = serde_json::from_str(json).unwrap();
        assert_eq!(config.proxy, "http://127.0.0.1:7890");
        assert_eq!(config.account_base64_text.len(), 2);
    }

    #[test]
    fn test_parse_without_proxy() {
        // 缺省 Proxy 表示直连
        let json = r#"{"accountBase64Text":[]}"#;
        let config: ConfigInfo = serde_json::from_str(json).unwrap();
        assert!(config.proxy.is_empty());
        assert!(config.account_base64_text.is_empty());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let json = r#"{"Proxy":"","accountBase64Text":[],"comment":"随便写点什么"}"#;
        let config: ConfigInfo = serde_json::from_str(json).unwrap();
        assert!(config.account_base64_text.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_config_file(Path::new("/不存在/config.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }
}
