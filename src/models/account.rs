//! 账号信息与 base64 解码
//!
//! 配置文件里的每个账号都是一段 base64：标准 base64 编码的 UTF-8 JSON 对象
//! `{"username": "...", "password": "...", "questionId": "...", "answer": "..."}`。

use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;

/// 配置文件中的一段账号 base64 文本
#[derive(Debug, Clone, Deserialize)]
pub struct Base64Text(pub String);

impl Base64Text {
    /// 解码 base64 文本
    ///
    /// 刻意宽松：解码失败返回空字节，不向上抛错。
    /// 格式错误的条目最终以空账号去登录、在远端失败，批量继续跑下一个。
    pub fn decode(&self) -> Vec<u8> {
        general_purpose::STANDARD.decode(&self.0).unwrap_or_default()
    }

    /// 解码并解析为账号信息
    ///
    /// JSON 解析失败同样宽松处理，返回零值账号。
    pub fn to_account_info(&self) -> AccountInfo {
        serde_json::from_slice(&self.decode()).unwrap_or_default()
    }
}

/// 单个账号的登录凭据
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AccountInfo {
    pub username: String,
    pub password: String,
    #[serde(rename = "questionId")]
    pub question_id: String,
    pub answer: String,
}

impl AccountInfo {
    /// 四个字段全空，说明这条 base64 多半是坏的
    pub fn is_blank(&self) -> bool {
        self.username.is_empty()
            && self.password.is_empty()
            && self.question_id.is_empty()
            && self.answer.is_empty()
    }
}
