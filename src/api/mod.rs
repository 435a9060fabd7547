//! 论坛 API 模块
//!
//! 只放接口的请求/响应形状，不发请求；发请求在 `clients`。

pub mod forum;

pub use forum::{LoginResp, LoginRespSuccess, SignResp};
