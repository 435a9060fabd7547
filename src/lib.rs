//! # t00ls 自动签到
//!
//! 一个用于 t00ls 论坛批量自动签到的 Rust 程序
//!
//! ## 架构设计
//!
//! 自底向上分为四层：
//!
//! ### ① 模型层（Models / Api）
//! - `models/` - 账号凭据与 base64 宽松解码
//! - `api/` - 登录/签到接口的响应形状（宽松 JSON 解析）
//!
//! ### ② 客户端层（Clients）
//! - `clients/forum_client` - 整次运行唯一的 reqwest 客户端
//! - 代理、5 秒超时、手工 cookie 捕获与回带
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/account_ctx` - 单账号日志上下文
//! - `workflow/sign_flow` - 登录 → 签到状态机与结果分类
//!
//! ### ④ 编排层（App）
//! - `app` - 顺序遍历账号、收集失败记录、给出批量结果
//!
//! 账号之间严格串行，会话状态不跨账号共享，一次运行之外不留任何状态。

pub mod api;
pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::ForumClient;
pub use config::{load_config_file, ConfigInfo};
pub use error::{AppError, AppResult};
pub use models::{AccountInfo, Base64Text};
pub use workflow::{AccountCtx, Outcome, SignFlow};
