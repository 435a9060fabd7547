//! HTTP 客户端层

pub mod forum_client;

pub use forum_client::{ForumClient, LoginReply, SessionCookie};
