//! 数据模型

pub mod account;

pub use account::{AccountInfo, Base64Text};
