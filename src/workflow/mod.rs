pub mod account_ctx;
pub mod sign_flow;

pub use account_ctx::AccountCtx;
pub use sign_flow::{Outcome, SignFlow};
