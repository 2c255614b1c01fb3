//! 内存存储实现模块
//!
//! 仅用于本地演示和测试。
//!
//! 包含以下实现：
//! - RefreshTokenStore: InMemoryRefreshTokenStore

pub mod refresh_token;

pub use refresh_token::*;
