//! 认证能力：Refresh Token 签发、持久化与校验。

mod jwt;
mod refresh;

use groupware_storage::StorageError;

pub use jwt::{JwtManager, REFRESH_CATEGORY, RefreshClaims};
pub use refresh::RefreshTokenService;

/// 认证相关错误。
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token invalid")]
    InvalidToken,
    #[error("token expired")]
    ExpiredToken,
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// 对外暴露的稳定错误码。
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::ExpiredToken => "EXPIRED_TOKEN",
            AuthError::Storage(_) => "STORAGE_ERROR",
            AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// token 签名能力，便于替换实现与测试。
pub trait TokenSigner: Send + Sync {
    /// 为 identity/role 签发有效期为 `ttl_ms` 的 token。
    fn sign(&self, identity: &str, role: &str, ttl_ms: u64) -> Result<String, AuthError>;
}
