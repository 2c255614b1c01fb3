use crate::{AuthError, TokenSigner};
use domain::{Clock, SystemClock};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// refresh token 的 category claim。
pub const REFRESH_CATEGORY: &str = "refresh";

/// refresh token 的 claims。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,
    pub role: String,
    pub category: String,
    pub iat: u64,
    pub exp: u64,
    pub jti: String,
}

/// JWT 签名与校验（HS256）。
///
/// 过期判断使用注入的时钟，与存储记录的 `expires_at_ms` 同源。
/// `exp` 按秒向上取整，JWT 不会早于存储记录过期。
pub struct JwtManager {
    secret: Vec<u8>,
    clock: Arc<dyn Clock>,
}

impl JwtManager {
    /// 创建 JWT 管理器（系统时钟）。
    pub fn new(secret: String) -> Self {
        Self::with_clock(secret, Arc::new(SystemClock))
    }

    pub fn with_clock(secret: String, clock: Arc<dyn Clock>) -> Self {
        Self {
            secret: secret.into_bytes(),
            clock,
        }
    }

    /// 解析并校验 refresh token：签名、category、exp。
    pub fn decode(&self, token: &str) -> Result<RefreshClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp 由下方按注入时钟判断
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);
        let decoded = jsonwebtoken::decode::<RefreshClaims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .map_err(map_jwt_error)?;
        let claims = decoded.claims;
        if claims.category != REFRESH_CATEGORY {
            return Err(AuthError::InvalidToken);
        }
        let now_ms = self.clock.now_epoch_ms();
        let exp_ms = i64::try_from(claims.exp)
            .unwrap_or(i64::MAX)
            .saturating_mul(1000);
        if exp_ms <= now_ms {
            return Err(AuthError::ExpiredToken);
        }
        Ok(claims)
    }

    fn encode(&self, identity: &str, role: &str, ttl_ms: u64) -> Result<String, AuthError> {
        let now_ms = self.clock.now_epoch_ms().max(0) as u64;
        let claims = RefreshClaims {
            sub: identity.to_string(),
            role: role.to_string(),
            category: REFRESH_CATEGORY.to_string(),
            iat: now_ms / 1000,
            exp: now_ms.saturating_add(ttl_ms).div_ceil(1000),
            jti: Uuid::new_v4().to_string(),
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|err| AuthError::Internal(err.to_string()))
    }
}

impl TokenSigner for JwtManager {
    fn sign(&self, identity: &str, role: &str, ttl_ms: u64) -> Result<String, AuthError> {
        self.encode(identity, role, ttl_ms)
    }
}

/// 将 jwt 库错误映射为业务错误。
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::InvalidToken,
    }
}
