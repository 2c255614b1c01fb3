//! Refresh Token 服务：签发替换与校验。

use crate::{AuthError, JwtManager, TokenSigner};
use domain::{Clock, SystemClock};
use groupware_config::AppConfig;
use groupware_storage::{RefreshTokenRecord, RefreshTokenStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Refresh Token 服务（基于 RefreshTokenStore + TokenSigner）。
///
/// 同一 identity 最多保留一条记录：签发新 token 前先删除旧记录。
/// 删除与插入之间没有事务包裹。
pub struct RefreshTokenService {
    store: Arc<dyn RefreshTokenStore>,
    signer: Arc<dyn TokenSigner>,
    clock: Arc<dyn Clock>,
    refresh_ttl_ms: u64,
}

impl RefreshTokenService {
    /// 创建服务实例（系统时钟）。
    pub fn new(
        store: Arc<dyn RefreshTokenStore>,
        signer: Arc<dyn TokenSigner>,
        refresh_ttl_ms: u64,
    ) -> Self {
        Self::with_clock(store, signer, Arc::new(SystemClock), refresh_ttl_ms)
    }

    pub fn with_clock(
        store: Arc<dyn RefreshTokenStore>,
        signer: Arc<dyn TokenSigner>,
        clock: Arc<dyn Clock>,
        refresh_ttl_ms: u64,
    ) -> Self {
        Self {
            store,
            signer,
            clock,
            refresh_ttl_ms,
        }
    }

    /// 按运行配置装配：HS256 签名 + 配置中的有效期。
    pub fn from_config(config: &AppConfig, store: Arc<dyn RefreshTokenStore>) -> Self {
        let jwt = Arc::new(JwtManager::new(config.jwt_secret.clone()));
        Self::new(store, jwt, config.refresh_ttl_ms())
    }

    pub fn refresh_ttl_ms(&self) -> u64 {
        self.refresh_ttl_ms
    }

    /// 签发新的 refresh token 并保存，替换该 identity 已有的记录。
    ///
    /// 返回签名后的 token 原文。
    pub async fn create_and_save(&self, identity: &str, role: &str) -> Result<String, AuthError> {
        let token_value = self.signer.sign(identity, role, self.refresh_ttl_ms)?;

        if let Some(existing) = self.store.find_by_identity(identity).await? {
            self.store.delete(&existing).await?;
            groupware_telemetry::record_token_replaced();
            debug!(identity, "previous refresh token removed");
        }

        let ttl_ms = i64::try_from(self.refresh_ttl_ms).unwrap_or(i64::MAX);
        let expires_at_ms = self.clock.now_epoch_ms().saturating_add(ttl_ms);
        let record = RefreshTokenRecord::new(identity, token_value.clone(), expires_at_ms);
        self.store.save(record).await?;

        groupware_telemetry::record_token_issued();
        info!(identity, expires_at_ms, "refresh token issued");
        Ok(token_value)
    }

    /// 校验 refresh token。
    ///
    /// - 不存在：`InvalidToken`
    /// - 已过期：删除记录后返回 `ExpiredToken`
    /// - 有效：原样返回记录，无副作用
    pub async fn validate(&self, token_value: &str) -> Result<RefreshTokenRecord, AuthError> {
        let Some(record) = self.store.find_by_token_value(token_value).await? else {
            groupware_telemetry::record_validation_invalid();
            warn!("refresh token not found");
            return Err(AuthError::InvalidToken);
        };

        if record.is_expired(self.clock.now_epoch_ms()) {
            self.store.delete(&record).await?;
            groupware_telemetry::record_validation_expired();
            warn!(identity = %record.identity, "refresh token expired and removed");
            return Err(AuthError::ExpiredToken);
        }

        groupware_telemetry::record_validation_ok();
        debug!(identity = %record.identity, "refresh token validated");
        Ok(record)
    }

    /// 撤销 identity 当前的 refresh token（登出）。
    ///
    /// 返回是否删除了记录；不存在时不视为错误。
    pub async fn revoke(&self, identity: &str) -> Result<bool, AuthError> {
        let Some(existing) = self.store.find_by_identity(identity).await? else {
            return Ok(false);
        };
        self.store.delete(&existing).await?;
        groupware_telemetry::record_token_revoked();
        info!(identity, "refresh token revoked");
        Ok(true)
    }
}
