//! 应用运行配置加载。

use std::env;

/// refresh token 默认有效期：7 天。
pub const DEFAULT_REFRESH_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_refresh_ttl_seconds: u64,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("GW_DATABASE_URL")
            .map_err(|_| ConfigError::Missing("GW_DATABASE_URL".to_string()))?;
        let jwt_secret = read_required_non_empty("GW_JWT_SECRET")?;
        let jwt_refresh_ttl_seconds =
            read_u64_with_default("GW_JWT_REFRESH_TTL_SECONDS", DEFAULT_REFRESH_TTL_SECONDS)?;
        // 毫秒值需能放入 i64（与存储的 expires_at_ms 同类型）
        let max_seconds = i64::MAX as u64 / 1000;
        if jwt_refresh_ttl_seconds == 0 || jwt_refresh_ttl_seconds > max_seconds {
            return Err(ConfigError::Invalid(
                "GW_JWT_REFRESH_TTL_SECONDS".to_string(),
                jwt_refresh_ttl_seconds.to_string(),
            ));
        }

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_refresh_ttl_seconds,
        })
    }

    /// refresh token 有效期（毫秒）。
    pub fn refresh_ttl_ms(&self) -> u64 {
        self.jwt_refresh_ttl_seconds.saturating_mul(1000)
    }
}

fn read_required_non_empty(key: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key.to_string())),
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}
