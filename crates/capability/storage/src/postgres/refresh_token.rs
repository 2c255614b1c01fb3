//! Postgres Refresh Token 存储实现
//!
//! 所有 SQL 使用参数绑定。

use crate::error::StorageError;
use crate::models::RefreshTokenRecord;
use crate::traits::RefreshTokenStore;
use crate::validation::ensure_record;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

pub struct PgRefreshTokenStore {
    pub pool: PgPool,
}

impl PgRefreshTokenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 通过数据库 URL 建立连接池
    ///
    /// # 参数
    /// - `database_url`：Postgres 连接字符串
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = crate::connection::connect_pool(database_url).await?;
        Ok(Self { pool })
    }
}

fn record_from_row(row: PgRow) -> Result<RefreshTokenRecord, StorageError> {
    Ok(RefreshTokenRecord {
        identity: row.try_get("identity")?,
        token_value: row.try_get("token_value")?,
        expires_at_ms: row.try_get("expires_at_ms")?,
    })
}

#[async_trait::async_trait]
impl RefreshTokenStore for PgRefreshTokenStore {
    async fn find_by_identity(
        &self,
        identity: &str,
    ) -> Result<Option<RefreshTokenRecord>, StorageError> {
        let row = sqlx::query(
            "select identity, token_value, expires_at_ms \
             from refresh_tokens where identity = $1",
        )
        .bind(identity)
        .fetch_optional(&self.pool)
        .await?;
        row.map(record_from_row).transpose()
    }

    async fn find_by_token_value(
        &self,
        token_value: &str,
    ) -> Result<Option<RefreshTokenRecord>, StorageError> {
        let row = sqlx::query(
            "select identity, token_value, expires_at_ms \
             from refresh_tokens where token_value = $1",
        )
        .bind(token_value)
        .fetch_optional(&self.pool)
        .await?;
        row.map(record_from_row).transpose()
    }

    async fn save(&self, record: RefreshTokenRecord) -> Result<(), StorageError> {
        ensure_record(&record)?;
        sqlx::query(
            "insert into refresh_tokens (identity, token_value, expires_at_ms) values ($1,$2,$3)",
        )
        .bind(&record.identity)
        .bind(&record.token_value)
        .bind(record.expires_at_ms)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, record: &RefreshTokenRecord) -> Result<(), StorageError> {
        sqlx::query("delete from refresh_tokens where identity = $1 and token_value = $2")
            .bind(&record.identity)
            .bind(&record.token_value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
