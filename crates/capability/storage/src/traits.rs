//! 存储接口 Trait 定义
//!
//! - RefreshTokenStore：refresh token 存储
//!
//! 设计原则：
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发（`Arc<dyn RefreshTokenStore>`）

use crate::error::StorageError;
use crate::models::RefreshTokenRecord;
use async_trait::async_trait;

/// Refresh Token 存储接口
///
/// 按 identity 与 token_value 两个维度查找。
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// 根据 identity 查找当前记录
    async fn find_by_identity(
        &self,
        identity: &str,
    ) -> Result<Option<RefreshTokenRecord>, StorageError>;

    /// 根据 token 原文查找记录
    async fn find_by_token_value(
        &self,
        token_value: &str,
    ) -> Result<Option<RefreshTokenRecord>, StorageError>;

    /// 插入新记录
    async fn save(&self, record: RefreshTokenRecord) -> Result<(), StorageError>;

    /// 删除记录
    async fn delete(&self, record: &RefreshTokenRecord) -> Result<(), StorageError>;
}
