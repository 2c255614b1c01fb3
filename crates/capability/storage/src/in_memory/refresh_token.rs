//! Refresh Token 内存存储实现
//!
//! 以 identity 为主键，约束与 PostgreSQL 表一致：
//! - identity 唯一
//! - token_value 唯一

use crate::error::StorageError;
use crate::models::RefreshTokenRecord;
use crate::traits::RefreshTokenStore;
use crate::validation::ensure_record;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Refresh Token 内存存储
///
/// 使用 RwLock + HashMap 提供线程安全的内存存储。
#[derive(Default)]
pub struct InMemoryRefreshTokenStore {
    tokens: RwLock<HashMap<String, RefreshTokenRecord>>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前记录数（锁中毒时仍读取内部数据）。
    pub fn len(&self) -> usize {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn find_by_identity(
        &self,
        identity: &str,
    ) -> Result<Option<RefreshTokenRecord>, StorageError> {
        let map = self
            .tokens
            .read()
            .map_err(|_| StorageError::new("refresh token store poisoned"))?;
        Ok(map.get(identity).cloned())
    }

    async fn find_by_token_value(
        &self,
        token_value: &str,
    ) -> Result<Option<RefreshTokenRecord>, StorageError> {
        let map = self
            .tokens
            .read()
            .map_err(|_| StorageError::new("refresh token store poisoned"))?;
        Ok(map
            .values()
            .find(|record| record.token_value == token_value)
            .cloned())
    }

    async fn save(&self, record: RefreshTokenRecord) -> Result<(), StorageError> {
        ensure_record(&record)?;
        let mut map = self
            .tokens
            .write()
            .map_err(|_| StorageError::new("refresh token store poisoned"))?;
        if map.contains_key(&record.identity) {
            return Err(StorageError::conflict(format!(
                "refresh token already exists for identity {}",
                record.identity
            )));
        }
        if map
            .values()
            .any(|existing| existing.token_value == record.token_value)
        {
            return Err(StorageError::conflict("duplicate token_value"));
        }
        map.insert(record.identity.clone(), record);
        Ok(())
    }

    async fn delete(&self, record: &RefreshTokenRecord) -> Result<(), StorageError> {
        let mut map = self
            .tokens
            .write()
            .map_err(|_| StorageError::new("refresh token store poisoned"))?;
        let matches = map
            .get(&record.identity)
            .is_some_and(|stored| stored.token_value == record.token_value);
        if matches {
            map.remove(&record.identity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn len_survives_poisoned_lock() {
        let store = Arc::new(InMemoryRefreshTokenStore::new());
        store.tokens.write().unwrap().insert(
            "a@example.com".to_string(),
            RefreshTokenRecord::new("a@example.com", "token-1", 10_000),
        );

        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.tokens.write().unwrap();
            panic!("poison while holding write lock");
        })
        .join();

        assert!(store.tokens.is_poisoned());
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
