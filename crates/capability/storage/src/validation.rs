//! 验证辅助函数
//!
//! 写入前统一校验记录字段：
//! - ensure_record：identity 与 token_value 非空

use crate::error::StorageError;
use crate::models::RefreshTokenRecord;

/// 验证记录可写入
pub fn ensure_record(record: &RefreshTokenRecord) -> Result<(), StorageError> {
    if record.identity.trim().is_empty() {
        return Err(StorageError::invalid_record("identity required"));
    }
    if record.token_value.is_empty() {
        return Err(StorageError::invalid_record("token_value required"));
    }
    Ok(())
}
