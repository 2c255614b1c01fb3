//! # PostgreSQL 存储实现模块
//!
//! 生产环境使用的 refresh token 存储。
//!
//! ## 数据库模式要求
//!
//! ```sql
//! create table refresh_tokens (
//!     identity      text primary key,
//!     token_value   text not null unique,
//!     expires_at_ms bigint not null
//! );
//! ```
//!
//! - `identity` 主键保证同一签发对象最多一条记录
//! - `token_value` 唯一索引支撑按 token 查找
//!
//! ## 错误处理
//!
//! 所有操作返回 `Result<T, StorageError>`，`sqlx::Error` 自动转换；
//! 唯一约束冲突（SQLSTATE 23505）映射为 `StorageErrorKind::Conflict`。

pub mod refresh_token;

pub use refresh_token::*;
