//! 数据模型
//!
//! - RefreshTokenRecord：已签发的 refresh token 持久化记录

/// Refresh Token 记录。
///
/// 同一 identity 任意时刻最多存在一条记录；记录只做整体替换（删除后插入），不原地修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenRecord {
    /// 签发对象（如账户邮箱）。
    pub identity: String,
    /// 签名后的 token 原文，全局唯一。
    pub token_value: String,
    /// 过期时刻（毫秒级 Unix 时间戳），从该时刻起 token 失效。
    pub expires_at_ms: i64,
}

impl RefreshTokenRecord {
    pub fn new(
        identity: impl Into<String>,
        token_value: impl Into<String>,
        expires_at_ms: i64,
    ) -> Self {
        Self {
            identity: identity.into(),
            token_value: token_value.into(),
            expires_at_ms,
        }
    }

    /// 到达或超过过期时刻即视为过期。
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expires_at_ms <= now_ms
    }
}
