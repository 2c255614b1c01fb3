//! 日志初始化与 token 生命周期计数。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 计数快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub tokens_issued: u64,
    pub tokens_replaced: u64,
    pub tokens_revoked: u64,
    pub validations_ok: u64,
    pub validations_invalid: u64,
    pub validations_expired: u64,
}

/// 进程级计数器。
pub struct TelemetryMetrics {
    tokens_issued: AtomicU64,
    tokens_replaced: AtomicU64,
    tokens_revoked: AtomicU64,
    validations_ok: AtomicU64,
    validations_invalid: AtomicU64,
    validations_expired: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            tokens_issued: AtomicU64::new(0),
            tokens_replaced: AtomicU64::new(0),
            tokens_revoked: AtomicU64::new(0),
            validations_ok: AtomicU64::new(0),
            validations_invalid: AtomicU64::new(0),
            validations_expired: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tokens_issued: self.tokens_issued.load(Ordering::Relaxed),
            tokens_replaced: self.tokens_replaced.load(Ordering::Relaxed),
            tokens_revoked: self.tokens_revoked.load(Ordering::Relaxed),
            validations_ok: self.validations_ok.load(Ordering::Relaxed),
            validations_invalid: self.validations_invalid.load(Ordering::Relaxed),
            validations_expired: self.validations_expired.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info，可由 RUST_LOG 覆盖）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 记录签发次数。
pub fn record_token_issued() {
    metrics().tokens_issued.fetch_add(1, Ordering::Relaxed);
}

/// 记录签发时替换旧记录的次数。
pub fn record_token_replaced() {
    metrics().tokens_replaced.fetch_add(1, Ordering::Relaxed);
}

/// 记录主动撤销次数。
pub fn record_token_revoked() {
    metrics().tokens_revoked.fetch_add(1, Ordering::Relaxed);
}

pub fn record_validation_ok() {
    metrics().validations_ok.fetch_add(1, Ordering::Relaxed);
}

/// 记录未找到 token 的校验次数。
pub fn record_validation_invalid() {
    metrics().validations_invalid.fetch_add(1, Ordering::Relaxed);
}

/// 记录因过期被删除的校验次数。
pub fn record_validation_expired() {
    metrics().validations_expired.fetch_add(1, Ordering::Relaxed);
}
