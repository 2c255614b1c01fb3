//! 时钟抽象
//!
//! 过期判断统一通过注入的 `Clock` 读取当前时间，避免业务代码直接读取系统时钟：
//! - SystemClock：生产环境使用
//! - FixedClock：测试使用，可手动推进

use std::sync::atomic::{AtomicI64, Ordering};

/// 当前时间来源（毫秒级 Unix 时间戳）。
pub trait Clock: Send + Sync {
    fn now_epoch_ms(&self) -> i64;
}

/// 系统时钟。
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        now_epoch_ms()
    }
}

/// 固定时钟（仅用于测试或回放）。
///
/// 内部使用原子变量，`advance_ms` 可在共享引用下推进时间。
#[derive(Debug, Default)]
pub struct FixedClock {
    now_ms: AtomicI64,
}

impl FixedClock {
    pub fn new(now_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(now_ms),
        }
    }

    /// 将时间设置为指定时刻。
    pub fn set_ms(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    /// 向前推进指定毫秒数。
    pub fn advance_ms(&self, delta_ms: i64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

/// 当前时间戳（毫秒）。
pub fn now_epoch_ms() -> i64 {
    let now = std::time::SystemTime::now();
    match now.duration_since(std::time::UNIX_EPOCH) {
        Ok(duration) => duration.as_millis() as i64,
        Err(_) => 0,
    }
}
