//! 领域基础抽象：所有能力模块共享的时钟。

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock, now_epoch_ms};
