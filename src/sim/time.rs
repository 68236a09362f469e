//! 仿真时间类型
//!
//! 定义连续仿真时间（秒）及其全序比较。

use std::cmp::Ordering;

/// 仿真时间（秒，连续值）。与墙钟时间无关。
#[derive(Debug, Clone, Copy, Default)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    pub fn from_secs(s: f64) -> SimTime {
        SimTime(s)
    }

    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// 当前时间加上一个时间间隔
    pub fn after(self, dt: f64) -> SimTime {
        SimTime(self.0 + dt)
    }
}

// 采样值均为有限非负数；用 total_cmp 得到堆需要的全序。
impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
