//! 轮询选择
//!
//! 游标在每次选择后前进一位并回绕。

use super::ServerSelector;
use crate::edge::{Server, ServerId};
use crate::traffic::ClassId;

#[derive(Debug, Default)]
pub struct RoundRobinSelector {
    next: usize,
}

impl RoundRobinSelector {
    /// 下一次将被选中的下标（回绕前）
    pub fn cursor(&self) -> usize {
        self.next
    }
}

impl ServerSelector for RoundRobinSelector {
    fn select(&mut self, servers: &[Server], _class: ClassId) -> Option<ServerId> {
        if servers.is_empty() {
            return None;
        }
        let idx = self.next % servers.len();
        self.next = (idx + 1) % servers.len();
        Some(servers[idx].id())
    }
}
