//! 基线策略：server 有容量即接纳
//!
//! `utility_threshold > 0` 时，额外拒绝期望效用（码率 × 时长，即服务的数据量）
//! 低于阈值的 flow。默认阈值 0 等价于纯容量检查。

use super::AdmissionPolicy;
use crate::edge::{Flow, Server};

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleHeuristicPolicy {
    utility_threshold: f64,
}

impl SimpleHeuristicPolicy {
    pub fn new(utility_threshold: f64) -> Self {
        Self { utility_threshold }
    }

    pub fn expected_utility(flow: &Flow) -> f64 {
        flow.bitrate() * flow.duration()
    }
}

impl AdmissionPolicy for SimpleHeuristicPolicy {
    fn name(&self) -> &'static str {
        "simple_heuristic"
    }

    fn decide(&self, flow: &Flow, server: &Server) -> bool {
        if !server.has_capacity(flow) {
            return false;
        }
        if self.utility_threshold > 0.0 {
            return Self::expected_utility(flow) >= self.utility_threshold;
        }
        true
    }
}
