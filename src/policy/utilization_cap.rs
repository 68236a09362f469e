//! 利用率上限策略
//!
//! 在容量检查之外，接纳后利用率超过 `max_utilization` 时拒绝，为突发流量留余量。

use super::AdmissionPolicy;
use crate::edge::{Flow, Server};

#[derive(Debug, Clone, Copy)]
pub struct UtilizationCapPolicy {
    max_utilization: f64,
}

impl UtilizationCapPolicy {
    pub fn new(max_utilization: f64) -> Self {
        Self { max_utilization }
    }
}

impl AdmissionPolicy for UtilizationCapPolicy {
    fn name(&self) -> &'static str {
        "utilization_cap"
    }

    fn decide(&self, flow: &Flow, server: &Server) -> bool {
        if !server.has_capacity(flow) {
            return false;
        }
        if server.total_bandwidth() == 0.0 {
            return true;
        }
        let after = (server.bandwidth_usage() + flow.bitrate()) / server.total_bandwidth();
        after <= self.max_utilization
    }
}
