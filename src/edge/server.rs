//! 边缘 server
//!
//! 带宽与逐 class 并发数受限；活跃 flow 按 id 索引，接纳与释放均为 O(1)。

use std::collections::HashMap;

use super::{Flow, FlowId, ServerId};
use crate::traffic::ClassId;
use tracing::trace;

#[derive(Debug)]
pub struct Server {
    id: ServerId,
    total_bandwidth: f64,
    max_flows: Vec<u32>,
    active: HashMap<FlowId, Flow>,
    bandwidth_usage: f64,
    flows_per_class: Vec<u32>,
}

impl Server {
    pub fn new(id: ServerId, total_bandwidth: f64, max_flows_per_class: Vec<u32>) -> Self {
        let classes = max_flows_per_class.len();
        Self {
            id,
            total_bandwidth,
            max_flows: max_flows_per_class,
            active: HashMap::new(),
            bandwidth_usage: 0.0,
            flows_per_class: vec![0; classes],
        }
    }

    pub fn id(&self) -> ServerId {
        self.id
    }

    pub fn total_bandwidth(&self) -> f64 {
        self.total_bandwidth
    }

    pub fn bandwidth_usage(&self) -> f64 {
        self.bandwidth_usage
    }

    pub fn num_classes(&self) -> usize {
        self.max_flows.len()
    }

    /// class 的并发上限；越界时为 `None`
    pub fn max_flows(&self, class: ClassId) -> Option<u32> {
        self.max_flows.get(class.0).copied()
    }

    /// class 当前的活跃 flow 数；越界时为 0
    pub fn flows_in_class(&self, class: ClassId) -> u32 {
        self.flows_per_class.get(class.0).copied().unwrap_or(0)
    }

    pub fn active_flows(&self) -> usize {
        self.active.len()
    }

    pub fn contains(&self, flow: FlowId) -> bool {
        self.active.contains_key(&flow)
    }

    /// 接纳该 flow 是否不超过总带宽与该 class 的并发上限。纯判断，无副作用。
    pub fn has_capacity(&self, flow: &Flow) -> bool {
        if self.bandwidth_usage + flow.bitrate() > self.total_bandwidth {
            return false;
        }
        match self.max_flows.get(flow.class().0) {
            Some(&limit) => self.flows_per_class[flow.class().0] < limit,
            None => false,
        }
    }

    /// 登记一条活跃 flow。调用方须已确认 `has_capacity`，这里不再检查。
    pub fn admit_flow(&mut self, mut flow: Flow) {
        let class = flow.class().0;
        assert!(
            class < self.max_flows.len(),
            "class {} out of range for server {} ({} classes)",
            class,
            self.id.0,
            self.max_flows.len()
        );
        flow.assign_server(self.id);
        self.bandwidth_usage += flow.bitrate();
        self.flows_per_class[class] += 1;
        trace!(server = self.id.0, flow = flow.id().0, usage = self.bandwidth_usage, "接纳 flow");
        self.active.insert(flow.id(), flow);
    }

    /// 释放 flow；不在活跃集合中时为 no-op。
    pub fn release_flow(&mut self, flow: FlowId) -> Option<Flow> {
        let released = self.active.remove(&flow)?;
        self.bandwidth_usage -= released.bitrate();
        // 浮点误差修正
        if self.bandwidth_usage < 0.0 || self.active.is_empty() {
            self.bandwidth_usage = 0.0;
        }
        let count = &mut self.flows_per_class[released.class().0];
        *count = count.saturating_sub(1);
        trace!(server = self.id.0, flow = flow.0, usage = self.bandwidth_usage, "释放 flow");
        Some(released)
    }

    /// 带宽利用率，容量为 0 时返回 0
    pub fn utilization(&self) -> f64 {
        if self.total_bandwidth == 0.0 {
            return 0.0;
        }
        self.bandwidth_usage / self.total_bandwidth
    }
}
