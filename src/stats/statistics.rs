//! 仿真统计

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edge::ServerId;
use crate::sim::SimTime;
use crate::traffic::ClassId;

/// 某一时刻某个 server 的状态快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSnapshot {
    pub time: f64,
    pub server_id: usize,
    pub active_flows: usize,
    pub bandwidth_usage: f64,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    total_arrivals: u64,
    total_accepted: u64,
    total_rejected: u64,
    arrivals_by_class: Vec<u64>,
    accepted_by_class: Vec<u64>,
    rejected_by_class: Vec<u64>,
    accepted_by_server: Vec<u64>,
    server_history: Vec<ServerSnapshot>,
}

impl Statistics {
    pub fn new(num_classes: usize, num_servers: usize) -> Self {
        Self {
            arrivals_by_class: vec![0; num_classes],
            accepted_by_class: vec![0; num_classes],
            rejected_by_class: vec![0; num_classes],
            accepted_by_server: vec![0; num_servers],
            ..Self::default()
        }
    }

    pub fn record_arrival(&mut self, class: ClassId) {
        self.total_arrivals += 1;
        self.arrivals_by_class[class.0] += 1;
    }

    pub fn record_admission(&mut self, class: ClassId, server: ServerId) {
        self.total_accepted += 1;
        self.accepted_by_class[class.0] += 1;
        self.accepted_by_server[server.0] += 1;
    }

    pub fn record_rejection(&mut self, class: ClassId) {
        self.total_rejected += 1;
        self.rejected_by_class[class.0] += 1;
    }

    pub fn record_server_state(
        &mut self,
        time: SimTime,
        server: ServerId,
        active_flows: usize,
        bandwidth_usage: f64,
    ) {
        self.server_history.push(ServerSnapshot {
            time: time.as_secs(),
            server_id: server.0,
            active_flows,
            bandwidth_usage,
        });
    }

    pub fn total_arrivals(&self) -> u64 {
        self.total_arrivals
    }

    pub fn total_accepted(&self) -> u64 {
        self.total_accepted
    }

    pub fn total_rejected(&self) -> u64 {
        self.total_rejected
    }

    pub fn num_classes(&self) -> usize {
        self.arrivals_by_class.len()
    }

    pub fn arrivals_in_class(&self, class: ClassId) -> u64 {
        self.arrivals_by_class[class.0]
    }

    pub fn accepted_in_class(&self, class: ClassId) -> u64 {
        self.accepted_by_class[class.0]
    }

    pub fn rejected_in_class(&self, class: ClassId) -> u64 {
        self.rejected_by_class[class.0]
    }

    pub fn accepted_on_server(&self, server: ServerId) -> u64 {
        self.accepted_by_server[server.0]
    }

    /// 按插入顺序（即仿真时间单调）的快照
    pub fn server_history(&self) -> &[ServerSnapshot] {
        &self.server_history
    }

    /// 从当前计数器计算汇总，不缓存
    pub fn summary(&self) -> Summary {
        let classes = (0..self.num_classes())
            .filter(|&c| self.arrivals_by_class[c] > 0)
            .map(|c| ClassSummary {
                class: c,
                arrivals: self.arrivals_by_class[c],
                accepted: self.accepted_by_class[c],
                rejected: self.rejected_by_class[c],
                acceptance_pct: percent(self.accepted_by_class[c], self.arrivals_by_class[c]),
            })
            .collect();
        Summary {
            total_arrivals: self.total_arrivals,
            total_accepted: self.total_accepted,
            total_rejected: self.total_rejected,
            acceptance_pct: (self.total_arrivals > 0)
                .then(|| percent(self.total_accepted, self.total_arrivals)),
            classes,
        }
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub class: usize,
    pub arrivals: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub acceptance_pct: f64,
}

/// 结果汇总（只读视图）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_arrivals: u64,
    pub total_accepted: u64,
    pub total_rejected: u64,
    /// 没有到达时为 `None`
    pub acceptance_pct: Option<f64>,
    /// 只包含有到达的 class
    pub classes: Vec<ClassSummary>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Simulation Results ===")?;
        writeln!(f, "Total Arrivals: {}", self.total_arrivals)?;
        writeln!(f, "Total Accepted: {}", self.total_accepted)?;
        writeln!(f, "Total Rejected: {}", self.total_rejected)?;
        if let Some(pct) = self.acceptance_pct {
            writeln!(f, "Global Acceptance Rate: {pct:.2}%")?;
        }
        writeln!(f)?;
        writeln!(f, "By Class:")?;
        for c in &self.classes {
            writeln!(
                f,
                "  Class {}: {}/{} ({:.1}%)",
                c.class, c.accepted, c.arrivals, c.acceptance_pct
            )?;
        }
        Ok(())
    }
}
