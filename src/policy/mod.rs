//! 接纳策略
//!
//! 对 (flow, server) 做最终的接纳/拒绝决定。`decide` 只读 server 状态。

use serde::{Deserialize, Serialize};

use crate::edge::{Flow, Server};

mod simple_heuristic;
mod utilization_cap;

pub use simple_heuristic::SimpleHeuristicPolicy;
pub use utilization_cap::UtilizationCapPolicy;

/// 接纳策略抽象
pub trait AdmissionPolicy: std::fmt::Debug + Send {
    fn name(&self) -> &'static str;

    /// 返回 true 表示接纳
    fn decide(&self, flow: &Flow, server: &Server) -> bool;
}

/// 配置中的策略段：`{ "type": "simple_heuristic", ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PolicyConfig {
    SimpleHeuristic {
        #[serde(default)]
        utility_threshold: f64,
    },
    UtilizationCap {
        max_utilization: f64,
    },
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig::SimpleHeuristic {
            utility_threshold: 0.0,
        }
    }
}

impl PolicyConfig {
    pub fn build(&self) -> Box<dyn AdmissionPolicy> {
        match *self {
            PolicyConfig::SimpleHeuristic { utility_threshold } => {
                Box::new(SimpleHeuristicPolicy::new(utility_threshold))
            }
            PolicyConfig::UtilizationCap { max_utilization } => {
                Box::new(UtilizationCapPolicy::new(max_utilization))
            }
        }
    }
}
