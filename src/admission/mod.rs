//! 接纳控制仿真
//!
//! 把 area、server、负载均衡、接纳策略与统计组装到事件循环上。

mod edge_world;
mod ensemble;
mod runner;

pub use edge_world::EdgeWorld;
pub use ensemble::{EnsembleRun, EnsembleSummary, run_ensemble};
pub use runner::{AdmissionSim, RunState};
