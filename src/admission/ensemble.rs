//! 多 seed 并行重复实验
//!
//! 每次重复拥有独立的 area/server/统计实例，互不共享。

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::runner::AdmissionSim;
use crate::error::SimError;
use crate::sim::SimConfig;
use crate::stats::Summary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsembleRun {
    pub seed: u64,
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsembleSummary {
    pub runs: Vec<EnsembleRun>,
}

impl EnsembleSummary {
    /// 有到达的重复中接纳率的平均值
    pub fn mean_acceptance_pct(&self) -> Option<f64> {
        let pcts: Vec<f64> = self
            .runs
            .iter()
            .filter_map(|r| r.summary.acceptance_pct)
            .collect();
        if pcts.is_empty() {
            return None;
        }
        Some(pcts.iter().sum::<f64>() / pcts.len() as f64)
    }
}

/// 对每个 seed 运行一次，结果顺序与 `seeds` 一致
pub fn run_ensemble(config: &SimConfig, seeds: &[u64]) -> Result<EnsembleSummary, SimError> {
    info!(replications = seeds.len(), "开始并行重复实验");
    let runs = seeds
        .par_iter()
        .map(|&seed| -> Result<EnsembleRun, SimError> {
            let mut cfg = config.clone();
            cfg.simulation.seed = Some(seed);
            let mut sim = AdmissionSim::new(&cfg)?;
            let summary = sim.run()?.summary();
            Ok(EnsembleRun { seed, summary })
        })
        .collect::<Result<Vec<_>, SimError>>()?;
    Ok(EnsembleSummary { runs })
}
