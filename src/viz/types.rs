use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stats::Statistics;
use crate::traffic::ClassId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandwidthPoint {
    pub t: f64,
    pub bandwidth_usage: f64,
}

/// 单个 server 的带宽曲线（按时间升序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandwidthSeries {
    pub server_id: usize,
    pub points: Vec<BandwidthPoint>,
}

/// 分组柱状图中的一组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassOutcome {
    pub class: usize,
    pub accepted: u64,
    pub rejected: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub bandwidth: Vec<BandwidthSeries>,
    pub classes: Vec<ClassOutcome>,
}

impl PlotData {
    pub fn from_statistics(stats: &Statistics) -> Self {
        let mut by_server: BTreeMap<usize, Vec<BandwidthPoint>> = BTreeMap::new();
        for snap in stats.server_history() {
            by_server
                .entry(snap.server_id)
                .or_default()
                .push(BandwidthPoint {
                    t: snap.time,
                    bandwidth_usage: snap.bandwidth_usage,
                });
        }
        let bandwidth = by_server
            .into_iter()
            .map(|(server_id, mut points)| {
                // 快照本身按时间单调追加；稳定排序保留同一时刻的先后
                points.sort_by(|a, b| a.t.total_cmp(&b.t));
                BandwidthSeries { server_id, points }
            })
            .collect();

        let classes = (0..stats.num_classes())
            .map(ClassId)
            .filter(|&c| stats.arrivals_in_class(c) > 0)
            .map(|c| ClassOutcome {
                class: c.0,
                accepted: stats.accepted_in_class(c),
                rejected: stats.rejected_in_class(c),
            })
            .collect();

        Self { bandwidth, classes }
    }
}
