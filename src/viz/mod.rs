//! 绘图数据（用于离线绘图）
//!
//! 只产出结构化 JSON：每个 server 的带宽时间序列与每个 class 的接纳/拒绝计数。
//! 不负责渲染图片。

mod types;

pub use types::{BandwidthPoint, BandwidthSeries, ClassOutcome, PlotData};
