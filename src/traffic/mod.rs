//! 流量生成模块
//!
//! 包含随机采样器与作为流量源的 area。

mod area;
mod sampler;

pub use area::{Area, TrafficProfile};
pub use sampler::{DistributionKind, Sampler, SamplerSeed, derive_stream_seed};

/// Area 标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaId(pub usize);

/// 流量类别下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub usize);
