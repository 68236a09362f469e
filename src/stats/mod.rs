//! 统计信息
//!
//! 只追加的计数器与 server 状态快照；汇总按需计算。

mod export;
mod statistics;

pub use export::{write_snapshots_csv, write_summary_json};
pub use statistics::{ClassSummary, ServerSnapshot, Statistics, Summary};
