//! 边缘服务器模块
//!
//! 定义 flow 与容量受限的 server。

mod flow;
mod server;

pub use flow::Flow;
pub use server::Server;

/// Flow 标识符（全局单调递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowId(pub u64);

/// Server 标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServerId(pub usize);
