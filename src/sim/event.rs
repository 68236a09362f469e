//! 仿真事件
//!
//! 事件是带标签的值类型：到达事件携带 (area, class)，离开事件携带 (flow, server)。

use crate::edge::{FlowId, ServerId};
use crate::traffic::{AreaId, ClassId};

/// 事件种类及其负载
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// 某个 area/class 的下一条 flow 到达
    Arrival { area: AreaId, class: ClassId },
    /// 已接纳的 flow 服务结束，从 server 上释放
    Departure { flow: FlowId, server: ServerId },
}

impl Event {
    pub fn is_arrival(&self) -> bool {
        matches!(self, Event::Arrival { .. })
    }
}
