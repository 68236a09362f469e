//! Flow 记录

use super::{FlowId, ServerId};
use crate::sim::SimTime;
use crate::traffic::{AreaId, ClassId};

/// 一条应用 flow。除 `server` 外创建后不可变；`server` 在接纳时设置一次。
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    id: FlowId,
    class: ClassId,
    source_area: AreaId,
    bitrate: f64,
    duration: f64,
    arrival_time: SimTime,
    server: Option<ServerId>,
}

impl Flow {
    pub fn new(
        id: FlowId,
        class: ClassId,
        source_area: AreaId,
        bitrate: f64,
        duration: f64,
        arrival_time: SimTime,
    ) -> Self {
        Self {
            id,
            class,
            source_area,
            bitrate,
            duration,
            arrival_time,
            server: None,
        }
    }

    pub fn id(&self) -> FlowId {
        self.id
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn source_area(&self) -> AreaId {
        self.source_area
    }

    pub fn bitrate(&self) -> f64 {
        self.bitrate
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn arrival_time(&self) -> SimTime {
        self.arrival_time
    }

    /// 接纳该 flow 的 server；未接纳时为 `None`
    pub fn server(&self) -> Option<ServerId> {
        self.server
    }

    pub(crate) fn assign_server(&mut self, server: ServerId) {
        assert!(
            self.server.is_none(),
            "flow {:?} already assigned to {:?}",
            self.id,
            self.server
        );
        self.server = Some(server);
    }

    /// 服务结束时刻
    pub fn departure_time(&self) -> SimTime {
        self.arrival_time.after(self.duration)
    }
}
