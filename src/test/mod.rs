mod area;
mod load_balancer;
mod policy;
mod simulator;
mod viz_plot;

use crate::edge::{Flow, FlowId};
use crate::sim::SimTime;
use crate::traffic::{AreaId, ClassId};

pub(crate) fn flow(id: u64, class: usize, bitrate: f64) -> Flow {
    Flow::new(FlowId(id), ClassId(class), AreaId(0), bitrate, 10.0, SimTime::ZERO)
}
