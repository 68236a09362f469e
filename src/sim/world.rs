//! 世界 trait
//!
//! 定义仿真世界接口。

use super::event::Event;
use super::simulator::Simulator;

/// 仿真世界：由业务层实现（例如 area/server/统计等）。
pub trait World {
    /// 处理一个已出队的事件；可以通过 `sim` 继续调度新事件。
    fn handle(&mut self, ev: Event, sim: &mut Simulator);

    /// 每个事件处理完成后调用
    fn on_tick(&mut self, _sim: &mut Simulator) {}
}
