//! 仿真核心模块
//!
//! 此模块包含事件驱动仿真的核心组件，如仿真时间、事件、世界、仿真器和配置。

// 子模块声明
mod config;
mod event;
mod scheduled_event;
mod simulator;
mod time;
mod world;

// 重新导出公共接口
pub use config::{
    AreasConfig, FlowClassesConfig, LoadBalancerConfig, ServersConfig, SimConfig,
    SimulationConfig,
};
pub use event::Event;
pub use scheduled_event::ScheduledEvent;
pub use simulator::Simulator;
pub use time::SimTime;
pub use world::World;
