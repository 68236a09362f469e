//! 仿真运行器
//!
//! 状态机：Initializing → Running → Completed。完成后不可再次运行。

use tracing::info;

use super::edge_world::EdgeWorld;
use crate::edge::{Server, ServerId};
use crate::error::{ConfigError, SimError};
use crate::lb::LoadBalancer;
use crate::sim::{SimConfig, SimTime, Simulator};
use crate::stats::Statistics;
use crate::traffic::{Area, AreaId, TrafficProfile, derive_stream_seed};

/// 负载均衡随机流使用的派生流编号，与 area 的编号不重叠
const LB_STREAM: u64 = 1 << 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Initializing,
    Running,
    Completed,
}

#[derive(Debug)]
pub struct AdmissionSim {
    sim: Simulator,
    world: EdgeWorld,
    duration: SimTime,
    state: RunState,
}

impl AdmissionSim {
    /// 按配置构造所有 area、server、负载均衡与接纳策略
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let fc = &config.flow_classes;
        let seed = config.simulation.seed;

        let profile = TrafficProfile {
            arrival_rates: &fc.arrival_rates,
            service_rates: &fc.service_rates,
            bitrates: &fc.bitrates,
            arrival_kind: fc.arrival_distribution,
            service_kind: fc.service_distribution,
        };
        let areas = (0..config.areas.count)
            .map(|i| {
                let area_seed = seed.map(|s| derive_stream_seed(s, i as u64));
                Area::configure_traffic(AreaId(i), &profile, area_seed)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let servers = config
            .servers
            .access_bandwidth
            .iter()
            .zip(&fc.max_flows_per_server)
            .enumerate()
            .map(|(i, (&bw, limits))| Server::new(ServerId(i), bw, limits.clone()))
            .collect();

        let lb = LoadBalancer::new(
            config.load_balancer.strategy,
            seed.map(|s| derive_stream_seed(s, LB_STREAM)),
        );
        let policy = config.admission_policy.build();

        info!(
            areas = config.areas.count,
            classes = fc.count,
            servers = config.servers.count,
            strategy = ?config.load_balancer.strategy,
            policy = policy.name(),
            duration = config.simulation.duration,
            "仿真已初始化"
        );

        let world = EdgeWorld::new(areas, servers, lb, policy);
        Ok(Self::from_world(world, SimTime(config.simulation.duration)))
    }

    /// 使用预先构造好的组件（例如自定义采样器或选择器）
    pub fn from_world(world: EdgeWorld, duration: SimTime) -> Self {
        Self {
            sim: Simulator::default(),
            world,
            duration,
            state: RunState::Initializing,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn now(&self) -> SimTime {
        self.sim.now()
    }

    pub fn duration(&self) -> SimTime {
        self.duration
    }

    pub fn world(&self) -> &EdgeWorld {
        &self.world
    }

    pub fn servers(&self) -> &[Server] {
        self.world.servers()
    }

    pub fn statistics(&self) -> &Statistics {
        self.world.statistics()
    }

    pub fn into_statistics(self) -> Statistics {
        self.world.into_statistics()
    }

    /// 运行到事件耗尽或超过仿真时长
    pub fn run(&mut self) -> Result<&Statistics, SimError> {
        if self.state != RunState::Initializing {
            return Err(SimError::AlreadyCompleted);
        }
        self.state = RunState::Running;
        self.world
            .schedule_initial_arrivals(&mut self.sim, self.duration);

        let events = self.sim.run_until(self.duration, &mut self.world);
        // 超过截止时间的事件被丢弃，实例不可恢复
        self.sim.clear();
        self.state = RunState::Completed;

        let stats = self.world.statistics();
        info!(
            events,
            arrivals = stats.total_arrivals(),
            accepted = stats.total_accepted(),
            rejected = stats.total_rejected(),
            "运行结束"
        );
        Ok(stats)
    }
}
