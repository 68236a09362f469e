//! 接纳控制世界
//!
//! 处理到达与离开事件：到达时自调度下一次到达，选 server，询问策略，
//! 修改 server 状态并调度离开；离开时释放 flow。

use tracing::{debug, trace};

use crate::edge::{Flow, FlowId, Server, ServerId};
use crate::lb::LoadBalancer;
use crate::policy::AdmissionPolicy;
use crate::sim::{Event, SimTime, Simulator, World};
use crate::stats::Statistics;
use crate::traffic::{Area, AreaId, ClassId};

const BANDWIDTH_EPS: f64 = 1e-9;

#[derive(Debug)]
pub struct EdgeWorld {
    pub(crate) areas: Vec<Area>,
    pub(crate) servers: Vec<Server>,
    pub(crate) lb: LoadBalancer,
    pub(crate) policy: Box<dyn AdmissionPolicy>,
    pub(crate) stats: Statistics,
    next_flow_id: u64,
}

impl EdgeWorld {
    /// Server 的下标必须等于其 id
    pub fn new(
        areas: Vec<Area>,
        servers: Vec<Server>,
        lb: LoadBalancer,
        policy: Box<dyn AdmissionPolicy>,
    ) -> Self {
        for (i, s) in servers.iter().enumerate() {
            assert_eq!(s.id(), ServerId(i), "servers must be indexed by id");
        }
        let num_classes = areas.iter().map(Area::num_classes).max().unwrap_or(0);
        let stats = Statistics::new(num_classes, servers.len());
        Self {
            areas,
            servers,
            lb,
            policy,
            stats,
            next_flow_id: 0,
        }
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub(crate) fn into_statistics(self) -> Statistics {
        self.stats
    }

    /// 为每个 (area, class) 调度首次到达；只调度落在 `until` 之内的。
    pub(crate) fn schedule_initial_arrivals(&mut self, sim: &mut Simulator, until: SimTime) {
        for area in &mut self.areas {
            for j in 0..area.num_classes() {
                let class = ClassId(j);
                let t = SimTime(area.generate_inter_arrival(class));
                if t <= until {
                    sim.schedule(
                        t,
                        Event::Arrival {
                            area: area.id(),
                            class,
                        },
                    );
                }
            }
        }
        debug!(initial = sim.pending(), "首次到达已调度");
    }

    fn on_arrival(&mut self, area_id: AreaId, class: ClassId, sim: &mut Simulator) {
        let now = sim.now();
        self.stats.record_arrival(class);

        let area = &mut self.areas[area_id.0];
        let duration = area.generate_duration(class);
        let bitrate = area.bitrate(class);
        let flow = Flow::new(
            FlowId(self.next_flow_id),
            class,
            area_id,
            bitrate,
            duration,
            now,
        );
        self.next_flow_id += 1;

        let next = now.after(area.generate_inter_arrival(class));
        sim.schedule(
            next,
            Event::Arrival {
                area: area_id,
                class,
            },
        );

        let candidate = self.lb.select_server(&self.servers, class);
        let Some(server_id) = candidate else {
            trace!(flow = flow.id().0, "没有候选 server，拒绝");
            self.stats.record_rejection(class);
            return;
        };
        let server = &mut self.servers[server_id.0];
        if !self.policy.decide(&flow, server) {
            trace!(flow = flow.id().0, server = server_id.0, "策略拒绝");
            self.stats.record_rejection(class);
            return;
        }

        let flow_id = flow.id();
        let depart_at = flow.departure_time();
        server.admit_flow(flow);
        self.stats.record_admission(class, server_id);
        self.stats.record_server_state(
            now,
            server_id,
            server.active_flows(),
            server.bandwidth_usage(),
        );
        sim.schedule(
            depart_at,
            Event::Departure {
                flow: flow_id,
                server: server_id,
            },
        );
    }

    fn on_departure(&mut self, flow: FlowId, server_id: ServerId, sim: &mut Simulator) {
        let server = &mut self.servers[server_id.0];
        if server.release_flow(flow).is_none() {
            trace!(flow = flow.0, server = server_id.0, "flow 不在活跃集合中，忽略");
        }
        self.stats.record_server_state(
            sim.now(),
            server_id,
            server.active_flows(),
            server.bandwidth_usage(),
        );
    }
}

impl World for EdgeWorld {
    fn handle(&mut self, ev: Event, sim: &mut Simulator) {
        match ev {
            Event::Arrival { area, class } => self.on_arrival(area, class, sim),
            Event::Departure { flow, server } => self.on_departure(flow, server, sim),
        }
    }

    fn on_tick(&mut self, _sim: &mut Simulator) {
        debug_assert_eq!(
            self.stats.total_accepted() + self.stats.total_rejected(),
            self.stats.total_arrivals(),
            "accepted + rejected must equal arrivals"
        );
        for s in &self.servers {
            debug_assert!(s.bandwidth_usage() >= 0.0);
            debug_assert!(s.bandwidth_usage() <= s.total_bandwidth() + BANDWIDTH_EPS);
            for c in 0..s.num_classes() {
                let class = ClassId(c);
                debug_assert!(s.flows_in_class(class) <= s.max_flows(class).unwrap_or(0));
            }
        }
    }
}
