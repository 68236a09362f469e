use crate::edge::{FlowId, ServerId};
use crate::sim::{Event, SimTime, Simulator, World};
use crate::traffic::{AreaId, ClassId};

#[derive(Default)]
struct LogWorld {
    log: Vec<(f64, Event)>,
    ticks: usize,
    /// 处理到达事件时在同一时刻追加一个离开事件
    echo_departure: bool,
}

impl World for LogWorld {
    fn handle(&mut self, ev: Event, sim: &mut Simulator) {
        self.log.push((sim.now().as_secs(), ev));
        if self.echo_departure && ev.is_arrival() {
            sim.schedule(
                sim.now(),
                Event::Departure {
                    flow: FlowId(99),
                    server: ServerId(0),
                },
            );
        }
    }

    fn on_tick(&mut self, _sim: &mut Simulator) {
        self.ticks = self.ticks.saturating_add(1);
    }
}

fn arrival(area: usize) -> Event {
    Event::Arrival {
        area: AreaId(area),
        class: ClassId(0),
    }
}

#[test]
fn scheduled_events_order_by_time_then_seq() {
    let mut sim = Simulator::default();
    sim.schedule(SimTime(10.0), arrival(1));
    sim.schedule(SimTime(5.0), arrival(2));
    sim.schedule(SimTime(10.0), arrival(3));

    let mut world = LogWorld::default();
    let n = sim.run_until(SimTime(100.0), &mut world);

    let order: Vec<Event> = world.log.iter().map(|(_, ev)| *ev).collect();
    assert_eq!(order, vec![arrival(2), arrival(1), arrival(3)]);
    assert_eq!(n, 3);
    assert_eq!(world.ticks, 3);
}

#[test]
fn event_scheduled_at_same_time_inside_event_runs_after_current_event() {
    let mut sim = Simulator::default();
    sim.schedule(SimTime::ZERO, arrival(0));
    sim.schedule(SimTime::ZERO, arrival(1));

    let mut world = LogWorld {
        echo_departure: true,
        ..LogWorld::default()
    };
    sim.run_until(SimTime::ZERO, &mut world);

    let kinds: Vec<bool> = world.log.iter().map(|(_, ev)| ev.is_arrival()).collect();
    assert_eq!(kinds, vec![true, true, false, false]);
    assert_eq!(sim.now(), SimTime::ZERO);
}

#[test]
fn run_until_skips_events_after_until_and_advances_time() {
    let mut sim = Simulator::default();
    sim.schedule(SimTime::ZERO, arrival(1));
    sim.schedule(SimTime(10.0), arrival(2));

    let mut world = LogWorld::default();
    sim.run_until(SimTime(5.0), &mut world);

    assert_eq!(world.log.len(), 1);
    assert_eq!(sim.pending(), 1);
    assert_eq!(sim.now(), SimTime(5.0));

    sim.clear();
    assert_eq!(sim.pending(), 0);
}

#[test]
fn run_until_executes_events_scheduled_exactly_at_until() {
    let mut sim = Simulator::default();
    sim.schedule(SimTime(5.0), arrival(1));

    let mut world = LogWorld::default();
    sim.run_until(SimTime(5.0), &mut world);

    assert_eq!(world.log, vec![(5.0, arrival(1))]);
    assert_eq!(world.ticks, 1);
}

#[test]
fn run_until_advances_time_even_if_there_are_no_events() {
    let mut sim = Simulator::default();
    let mut world = LogWorld::default();

    sim.run_until(SimTime(7.0), &mut world);
    assert_eq!(sim.now(), SimTime(7.0));
    assert_eq!(world.ticks, 0);
}
