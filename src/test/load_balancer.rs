use super::flow;
use crate::edge::{Server, ServerId};
use crate::lb::{LbStrategy, LoadBalancer, RoundRobinSelector, ServerSelector};
use crate::traffic::ClassId;

fn servers(n: usize) -> Vec<Server> {
    (0..n).map(|i| Server::new(ServerId(i), 10.0, vec![5])).collect()
}

#[test]
fn empty_server_set_yields_none_for_every_strategy() {
    for strategy in [LbStrategy::Random, LbStrategy::RoundRobin, LbStrategy::LeastLoaded] {
        let mut lb = LoadBalancer::new(strategy, Some(1));
        assert_eq!(lb.select_server(&[], ClassId(0)), None, "{strategy:?}");
    }
}

#[test]
fn round_robin_rotates_and_wraps() {
    let pool = servers(3);
    let mut lb = LoadBalancer::new(LbStrategy::RoundRobin, None);
    let picks: Vec<usize> = (0..7)
        .map(|_| lb.select_server(&pool, ClassId(0)).expect("server").0)
        .collect();
    assert_eq!(picks, vec![0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn round_robin_cursor_is_persisted_state() {
    let pool = servers(2);
    let mut rr = RoundRobinSelector::default();
    assert_eq!(rr.cursor(), 0);
    rr.select(&pool, ClassId(0));
    assert_eq!(rr.cursor(), 1);
    rr.select(&pool, ClassId(0));
    assert_eq!(rr.cursor(), 0);
}

#[test]
fn least_loaded_picks_min_utilization_with_lowest_id_on_ties() {
    let mut pool = servers(3);
    let mut lb = LoadBalancer::new(LbStrategy::LeastLoaded, None);
    assert_eq!(lb.select_server(&pool, ClassId(0)), Some(ServerId(0)));

    pool[0].admit_flow(flow(1, 0, 5.0));
    pool[1].admit_flow(flow(2, 0, 2.0));
    pool[2].admit_flow(flow(3, 0, 2.0));
    assert_eq!(lb.select_server(&pool, ClassId(0)), Some(ServerId(1)));
}

#[test]
fn random_is_reproducible_with_seed_and_covers_all_servers() {
    let pool = servers(4);
    let mut a = LoadBalancer::new(LbStrategy::Random, Some(5));
    let mut b = LoadBalancer::new(LbStrategy::Random, Some(5));
    let picks_a: Vec<ServerId> = (0..200)
        .filter_map(|_| a.select_server(&pool, ClassId(0)))
        .collect();
    let picks_b: Vec<ServerId> = (0..200)
        .filter_map(|_| b.select_server(&pool, ClassId(0)))
        .collect();
    assert_eq!(picks_a, picks_b);
    for i in 0..4 {
        assert!(picks_a.contains(&ServerId(i)));
    }
}

#[test]
fn random_ignores_capacity() {
    let mut pool = servers(1);
    pool[0].admit_flow(flow(1, 0, 10.0));
    let mut lb = LoadBalancer::new(LbStrategy::Random, Some(0));
    assert_eq!(lb.select_server(&pool, ClassId(0)), Some(ServerId(0)));
}

#[test]
fn strategy_parses_from_config_names() {
    assert_eq!("round_robin".parse::<LbStrategy>(), Ok(LbStrategy::RoundRobin));
    assert_eq!("least_loaded".parse::<LbStrategy>(), Ok(LbStrategy::LeastLoaded));
    assert!("weighted".parse::<LbStrategy>().is_err());
    let s: LbStrategy = serde_json::from_str("\"random\"").expect("parse strategy");
    assert_eq!(s, LbStrategy::Random);
}

#[derive(Debug)]
struct AlwaysLast;

impl ServerSelector for AlwaysLast {
    fn select(&mut self, servers: &[Server], _class: ClassId) -> Option<ServerId> {
        servers.last().map(Server::id)
    }
}

#[test]
fn custom_selector_plugs_into_load_balancer() {
    let pool = servers(3);
    let mut lb = LoadBalancer::with_selector(LbStrategy::Random, Box::new(AlwaysLast));
    assert_eq!(lb.select_server(&pool, ClassId(0)), Some(ServerId(2)));
}
