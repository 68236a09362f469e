use super::flow;
use crate::edge::{Server, ServerId};
use crate::policy::{AdmissionPolicy, PolicyConfig, SimpleHeuristicPolicy, UtilizationCapPolicy};

#[test]
fn simple_heuristic_is_a_capacity_gate() {
    let policy = SimpleHeuristicPolicy::default();
    let mut s = Server::new(ServerId(0), 4.0, vec![1]);
    assert!(policy.decide(&flow(1, 0, 3.0), &s));
    assert!(!policy.decide(&flow(2, 0, 5.0), &s));

    s.admit_flow(flow(1, 0, 1.0));
    // class 0 已满
    assert!(!policy.decide(&flow(3, 0, 1.0), &s));
    // decide 不修改 server
    assert_eq!(s.active_flows(), 1);
}

#[test]
fn simple_heuristic_threshold_rejects_low_utility_flows() {
    let policy = SimpleHeuristicPolicy::new(25.0);
    let s = Server::new(ServerId(0), 10.0, vec![5]);
    // flow() 的时长为 10
    assert!(!policy.decide(&flow(1, 0, 2.0), &s));
    assert!(policy.decide(&flow(2, 0, 3.0), &s));
}

#[test]
fn utilization_cap_rejects_above_cap() {
    let policy = UtilizationCapPolicy::new(0.5);
    let mut s = Server::new(ServerId(0), 10.0, vec![5]);
    assert!(policy.decide(&flow(1, 0, 5.0), &s));
    assert!(!policy.decide(&flow(2, 0, 6.0), &s));
    s.admit_flow(flow(1, 0, 4.0));
    assert!(!policy.decide(&flow(3, 0, 2.0), &s));
}

#[test]
fn policy_config_parses_tagged_type() {
    let cfg: PolicyConfig =
        serde_json::from_str(r#"{ "type": "simple_heuristic" }"#).expect("parse policy");
    assert_eq!(cfg, PolicyConfig::default());
    assert_eq!(cfg.build().name(), "simple_heuristic");

    let cfg: PolicyConfig =
        serde_json::from_str(r#"{ "type": "utilization_cap", "max_utilization": 0.8 }"#)
            .expect("parse policy");
    assert_eq!(cfg.build().name(), "utilization_cap");

    assert!(serde_json::from_str::<PolicyConfig>(r#"{ "type": "oracle" }"#).is_err());
}
