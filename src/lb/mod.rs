//! 负载均衡
//!
//! 为新 flow 选择候选 server。选择策略不检查逐 class 容量，
//! 容量由接纳策略负责。

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::edge::{Server, ServerId};
use crate::traffic::ClassId;

mod least_loaded;
mod random;
mod round_robin;

pub use least_loaded::LeastLoadedSelector;
pub use random::RandomSelector;
pub use round_robin::RoundRobinSelector;

/// Server 选择策略抽象
pub trait ServerSelector: std::fmt::Debug + Send {
    /// 从 `servers` 中选择一个候选；列表为空时返回 `None`
    fn select(&mut self, servers: &[Server], class: ClassId) -> Option<ServerId>;
}

/// 配置中的策略名
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LbStrategy {
    #[default]
    Random,
    RoundRobin,
    LeastLoaded,
}

impl std::str::FromStr for LbStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(LbStrategy::Random),
            "round_robin" => Ok(LbStrategy::RoundRobin),
            "least_loaded" => Ok(LbStrategy::LeastLoaded),
            other => Err(format!(
                "unknown strategy `{other}` (expected random, round_robin or least_loaded)"
            )),
        }
    }
}

#[derive(Debug)]
pub struct LoadBalancer {
    strategy: LbStrategy,
    selector: Box<dyn ServerSelector>,
}

impl LoadBalancer {
    /// `seed` 只影响 random 策略；`None` 时从熵源初始化
    pub fn new(strategy: LbStrategy, seed: Option<u64>) -> Self {
        let selector: Box<dyn ServerSelector> = match strategy {
            LbStrategy::Random => {
                let rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Box::new(RandomSelector::new(rng))
            }
            LbStrategy::RoundRobin => Box::new(RoundRobinSelector::default()),
            LbStrategy::LeastLoaded => Box::new(LeastLoadedSelector),
        };
        Self { strategy, selector }
    }

    /// 使用自定义选择器
    pub fn with_selector(strategy: LbStrategy, selector: Box<dyn ServerSelector>) -> Self {
        Self { strategy, selector }
    }

    pub fn strategy(&self) -> LbStrategy {
        self.strategy
    }

    pub fn select_server(&mut self, servers: &[Server], class: ClassId) -> Option<ServerId> {
        if servers.is_empty() {
            return None;
        }
        self.selector.select(servers, class)
    }
}
