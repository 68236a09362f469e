//! 均匀随机选择

use rand::Rng;
use rand::rngs::StdRng;

use super::ServerSelector;
use crate::edge::{Server, ServerId};
use crate::traffic::ClassId;

#[derive(Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl ServerSelector for RandomSelector {
    fn select(&mut self, servers: &[Server], _class: ClassId) -> Option<ServerId> {
        if servers.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..servers.len());
        Some(servers[idx].id())
    }
}
