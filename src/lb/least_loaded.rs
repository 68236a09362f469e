//! 最小利用率选择；利用率相同时取 id 最小者

use super::ServerSelector;
use crate::edge::{Server, ServerId};
use crate::traffic::ClassId;

#[derive(Debug, Default, Clone, Copy)]
pub struct LeastLoadedSelector;

impl ServerSelector for LeastLoadedSelector {
    fn select(&mut self, servers: &[Server], _class: ClassId) -> Option<ServerId> {
        servers
            .iter()
            .min_by(|a, b| {
                a.utilization()
                    .total_cmp(&b.utilization())
                    .then_with(|| a.id().cmp(&b.id()))
            })
            .map(Server::id)
    }
}
