//! 仿真器
//!
//! 定义事件驱动仿真器，维护当前时间与事件队列。

use super::event::Event;
use super::scheduled_event::ScheduledEvent;
use super::time::SimTime;
use super::world::World;
use std::collections::BinaryHeap;
use tracing::{debug, info, trace};

/// 事件驱动仿真器：维护当前时间与事件队列。
#[derive(Debug, Default)]
pub struct Simulator {
    now: SimTime,
    next_seq: u64,
    q: BinaryHeap<ScheduledEvent>,
}

impl Simulator {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 队列中尚未执行的事件数
    pub fn pending(&self) -> usize {
        self.q.len()
    }

    /// 调度事件在指定时间执行
    #[tracing::instrument(level = "trace", skip(self), fields(schedule_at = ?at))]
    pub fn schedule(&mut self, at: SimTime, ev: Event) {
        let seq = self.next_seq;
        trace!(now = ?self.now, seq, "调度事件");

        self.next_seq = self.next_seq.wrapping_add(1);
        self.q.push(ScheduledEvent { at, seq, ev });
    }

    /// 丢弃所有未执行的事件
    pub fn clear(&mut self) {
        if !self.q.is_empty() {
            debug!(discarded = self.q.len(), "丢弃剩余事件");
        }
        self.q.clear();
    }

    /// 运行直到事件队列为空或到达 `until`。
    ///
    /// `at == until` 的事件会被执行，`at > until` 的事件留在队列中。
    /// 返回执行的事件数。
    #[tracing::instrument(skip(self, world))]
    pub fn run_until(&mut self, until: SimTime, world: &mut dyn World) -> u64 {
        info!("▶️  开始运行仿真");
        debug!(now = ?self.now, queue_size = self.q.len(), "初始状态");

        let mut event_count = 0u64;
        while let Some(top) = self.q.peek() {
            if top.at > until {
                debug!(next_at = ?top.at, "超过截止时间，停止");
                break;
            }
            let Some(item) = self.q.pop() else { break };
            event_count += 1;
            self.now = item.at;

            trace!(
                event_num = event_count,
                now = ?self.now,
                seq = item.seq,
                remaining_queue = self.q.len(),
                "执行事件"
            );

            world.handle(item.ev, self);
            world.on_tick(self);
        }
        self.now = self.now.max(until);

        info!(
            total_events = event_count,
            final_time = ?self.now,
            "✅ 仿真完成"
        );
        event_count
    }
}
