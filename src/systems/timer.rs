use std::time::Duration;

use crate::config::MAX_CATCH_UP_TICKS;

// 固定间隔节拍器：累计帧时间，返回本帧到期的节拍数
#[derive(Clone, Debug)]
pub struct TickTimer {
    interval: Duration,
    elapsed: f32,
}

impl TickTimer {
    // 间隔至少 1 毫秒
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: 0.0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // 推进 dt 秒；卡顿后最多补跑 MAX_CATCH_UP_TICKS 次，其余积压丢弃
    pub fn advance(&mut self, dt: f32) -> u32 {
        let interval = self.interval.as_secs_f32();
        self.elapsed += dt.max(0.0);
        let mut due = 0;
        while self.elapsed >= interval {
            self.elapsed -= interval;
            due += 1;
            if due == MAX_CATCH_UP_TICKS {
                self.elapsed %= interval;
                break;
            }
        }
        due
    }
}
