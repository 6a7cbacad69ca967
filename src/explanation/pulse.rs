//! 단계 전환 시 재생되는 깜박임(불투명도) 애니메이션.
//!
//! 프레임 보간이 아니라 고정 시각표(0, +500, +1000, +1500, +2000 ms)로 불투명도를 바꾼다.
//! 시계는 외부에서 주입하며(`Duration`), 새 시퀀스를 시작하면 이전 핸들과 그 남은 틱은
//! 취소된다.

use std::time::Duration;

/// 밝은 상태 불투명도
pub const PULSE_HIGH: f64 = 1.0;
/// 어두운 상태 불투명도
pub const PULSE_LOW: f64 = 0.3;

/// 시작 이후 예약되는 틱(경과 시간, 불투명도).
pub const PULSE_TICKS: [(Duration, f64); 4] = [
    (Duration::from_millis(500), PULSE_LOW),
    (Duration::from_millis(1000), PULSE_HIGH),
    (Duration::from_millis(1500), PULSE_LOW),
    (Duration::from_millis(2000), PULSE_HIGH),
];

/// 예약된 펄스 시퀀스 하나를 가리키는 핸들.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PulseHandle(u64);

#[derive(Debug, Clone, PartialEq)]
struct ScheduledPulse {
    handle: PulseHandle,
    started_at: Duration,
    next_tick: usize,
}

/// 펄스 애니메이션 상태. 한 번에 하나의 시퀀스만 예약된다.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PulseAnimation {
    opacity: f64,
    scheduled: Option<ScheduledPulse>,
    issued: u64,
}

impl PulseAnimation {
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// 아직 남은 틱이 있는지.
    pub fn is_running(&self) -> bool {
        self.scheduled.is_some()
    }

    /// 현재 예약된 시퀀스의 핸들.
    pub fn handle(&self) -> Option<PulseHandle> {
        self.scheduled.as_ref().map(|s| s.handle)
    }

    /// 새 시퀀스를 시작한다. 이전 시퀀스는 취소되고 불투명도는 즉시 1.0이 된다.
    pub fn start(&mut self, now: Duration) -> PulseHandle {
        if let Some(stale) = self.cancel() {
            tracing::trace!(handle = stale.0, "pulse superseded");
        }
        self.issued += 1;
        let handle = PulseHandle(self.issued);
        self.scheduled = Some(ScheduledPulse {
            handle,
            started_at: now,
            next_tick: 0,
        });
        self.opacity = PULSE_HIGH;
        tracing::trace!(handle = handle.0, "pulse started");
        handle
    }

    /// 남은 틱을 모두 취소한다. 불투명도는 그대로 둔다.
    pub fn cancel(&mut self) -> Option<PulseHandle> {
        self.scheduled.take().map(|s| s.handle)
    }

    /// 취소 후 불투명도를 0으로 되돌린다.
    pub fn stop(&mut self) {
        self.cancel();
        self.opacity = 0.0;
    }

    /// `now`까지 도래한 틱을 순서대로 적용한다. 불투명도가 바뀌었으면 `true`.
    pub fn advance(&mut self, now: Duration) -> bool {
        let Some(scheduled) = self.scheduled.as_mut() else {
            return false;
        };
        let elapsed = now.saturating_sub(scheduled.started_at);
        let before = self.opacity;
        while let Some(&(at, opacity)) = PULSE_TICKS.get(scheduled.next_tick) {
            if elapsed < at {
                break;
            }
            self.opacity = opacity;
            scheduled.next_tick += 1;
        }
        if scheduled.next_tick >= PULSE_TICKS.len() {
            self.scheduled = None;
        }
        before != self.opacity
    }

    /// 다음 틱의 절대 시각. 예약이 없으면 `None`.
    pub fn next_deadline(&self) -> Option<Duration> {
        let scheduled = self.scheduled.as_ref()?;
        PULSE_TICKS
            .get(scheduled.next_tick)
            .map(|(at, _)| scheduled.started_at + *at)
    }
}
