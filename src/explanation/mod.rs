//! 상대습도 계산을 3단계로 보여주는 설명 모드 상태 기계.
//!
//! Idle → 1단계(최대 수분량) → 2단계(실제 수분량) → 3단계(비율/결과).
//! 단계에 진입할 때마다 펄스 애니메이션을 새로 시작한다.

pub mod pulse;

use std::time::Duration;

pub use pulse::{PulseAnimation, PulseHandle, PULSE_HIGH, PULSE_LOW, PULSE_TICKS};

/// 설명 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExplanationStep {
    /// 1단계: 기온에서의 최대 수분량
    MaximumContent,
    /// 2단계: 이슬점으로 본 실제 수분량
    ActualContent,
    /// 3단계: 비율 계산과 결과
    Ratio,
}

impl ExplanationStep {
    /// 1, 2, 3
    pub fn number(self) -> u8 {
        match self {
            ExplanationStep::MaximumContent => 1,
            ExplanationStep::ActualContent => 2,
            ExplanationStep::Ratio => 3,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            ExplanationStep::MaximumContent => Some(ExplanationStep::ActualContent),
            ExplanationStep::ActualContent => Some(ExplanationStep::Ratio),
            ExplanationStep::Ratio => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            ExplanationStep::MaximumContent => None,
            ExplanationStep::ActualContent => Some(ExplanationStep::MaximumContent),
            ExplanationStep::Ratio => Some(ExplanationStep::ActualContent),
        }
    }
}

/// 설명 모드 명령.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationCommand {
    Start,
    Next,
    Previous,
    Stop,
}

/// 설명 모드 상태. `step`이 `None`이면 Idle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplanationState {
    step: Option<ExplanationStep>,
    pulse: PulseAnimation,
}

impl ExplanationState {
    pub fn is_active(&self) -> bool {
        self.step.is_some()
    }

    pub fn step(&self) -> Option<ExplanationStep> {
        self.step
    }

    /// Idle이면 0, 그 외 1..=3.
    pub fn step_number(&self) -> u8 {
        self.step.map_or(0, ExplanationStep::number)
    }

    pub fn pulse_opacity(&self) -> f64 {
        self.pulse.opacity()
    }

    pub fn pulse(&self) -> &PulseAnimation {
        &self.pulse
    }

    /// 다음 펄스 틱 시각. 렌더러가 다시 그릴 시점을 예약하는 데 쓴다.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pulse.next_deadline()
    }

    /// 명령을 적용한다. 상태가 바뀌었으면 `true`.
    ///
    /// `Start`는 교차점이 있을 때(`has_intersection`)만 Idle에서 1단계로 간다.
    pub fn apply(
        &mut self,
        command: ExplanationCommand,
        now: Duration,
        has_intersection: bool,
    ) -> bool {
        match command {
            ExplanationCommand::Start => self.start(now, has_intersection),
            ExplanationCommand::Next => self.next(now),
            ExplanationCommand::Previous => self.previous(now),
            ExplanationCommand::Stop => self.stop(),
        }
    }

    pub fn start(&mut self, now: Duration, has_intersection: bool) -> bool {
        if self.is_active() || !has_intersection {
            return false;
        }
        self.enter(ExplanationStep::MaximumContent, now);
        true
    }

    pub fn next(&mut self, now: Duration) -> bool {
        match self.step.and_then(ExplanationStep::next) {
            Some(step) => {
                self.enter(step, now);
                true
            }
            None => false,
        }
    }

    pub fn previous(&mut self, now: Duration) -> bool {
        match self.step.and_then(ExplanationStep::previous) {
            Some(step) => {
                self.enter(step, now);
                true
            }
            None => false,
        }
    }

    /// 어느 상태에서든 Idle로 돌아가며 펄스를 취소하고 불투명도를 0으로 만든다.
    pub fn stop(&mut self) -> bool {
        let was_active = self.is_active() || self.pulse.opacity() != 0.0;
        self.step = None;
        self.pulse.stop();
        if was_active {
            tracing::debug!("explanation stopped");
        }
        was_active
    }

    /// 펄스 틱을 진행시킨다. 불투명도가 바뀌었으면 `true`.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.pulse.advance(now)
    }

    fn enter(&mut self, step: ExplanationStep, now: Duration) {
        self.step = Some(step);
        self.pulse.start(now);
        tracing::debug!(step = step.number(), "explanation step entered");
    }
}
