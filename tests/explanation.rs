use std::time::Duration;

use dew_point_explorer::explanation::{
    pulse::{PulseAnimation, PULSE_HIGH, PULSE_LOW},
    ExplanationCommand, ExplanationState, ExplanationStep,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn start_requires_intersection() {
    let mut s = ExplanationState::default();
    assert!(!s.apply(ExplanationCommand::Start, ms(0), false));
    assert!(!s.is_active());
    assert_eq!(s.step_number(), 0);
    assert!(s.apply(ExplanationCommand::Start, ms(0), true));
    assert_eq!(s.step(), Some(ExplanationStep::MaximumContent));
}

#[test]
fn steps_walk_forward_and_back_within_bounds() {
    let mut s = ExplanationState::default();
    s.apply(ExplanationCommand::Start, ms(0), true);
    assert!(!s.apply(ExplanationCommand::Previous, ms(10), true));
    assert!(s.apply(ExplanationCommand::Next, ms(20), true));
    assert!(s.apply(ExplanationCommand::Next, ms(30), true));
    assert_eq!(s.step_number(), 3);
    assert!(!s.apply(ExplanationCommand::Next, ms(40), true));
    assert_eq!(s.step(), Some(ExplanationStep::Ratio));
    assert!(s.apply(ExplanationCommand::Previous, ms(50), true));
    assert_eq!(s.step(), Some(ExplanationStep::ActualContent));
}

#[test]
fn start_while_active_is_ignored() {
    let mut s = ExplanationState::default();
    s.apply(ExplanationCommand::Start, ms(0), true);
    s.apply(ExplanationCommand::Next, ms(0), true);
    assert!(!s.apply(ExplanationCommand::Start, ms(100), true));
    assert_eq!(s.step_number(), 2);
}

#[test]
fn pulse_follows_fixed_schedule() {
    let mut s = ExplanationState::default();
    s.apply(ExplanationCommand::Start, ms(1_000), true);
    assert_eq!(s.pulse_opacity(), PULSE_HIGH);
    assert_eq!(s.next_deadline(), Some(ms(1_500)));

    assert!(!s.tick(ms(1_499)));
    assert_eq!(s.pulse_opacity(), PULSE_HIGH);
    assert!(s.tick(ms(1_500)));
    assert_eq!(s.pulse_opacity(), PULSE_LOW);
    assert!(s.tick(ms(2_000)));
    assert_eq!(s.pulse_opacity(), PULSE_HIGH);
    assert!(s.tick(ms(2_500)));
    assert_eq!(s.pulse_opacity(), PULSE_LOW);
    assert!(s.tick(ms(3_000)));
    assert_eq!(s.pulse_opacity(), PULSE_HIGH);
    assert_eq!(s.next_deadline(), None);
    assert!(!s.tick(ms(10_000)));
}

#[test]
fn late_tick_applies_every_due_step_in_order() {
    let mut p = PulseAnimation::default();
    p.start(ms(0));
    p.advance(ms(1_600));
    assert_eq!(p.opacity(), PULSE_LOW);
    assert!(p.is_running());
    p.advance(ms(5_000));
    assert_eq!(p.opacity(), PULSE_HIGH);
    assert!(!p.is_running());
}

#[test]
fn new_step_cancels_previous_pulse() {
    let mut s = ExplanationState::default();
    s.apply(ExplanationCommand::Start, ms(0), true);
    let first = s.pulse().handle().expect("scheduled");
    s.tick(ms(500));
    assert_eq!(s.pulse_opacity(), PULSE_LOW);

    s.apply(ExplanationCommand::Next, ms(700), true);
    let second = s.pulse().handle().expect("scheduled");
    assert_ne!(first, second);
    assert_eq!(s.pulse_opacity(), PULSE_HIGH);
    // 이전 시퀀스의 1000 ms 틱은 더 이상 적용되지 않는다
    assert!(!s.tick(ms(1_000)));
    assert_eq!(s.next_deadline(), Some(ms(1_200)));
}

#[test]
fn stop_resets_opacity_to_zero() {
    let mut s = ExplanationState::default();
    s.apply(ExplanationCommand::Start, ms(0), true);
    s.apply(ExplanationCommand::Next, ms(100), true);
    assert!(s.apply(ExplanationCommand::Stop, ms(200), true));
    assert!(!s.is_active());
    assert_eq!(s.pulse_opacity(), 0.0);
    assert_eq!(s.next_deadline(), None);
    assert!(!s.tick(ms(5_000)));
    assert_eq!(s.pulse_opacity(), 0.0);
}

#[test]
fn noop_navigation_keeps_pulse_running() {
    let mut s = ExplanationState::default();
    s.apply(ExplanationCommand::Start, ms(0), true);
    let handle = s.pulse().handle();
    assert!(!s.apply(ExplanationCommand::Previous, ms(300), true));
    assert_eq!(s.pulse().handle(), handle);
    assert_eq!(s.next_deadline(), Some(ms(500)));
}

#[test]
fn navigation_saturates_at_both_ends() {
    let mut s = ExplanationState::default();
    s.apply(ExplanationCommand::Start, ms(0), true);
    for i in 0..3 {
        s.apply(ExplanationCommand::Next, ms(10 * i), true);
    }
    assert_eq!(s.step(), Some(ExplanationStep::Ratio));
    for i in 0..4 {
        s.apply(ExplanationCommand::Previous, ms(100 + 10 * i), true);
    }
    assert_eq!(s.step(), Some(ExplanationStep::MaximumContent));
}
