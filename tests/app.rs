use std::time::Duration;

use dew_point_explorer::{
    app::{AppState, Event},
    config::Config,
    explanation::ExplanationCommand,
    i18n::Translator,
    input::{DewPointRule, Field, InputHint},
    scene::Role,
    viewport::Viewport,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn with_inputs(t: &str, td: &str) -> AppState {
    AppState::default()
        .apply(&Event::SetTemperature(t.into()), ms(0))
        .apply(&Event::SetDewPoint(td.into()), ms(0))
}

#[test]
fn twenty_over_ten_recentres_and_reports() {
    let state = with_inputs("20", "10");
    let p = state.intersection().expect("intersection");
    assert!((p.humidity - 9.3823).abs() < 1e-3);
    assert!((p.relative_humidity - 54.417).abs() < 0.01);
    let v = state.viewport();
    assert!((v.x_min() - -2.0).abs() < 1e-9);
    assert!((v.x_max() - 26.4).abs() < 1e-9);
}

#[test]
fn freezing_point_saturated_air() {
    let state = with_inputs("0", "0");
    let p = state.intersection().expect("intersection");
    assert!((p.humidity - 4.8485).abs() < 1e-3);
    assert!((p.relative_humidity - 100.0).abs() < 1e-9);
}

#[test]
fn rejected_input_keeps_value_and_sets_hint() {
    let state = with_inputs("20", "10").apply(&Event::SetTemperature("61".into()), ms(0));
    assert_eq!(state.inputs().temperature(), Some(20.0));
    assert_eq!(state.hint(Field::Temperature), Some(InputHint::OutOfRange));
    let state = state.apply(&Event::SetTemperature("21".into()), ms(0));
    assert_eq!(state.hint(Field::Temperature), None);
}

#[test]
fn dew_point_rule_switch_allows_supersaturated_input() {
    let state = with_inputs("10", "");
    let rejected = state.clone().apply(&Event::SetDewPoint("15".into()), ms(0));
    assert_eq!(rejected.inputs().dew_point(), None);
    assert_eq!(
        rejected.hint(Field::DewPoint),
        Some(InputHint::DewPointAboveTemperature)
    );
    let allowed = state
        .apply(
            &Event::SetDewPointRule(DewPointRule::AllowAboveTemperature),
            ms(0),
        )
        .apply(&Event::SetDewPoint("15".into()), ms(0));
    let p = allowed.intersection().expect("intersection");
    assert!(p.relative_humidity > 100.0);
}

#[test]
fn clearing_both_inputs_returns_to_idle() {
    let mut state = with_inputs("20", "10");
    state.update(&Event::Explain(ExplanationCommand::Start), ms(0));
    state.update(&Event::Explain(ExplanationCommand::Next), ms(100));
    assert_eq!(state.explanation().step_number(), 2);

    state.update(&Event::SetTemperature(String::new()), ms(200));
    state.update(&Event::SetDewPoint(String::new()), ms(300));
    assert!(!state.explanation().is_active());
    assert_eq!(state.explanation().pulse_opacity(), 0.0);
    assert!(!state.update(&Event::Tick, ms(5_000)));
}

#[test]
fn losing_the_intersection_stops_the_explanation() {
    for edit in [
        Event::SetTemperature(String::new()),
        Event::SetTemperature("-".into()),
        Event::SetDewPoint(String::new()),
    ] {
        let mut state = with_inputs("20", "10");
        state.update(&Event::Explain(ExplanationCommand::Start), ms(0));
        state.update(&edit, ms(100));
        assert!(!state.explanation().is_active(), "{edit:?}");
        assert_eq!(state.explanation().pulse_opacity(), 0.0);
        assert_eq!(state.explanation().next_deadline(), None);
    }
}

#[test]
fn rejected_edit_leaves_committed_text() {
    let state = AppState::default()
        .apply(&Event::SetTemperature("6".into()), ms(0))
        .apply(&Event::SetTemperature("61".into()), ms(10));
    assert_eq!(state.inputs().text(Field::Temperature), "6");
    let state = state
        .apply(&Event::SetDewPoint("5".into()), ms(20))
        .apply(&Event::SetDewPoint("7".into()), ms(30));
    assert_eq!(state.inputs().text(Field::DewPoint), "5");
    assert_eq!(
        state.hint(Field::DewPoint),
        Some(InputHint::DewPointAboveTemperature)
    );
}

#[test]
fn reset_view_keeps_inputs() {
    let mut state = with_inputs("20", "10");
    state.update(
        &Event::PanZoom {
            x_min: -30.0,
            x_max: 50.0,
            y_min: 0.0,
            y_max: 80.0,
        },
        ms(0),
    );
    assert!(state.update(&Event::ResetView, ms(10)));
    assert_eq!(state.viewport(), Config::default().default_viewport);
    assert_eq!(state.inputs().temperature(), Some(20.0));
    assert_eq!(state.inputs().dew_point(), Some(10.0));
    assert!(!state.update(&Event::ResetView, ms(20)));
}

#[test]
fn explain_without_intersection_does_nothing() {
    let mut state = AppState::default();
    state.update(&Event::SetTemperature("20".into()), ms(0));
    assert!(!state.update(&Event::Explain(ExplanationCommand::Start), ms(0)));
    assert!(!state.explanation().is_active());
}

#[test]
fn manual_view_survives_until_inputs_change() {
    let mut state = with_inputs("20", "10");
    state.update(
        &Event::PanZoom {
            x_min: -30.0,
            x_max: 50.0,
            y_min: 3.0,
            y_max: 80.0,
        },
        ms(0),
    );
    let manual = Viewport::new(-30.0, 50.0, 80.0);
    assert_eq!(state.viewport(), manual);

    state.update(&Event::ToggleUnsaturated, ms(0));
    state.update(&Event::Explain(ExplanationCommand::Start), ms(0));
    state.update(&Event::Tick, ms(600));
    assert_eq!(state.viewport(), manual);

    // 같은 값을 다시 넣는 것은 변경이 아니다
    state.update(&Event::SetTemperature("20".into()), ms(700));
    assert_eq!(state.viewport(), manual);

    state.update(&Event::SetTemperature("25".into()), ms(800));
    assert_ne!(state.viewport(), manual);
}

#[test]
fn clear_and_reset_restores_home_view() {
    let cfg = Config::default();
    let mut state = AppState::new(&cfg);
    state.update(&Event::SetTemperature("35".into()), ms(0));
    state.update(&Event::SetDewPoint("-20".into()), ms(0));
    assert_ne!(state.viewport(), cfg.default_viewport);
    state.update(&Event::Explain(ExplanationCommand::Start), ms(0));

    assert!(state.update(&Event::ClearAndReset, ms(10)));
    assert_eq!(state.viewport(), cfg.default_viewport);
    assert!(state.inputs().is_cleared());
    assert!(!state.explanation().is_active());
}

#[test]
fn scene_reflects_state() {
    let tr = Translator::new("en");
    let state = with_inputs("20", "10").apply(&Event::ToggleUnsaturated, ms(0));
    let scene = state.scene(&tr);
    assert_eq!(scene.primitives[0].role, Role::SaturationCurve);
    assert_eq!(scene.primitives[1].role, Role::UnsaturatedRegion);
    assert_eq!(scene.viewport, state.viewport());
}
