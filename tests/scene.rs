use std::time::Duration;

use dew_point_explorer::{
    explanation::{ExplanationCommand, ExplanationState},
    i18n::Translator,
    input::{DewPointRule, InputState},
    scene::{build_scene, PrimitiveKind, Role, Scene, SceneFlags},
    viewport::Viewport,
};

fn inputs(t: &str, td: &str) -> InputState {
    let mut inputs = InputState::default();
    inputs.set_temperature(t).expect("temperature");
    inputs
        .set_dew_point(td, DewPointRule::EnforceOrdering)
        .expect("dew point");
    inputs
}

fn explaining(steps: usize) -> ExplanationState {
    let mut s = ExplanationState::default();
    s.apply(ExplanationCommand::Start, Duration::ZERO, true);
    for _ in 1..steps {
        s.apply(ExplanationCommand::Next, Duration::ZERO, true);
    }
    s
}

fn scene(inputs: &InputState, viewport: Viewport, explanation: &ExplanationState) -> Scene {
    let tr = Translator::new("en");
    build_scene(
        inputs,
        &viewport,
        explanation,
        SceneFlags::default(),
        &tr,
    )
}

#[test]
fn empty_inputs_draw_only_the_curve() {
    let s = scene(&InputState::default(), Viewport::default(), &ExplanationState::default());
    assert_eq!(s.roles(), vec![Role::SaturationCurve]);
    assert_eq!(s.viewport, Viewport::default());
}

#[test]
fn unsaturated_fill_follows_the_curve() {
    let tr = Translator::new("en");
    let s = build_scene(
        &InputState::default(),
        &Viewport::default(),
        &ExplanationState::default(),
        SceneFlags {
            show_unsaturated: true,
        },
        &tr,
    );
    assert_eq!(s.roles(), vec![Role::SaturationCurve, Role::UnsaturatedRegion]);
    match &s.primitives[1].kind {
        PrimitiveKind::Line(style) => assert!(style.fill_to_zero.is_some()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn idle_scene_has_guides_and_intersection() {
    let s = scene(&inputs("20", "10"), Viewport::default(), &ExplanationState::default());
    assert_eq!(
        s.roles(),
        vec![
            Role::SaturationCurve,
            Role::TemperatureGuide,
            Role::DewPointGuide,
            Role::DewPointMarker,
            Role::DewPointLabel,
            Role::IntersectionMarker,
            Role::AirMassLabel,
        ]
    );
    let marker = s.find(Role::IntersectionMarker).expect("marker");
    assert_eq!(marker.xs, vec![20.0]);
    assert!((marker.ys[0] - 9.3823).abs() < 1e-3);
}

#[test]
fn single_input_draws_single_guide() {
    let mut only_t = InputState::default();
    only_t.set_temperature("25").expect("temperature");
    let s = scene(&only_t, Viewport::default(), &ExplanationState::default());
    assert!(s.contains(Role::TemperatureGuide));
    assert!(!s.contains(Role::DewPointGuide));
    assert!(!s.contains(Role::IntersectionMarker));
}

#[test]
fn label_offsets_scale_with_viewport() {
    let i = inputs("20", "10");
    let idle = ExplanationState::default();
    let wide = scene(&i, Viewport::new(-10.0, 40.0, 50.0), &idle);
    let narrow = scene(&i, Viewport::new(0.0, 25.0, 25.0), &idle);

    let dx = |s: &Scene| s.find(Role::AirMassLabel).expect("label").xs[0] - 20.0;
    assert!((dx(&wide) - 2.5).abs() < 1e-9);
    assert!((dx(&narrow) - 1.25).abs() < 1e-9);

    let rise = |s: &Scene| {
        let marker = s.find(Role::DewPointMarker).expect("marker").ys[0];
        s.find(Role::DewPointLabel).expect("label").ys[0] - marker
    };
    assert!((rise(&wide) - 1.5).abs() < 1e-9);
    assert!((rise(&narrow) - 0.75).abs() < 1e-9);
}

#[test]
fn explanation_suppresses_guides() {
    let s = scene(&inputs("20", "10"), Viewport::default(), &explaining(1));
    assert!(!s.contains(Role::TemperatureGuide));
    assert!(!s.contains(Role::DewPointGuide));
    assert!(!s.contains(Role::DewPointLabel));
    assert!(s.contains(Role::IntersectionMarker));
    assert_eq!(s.primitives[0].role, Role::SaturationCurve);
}

#[test]
fn step_one_shows_maximum_content() {
    let v = Viewport::default();
    let s = scene(&inputs("20", "10"), v, &explaining(1));
    let line = s.find(Role::MaxContentLine).expect("line");
    assert_eq!(line.opacity, 1.0);
    assert!((line.ys[1] - 17.2415).abs() < 1e-3);
    let tie = s.find(Role::MaxContentTieLine).expect("tie");
    assert_eq!(tie.xs, vec![20.0, v.x_min()]);
    assert!(s.contains(Role::MaxContentLabel));
    assert!(!s.contains(Role::ActualContentLine));
}

#[test]
fn step_two_settles_previous_step() {
    let s = scene(&inputs("20", "10"), Viewport::default(), &explaining(2));
    assert_eq!(s.find(Role::MaxContentLine).expect("max").opacity, 0.7);
    assert!(!s.contains(Role::MaxContentTieLine));
    assert!(!s.contains(Role::MaxContentLabel));
    for role in [
        Role::ActualContentLine,
        Role::ActualContentPulse,
        Role::ActualContentCircle,
        Role::ActualContentLabel,
        Role::ActualContentTieLine,
    ] {
        assert!(s.contains(role), "{role:?}");
    }
}

#[test]
fn step_three_shows_formula_and_values() {
    let s = scene(&inputs("20", "10"), Viewport::default(), &explaining(3));
    let formula = s.find(Role::FormulaLabel).expect("formula");
    let text = formula.text().expect("text");
    assert!(text.contains("54.4"), "{text}");
    assert!(text.contains("9.4"), "{text}");
    assert!(text.contains("17.2"), "{text}");
    assert_eq!(s.find(Role::ActualContentLine).expect("actual").opacity, 0.7);
    for role in [
        Role::ActualContentMarker,
        Role::ActualContentValue,
        Role::MaxContentMarker,
        Role::MaxContentValue,
    ] {
        assert!(s.contains(role), "{role:?}");
    }
    assert!(!s.contains(Role::ActualContentTieLine));
}

#[test]
fn step_primitives_need_an_intersection() {
    let mut only_t = InputState::default();
    only_t.set_temperature("20").expect("temperature");
    let s = scene(&only_t, Viewport::default(), &explaining(2));
    assert_eq!(s.roles(), vec![Role::SaturationCurve]);
}

#[test]
fn danish_numbers_use_comma() {
    let tr = Translator::new("da");
    let s = build_scene(
        &inputs("20", "10"),
        &Viewport::default(),
        &explaining(3),
        SceneFlags::default(),
        &tr,
    );
    let text = s.find(Role::FormulaLabel).and_then(|p| p.text()).expect("text");
    assert!(text.contains("54,4"), "{text}");
}

#[test]
fn text_labels_carry_their_text_as_tooltip() {
    let idle = scene(&inputs("20", "10"), Viewport::default(), &ExplanationState::default());
    for role in [Role::DewPointLabel, Role::AirMassLabel] {
        let p = idle.find(role).expect("label");
        assert_eq!(Some(p.tooltip.as_str()), p.text(), "{role:?}");
        assert!(!p.tooltip.is_empty());
    }
    let step3 = scene(&inputs("20", "10"), Viewport::default(), &explaining(3));
    let formula = step3.find(Role::FormulaLabel).expect("formula");
    assert_eq!(Some(formula.tooltip.as_str()), formula.text());
}
