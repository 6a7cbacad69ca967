//! 입력·가시 영역·설명 단계로부터 장면을 만드는 순수 함수.
//!
//! 상태를 읽기만 하고 바꾸지 않는다. 라벨 오프셋은 모두 현재 가시 영역 폭에 비례한다.

use crate::explanation::{ExplanationState, ExplanationStep};
use crate::format::NumberFormat;
use crate::i18n::{keys, Translator};
use crate::input::InputState;
use crate::psychro::{absolute_humidity, sample_curve, IntersectionPoint};
use crate::viewport::Viewport;

use super::palette;
use super::{
    Dash, LineStyle, MarkerStyle, Primitive, PrimitiveKind, Role, Scene, TextAnchor, TextStyle,
};

/// 공기덩이 라벨의 x 오프셋(가시 폭 대비)
const AIR_MASS_OFFSET_RATIO: f64 = 0.05;
/// 설명 라벨의 왼쪽 여백(가시 폭 대비)
const STEP_TEXT_PADDING_RATIO: f64 = 0.02;
/// 설명 라벨이 선에서 떨어지는 거리(가시 폭 대비)
const STEP_TEXT_GAP_RATIO: f64 = 0.04;
/// 3단계 값 라벨의 왼쪽 오프셋(가시 폭 대비)
const VALUE_TEXT_OFFSET_RATIO: f64 = 0.1;
/// 이슬점 라벨의 y 오프셋(가시 높이 대비)
const DEW_POINT_LABEL_RISE_RATIO: f64 = 0.03;
/// 설명 라벨을 선 아래로 내리는 거리(가시 높이 대비)
const STEP_TEXT_DROP_RATIO: f64 = 0.02;
/// 지난 단계 요소의 고정 불투명도
const SETTLED_OPACITY: f64 = 0.7;

/// 장면 옵션.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneFlags {
    /// 곡선 아래 불포화 영역을 칠한다.
    pub show_unsaturated: bool,
}

/// 현재 상태로 장면을 만든다.
///
/// 포화곡선이 항상 첫 요소이며, 나머지는 조건에 따라 정해진 순서로 뒤에 붙는다.
pub fn build_scene(
    inputs: &InputState,
    viewport: &Viewport,
    explanation: &ExplanationState,
    flags: SceneFlags,
    tr: &Translator,
) -> Scene {
    let mut w = SceneWriter {
        tr,
        fmt: tr.number_format(),
        viewport: *viewport,
        primitives: Vec::new(),
    };

    w.saturation_curve();
    if flags.show_unsaturated {
        w.unsaturated_region();
    }

    let active = explanation.is_active();
    if !active {
        if let Some(t) = inputs.temperature() {
            w.temperature_guide(t);
        }
        if let Some(td) = inputs.dew_point() {
            w.dew_point_guide(td);
        }
    }

    if let Some(point) = inputs.intersection() {
        w.intersection(&point);
        if let Some(step) = explanation.step() {
            w.explanation_step(&point, step, explanation.pulse_opacity());
        }
    }

    Scene {
        title: tr.t(keys::CHART_TITLE).to_string(),
        x_axis_title: tr.t(keys::AXIS_TEMPERATURE).to_string(),
        y_axis_title: tr.t(keys::AXIS_HUMIDITY).to_string(),
        viewport: *viewport,
        primitives: w.primitives,
    }
}

struct SceneWriter<'a> {
    tr: &'a Translator,
    fmt: NumberFormat,
    viewport: Viewport,
    primitives: Vec<Primitive>,
}

impl SceneWriter<'_> {
    fn push(
        &mut self,
        role: Role,
        name_key: &str,
        xs: Vec<f64>,
        ys: Vec<f64>,
        kind: PrimitiveKind,
    ) -> &mut Primitive {
        self.primitives.push(Primitive {
            role,
            name: self.tr.t(name_key).to_string(),
            xs,
            ys,
            kind,
            opacity: 1.0,
            show_legend: false,
            legend_group: None,
            tooltip: String::new(),
        });
        let last = self.primitives.len() - 1;
        &mut self.primitives[last]
    }

    fn line(
        &mut self,
        role: Role,
        name_key: &str,
        xs: Vec<f64>,
        ys: Vec<f64>,
        style: LineStyle,
    ) -> &mut Primitive {
        self.push(role, name_key, xs, ys, PrimitiveKind::Line(style))
    }

    fn marker(
        &mut self,
        role: Role,
        name_key: &str,
        x: f64,
        y: f64,
        style: MarkerStyle,
    ) -> &mut Primitive {
        self.push(role, name_key, vec![x], vec![y], PrimitiveKind::Marker(style))
    }

    fn text(
        &mut self,
        role: Role,
        name_key: &str,
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
    ) -> &mut Primitive {
        self.push(role, name_key, vec![x], vec![y], PrimitiveKind::Text { text, style })
    }

    fn x_span(&self) -> f64 {
        self.viewport.x_span()
    }

    fn y_span(&self) -> f64 {
        self.viewport.y_range[1] - self.viewport.y_range[0]
    }

    /// 설명 라벨 x: 왼쪽 가장자리 근처, 단 두 점보다는 왼쪽.
    fn step_text_x(&self, point: &IntersectionPoint) -> f64 {
        let span = self.x_span();
        (self.viewport.x_min() + span * STEP_TEXT_PADDING_RATIO)
            .min(point.temperature.min(point.dew_point) - span * STEP_TEXT_GAP_RATIO)
    }

    fn content_tooltip(&self, label_key: &str, humidity: f64) -> String {
        self.tr.fill(
            keys::TOOLTIP_CONTENT,
            &[
                ("label", self.tr.t(label_key).to_string()),
                ("h", self.fmt.fixed(humidity, 1)),
            ],
        )
    }

    fn saturation_curve(&mut self) {
        let curve = sample_curve();
        let tooltip = self.tr.fill(
            keys::TOOLTIP_CURVE,
            &[("t", "{x}".to_string()), ("h", "{y}".to_string())],
        );
        let p = self.line(
            Role::SaturationCurve,
            keys::SCENE_CURVE,
            curve.temperatures().to_vec(),
            curve.humidities().to_vec(),
            LineStyle {
                color: palette::CURVE_BLUE,
                width: 3.0,
                dash: Dash::Solid,
                fill_to_zero: None,
            },
        );
        p.show_legend = true;
        p.tooltip = tooltip;
    }

    fn unsaturated_region(&mut self) {
        let curve = sample_curve();
        let tooltip = self.tr.t(keys::SCENE_UNSATURATED_TOOLTIP).to_string();
        let p = self.line(
            Role::UnsaturatedRegion,
            keys::SCENE_UNSATURATED,
            curve.temperatures().to_vec(),
            curve.humidities().to_vec(),
            LineStyle {
                color: palette::UNSATURATED_LINE,
                width: 2.0,
                dash: Dash::Solid,
                fill_to_zero: Some(palette::UNSATURATED_FILL),
            },
        );
        p.show_legend = true;
        p.legend_group = Some("unsaturated".into());
        p.tooltip = tooltip;
    }

    fn temperature_guide(&mut self, t: f64) {
        let h = absolute_humidity(t);
        if !h.is_finite() {
            return;
        }
        let tooltip = self.tr.fill(
            keys::TOOLTIP_TEMPERATURE,
            &[("t", self.fmt.trimmed(t)), ("h", self.fmt.fixed(h, 2))],
        );
        let p = self.line(
            Role::TemperatureGuide,
            keys::SCENE_TEMPERATURE_LINE,
            vec![t, t],
            vec![0.0, h],
            LineStyle {
                color: palette::TEMPERATURE_RED,
                width: 2.5,
                dash: Dash::Dashed,
                fill_to_zero: None,
            },
        );
        p.tooltip = tooltip;
    }

    fn dew_point_guide(&mut self, td: f64) {
        let h = absolute_humidity(td);
        if !h.is_finite() {
            return;
        }
        let tooltip = self.tr.fill(
            keys::TOOLTIP_DEW_POINT,
            &[("t", self.fmt.trimmed(td)), ("h", self.fmt.fixed(h, 2))],
        );
        let label_y = h + self.y_span() * DEW_POINT_LABEL_RISE_RATIO;
        let label = self.tr.t(keys::SCENE_DEW_POINT).to_string();

        let p = self.line(
            Role::DewPointGuide,
            keys::SCENE_DEW_POINT_LINE,
            vec![td, td],
            vec![0.0, h],
            LineStyle {
                color: palette::CURVE_BLUE,
                width: 2.5,
                dash: Dash::Dotted,
                fill_to_zero: None,
            },
        );
        p.show_legend = true;
        p.legend_group = Some("dew_point".into());
        p.tooltip = tooltip.clone();

        self.marker(
            Role::DewPointMarker,
            keys::SCENE_DEW_POINT,
            td,
            h,
            MarkerStyle {
                color: palette::CURVE_BLUE,
                size: 14.0,
                outline: palette::WHITE,
                outline_width: 2.0,
            },
        )
        .tooltip = tooltip;

        self.text(
            Role::DewPointLabel,
            keys::SCENE_DEW_POINT,
            td,
            label_y,
            label.clone(),
            TextStyle {
                color: palette::LABEL_BLUE,
                size: 14.0,
                bold: true,
                anchor: TextAnchor::TopCenter,
            },
        )
        .tooltip = label.clone();
    }

    fn intersection(&mut self, point: &IntersectionPoint) {
        let tooltip = self.tr.fill(
            keys::TOOLTIP_INTERSECTION,
            &[
                ("t", self.fmt.trimmed(point.temperature)),
                ("td", self.fmt.trimmed(point.dew_point)),
                ("h", self.fmt.fixed(point.humidity, 2)),
                ("rh", self.fmt.fixed(point.relative_humidity, 1)),
            ],
        );
        self.marker(
            Role::IntersectionMarker,
            keys::SCENE_INTERSECTION,
            point.temperature,
            point.humidity,
            MarkerStyle {
                color: palette::INTERSECTION_DARK,
                size: 14.0,
                outline: palette::WHITE,
                outline_width: 2.0,
            },
        )
        .tooltip = tooltip;

        let label = self.tr.t(keys::SCENE_AIR_MASS).to_string();
        let x = point.temperature + self.x_span() * AIR_MASS_OFFSET_RATIO;
        self.text(
            Role::AirMassLabel,
            keys::SCENE_AIR_MASS,
            x,
            point.humidity,
            label.clone(),
            TextStyle {
                color: palette::INTERSECTION_DARK,
                size: 14.0,
                bold: true,
                anchor: TextAnchor::MiddleRight,
            },
        )
        .tooltip = label.clone();
    }

    fn explanation_step(&mut self, point: &IntersectionPoint, step: ExplanationStep, pulse: f64) {
        let n = step.number();
        let (t, td) = (point.temperature, point.dew_point);
        let (h_max, h_act) = (point.max_humidity, point.humidity);
        let axis_x = self.viewport.x_min();

        if n >= 1 {
            let tooltip = self.content_tooltip(keys::SCENE_MAX_CONTENT, h_max);
            let p = self.line(
                Role::MaxContentLine,
                keys::SCENE_MAX_CONTENT,
                vec![t, t],
                vec![0.0, h_max],
                thick(palette::MAXIMUM_RED),
            );
            p.opacity = if n == 1 { pulse } else { SETTLED_OPACITY };
            p.tooltip = tooltip.clone();

            if n == 1 {
                let x = self.step_text_x(point);
                let y = h_max - self.y_span() * STEP_TEXT_DROP_RATIO;
                self.text(
                    Role::MaxContentLabel,
                    keys::SCENE_MAX_CONTENT,
                    x,
                    y,
                    tooltip.clone(),
                    step_text(palette::MAXIMUM_RED, false),
                )
                .tooltip = tooltip.clone();
                let p = self.line(
                    Role::MaxContentTieLine,
                    keys::SCENE_TIE_LINE,
                    vec![t, axis_x],
                    vec![h_max, h_max],
                    tie(palette::MAXIMUM_RED),
                );
                p.opacity = pulse;
                p.tooltip = tooltip;
            }
        }

        if n >= 2 {
            let tooltip = self.content_tooltip(keys::SCENE_ACTUAL_CONTENT, h_act);
            let p = self.line(
                Role::ActualContentLine,
                keys::SCENE_ACTUAL_CONTENT,
                vec![t, t],
                vec![0.0, h_act],
                thick(palette::ACTUAL_GREEN),
            );
            p.opacity = if n == 2 { pulse } else { SETTLED_OPACITY };
            p.tooltip = tooltip.clone();

            if n == 2 {
                let dew_tooltip = self.tr.fill(
                    keys::TOOLTIP_DEW_POINT,
                    &[("t", self.fmt.trimmed(td)), ("h", self.fmt.fixed(h_act, 1))],
                );
                let p = self.marker(
                    Role::ActualContentPulse,
                    keys::SCENE_DEW_POINT,
                    td,
                    h_act,
                    MarkerStyle {
                        color: palette::ACTUAL_GREEN,
                        size: 20.0,
                        outline: palette::WHITE,
                        outline_width: 3.0,
                    },
                );
                p.opacity = pulse;
                p.tooltip = dew_tooltip.clone();
                self.marker(
                    Role::ActualContentCircle,
                    keys::SCENE_DEW_POINT,
                    td,
                    h_act,
                    MarkerStyle {
                        color: palette::CURVE_BLUE,
                        size: 12.0,
                        outline: palette::WHITE,
                        outline_width: 2.0,
                    },
                )
                .tooltip = dew_tooltip;

                let x = self.step_text_x(point);
                let y = h_act - self.y_span() * STEP_TEXT_DROP_RATIO;
                self.text(
                    Role::ActualContentLabel,
                    keys::SCENE_ACTUAL_CONTENT,
                    x,
                    y,
                    tooltip.clone(),
                    step_text(palette::ACTUAL_GREEN, false),
                )
                .tooltip = tooltip.clone();
                let p = self.line(
                    Role::ActualContentTieLine,
                    keys::SCENE_TIE_LINE,
                    vec![t, axis_x],
                    vec![h_act, h_act],
                    tie(palette::ACTUAL_GREEN),
                );
                p.opacity = pulse;
                p.tooltip = tooltip;
            }
        }

        if n == 3 {
            let formula = self.tr.fill(
                keys::TEXT_RH_FORMULA,
                &[
                    ("actual", self.fmt.fixed(h_act, 1)),
                    ("max", self.fmt.fixed(h_max, 1)),
                    ("rh", self.fmt.fixed(point.relative_humidity, 1)),
                ],
            );
            let x = self.step_text_x(point);
            self.text(
                Role::FormulaLabel,
                keys::SCENE_FORMULA,
                x,
                h_max / 2.0,
                formula.clone(),
                step_text(palette::FORMULA_PURPLE, true),
            )
            .tooltip = formula.clone();

            self.pulsing_value(
                Role::ActualContentMarker,
                Role::ActualContentValue,
                keys::SCENE_ACTUAL_AT_DEW_POINT,
                td,
                h_act,
                palette::ACTUAL_GREEN,
                pulse,
            );
            self.pulsing_value(
                Role::MaxContentMarker,
                Role::MaxContentValue,
                keys::SCENE_MAX_AT_TEMPERATURE,
                t,
                h_max,
                palette::MAXIMUM_RED,
                pulse,
            );
        }
    }

    /// 3단계의 커다란 펄스 점과 그 왼쪽의 값 라벨.
    #[allow(clippy::too_many_arguments)]
    fn pulsing_value(
        &mut self,
        marker_role: Role,
        value_role: Role,
        name_key: &str,
        x: f64,
        humidity: f64,
        color: super::Color,
        pulse: f64,
    ) {
        let tooltip = self.content_tooltip(name_key, humidity);
        let p = self.marker(
            marker_role,
            name_key,
            x,
            humidity,
            MarkerStyle {
                color,
                size: 25.0,
                outline: palette::WHITE,
                outline_width: 4.0,
            },
        );
        p.opacity = pulse;
        p.tooltip = tooltip.clone();

        let value = self
            .tr
            .fill(keys::TEXT_CONTENT_VALUE, &[("h", self.fmt.fixed(humidity, 1))]);
        let value_x = x - self.x_span() * VALUE_TEXT_OFFSET_RATIO;
        self.text(
            value_role,
            name_key,
            value_x,
            humidity,
            value,
            TextStyle {
                color,
                size: 14.0,
                bold: true,
                anchor: TextAnchor::MiddleRight,
            },
        )
        .tooltip = tooltip;
    }
}

fn thick(color: super::Color) -> LineStyle {
    LineStyle {
        color,
        width: 6.0,
        dash: Dash::Solid,
        fill_to_zero: None,
    }
}

fn tie(color: super::Color) -> LineStyle {
    LineStyle {
        color,
        width: 3.0,
        dash: Dash::Dotted,
        fill_to_zero: None,
    }
}

fn step_text(color: super::Color, bold: bool) -> TextStyle {
    TextStyle {
        color,
        size: 16.0,
        bold,
        anchor: TextAnchor::MiddleRight,
    }
}
