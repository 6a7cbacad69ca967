//! 애플리케이션 상태와 이벤트 리듀서, CLI 메인 루프.
//!
//! 모든 UI 이벤트는 [`Event`]로 표현되고 [`AppState::apply`]가 새 상태를 만든다.
//! 적용 순서: 입력 반영 → 교차점 재계산 → 필요 시 가시 영역 조정 → (렌더 시) 장면 생성.

use std::time::{Duration, Instant};

use crate::config::{Config, ConfigError};
use crate::explanation::{ExplanationCommand, ExplanationState};
use crate::i18n::{self, Translator};
use crate::input::{DewPointRule, Field, InputHint, InputState};
use crate::psychro::{dew_point_from_rh, IntersectionPoint};
use crate::scene::{build_scene, Scene, SceneFlags};
use crate::ui_cli::{self, MenuChoice};
use crate::viewport::{Viewport, ViewportController};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 명령행으로 받은 값이 유효하지 않음
    #[error("유효하지 않은 입력 {field}={value}: {hint:?}")]
    InvalidInput {
        field: &'static str,
        value: String,
        hint: InputHint,
    },
    /// 장면 직렬화 오류
    #[error("장면 저장 오류: {0}")]
    Export(#[from] toml::ser::Error),
    /// 그래프 이미지 저장 오류
    #[error("이미지 저장 오류: {0}")]
    Image(#[from] image::ImageError),
}

/// 상태를 바꾸는 UI 이벤트.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// 기온 필드 문자열 변경
    SetTemperature(String),
    /// 이슬점 필드 문자열 변경
    SetDewPoint(String),
    /// 사용자 팬/줌 결과
    PanZoom {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    /// 설명 모드 명령
    Explain(ExplanationCommand),
    /// 불포화 영역 표시 토글
    ToggleUnsaturated,
    /// 이슬점 규칙 변경
    SetDewPointRule(DewPointRule),
    /// 두 입력을 지우고 설명/가시 영역을 초기화
    ClearAndReset,
    /// 입력은 두고 가시 영역만 초기 영역으로 되돌림(그래프 더블클릭)
    ResetView,
    /// 펄스 타이머 진행
    Tick,
}

/// 한 화면의 전체 상태.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    inputs: InputState,
    viewport: ViewportController,
    explanation: ExplanationState,
    show_unsaturated: bool,
    dew_point_rule: DewPointRule,
    rejected: Option<(Field, InputHint)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            inputs: InputState::default(),
            viewport: ViewportController::new(config.default_viewport),
            explanation: ExplanationState::default(),
            show_unsaturated: config.show_unsaturated,
            dew_point_rule: config.dew_point_rule,
            rejected: None,
        }
    }

    pub fn inputs(&self) -> &InputState {
        &self.inputs
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.current()
    }

    pub fn explanation(&self) -> &ExplanationState {
        &self.explanation
    }

    pub fn show_unsaturated(&self) -> bool {
        self.show_unsaturated
    }

    pub fn dew_point_rule(&self) -> DewPointRule {
        self.dew_point_rule
    }

    pub fn intersection(&self) -> Option<IntersectionPoint> {
        self.inputs.intersection()
    }

    /// 필드 옆에 띄울 힌트. 직전에 거부된 값이 우선이고, 그다음 현재 값 기준 순서 위반이다.
    pub fn hint(&self, field: Field) -> Option<InputHint> {
        match self.rejected {
            Some((f, hint)) if f == field => Some(hint),
            _ if field == Field::DewPoint => self.inputs.dew_point_hint(self.dew_point_rule),
            _ => None,
        }
    }

    /// 현재 상태의 장면.
    pub fn scene(&self, tr: &Translator) -> Scene {
        build_scene(
            &self.inputs,
            &self.viewport.current(),
            &self.explanation,
            SceneFlags {
                show_unsaturated: self.show_unsaturated,
            },
            tr,
        )
    }

    /// 이벤트를 적용한 새 상태를 돌려준다.
    pub fn apply(mut self, event: &Event, now: Duration) -> Self {
        self.update(event, now);
        self
    }

    /// 제자리 갱신. 눈에 보이는 상태가 바뀌었으면 `true`.
    pub fn update(&mut self, event: &Event, now: Duration) -> bool {
        match event {
            Event::SetTemperature(text) => self.set_field(Field::Temperature, text),
            Event::SetDewPoint(text) => self.set_field(Field::DewPoint, text),
            Event::PanZoom {
                x_min,
                x_max,
                y_min,
                y_max,
            } => self.viewport.apply_manual(*x_min, *x_max, *y_min, *y_max),
            Event::Explain(command) => {
                let has_intersection = self.intersection().is_some();
                self.explanation.apply(*command, now, has_intersection)
            }
            Event::ToggleUnsaturated => {
                self.show_unsaturated = !self.show_unsaturated;
                true
            }
            Event::SetDewPointRule(rule) => {
                let changed = self.dew_point_rule != *rule;
                self.dew_point_rule = *rule;
                changed
            }
            Event::ClearAndReset => {
                self.inputs.clear();
                self.rejected = None;
                self.explanation.stop();
                self.viewport.reset();
                tracing::debug!("inputs cleared and view reset");
                true
            }
            Event::ResetView => {
                let before = self.viewport.current();
                self.viewport.reset();
                before != self.viewport.current()
            }
            Event::Tick => self.explanation.tick(now),
        }
    }

    fn set_field(&mut self, field: Field, text: &str) -> bool {
        let before = self.inputs.clone();
        match self.inputs.set(field, text, self.dew_point_rule) {
            Ok(()) => self.rejected = None,
            Err(hint) => {
                tracing::debug!(?field, text, ?hint, "input rejected, previous value kept");
                self.rejected = Some((field, hint));
                return true;
            }
        }
        if self.inputs == before {
            return false;
        }
        if self.inputs.intersection().is_none() {
            self.explanation.stop();
        }
        if let Some((t, td)) = self.inputs.both() {
            self.viewport.auto_adjust(t, td);
        }
        true
    }
}

/// 명령행 값으로 한 번 계산하는 요청.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneShot {
    pub temperature: Option<String>,
    pub dew_point: Option<String>,
    /// 기온과 함께 주면 이 상대습도(%)의 이슬점을 계산해 이슬점 대신 쓴다.
    pub rh: Option<f64>,
}

impl OneShot {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.dew_point.is_none() && self.rh.is_none()
    }
}

/// 한 번 계산 모드. 결과, 공식, 장면 요약을 문자열로 돌려준다.
///
/// 값이 거부되면 [`AppError::InvalidInput`]을 돌려준다.
pub fn run_once(request: &OneShot, config: &Config, tr: &Translator) -> Result<String, AppError> {
    let fmt = tr.number_format();
    let mut out = String::new();
    let mut state = AppState::new(config);
    if let Some(t) = &request.temperature {
        state = apply_checked(state, Field::Temperature, t)?;
    }
    let dew_point = match (request.rh, state.inputs().temperature()) {
        (Some(rh), Some(t)) => {
            let td = dew_point_from_rh(t, rh);
            if !td.is_finite() || rh <= 0.0 {
                return Err(AppError::InvalidInput {
                    field: "rh",
                    value: rh.to_string(),
                    hint: InputHint::OutOfRange,
                });
            }
            out.push_str(&tr.fill(
                i18n::keys::RESULT_DEW_POINT_FROM_RH,
                &[
                    ("t", fmt.trimmed(t)),
                    ("rh", fmt.trimmed(rh)),
                    ("td", fmt.fixed(td, 2)),
                ],
            ));
            out.push('\n');
            Some(td.to_string())
        }
        (Some(rh), None) => {
            return Err(AppError::InvalidInput {
                field: "rh",
                value: rh.to_string(),
                hint: InputHint::NotANumber,
            })
        }
        (None, _) => request.dew_point.clone(),
    };
    if let Some(td) = dew_point {
        state = apply_checked(state, Field::DewPoint, &td)?;
    }
    out.push_str(&ui_cli::status_report(tr, &state));
    out.push_str(&ui_cli::scene_report(tr, &state.scene(tr)));
    Ok(out)
}

fn apply_checked(state: AppState, field: Field, text: &str) -> Result<AppState, AppError> {
    let event = match field {
        Field::Temperature => Event::SetTemperature(text.to_string()),
        Field::DewPoint => Event::SetDewPoint(text.to_string()),
    };
    let next = state.apply(&event, Duration::ZERO);
    match next.hint(field) {
        Some(hint) => Err(AppError::InvalidInput {
            field: match field {
                Field::Temperature => "temperature",
                Field::DewPoint => "dew-point",
            },
            value: text.to_string(),
            hint,
        }),
        None => Ok(next),
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let epoch = Instant::now();
    let mut state = AppState::new(config);
    loop {
        let now = epoch.elapsed();
        state = state.apply(&Event::Tick, now);
        let event = match ui_cli::main_menu(tr)? {
            MenuChoice::Temperature => ui_cli::prompt_field(tr, Field::Temperature)?,
            MenuChoice::DewPoint => ui_cli::prompt_field(tr, Field::DewPoint)?,
            MenuChoice::ToggleUnsaturated => Some(Event::ToggleUnsaturated),
            MenuChoice::Explanation => ui_cli::prompt_explanation(tr, &state)?,
            MenuChoice::Zoom => ui_cli::prompt_zoom(tr)?,
            MenuChoice::ShowScene => {
                ui_cli::print_scene(tr, &state.scene(tr));
                None
            }
            MenuChoice::Reset => Some(Event::ClearAndReset),
            MenuChoice::Settings => {
                let event = ui_cli::handle_settings(tr, config)?;
                config.save()?;
                event
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        if let Some(event) = event {
            state = state.apply(&event, epoch.elapsed());
            ui_cli::print_status(tr, &state);
        }
    }
    Ok(())
}
