use std::fmt::Write as _;
use std::io::{self, Write};

use crate::app::{AppError, AppState, Event};
use crate::config::Config;
use crate::explanation::ExplanationCommand;
use crate::i18n::{keys, Translator};
use crate::input::{DewPointRule, Field, InputHint};
use crate::psychro::relative_humidity;
use crate::scene::{PrimitiveKind, Scene};
use crate::viewport::Viewport;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Temperature,
    DewPoint,
    ToggleUnsaturated,
    Explanation,
    Zoom,
    ShowScene,
    Reset,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::CLI_TITLE));
    for key in [
        keys::CLI_MENU_TEMPERATURE,
        keys::CLI_MENU_DEW_POINT,
        keys::CLI_MENU_UNSATURATED,
        keys::CLI_MENU_EXPLAIN,
        keys::CLI_MENU_ZOOM,
        keys::CLI_MENU_SCENE,
        keys::CLI_MENU_RESET,
        keys::CLI_MENU_SETTINGS,
        keys::CLI_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::CLI_PROMPT_MENU))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Temperature),
            "2" => return Ok(MenuChoice::DewPoint),
            "3" => return Ok(MenuChoice::ToggleUnsaturated),
            "4" => return Ok(MenuChoice::Explanation),
            "5" => return Ok(MenuChoice::Zoom),
            "6" => return Ok(MenuChoice::ShowScene),
            "7" => return Ok(MenuChoice::Reset),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::CLI_INVALID_SELECTION)),
        }
    }
}

/// 기온/이슬점 문자열을 입력받아 이벤트로 만든다. 검증은 리듀서가 한다.
pub fn prompt_field(tr: &Translator, field: Field) -> Result<Option<Event>, AppError> {
    let (prompt, make): (&str, fn(String) -> Event) = match field {
        Field::Temperature => (tr.t(keys::CLI_PROMPT_TEMPERATURE), Event::SetTemperature),
        Field::DewPoint => (tr.t(keys::CLI_PROMPT_DEW_POINT), Event::SetDewPoint),
    };
    let text = read_line(prompt)?;
    Ok(Some(make(text.trim().to_string())))
}

/// 설명 모드 명령을 고른다.
pub fn prompt_explanation(tr: &Translator, state: &AppState) -> Result<Option<Event>, AppError> {
    if state.intersection().is_none() && !state.explanation().is_active() {
        println!("{}", tr.t(keys::CLI_EXPLAIN_UNAVAILABLE));
        return Ok(None);
    }
    println!("{}", tr.t(keys::CLI_EXPLAIN_OPTIONS));
    let sel = read_line(tr.t(keys::CLI_PROMPT_SELECT))?;
    let command = match sel.trim() {
        "1" => ExplanationCommand::Start,
        "2" => ExplanationCommand::Next,
        "3" => ExplanationCommand::Previous,
        "4" => ExplanationCommand::Stop,
        _ => {
            println!("{}", tr.t(keys::CLI_INVALID_SELECTION));
            return Ok(None);
        }
    };
    Ok(Some(Event::Explain(command)))
}

/// 네 숫자(xMin xMax yMin yMax)를 입력받아 팬/줌 이벤트를 만든다.
pub fn prompt_zoom(tr: &Translator) -> Result<Option<Event>, AppError> {
    let line = read_line(tr.t(keys::CLI_PROMPT_ZOOM))?;
    let values: Vec<f64> = line
        .split_whitespace()
        .filter_map(|s| s.replace(',', ".").parse::<f64>().ok())
        .collect();
    match values.as_slice() {
        &[x_min, x_max, y_min, y_max]
            if Viewport::from_bounds(x_min, x_max, y_min, y_max).is_some() =>
        {
            Ok(Some(Event::PanZoom {
                x_min,
                x_max,
                y_min,
                y_max,
            }))
        }
        _ => {
            println!("{}", tr.t(keys::CLI_INVALID_ZOOM));
            Ok(None)
        }
    }
}

/// 설정 메뉴를 처리한다. 규칙이 바뀌면 상태에 반영할 이벤트를 돌려준다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<Option<Event>, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_RULE), cfg.dew_point_rule);
    println!("{}", tr.t(keys::SETTINGS_RULE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(None);
    }
    cfg.dew_point_rule = match sel.trim() {
        "1" => DewPointRule::EnforceOrdering,
        "2" => DewPointRule::AllowAboveTemperature,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(None);
        }
    };
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.dew_point_rule);
    Ok(Some(Event::SetDewPointRule(cfg.dew_point_rule)))
}

/// 입력 힌트 문구.
pub fn hint_text<'a>(tr: &'a Translator, field: Field, hint: InputHint) -> &'a str {
    match (field, hint) {
        (_, InputHint::NotANumber) => tr.t(keys::HINT_NOT_A_NUMBER),
        (Field::Temperature, _) => tr.t(keys::HINT_TEMPERATURE_RANGE),
        (Field::DewPoint, InputHint::OutOfRange) => tr.t(keys::HINT_DEW_POINT_RANGE),
        (Field::DewPoint, InputHint::DewPointAboveTemperature) => {
            tr.t(keys::HINT_DEW_POINT_ORDER)
        }
    }
}

/// 입력값, 힌트, 교차점 결과와 설명 단계를 출력한다.
pub fn print_status(tr: &Translator, state: &AppState) {
    print!("{}", status_report(tr, state));
}

/// [`print_status`]가 출력하는 내용을 문자열로 만든다.
pub fn status_report(tr: &Translator, state: &AppState) -> String {
    let fmt = tr.number_format();
    let mut out = String::new();
    for field in [Field::Temperature, Field::DewPoint] {
        if let Some(hint) = state.hint(field) {
            let _ = writeln!(out, "{} {}", tr.t(keys::CLI_KEPT_PREVIOUS), hint_text(tr, field, hint));
        }
    }
    match state.intersection() {
        Some(point) => {
            let _ = writeln!(out, "{}", tr.t(keys::RESULT_HEADING));
            let rows = [
                (keys::RESULT_TEMPERATURE, format!("{} °C", fmt.trimmed(point.temperature))),
                (keys::RESULT_DEW_POINT, format!("{} °C", fmt.trimmed(point.dew_point))),
                (keys::RESULT_HUMIDITY, format!("{} g/m³", fmt.fixed(point.humidity, 2))),
                (
                    keys::RESULT_RELATIVE_HUMIDITY,
                    format!("{} %", fmt.fixed(point.relative_humidity, 1)),
                ),
                (
                    keys::RESULT_MAGNUS_RELATIVE_HUMIDITY,
                    format!(
                        "{} %",
                        fmt.fixed(relative_humidity(point.temperature, point.dew_point), 1)
                    ),
                ),
            ];
            for (key, value) in rows {
                let _ = writeln!(out, "  {}: {value}", tr.t(key));
            }
            let _ = writeln!(out, "  {}", tr.t(keys::TEXT_RH_FORMULA_GENERAL));
            let _ = writeln!(
                out,
                "  {}",
                tr.fill(
                    keys::TEXT_RH_FORMULA_PERCENT,
                    &[
                        ("actual", fmt.fixed(point.humidity, 1)),
                        ("max", fmt.fixed(point.max_humidity, 1)),
                        ("rh", fmt.fixed(point.relative_humidity, 1)),
                    ],
                )
            );
        }
        None => {
            let _ = writeln!(out, "{}", tr.t(keys::RESULT_NO_INTERSECTION));
        }
    }
    if let Some(step) = state.explanation().step() {
        let key = match step.number() {
            1 => keys::STEP_1,
            2 => keys::STEP_2,
            _ => keys::STEP_3,
        };
        let _ = writeln!(out, "[{}/3] {}", step.number(), tr.t(key));
    }
    out
}

/// 장면을 텍스트로 출력한다(터미널용 렌더러).
pub fn print_scene(tr: &Translator, scene: &Scene) {
    print!("{}", scene_report(tr, scene));
}

/// [`print_scene`]이 출력하는 내용을 문자열로 만든다.
pub fn scene_report(tr: &Translator, scene: &Scene) -> String {
    let fmt = tr.number_format();
    let v = scene.viewport;
    let mut out = String::new();
    let _ = writeln!(out, "{}", scene.title);
    let _ = writeln!(
        out,
        "{}: x=[{}, {}] y=[{}, {}]",
        tr.t(keys::CLI_VIEWPORT),
        fmt.fixed(v.x_min(), 1),
        fmt.fixed(v.x_max(), 1),
        fmt.fixed(v.y_range[0], 1),
        fmt.fixed(v.y_max(), 1)
    );
    let _ = writeln!(out, "{}: {}", tr.t(keys::CLI_PRIMITIVES), scene.primitives.len());
    for p in &scene.primitives {
        let kind = match &p.kind {
            PrimitiveKind::Line(style) => format!("line {:?} {}", style.dash, style.color.hex()),
            PrimitiveKind::Marker(style) => format!("marker {} {}", style.size, style.color.hex()),
            PrimitiveKind::Text { text, .. } => format!("text \"{text}\""),
        };
        let at = match (p.xs.first(), p.ys.first()) {
            (Some(x), Some(y)) if p.xs.len() <= 2 => {
                format!(" @ ({}, {})", fmt.fixed(*x, 2), fmt.fixed(*y, 2))
            }
            _ => format!(" [{} pts]", p.xs.len()),
        };
        let _ = writeln!(
            out,
            "  {:<24} {kind}{at} α={}",
            p.name,
            fmt.fixed(p.opacity, 1)
        );
    }
    out
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
