use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::format::{DecimalSeparator, NumberFormat};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const DECIMAL_SEPARATOR: &str = "number.decimal_separator";

    pub const CHART_TITLE: &str = "chart.title";
    pub const AXIS_TEMPERATURE: &str = "chart.axis_temperature";
    pub const AXIS_HUMIDITY: &str = "chart.axis_humidity";

    pub const SCENE_CURVE: &str = "scene.curve";
    pub const SCENE_UNSATURATED: &str = "scene.unsaturated";
    pub const SCENE_UNSATURATED_TOOLTIP: &str = "scene.unsaturated_tooltip";
    pub const SCENE_TEMPERATURE_LINE: &str = "scene.temperature_line";
    pub const SCENE_DEW_POINT_LINE: &str = "scene.dew_point_line";
    pub const SCENE_DEW_POINT: &str = "scene.dew_point";
    pub const SCENE_INTERSECTION: &str = "scene.intersection";
    pub const SCENE_AIR_MASS: &str = "scene.air_mass";
    pub const SCENE_MAX_CONTENT: &str = "scene.max_content";
    pub const SCENE_ACTUAL_CONTENT: &str = "scene.actual_content";
    pub const SCENE_TIE_LINE: &str = "scene.tie_line";
    pub const SCENE_FORMULA: &str = "scene.formula";
    pub const SCENE_MAX_AT_TEMPERATURE: &str = "scene.max_at_temperature";
    pub const SCENE_ACTUAL_AT_DEW_POINT: &str = "scene.actual_at_dew_point";

    pub const TOOLTIP_CURVE: &str = "tooltip.curve";
    pub const TOOLTIP_TEMPERATURE: &str = "tooltip.temperature";
    pub const TOOLTIP_DEW_POINT: &str = "tooltip.dew_point";
    pub const TOOLTIP_INTERSECTION: &str = "tooltip.intersection";
    pub const TOOLTIP_CONTENT: &str = "tooltip.content";
    pub const TEXT_CONTENT_VALUE: &str = "text.content_value";
    pub const TEXT_RH_FORMULA: &str = "text.rh_formula";
    pub const TEXT_RH_FORMULA_GENERAL: &str = "text.rh_formula_general";
    pub const TEXT_RH_FORMULA_PERCENT: &str = "text.rh_formula_percent";

    pub const HINT_TEMPERATURE_RANGE: &str = "hint.temperature_range";
    pub const HINT_DEW_POINT_RANGE: &str = "hint.dew_point_range";
    pub const HINT_DEW_POINT_ORDER: &str = "hint.dew_point_order";
    pub const HINT_NOT_A_NUMBER: &str = "hint.not_a_number";

    pub const STEP_1: &str = "step.1";
    pub const STEP_2: &str = "step.2";
    pub const STEP_3: &str = "step.3";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_TEMPERATURE: &str = "result.temperature";
    pub const RESULT_DEW_POINT: &str = "result.dew_point";
    pub const RESULT_HUMIDITY: &str = "result.humidity";
    pub const RESULT_RELATIVE_HUMIDITY: &str = "result.relative_humidity";
    pub const RESULT_DEW_POINT_FROM_RH: &str = "result.dew_point_from_rh";
    pub const RESULT_MAGNUS_RELATIVE_HUMIDITY: &str = "result.magnus_relative_humidity";
    pub const RESULT_NO_INTERSECTION: &str = "result.no_intersection";

    pub const GUI_INTRO: &str = "gui.intro";
    pub const GUI_TEMPERATURE_LABEL: &str = "gui.temperature_label";
    pub const GUI_TEMPERATURE_PLACEHOLDER: &str = "gui.temperature_placeholder";
    pub const GUI_TEMPERATURE_NOTE: &str = "gui.temperature_note";
    pub const GUI_DEW_POINT_LABEL: &str = "gui.dew_point_label";
    pub const GUI_DEW_POINT_PLACEHOLDER: &str = "gui.dew_point_placeholder";
    pub const GUI_DEW_POINT_NOTE: &str = "gui.dew_point_note";
    pub const GUI_SHOW_UNSATURATED: &str = "gui.show_unsaturated";
    pub const GUI_HIDE_UNSATURATED: &str = "gui.hide_unsaturated";
    pub const GUI_EXPLAIN: &str = "gui.explain";
    pub const GUI_STOP: &str = "gui.stop";
    pub const GUI_RESET: &str = "gui.reset";
    pub const GUI_PREVIOUS: &str = "gui.previous";
    pub const GUI_NEXT: &str = "gui.next";
    pub const GUI_EXPORT: &str = "gui.export";
    pub const GUI_EXPORTED: &str = "gui.exported";
    pub const GUI_EXPORT_PNG: &str = "gui.export_png";

    pub const CLI_TITLE: &str = "cli.title";
    pub const CLI_MENU_TEMPERATURE: &str = "cli.menu_temperature";
    pub const CLI_MENU_DEW_POINT: &str = "cli.menu_dew_point";
    pub const CLI_MENU_UNSATURATED: &str = "cli.menu_unsaturated";
    pub const CLI_MENU_EXPLAIN: &str = "cli.menu_explain";
    pub const CLI_MENU_ZOOM: &str = "cli.menu_zoom";
    pub const CLI_MENU_SCENE: &str = "cli.menu_scene";
    pub const CLI_MENU_RESET: &str = "cli.menu_reset";
    pub const CLI_MENU_SETTINGS: &str = "cli.menu_settings";
    pub const CLI_MENU_EXIT: &str = "cli.menu_exit";
    pub const CLI_PROMPT_MENU: &str = "cli.prompt_menu";
    pub const CLI_PROMPT_SELECT: &str = "cli.prompt_select";
    pub const CLI_INVALID_SELECTION: &str = "cli.invalid_selection";
    pub const CLI_PROMPT_TEMPERATURE: &str = "cli.prompt_temperature";
    pub const CLI_PROMPT_DEW_POINT: &str = "cli.prompt_dew_point";
    pub const CLI_EXPLAIN_OPTIONS: &str = "cli.explain_options";
    pub const CLI_EXPLAIN_UNAVAILABLE: &str = "cli.explain_unavailable";
    pub const CLI_PROMPT_ZOOM: &str = "cli.prompt_zoom";
    pub const CLI_INVALID_ZOOM: &str = "cli.invalid_zoom";
    pub const CLI_VIEWPORT: &str = "cli.viewport";
    pub const CLI_PRIMITIVES: &str = "cli.primitives";
    pub const CLI_INVALID_NUMBER: &str = "cli.invalid_number";
    pub const CLI_KEPT_PREVIOUS: &str = "cli.kept_previous";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_RULE: &str = "settings.current_rule";
    pub const SETTINGS_RULE_OPTIONS: &str = "settings.rule_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Da,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("da") {
            Language::Da
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Da => "da",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    code: String,
    overrides: Option<HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new("da")
    }
}

impl Translator {
    /// 언어 코드에 따라 번역기를 생성한다. 내장 표는 da/en이며 그 밖의 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            code: lang_code.trim().to_lowercase(),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "language pack loaded");
        }
        Self {
            overrides,
            ..Self::new(lang_code)
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 요청된 언어 코드(정규화 후). 팩이 있는 언어는 내장 표와 다를 수 있다.
    pub fn language_code(&self) -> &str {
        &self.code
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 내장 표 → 영어 → 키 순으로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::Da => da(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or(key)
    }

    /// `{name}` 자리표시자를 채운 번역문.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }

    /// 언어팩의 `number.decimal_separator`가 있으면 그것을, 없으면 언어 관례를 따른다.
    pub fn number_format(&self) -> NumberFormat {
        let separator = self
            .lookup(keys::DECIMAL_SEPARATOR)
            .and_then(DecimalSeparator::from_symbol)
            .unwrap_or_else(|| DecimalSeparator::for_language(&self.code));
        NumberFormat::new(separator)
    }
}

/// `{key}` 형태의 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "da".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "da" | "da-dk" => Some("da".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en".into()),
        "ko" | "ko-kr" => Some("ko-kr".into()),
        other if other.starts_with("da") => Some("da".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default();
    normalize_lang(lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&value) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 (중첩 가능한) 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., ko-kr)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., ko)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = match toml::from_str(src) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "language pack is not valid TOML");
            return None;
        }
    };
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn da(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Fejl",
        APP_EXIT => "Programmet afsluttes.",
        CHART_TITLE => "LUFTENS MÆTNINGSKURVE",
        AXIS_TEMPERATURE => "Temperatur i °C",
        AXIS_HUMIDITY => "Luftfugtighed i g vanddamp / m³ luft",
        SCENE_CURVE => "Mætningskurve",
        SCENE_UNSATURATED => "Umættet",
        SCENE_UNSATURATED_TOOLTIP => "Umættet område",
        SCENE_TEMPERATURE_LINE => "Temperatur streg",
        SCENE_DEW_POINT_LINE => "Dugpunkt streg",
        SCENE_DEW_POINT => "Dugpunkt",
        SCENE_INTERSECTION => "Krydsningspunkt",
        SCENE_AIR_MASS => "Luftmassen",
        SCENE_MAX_CONTENT => "Maksimalt vandindhold",
        SCENE_ACTUAL_CONTENT => "Faktisk vandindhold",
        SCENE_TIE_LINE => "Blinkende streg til y-akse",
        SCENE_FORMULA => "Beregningsformel",
        SCENE_MAX_AT_TEMPERATURE => "Maksimalt indhold (ved temperatur)",
        SCENE_ACTUAL_AT_DEW_POINT => "Faktisk indhold (ved dugpunkt)",
        TOOLTIP_CURVE => "T: {t} °C\nLuftfugtighed: {h} g/m³",
        TOOLTIP_TEMPERATURE => "T: {t} °C\nLuftfugtighed: {h} g/m³",
        TOOLTIP_DEW_POINT => "Dugpunkt: {t} °C\nLuftfugtighed: {h} g/m³",
        TOOLTIP_INTERSECTION => {
            "Krydsningspunkt\nT: {t} °C\nDugpunkt: {td} °C\nLuftfugtighed: {h} g/m³\nRH: {rh}%"
        }
        TOOLTIP_CONTENT => "{label}: {h} g/m³",
        TEXT_CONTENT_VALUE => "{h} g/m³",
        TEXT_RH_FORMULA => "RH = {actual} g/m³ / {max} g/m³ = {rh}%",
        TEXT_RH_FORMULA_GENERAL => "RH = faktisk indhold / maksimalt indhold",
        TEXT_RH_FORMULA_PERCENT => "RH = {actual} / {max} × 100 = {rh}%",
        HINT_TEMPERATURE_RANGE => "Temperatur skal være mellem -45°C og 60°C",
        HINT_DEW_POINT_RANGE => "Dugpunkt skal være mellem -45°C og 60°C",
        HINT_DEW_POINT_ORDER => "Dugpunkt kan ikke være højere end temperaturen",
        HINT_NOT_A_NUMBER => "Indtast et tal",
        STEP_1 => "Trin 1: Maksimalt vandindhold",
        STEP_2 => "Trin 2: Faktisk vandindhold",
        STEP_3 => "Trin 3: Beregning",
        RESULT_HEADING => "Beregning af relativ luftfugtighed",
        RESULT_TEMPERATURE => "Temperatur",
        RESULT_DEW_POINT => "Dugpunkt",
        RESULT_HUMIDITY => "Luftfugtighed",
        RESULT_RELATIVE_HUMIDITY => "Relativ fugtighed (faktisk / maksimal)",
        RESULT_MAGNUS_RELATIVE_HUMIDITY => "Relativ fugtighed (Magnus-formel)",
        RESULT_DEW_POINT_FROM_RH => "Dugpunkt ved {t} °C og {rh}% RH: {td} °C",
        RESULT_NO_INTERSECTION => "Indtast både temperatur og dugpunkt.",
        GUI_INTRO => {
            "Mætningskurven viser den maksimale mængde vanddamp (g/m³) som luften kan indeholde ved forskellige temperaturer."
        }
        GUI_TEMPERATURE_LABEL => "Temperatur (°C)",
        GUI_TEMPERATURE_PLACEHOLDER => "Indtast temperatur (-45 til 60°C)",
        GUI_TEMPERATURE_NOTE => "Rød streg tegnes fra x-aksen op til kurven",
        GUI_DEW_POINT_LABEL => "Dugpunktstemperatur (°C)",
        GUI_DEW_POINT_PLACEHOLDER => "Indtast dugpunkt (-45 til 60°C)",
        GUI_DEW_POINT_NOTE => "Grøn streg tegnes vandret fra dugpunktet",
        GUI_SHOW_UNSATURATED => "Vis umættet",
        GUI_HIDE_UNSATURATED => "Skjul umættet",
        GUI_EXPLAIN => "Forklar beregningen",
        GUI_STOP => "Stop forklaring",
        GUI_RESET => "Ryd og nulstil",
        GUI_PREVIOUS => "← Forrige",
        GUI_NEXT => "Næste →",
        GUI_EXPORT => "Gem scene",
        GUI_EXPORT_PNG => "Gem PNG",
        GUI_EXPORTED => "Scene gemt:",
        CLI_TITLE => "\n=== Luftens mætningskurve ===",
        CLI_MENU_TEMPERATURE => "1) Temperatur",
        CLI_MENU_DEW_POINT => "2) Dugpunkt",
        CLI_MENU_UNSATURATED => "3) Vis/skjul umættet område",
        CLI_MENU_EXPLAIN => "4) Forklaring",
        CLI_MENU_ZOOM => "5) Zoom",
        CLI_MENU_SCENE => "6) Vis scene",
        CLI_MENU_RESET => "7) Ryd og nulstil",
        CLI_MENU_SETTINGS => "8) Indstillinger",
        CLI_MENU_EXIT => "0) Afslut",
        CLI_PROMPT_MENU => "Vælg menu: ",
        CLI_PROMPT_SELECT => "Vælg: ",
        CLI_INVALID_SELECTION => "Ugyldigt valg. Prøv igen.",
        CLI_PROMPT_TEMPERATURE => "Temperatur (°C, tom for at rydde): ",
        CLI_PROMPT_DEW_POINT => "Dugpunkt (°C, tom for at rydde): ",
        CLI_EXPLAIN_OPTIONS => "1) Start  2) Næste  3) Forrige  4) Stop",
        CLI_EXPLAIN_UNAVAILABLE => "Forklaringen kræver gyldig temperatur og dugpunkt.",
        CLI_PROMPT_ZOOM => "xMin xMax yMin yMax: ",
        CLI_INVALID_ZOOM => "Ugyldigt område, visningen er uændret.",
        CLI_VIEWPORT => "Visning",
        CLI_PRIMITIVES => "Elementer",
        CLI_INVALID_NUMBER => "Indtast et tal.",
        CLI_KEPT_PREVIOUS => "Værdien blev ikke brugt:",
        SETTINGS_HEADING => "\n-- Indstillinger --",
        SETTINGS_CURRENT_RULE => "Dugpunktsregel:",
        SETTINGS_RULE_OPTIONS => "1) Dugpunkt ≤ temperatur  2) Tillad dugpunkt > temperatur",
        SETTINGS_PROMPT_CHANGE => "Nummer (tom for at annullere): ",
        SETTINGS_INVALID => "Ugyldigt valg, intet ændret.",
        SETTINGS_SAVED => "Dugpunktsregel sat til:",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        CHART_TITLE => "SATURATION CURVE OF AIR",
        AXIS_TEMPERATURE => "Temperature in °C",
        AXIS_HUMIDITY => "Humidity in g water vapour / m³ air",
        SCENE_CURVE => "Saturation curve",
        SCENE_UNSATURATED => "Unsaturated",
        SCENE_UNSATURATED_TOOLTIP => "Unsaturated region",
        SCENE_TEMPERATURE_LINE => "Temperature line",
        SCENE_DEW_POINT_LINE => "Dew point line",
        SCENE_DEW_POINT => "Dew point",
        SCENE_INTERSECTION => "Intersection",
        SCENE_AIR_MASS => "Air mass",
        SCENE_MAX_CONTENT => "Maximum water content",
        SCENE_ACTUAL_CONTENT => "Actual water content",
        SCENE_TIE_LINE => "Blinking line to y-axis",
        SCENE_FORMULA => "Formula",
        SCENE_MAX_AT_TEMPERATURE => "Maximum content (at temperature)",
        SCENE_ACTUAL_AT_DEW_POINT => "Actual content (at dew point)",
        TOOLTIP_CURVE => "T: {t} °C\nHumidity: {h} g/m³",
        TOOLTIP_TEMPERATURE => "T: {t} °C\nHumidity: {h} g/m³",
        TOOLTIP_DEW_POINT => "Dew point: {t} °C\nHumidity: {h} g/m³",
        TOOLTIP_INTERSECTION => {
            "Intersection\nT: {t} °C\nDew point: {td} °C\nHumidity: {h} g/m³\nRH: {rh}%"
        }
        TOOLTIP_CONTENT => "{label}: {h} g/m³",
        TEXT_CONTENT_VALUE => "{h} g/m³",
        TEXT_RH_FORMULA => "RH = {actual} g/m³ / {max} g/m³ = {rh}%",
        TEXT_RH_FORMULA_GENERAL => "RH = actual content / maximum content",
        TEXT_RH_FORMULA_PERCENT => "RH = {actual} / {max} × 100 = {rh}%",
        HINT_TEMPERATURE_RANGE => "Temperature must be between -45°C and 60°C",
        HINT_DEW_POINT_RANGE => "Dew point must be between -45°C and 60°C",
        HINT_DEW_POINT_ORDER => "Dew point cannot be higher than the temperature",
        HINT_NOT_A_NUMBER => "Enter a number",
        STEP_1 => "Step 1: Maximum water content",
        STEP_2 => "Step 2: Actual water content",
        STEP_3 => "Step 3: Calculation",
        RESULT_HEADING => "Relative humidity calculation",
        RESULT_TEMPERATURE => "Temperature",
        RESULT_DEW_POINT => "Dew point",
        RESULT_HUMIDITY => "Humidity",
        RESULT_RELATIVE_HUMIDITY => "Relative humidity (actual / maximum)",
        RESULT_MAGNUS_RELATIVE_HUMIDITY => "Relative humidity (Magnus formula)",
        RESULT_DEW_POINT_FROM_RH => "Dew point at {t} °C and {rh}% RH: {td} °C",
        RESULT_NO_INTERSECTION => "Enter both temperature and dew point.",
        GUI_INTRO => {
            "The saturation curve shows the maximum amount of water vapour (g/m³) air can hold at different temperatures."
        }
        GUI_TEMPERATURE_LABEL => "Temperature (°C)",
        GUI_TEMPERATURE_PLACEHOLDER => "Enter temperature (-45 to 60°C)",
        GUI_TEMPERATURE_NOTE => "The red line is drawn from the x-axis up to the curve",
        GUI_DEW_POINT_LABEL => "Dew point temperature (°C)",
        GUI_DEW_POINT_PLACEHOLDER => "Enter dew point (-45 to 60°C)",
        GUI_DEW_POINT_NOTE => "The green line is drawn horizontally from the dew point",
        GUI_SHOW_UNSATURATED => "Show unsaturated",
        GUI_HIDE_UNSATURATED => "Hide unsaturated",
        GUI_EXPLAIN => "Explain the calculation",
        GUI_STOP => "Stop explanation",
        GUI_RESET => "Clear and reset",
        GUI_PREVIOUS => "← Previous",
        GUI_NEXT => "Next →",
        GUI_EXPORT => "Save scene",
        GUI_EXPORT_PNG => "Save PNG",
        GUI_EXPORTED => "Scene saved:",
        CLI_TITLE => "\n=== Saturation curve of air ===",
        CLI_MENU_TEMPERATURE => "1) Temperature",
        CLI_MENU_DEW_POINT => "2) Dew point",
        CLI_MENU_UNSATURATED => "3) Show/hide unsaturated region",
        CLI_MENU_EXPLAIN => "4) Explanation",
        CLI_MENU_ZOOM => "5) Zoom",
        CLI_MENU_SCENE => "6) Show scene",
        CLI_MENU_RESET => "7) Clear and reset",
        CLI_MENU_SETTINGS => "8) Settings",
        CLI_MENU_EXIT => "0) Exit",
        CLI_PROMPT_MENU => "Select menu: ",
        CLI_PROMPT_SELECT => "Select: ",
        CLI_INVALID_SELECTION => "Invalid selection. Try again.",
        CLI_PROMPT_TEMPERATURE => "Temperature (°C, empty to clear): ",
        CLI_PROMPT_DEW_POINT => "Dew point (°C, empty to clear): ",
        CLI_EXPLAIN_OPTIONS => "1) Start  2) Next  3) Previous  4) Stop",
        CLI_EXPLAIN_UNAVAILABLE => "The explanation needs a valid temperature and dew point.",
        CLI_PROMPT_ZOOM => "xMin xMax yMin yMax: ",
        CLI_INVALID_ZOOM => "Invalid bounds, view unchanged.",
        CLI_VIEWPORT => "View",
        CLI_PRIMITIVES => "Primitives",
        CLI_INVALID_NUMBER => "Enter a number.",
        CLI_KEPT_PREVIOUS => "Value not applied:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_RULE => "Dew point rule:",
        SETTINGS_RULE_OPTIONS => "1) Dew point ≤ temperature  2) Allow dew point > temperature",
        SETTINGS_PROMPT_CHANGE => "Number (empty to cancel): ",
        SETTINGS_INVALID => "Invalid selection, nothing changed.",
        SETTINGS_SAVED => "Dew point rule set to:",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_locale_strings() {
        assert_eq!(normalize_locale_string("da_DK.UTF-8").as_deref(), Some("da"));
        assert_eq!(normalize_locale_string("en-GB").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("ko_KR").as_deref(), Some("ko-kr"));
        assert_eq!(normalize_locale_string("fr_FR"), None);
    }

    #[test]
    fn cli_argument_wins_over_config() {
        assert_eq!(resolve_language("en", Some("da")), "en");
        assert_eq!(resolve_language("auto", Some("da")), "da");
    }

    #[test]
    fn every_danish_key_has_english_text() {
        for key in [keys::SCENE_CURVE, keys::TOOLTIP_INTERSECTION, keys::STEP_3, keys::CLI_TITLE] {
            assert!(da(key).is_some());
            assert!(en(key).is_some());
        }
    }

    #[test]
    fn korean_pack_overrides_and_falls_back() {
        let tr = Translator::new_with_pack("ko-kr", Some("does-not-exist"));
        assert_ne!(tr.t(keys::SCENE_CURVE), "Saturation curve");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }
}
