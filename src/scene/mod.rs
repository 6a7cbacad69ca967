//! 차트 렌더러에 넘기는 선언적 장면 기술.
//!
//! 각 요소는 좌표 배열, 스타일, 범례 표시 여부, 툴팁 문자열만 가진 정적 데이터다.
//! 렌더러는 이 목록을 순서대로 그리고 `viewport`를 축 범위로 쓴다.

pub mod builder;

use serde::Serialize;

use crate::format::NumberFormat;
use crate::i18n::fill_template;
use crate::viewport::Viewport;

pub use builder::{build_scene, SceneFlags};

/// RGBA 색상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb` 표기.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub mod palette {
    use super::Color;

    pub const CURVE_BLUE: Color = Color::rgb(0x3b, 0x82, 0xf6);
    pub const UNSATURATED_FILL: Color = Color::rgba(59, 130, 246, 26);
    pub const UNSATURATED_LINE: Color = Color::rgba(59, 130, 246, 128);
    pub const TEMPERATURE_RED: Color = Color::rgb(0xef, 0x44, 0x44);
    pub const MAXIMUM_RED: Color = Color::rgb(0xdc, 0x26, 0x26);
    pub const ACTUAL_GREEN: Color = Color::rgb(0x10, 0xb9, 0x81);
    pub const LABEL_BLUE: Color = Color::rgb(0x1e, 0x40, 0xaf);
    pub const INTERSECTION_DARK: Color = Color::rgb(0x1f, 0x29, 0x37);
    pub const FORMULA_PURPLE: Color = Color::rgb(0x7c, 0x3a, 0xed);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
}

/// 선 패턴.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dash {
    Solid,
    Dashed,
    Dotted,
}

/// 텍스트를 좌표점 기준으로 어디에 둘지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    /// 점 바로 위 가운데
    TopCenter,
    /// 점 오른쪽, 세로 가운데
    MiddleRight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
    pub dash: Dash,
    /// 선 아래(y=0까지)를 채울 색
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_to_zero: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: Color,
    pub size: f32,
    pub outline: Color,
    pub outline_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub bold: bool,
    pub anchor: TextAnchor,
}

/// 요소 종류와 스타일.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PrimitiveKind {
    Line(LineStyle),
    Marker(MarkerStyle),
    Text { text: String, style: TextStyle },
}

/// 장면 안에서 요소가 맡는 역할. 렌더러와 테스트가 요소를 식별하는 데 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    SaturationCurve,
    UnsaturatedRegion,
    TemperatureGuide,
    DewPointGuide,
    DewPointMarker,
    DewPointLabel,
    IntersectionMarker,
    AirMassLabel,
    MaxContentLine,
    MaxContentLabel,
    MaxContentTieLine,
    ActualContentLine,
    ActualContentPulse,
    ActualContentCircle,
    ActualContentLabel,
    ActualContentTieLine,
    FormulaLabel,
    ActualContentMarker,
    ActualContentValue,
    MaxContentMarker,
    MaxContentValue,
}

/// 그릴 요소 하나.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    pub role: Role,
    /// 범례/식별용 이름
    pub name: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub kind: PrimitiveKind,
    /// 0~1
    pub opacity: f64,
    pub show_legend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_group: Option<String>,
    /// 값이 미리 포맷된 툴팁. 곡선처럼 점마다 다른 경우 `{x}`, `{y}` 자리표시자를 남긴다.
    pub tooltip: String,
}

impl Primitive {
    /// `index` 번째 점의 툴팁. `{x}`, `{y}`를 소수 2자리로 채운다.
    pub fn hover_text(&self, index: usize, fmt: &NumberFormat) -> Option<String> {
        let x = *self.xs.get(index)?;
        let y = *self.ys.get(index)?;
        Some(fill_template(
            &self.tooltip,
            &[("x", fmt.fixed(x, 2)), ("y", fmt.fixed(y, 2))],
        ))
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            PrimitiveKind::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// 렌더러에 넘길 장면 전체.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// 역할로 첫 요소를 찾는다.
    pub fn find(&self, role: Role) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.role == role)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.find(role).is_some()
    }

    /// 요소 역할을 순서대로 나열한다.
    pub fn roles(&self) -> Vec<Role> {
        self.primitives.iter().map(|p| p.role).collect()
    }
}
