//! 온도/이슬점 입력 필드의 파싱과 범위 검증.
//!
//! 입력 중간 상태(빈 문자열, `-` 하나)는 오류가 아니라 "아직 값 없음"으로 취급한다.
//! 범위를 벗어난 값은 반영하지 않고 직전의 유효한 문자열을 유지한다.

use serde::{Deserialize, Serialize};

use crate::psychro::{IntersectionPoint, DOMAIN_MAX_C, DOMAIN_MIN_C};

/// 필드 문자열을 해석한 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// 빈 문자열
    Empty,
    /// 부호만 입력된 상태(`-`)
    Pending,
    /// 유한한 숫자
    Number(f64),
    /// 숫자로 해석할 수 없음
    Invalid,
}

/// 이슬점이 기온보다 높은 입력을 허용할지 여부.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DewPointRule {
    /// 이슬점 > 기온 입력을 거부한다.
    #[default]
    EnforceOrdering,
    /// 허용하며 RH는 100 %를 넘을 수 있다(클램프하지 않음).
    AllowAboveTemperature,
}

/// 입력 필드 옆에 표시할 검증 힌트.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHint {
    /// 숫자가 아님
    NotANumber,
    /// [-45, 60] °C 범위 밖
    OutOfRange,
    /// 이슬점이 기온보다 높음
    DewPointAboveTemperature,
}

/// 입력 필드 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Temperature,
    DewPoint,
}

/// 필드 문자열을 해석한다. 소수점 구분자로 `,`도 받아들인다.
pub fn parse_field(text: &str) -> FieldValue {
    let trimmed = text.trim();
    match trimmed {
        "" => FieldValue::Empty,
        "-" | "." | "," | "-." | "-," => FieldValue::Pending,
        _ => match trimmed.replace(',', ".").parse::<f64>() {
            Ok(v) if v.is_finite() => FieldValue::Number(v),
            _ => FieldValue::Invalid,
        },
    }
}

/// 값이 입력 허용 범위 [-45, 60] °C 안에 있는지 확인한다. 경계값 포함.
pub fn in_domain(value: f64) -> bool {
    (DOMAIN_MIN_C..=DOMAIN_MAX_C).contains(&value)
}

/// 문자열을 범위 검증된 값으로 변환한다. 범위 밖이거나 숫자가 아니면 `None`.
pub fn parse_bounded(text: &str) -> Option<f64> {
    match parse_field(text) {
        FieldValue::Number(v) if in_domain(v) => Some(v),
        _ => None,
    }
}

/// 두 입력 필드의 확정된 문자열.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    temperature_text: String,
    dew_point_text: String,
}

impl InputState {
    pub fn temperature_text(&self) -> &str {
        &self.temperature_text
    }

    pub fn dew_point_text(&self) -> &str {
        &self.dew_point_text
    }

    /// 필드에 확정된 문자열.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Temperature => &self.temperature_text,
            Field::DewPoint => &self.dew_point_text,
        }
    }

    /// 범위 검증을 통과한 기온(°C).
    pub fn temperature(&self) -> Option<f64> {
        parse_bounded(&self.temperature_text)
    }

    /// 범위 검증을 통과한 이슬점(°C).
    pub fn dew_point(&self) -> Option<f64> {
        parse_bounded(&self.dew_point_text)
    }

    /// 두 값이 모두 유효할 때 (기온, 이슬점).
    pub fn both(&self) -> Option<(f64, f64)> {
        self.temperature().zip(self.dew_point())
    }

    /// 두 값이 모두 유효할 때의 교차점.
    pub fn intersection(&self) -> Option<IntersectionPoint> {
        self.both()
            .and_then(|(t, td)| IntersectionPoint::compute(t, td))
    }

    /// 두 필드가 모두 비어 있는지.
    pub fn is_cleared(&self) -> bool {
        self.temperature_text.trim().is_empty() && self.dew_point_text.trim().is_empty()
    }

    /// 기온 문자열을 반영한다. 거부되면 기존 문자열을 유지하고 힌트를 돌려준다.
    pub fn set_temperature(&mut self, text: &str) -> Result<(), InputHint> {
        check_candidate(text, None)?;
        self.temperature_text = text.trim().to_string();
        Ok(())
    }

    /// 이슬점 문자열을 반영한다. `EnforceOrdering`이면 기온보다 높은 값을 거부한다.
    pub fn set_dew_point(&mut self, text: &str, rule: DewPointRule) -> Result<(), InputHint> {
        let ceiling = match rule {
            DewPointRule::EnforceOrdering => self.temperature(),
            DewPointRule::AllowAboveTemperature => None,
        };
        check_candidate(text, ceiling)?;
        self.dew_point_text = text.trim().to_string();
        Ok(())
    }

    /// 지정 필드에 반영한다.
    pub fn set(&mut self, field: Field, text: &str, rule: DewPointRule) -> Result<(), InputHint> {
        match field {
            Field::Temperature => self.set_temperature(text),
            Field::DewPoint => self.set_dew_point(text, rule),
        }
    }

    pub fn clear(&mut self) {
        self.temperature_text.clear();
        self.dew_point_text.clear();
    }

    /// 현재 확정된 값 기준의 이슬점 힌트. 기온을 나중에 낮춰 순서가 어긋난 경우를 알린다.
    pub fn dew_point_hint(&self, rule: DewPointRule) -> Option<InputHint> {
        match (rule, self.both()) {
            (DewPointRule::EnforceOrdering, Some((t, td))) if td > t => {
                Some(InputHint::DewPointAboveTemperature)
            }
            _ => None,
        }
    }
}

fn check_candidate(text: &str, ceiling: Option<f64>) -> Result<(), InputHint> {
    match parse_field(text) {
        FieldValue::Empty | FieldValue::Pending => Ok(()),
        FieldValue::Invalid => Err(InputHint::NotANumber),
        FieldValue::Number(v) if !in_domain(v) => Err(InputHint::OutOfRange),
        FieldValue::Number(v) => match ceiling {
            Some(max) if v > max => Err(InputHint::DewPointAboveTemperature),
            _ => Ok(()),
        },
    }
}
