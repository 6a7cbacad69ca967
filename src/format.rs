//! 로케일별 소수점 구분자를 적용한 숫자 표기.

use serde::{Deserialize, Serialize};

/// 소수점 구분자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DecimalSeparator {
    #[default]
    Point,
    Comma,
}

impl DecimalSeparator {
    pub fn as_char(self) -> char {
        match self {
            DecimalSeparator::Point => '.',
            DecimalSeparator::Comma => ',',
        }
    }

    /// `,` / `.` 문자열을 해석한다.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "," => Some(DecimalSeparator::Comma),
            "." => Some(DecimalSeparator::Point),
            _ => None,
        }
    }

    /// 언어 코드의 관례적인 구분자. 영어권만 `.`을 쓴다.
    pub fn for_language(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("en") {
            DecimalSeparator::Point
        } else {
            DecimalSeparator::Comma
        }
    }
}

/// 숫자 포매터.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFormat {
    pub separator: DecimalSeparator,
}

impl NumberFormat {
    pub fn new(separator: DecimalSeparator) -> Self {
        Self { separator }
    }

    /// 소수 `decimals` 자리로 고정 표기한다.
    pub fn fixed(&self, value: f64, decimals: usize) -> String {
        let s = format!("{value:.decimals$}");
        self.localize(s)
    }

    /// 최대 2자리까지 표기하고 뒤쪽 0은 지운다. 입력값 그대로를 보여줄 때 쓴다.
    pub fn trimmed(&self, value: f64) -> String {
        let mut s = format!("{value:.2}");
        if s.contains('.') {
            while s.ends_with('0') {
                s.pop();
            }
            if s.ends_with('.') {
                s.pop();
            }
        }
        if s == "-0" {
            s = "0".into();
        }
        self.localize(s)
    }

    fn localize(&self, s: String) -> String {
        match self.separator {
            DecimalSeparator::Point => s,
            DecimalSeparator::Comma => s.replace('.', ","),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separator_replaces_point() {
        let f = NumberFormat::new(DecimalSeparator::Comma);
        assert_eq!(f.fixed(17.2414, 2), "17,24");
        assert_eq!(f.fixed(54.417, 1), "54,4");
    }

    #[test]
    fn trimmed_drops_trailing_zeros() {
        let f = NumberFormat::new(DecimalSeparator::Point);
        assert_eq!(f.trimmed(20.0), "20");
        assert_eq!(f.trimmed(-12.5), "-12.5");
        assert_eq!(f.trimmed(0.25), "0.25");
        assert_eq!(f.trimmed(-0.001), "0");
    }

    #[test]
    fn language_default_separator() {
        assert_eq!(DecimalSeparator::for_language("en-us"), DecimalSeparator::Point);
        assert_eq!(DecimalSeparator::for_language("da"), DecimalSeparator::Comma);
    }
}
