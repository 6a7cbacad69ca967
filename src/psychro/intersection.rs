use serde::Serialize;

use super::curve::{DOMAIN_MAX_C, DOMAIN_MIN_C};
use super::magnus::{absolute_humidity, relative_humidity_from_content};

/// 기온 수직선과 이슬점 수평선의 교차점. 그래프에서 "공기덩이"의 위치다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntersectionPoint {
    /// 기온(°C)
    pub temperature: f64,
    /// 이슬점(°C)
    pub dew_point: f64,
    /// 실제 수분량 = 이슬점에서의 포화 절대습도(g/m³)
    pub humidity: f64,
    /// 최대 수분량 = 기온에서의 포화 절대습도(g/m³)
    pub max_humidity: f64,
    /// 실제/최대 수분량 비(%). 이슬점 > 기온이면 100 %를 넘는다.
    pub relative_humidity: f64,
}

impl IntersectionPoint {
    /// 두 값이 모두 [-45, 60] °C 안에 있고 결과가 유한할 때만 교차점을 만든다.
    pub fn compute(temperature_c: f64, dew_point_c: f64) -> Option<Self> {
        let domain = DOMAIN_MIN_C..=DOMAIN_MAX_C;
        if !domain.contains(&temperature_c) || !domain.contains(&dew_point_c) {
            return None;
        }
        let max_humidity = absolute_humidity(temperature_c);
        let humidity = absolute_humidity(dew_point_c);
        let relative_humidity = relative_humidity_from_content(humidity, max_humidity)?;
        humidity.is_finite().then_some(Self {
            temperature: temperature_c,
            dew_point: dew_point_c,
            humidity,
            max_humidity,
            relative_humidity,
        })
    }
}
