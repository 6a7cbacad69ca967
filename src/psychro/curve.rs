use std::sync::OnceLock;

use serde::Serialize;

use super::magnus::absolute_humidity;

/// 입력/곡선 온도 범위 하한(°C)
pub const DOMAIN_MIN_C: f64 = -45.0;
/// 입력/곡선 온도 범위 상한(°C)
pub const DOMAIN_MAX_C: f64 = 60.0;
/// 포화곡선 샘플 간격(°C)
pub const CURVE_STEP_C: f64 = 0.25;

/// 포화곡선 샘플. (온도 °C, 절대습도 g/m³) 쌍을 온도 오름차순으로 담는다.
///
/// 한 번 생성되면 바뀌지 않으며 [`sample_curve`]로 공유 참조를 얻는다.
#[derive(Debug, Clone, Serialize)]
pub struct SampleCurve {
    temperatures: Vec<f64>,
    humidities: Vec<f64>,
}

impl SampleCurve {
    /// 지정 범위를 `step` 간격으로 샘플링한다.
    pub fn compute(min_c: f64, max_c: f64, step: f64) -> Self {
        let count = ((max_c - min_c) / step + 1e-9).floor() as usize + 1;
        let temperatures: Vec<f64> = (0..count)
            // 누적 오차 없이 인덱스로부터 직접 계산
            .map(|i| min_c + i as f64 * step)
            .collect();
        let humidities = temperatures.iter().map(|&t| absolute_humidity(t)).collect();
        Self {
            temperatures,
            humidities,
        }
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn humidities(&self) -> &[f64] {
        &self.humidities
    }

    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// (온도, 절대습도) 쌍을 순회한다.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.temperatures
            .iter()
            .copied()
            .zip(self.humidities.iter().copied())
    }
}

/// [-45, 60] °C, 0.25 ° 간격의 포화곡선. 최초 호출 시 한 번만 계산한다.
pub fn sample_curve() -> &'static SampleCurve {
    static CURVE: OnceLock<SampleCurve> = OnceLock::new();
    CURVE.get_or_init(|| {
        let curve = SampleCurve::compute(DOMAIN_MIN_C, DOMAIN_MAX_C, CURVE_STEP_C);
        tracing::debug!(points = curve.len(), "saturation curve sampled");
        curve
    })
}
