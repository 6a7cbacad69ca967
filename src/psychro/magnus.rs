//! Magnus 공식(Sonntag90 계수)으로 포화수증기압, 절대습도, 이슬점, 상대습도를 계산한다.
//! 입력: 온도(°C), 상대습도(%)
//! 출력: 압력(hPa), 절대습도(g/m³), 온도(°C), 상대습도(%)

/// Magnus 계수 α [hPa]
pub const MAGNUS_ALPHA_HPA: f64 = 6.112;
/// Magnus 계수 β [-]
pub const MAGNUS_BETA: f64 = 17.62;
/// Magnus 계수 λ [°C]
pub const MAGNUS_LAMBDA_C: f64 = 243.12;

/// 물의 몰질량 [g/mol]
pub const WATER_MOLAR_MASS_G_PER_MOL: f64 = 18.015;
/// 일반 기체상수 [J/(mol·K)]
pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314;

const KELVIN_OFFSET: f64 = 273.15;
const PA_PER_HPA: f64 = 100.0;

fn magnus_exponent(t_c: f64) -> f64 {
    MAGNUS_BETA * t_c / (MAGNUS_LAMBDA_C + t_c)
}

/// 포화수증기압(hPa)을 계산한다. Ew = α·exp(β·T/(λ+T))
///
/// T ≤ -λ(-243.12 °C)에서는 정의되지 않으므로 호출 측에서 범위를 보장해야 한다.
pub fn saturation_vapor_pressure(t_c: f64) -> f64 {
    MAGNUS_ALPHA_HPA * magnus_exponent(t_c).exp()
}

/// 포화 상태의 절대습도(g/m³)를 계산한다. ρ = e·Mw / (R·Tk)
pub fn absolute_humidity(t_c: f64) -> f64 {
    let e_pa = saturation_vapor_pressure(t_c) * PA_PER_HPA;
    let t_k = t_c + KELVIN_OFFSET;
    e_pa * WATER_MOLAR_MASS_G_PER_MOL / (GAS_CONSTANT_J_PER_MOL_K * t_k)
}

/// 온도와 상대습도로 이슬점(°C)을 계산한다 (Magnus 역산).
///
/// RH → 0 이거나 γ가 β에 근접하면 NaN/무한대가 반환된다. 오류를 던지지 않으므로
/// 호출 측에서 `is_finite()`로 걸러야 한다.
pub fn dew_point_from_rh(t_c: f64, rh_percent: f64) -> f64 {
    let gamma = (rh_percent / 100.0).ln() + magnus_exponent(t_c);
    MAGNUS_LAMBDA_C * gamma / (MAGNUS_BETA - gamma)
}

/// 온도와 이슬점으로 상대습도(%)를 계산한다.
///
/// RH = 100·exp(β·Td/(λ+Td) − β·T/(λ+T)). Td > T이면 100 %를 넘는 값이 그대로 나온다.
pub fn relative_humidity(t_c: f64, dew_point_c: f64) -> f64 {
    100.0 * (magnus_exponent(dew_point_c) - magnus_exponent(t_c)).exp()
}

/// 실제 수분량/최대 수분량 비율(%)을 계산한다. 그래프의 기하학적 RH에 해당한다.
///
/// 값이 유한하지 않거나 최대 수분량이 0 이하이면 `None`.
pub fn relative_humidity_from_content(actual_g_m3: f64, maximum_g_m3: f64) -> Option<f64> {
    if !actual_g_m3.is_finite() || !maximum_g_m3.is_finite() || maximum_g_m3 <= 0.0 {
        return None;
    }
    let rh = actual_g_m3 / maximum_g_m3 * 100.0;
    rh.is_finite().then_some(rh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturation_pressure_at_zero_is_alpha() {
        assert!((saturation_vapor_pressure(0.0) - MAGNUS_ALPHA_HPA).abs() < 1e-12);
    }

    #[test]
    fn content_ratio_rejects_zero_maximum() {
        assert_eq!(relative_humidity_from_content(1.0, 0.0), None);
        assert_eq!(relative_humidity_from_content(f64::NAN, 4.0), None);
        let rh = relative_humidity_from_content(2.0, 4.0).expect("ratio");
        assert!((rh - 50.0).abs() < 1e-12);
    }
}
