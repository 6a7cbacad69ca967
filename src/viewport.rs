//! 그래프 가시 영역(온도 × 절대습도) 관리.
//!
//! 두 입력이 유효해지면 여백을 둔 새 영역을 제안하고, 현재 영역과 차이가 작으면
//! 그대로 둔다. 사용자 팬/줌은 영역을 통째로 교체한다.

use serde::{Deserialize, Serialize};

use crate::psychro::{absolute_humidity, DOMAIN_MAX_C, DOMAIN_MIN_C};

/// 온도 여백 하한(°C)
pub const MIN_TEMP_MARGIN_C: f64 = 8.0;
/// 습도 여백 하한(g/m³)
pub const MIN_HUMIDITY_MARGIN_G_M3: f64 = 3.0;
/// 스프레드 대비 여백 비율
pub const MARGIN_RATIO: f64 = 0.4;
/// 왼쪽(저온 쪽) 여백 배율
pub const LEFT_MARGIN_FACTOR: f64 = 1.5;
/// 오른쪽(고온 쪽) 여백 배율
pub const RIGHT_MARGIN_FACTOR: f64 = 0.8;
/// x 폭 변화가 이 값(°C)을 넘어야 갱신한다.
pub const X_SPAN_THRESHOLD_C: f64 = 1.0;
/// y 상한 변화가 이 값(g/m³)을 넘어야 갱신한다.
pub const Y_MAX_THRESHOLD_G_M3: f64 = 0.5;

/// 가시 영역. x는 온도(°C), y는 절대습도(g/m³). y 하한은 항상 0이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_range: [-10.0, 40.0],
            y_range: [0.0, 50.0],
        }
    }
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_range: [x_min, x_max],
            y_range: [0.0, y_max],
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x_range[0]
    }

    pub fn x_max(&self) -> f64 {
        self.x_range[1]
    }

    pub fn y_max(&self) -> f64 {
        self.y_range[1]
    }

    /// 보이는 x 폭(°C). 라벨 오프셋 계산의 기준이 된다.
    pub fn x_span(&self) -> f64 {
        self.x_range[1] - self.x_range[0]
    }

    /// 팬/줌 이벤트 값으로 영역을 만든다. y 하한은 0으로 고정한다.
    ///
    /// 값이 유한하지 않거나 x 폭이 0 이하, y 상한이 0 이하이면 `None`.
    pub fn from_bounds(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Option<Self> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !finite || x_max <= x_min || y_max <= 0.0 {
            return None;
        }
        Some(Self::new(x_min, x_max, y_max))
    }

    /// 새 영역이 현재 영역과 "눈에 띄게" 다른지. 위치가 아니라 x 폭과 y 상한만 비교한다.
    pub fn differs_noticeably(&self, other: &Viewport) -> bool {
        let x_changed = (other.x_span() - self.x_span()).abs() > X_SPAN_THRESHOLD_C;
        let y_changed = (other.y_max() - self.y_max()).abs() > Y_MAX_THRESHOLD_G_M3;
        x_changed || y_changed
    }
}

/// 두 점(기온, 이슬점)이 모두 보이도록 여백을 둔 영역을 계산한다.
///
/// 습도가 유한하지 않으면 `None`.
pub fn recentre(temperature_c: f64, dew_point_c: f64) -> Option<Viewport> {
    let h_t = absolute_humidity(temperature_c);
    let h_d = absolute_humidity(dew_point_c);
    if !h_t.is_finite() || !h_d.is_finite() {
        return None;
    }
    let (min_t, max_t) = (temperature_c.min(dew_point_c), temperature_c.max(dew_point_c));
    let (min_h, max_h) = (h_t.min(h_d), h_t.max(h_d));

    let temp_margin = MIN_TEMP_MARGIN_C.max((max_t - min_t) * MARGIN_RATIO);
    let humidity_margin = MIN_HUMIDITY_MARGIN_G_M3.max((max_h - min_h) * MARGIN_RATIO);

    Some(Viewport::new(
        DOMAIN_MIN_C.max(min_t - temp_margin * LEFT_MARGIN_FACTOR),
        DOMAIN_MAX_C.min(max_t + temp_margin * RIGHT_MARGIN_FACTOR),
        max_h + humidity_margin,
    ))
}

/// 현재 가시 영역을 소유하고 자동 조정/수동 교체를 처리한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    current: Viewport,
    home: Viewport,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ViewportController {
    /// `home`은 초기 영역이자 초기화 시 돌아갈 영역이다.
    pub fn new(home: Viewport) -> Self {
        Self {
            current: home,
            home,
        }
    }

    pub fn current(&self) -> Viewport {
        self.current
    }

    pub fn home(&self) -> Viewport {
        self.home
    }

    /// 입력 변경 후 자동 조정한다. 영역이 바뀌었으면 `true`.
    ///
    /// 제안 영역이 임계값 이내로 비슷하면 상태를 건드리지 않는다.
    pub fn auto_adjust(&mut self, temperature_c: f64, dew_point_c: f64) -> bool {
        let Some(proposal) = recentre(temperature_c, dew_point_c) else {
            tracing::debug!(temperature_c, dew_point_c, "non-finite humidity, viewport kept");
            return false;
        };
        if !self.current.differs_noticeably(&proposal) {
            return false;
        }
        tracing::debug!(
            x_min = proposal.x_min(),
            x_max = proposal.x_max(),
            y_max = proposal.y_max(),
            "viewport recentred"
        );
        self.current = proposal;
        true
    }

    /// 사용자 팬/줌 결과로 영역을 통째로 교체한다. 잘못된 값이면 무시하고 `false`.
    pub fn apply_manual(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> bool {
        match Viewport::from_bounds(x_min, x_max, y_min, y_max) {
            Some(next) => {
                let changed = next != self.current;
                self.current = next;
                changed
            }
            None => {
                tracing::warn!(x_min, x_max, y_min, y_max, "rejected pan/zoom bounds");
                false
            }
        }
    }

    /// 초기 영역으로 되돌린다.
    pub fn reset(&mut self) {
        self.current = self.home;
    }
}
