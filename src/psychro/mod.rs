//! 습공기(포화곡선) 계산 모듈 모음.
//! Magnus(Sonntag90) 근사식 기반의 순수 함수와 캐시된 포화곡선 샘플로 구성한다.

pub mod curve;
pub mod intersection;
pub mod magnus;

pub use curve::{sample_curve, SampleCurve, CURVE_STEP_C, DOMAIN_MAX_C, DOMAIN_MIN_C};
pub use intersection::IntersectionPoint;
pub use magnus::*;
