//! tracing 구독자 초기화.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG`가 있으면 그것을, 없으면 설정의 필터를 써서 stderr 로거를 설치한다.
///
/// 이미 설치된 구독자가 있으면(테스트 등) 조용히 넘어간다.
pub fn init(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
