use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::input::DewPointRule;
use crate::viewport::Viewport;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 세션 상태(입력값, 현재 영역)는 저장하지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/da/en/ko-kr)
    pub language: String,
    /// 외부 언어팩 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    /// 이슬점 > 기온 입력 허용 여부
    pub dew_point_rule: DewPointRule,
    /// 시작 시 불포화 영역 표시
    pub show_unsaturated: bool,
    /// 시작/초기화 시 가시 영역
    pub default_viewport: Viewport,
    /// `RUST_LOG`가 없을 때 쓰는 tracing 필터
    pub log_filter: String,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            dew_point_rule: DewPointRule::EnforceOrdering,
            show_unsaturated: false,
            default_viewport: Viewport::default(),
            log_filter: "info".into(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정 경로의 설정을 로드하거나 없으면 기본 설정을 그 경로에 만든다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str::<Config>(&content)?
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "default configuration written");
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    if Viewport::from_bounds(
        cfg.default_viewport.x_min(),
        cfg.default_viewport.x_max(),
        0.0,
        cfg.default_viewport.y_max(),
    )
    .is_none()
    {
        tracing::warn!("default_viewport in configuration is invalid, using built-in view");
        cfg.default_viewport = Viewport::default();
    }
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드했던 파일(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        save_config(self, &path)
    }
}
