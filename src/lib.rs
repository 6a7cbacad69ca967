//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 상태/장면 모델을 공유한다.

pub mod app;
pub mod config;
pub mod explanation;
pub mod format;
pub mod i18n;
pub mod input;
pub mod logging;
pub mod psychro;
pub mod scene;
pub mod ui_cli;
pub mod viewport;
