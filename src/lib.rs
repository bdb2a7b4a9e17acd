//! 핵심 평가 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 GUI 확장도 쉽게 한다.

pub mod app;
pub mod assessment;
pub mod config;
pub mod i18n;
pub mod material_db;
pub mod report;
pub mod ui_cli;
pub mod units;
