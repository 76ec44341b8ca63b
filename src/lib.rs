//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 테스트에서 같은 코드를 쓴다.

pub mod app;
pub mod cli;
pub mod config;
pub mod friction;
pub mod health;
pub mod ui_cli;
pub mod units;
