//! Colebrook 식 기반 Darcy 마찰계수 계산 모듈.

pub mod colebrook;
pub mod table;

pub use colebrook::*;
pub use table::*;
