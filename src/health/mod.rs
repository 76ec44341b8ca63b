//! 건강 지표 판정 모듈.

pub mod blood_pressure;

pub use blood_pressure::*;
