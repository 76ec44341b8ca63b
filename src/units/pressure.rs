use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 혈압 입력에 쓰는 압력 단위. 모두 게이지 기준(0 = 대기압)으로 취급한다.
/// 분류 기준값은 mmHg이므로 다른 단위 입력은 mmHg로 환산한 뒤 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    MmHg,
    Pascal,
    KiloPascal,
    MilliBar,
    Bar,
    KgPerCm2,
    Psi,
}

/// 단위 문자열 해석 실패.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pressure unit: {0}")]
pub struct PressureUnitError(pub String);

const MMHG_PER_BAR: f64 = 750.062;
const PA_PER_BAR: f64 = 100_000.0;

fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MmHg => value / MMHG_PER_BAR,
        PressureUnit::Pascal => value / PA_PER_BAR,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::MilliBar => value / 1000.0,
        PressureUnit::Bar => value,
        PressureUnit::KgPerCm2 => value * 0.980665,
        PressureUnit::Psi => value * 0.0689476,
    }
}

fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MmHg => value_bar * MMHG_PER_BAR,
        PressureUnit::Pascal => value_bar * PA_PER_BAR,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::MilliBar => value_bar * 1000.0,
        PressureUnit::Bar => value_bar,
        PressureUnit::KgPerCm2 => value_bar / 0.980665,
        PressureUnit::Psi => value_bar / 0.0689476,
    }
}

/// 주어진 압력을 mmHg(게이지)로 변환한다. mmHg 입력은 그대로 반환한다.
pub fn to_mmhg(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MmHg => value,
        _ => from_bar(to_bar(value, unit), PressureUnit::MmHg),
    }
}

/// mmHg(게이지) 값을 원하는 단위로 변환한다.
pub fn from_mmhg(value_mmhg: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::MmHg => value_mmhg,
        _ => from_bar(to_bar(value_mmhg, PressureUnit::MmHg), unit),
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_bar(to_bar(value, from), to)
}

impl PressureUnit {
    /// 프롬프트와 표에 표시할 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::MmHg => "mmHg",
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::Bar => "bar",
            PressureUnit::KgPerCm2 => "kgf/cm2",
            PressureUnit::Psi => "psi",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PressureUnit {
    type Err = PressureUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mmhg" | "torr" => Ok(PressureUnit::MmHg),
            "pa" | "pascal" => Ok(PressureUnit::Pascal),
            "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
            "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
            "bar" => Ok(PressureUnit::Bar),
            "kg/cm2" | "kgf/cm2" => Ok(PressureUnit::KgPerCm2),
            "psi" => Ok(PressureUnit::Psi),
            _ => Err(PressureUnitError(s.to_string())),
        }
    }
}
