use std::fmt;

use serde::{Deserialize, Serialize};

/// 저혈압 판정 수축기 기준 [mmHg]
pub const SYSTOLIC_LOW_MMHG: f64 = 90.0;
/// 정상 범위 수축기 상한 [mmHg]
pub const SYSTOLIC_IDEAL_MAX_MMHG: f64 = 120.0;
/// 저혈압 판정 이완기 기준 [mmHg]
pub const DIASTOLIC_LOW_MMHG: f64 = 60.0;
/// 정상 범위 이완기 상한 [mmHg]
pub const DIASTOLIC_IDEAL_MAX_MMHG: f64 = 80.0;

/// 혈압 측정값 한 쌍. 단위는 mmHg(게이지).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloodPressureReading {
    pub systolic: f64,
    pub diastolic: f64,
}

impl BloodPressureReading {
    pub fn new(systolic: f64, diastolic: f64) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }
}

/// 혈압 분류 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodPressureStatus {
    Low,
    Ideal,
    High,
}

impl BloodPressureStatus {
    /// 짧은 라벨 ("Low", "Ideal", "High").
    pub fn label(self) -> &'static str {
        match self {
            BloodPressureStatus::Low => "Low",
            BloodPressureStatus::Ideal => "Ideal",
            BloodPressureStatus::High => "High",
        }
    }
}

impl fmt::Display for BloodPressureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} blood pressure", self.label())
    }
}

/// 고정 기준값으로 혈압을 분류한다.
///
/// 판정 순서가 결과를 결정한다. 저혈압 조건(수축기 < 90 또는 이완기 < 60)을
/// 먼저 검사하므로, 수축기가 높더라도 이완기가 낮으면 `Low`가 된다.
/// 정상 범위에도 들지 않는 나머지(NaN 포함)는 모두 `High`이다.
pub fn classify(reading: BloodPressureReading) -> BloodPressureStatus {
    let BloodPressureReading {
        systolic,
        diastolic,
    } = reading;
    if systolic < SYSTOLIC_LOW_MMHG || diastolic < DIASTOLIC_LOW_MMHG {
        BloodPressureStatus::Low
    } else if (SYSTOLIC_LOW_MMHG..=SYSTOLIC_IDEAL_MAX_MMHG).contains(&systolic)
        && (DIASTOLIC_LOW_MMHG..=DIASTOLIC_IDEAL_MAX_MMHG).contains(&diastolic)
    {
        BloodPressureStatus::Ideal
    } else {
        BloodPressureStatus::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(systolic: f64, diastolic: f64) -> BloodPressureStatus {
        classify(BloodPressureReading::new(systolic, diastolic))
    }

    #[test]
    fn reference_readings() {
        assert_eq!(status(85.0, 55.0), BloodPressureStatus::Low);
        assert_eq!(status(110.0, 70.0), BloodPressureStatus::Ideal);
        assert_eq!(status(130.0, 85.0), BloodPressureStatus::High);
    }

    #[test]
    fn either_low_value_triggers_low() {
        assert_eq!(status(89.0, 70.0), BloodPressureStatus::Low);
        assert_eq!(status(115.0, 59.0), BloodPressureStatus::Low);
    }

    #[test]
    fn low_wins_over_high_systolic() {
        assert_eq!(status(160.0, 50.0), BloodPressureStatus::Low);
    }

    #[test]
    fn ideal_band_is_inclusive() {
        assert_eq!(status(90.0, 60.0), BloodPressureStatus::Ideal);
        assert_eq!(status(120.0, 80.0), BloodPressureStatus::Ideal);
        assert_eq!(status(120.5, 80.0), BloodPressureStatus::High);
        assert_eq!(status(110.0, 81.0), BloodPressureStatus::High);
    }

    #[test]
    fn nan_falls_through_to_high() {
        assert_eq!(status(f64::NAN, 70.0), BloodPressureStatus::High);
    }

    #[test]
    fn display_uses_full_phrase() {
        assert_eq!(BloodPressureStatus::Ideal.to_string(), "Ideal blood pressure");
        assert_eq!(BloodPressureStatus::High.label(), "High");
    }
}
