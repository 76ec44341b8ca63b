use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::friction::friction_factors;
use crate::health::{classify, BloodPressureStatus};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 숫자로 해석할 수 없는 입력
    #[error("could not parse {input:?} as a number")]
    InvalidNumber { input: String },
    /// 값을 읽기 전에 입력이 끝남
    #[error("input ended before a value was entered for {prompt:?}")]
    UnexpectedEof { prompt: String },
}

/// 한 번의 세션을 실행한다: 마찰계수 표 출력, 혈압 입력, 판정 출력.
///
/// 입력 해석에 실패하면 판정 줄을 출력하지 않고 즉시 오류를 반환한다.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<BloodPressureStatus, AppError> {
    let friction = &config.friction;
    let table = friction_factors(
        &friction.reynolds_numbers,
        friction.relative_roughness,
        &friction.params(),
    );
    ui_cli::print_friction_table(out, &table)?;

    let reading = ui_cli::read_blood_pressure(input, out, config.blood_pressure.unit)?;
    let status = classify(reading);
    info!(
        systolic_mmhg = reading.systolic,
        diastolic_mmhg = reading.diastolic,
        status = status.label(),
        "blood pressure classified"
    );
    ui_cli::print_status(out, status)?;
    Ok(status)
}
