use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::friction::FrictionTable;
use crate::health::{BloodPressureReading, BloodPressureStatus};
use crate::units::{to_mmhg, PressureUnit};

/// 마찰계수 표 머리글
pub const TABLE_HEADER: &str = "Reynolds number (NRe)\tFriction factor (f)";

/// 마찰계수 표를 출력한다. 실패한 행은 계수 대신 실패 사유를 표시한다.
pub fn print_friction_table<W: Write>(out: &mut W, table: &FrictionTable) -> Result<(), AppError> {
    writeln!(out, "{TABLE_HEADER}")?;
    for row in table.rows() {
        match &row.outcome {
            Ok(f) => writeln!(out, "{}\t\t\t{:.6}", row.reynolds, f)?,
            Err(err) => writeln!(out, "{}\t\t\t{}", row.reynolds, err.short_label())?,
        }
    }
    Ok(())
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 오류를 반환한다.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::UnexpectedEof {
            prompt: prompt.trim_end().to_string(),
        });
    }
    Ok(buf)
}

/// 실수 하나를 읽는다. 숫자가 아니면 재입력 없이 바로 오류를 반환한다.
pub fn read_f64<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<f64, AppError> {
    let line = read_line(input, out, prompt)?;
    let trimmed = line.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| AppError::InvalidNumber {
            input: trimmed.to_string(),
        })
}

/// 수축기/이완기 혈압을 차례로 입력받아 mmHg 기준 측정값으로 돌려준다.
pub fn read_blood_pressure<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    unit: PressureUnit,
) -> Result<BloodPressureReading, AppError> {
    let systolic = read_f64(
        input,
        out,
        &format!("Enter systolic blood pressure ({unit}): "),
    )?;
    let diastolic = read_f64(
        input,
        out,
        &format!("Enter diastolic blood pressure ({unit}): "),
    )?;
    Ok(BloodPressureReading::new(
        to_mmhg(systolic, unit),
        to_mmhg(diastolic, unit),
    ))
}

/// 혈압 판정 결과를 출력한다.
pub fn print_status<W: Write>(out: &mut W, status: BloodPressureStatus) -> Result<(), AppError> {
    writeln!(out, "Blood pressure status: {status}")?;
    Ok(())
}
