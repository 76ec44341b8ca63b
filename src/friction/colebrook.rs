use thiserror::Error;
use tracing::{debug, trace, warn};

/// 반복 초기값 기본값 (난류 배관에서 흔한 마찰계수 수준)
pub const DEFAULT_INITIAL_GUESS: f64 = 0.02;
/// 최대 반복 횟수 기본값
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
/// 수렴 판정 허용오차 기본값
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Colebrook 반복 계산 파라미터.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookParams {
    /// 마찰계수 초기 추정값
    pub initial_guess: f64,
    /// 최대 반복 횟수. 0이면 항상 미수렴으로 끝난다.
    pub max_iterations: usize,
    /// 연속 추정값 차이가 이 값보다 작으면 수렴으로 본다.
    pub tolerance: f64,
}

impl Default for ColebrookParams {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// 마찰계수 계산 실패를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrictionError {
    /// 반복 한도 안에 수렴하지 못함
    #[error("Re={reynolds}: no convergence within {iterations} iterations (last f={last_estimate})")]
    NotConverged {
        reynolds: f64,
        iterations: usize,
        last_estimate: f64,
    },
    /// sqrt/log10 정의역을 벗어난 값이 나타남
    #[error("Re={reynolds}: friction factor left the valid domain at iteration {iteration} (f={friction_factor})")]
    Domain {
        reynolds: f64,
        iteration: usize,
        friction_factor: f64,
    },
}

impl FrictionError {
    /// 표 출력용 짧은 표기.
    pub fn short_label(&self) -> &'static str {
        match self {
            FrictionError::NotConverged { .. } => "not converged",
            FrictionError::Domain { .. } => "domain error",
        }
    }
}

/// Colebrook 식을 한 번 적용해 다음 마찰계수를 구한다.
///
/// f_next = (-2 * log10(ε/3.7 + 2.51 / (Re * √f)))^-2
///
/// Re와 ε는 검사하지 않는다. 대신 현재 f, 로그 인자, 결과값이 유한한 양수가
/// 아니면 [`FrictionError::Domain`]을 반환한다. 반환 오류의 `iteration`은 0이며
/// [`solve_colebrook`]이 실제 반복 번호로 채운다.
pub fn colebrook_update(
    reynolds: f64,
    relative_roughness: f64,
    friction_factor: f64,
) -> Result<f64, FrictionError> {
    let domain = |value: f64| FrictionError::Domain {
        reynolds,
        iteration: 0,
        friction_factor: value,
    };
    if !(friction_factor.is_finite() && friction_factor > 0.0) {
        return Err(domain(friction_factor));
    }
    let log_arg = relative_roughness / 3.7 + 2.51 / (reynolds * friction_factor.sqrt());
    if !(log_arg.is_finite() && log_arg > 0.0) {
        return Err(domain(friction_factor));
    }
    let inv_sqrt_f = -2.0 * log_arg.log10();
    let next = 1.0 / inv_sqrt_f.powi(2);
    if !(next.is_finite() && next > 0.0) {
        return Err(domain(next));
    }
    Ok(next)
}

/// 고정점 반복으로 Colebrook 식을 풀어 Darcy 마찰계수를 구한다.
///
/// 연속 추정값 차이가 허용오차보다 작아지는 즉시 새 추정값을 반환한다.
/// 반복 한도를 모두 쓰면 부정확할 수 있는 값을 돌려주지 않고
/// [`FrictionError::NotConverged`]를 반환한다.
pub fn solve_colebrook(
    reynolds: f64,
    relative_roughness: f64,
    params: &ColebrookParams,
) -> Result<f64, FrictionError> {
    let mut f = params.initial_guess;
    for iteration in 0..params.max_iterations {
        let f_next = colebrook_update(reynolds, relative_roughness, f).map_err(|err| {
            let err = match err {
                FrictionError::Domain {
                    friction_factor, ..
                } => FrictionError::Domain {
                    reynolds,
                    iteration,
                    friction_factor,
                },
                other => other,
            };
            warn!(%err, "colebrook iteration failed");
            err
        })?;
        trace!(reynolds, iteration, f = f_next, "colebrook step");
        if (f_next - f).abs() < params.tolerance {
            debug!(
                reynolds,
                relative_roughness,
                iterations = iteration + 1,
                f = f_next,
                "colebrook converged"
            );
            return Ok(f_next);
        }
        f = f_next;
    }
    let err = FrictionError::NotConverged {
        reynolds,
        iterations: params.max_iterations,
        last_estimate: f,
    };
    warn!(%err, "colebrook did not converge");
    Err(err)
}
