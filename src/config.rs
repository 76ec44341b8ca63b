use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::friction::{
    ColebrookParams, DEFAULT_INITIAL_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use crate::units::PressureUnit;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "toolbox.toml";

/// 기본 레이놀즈수 목록
pub const DEFAULT_REYNOLDS_NUMBERS: [f64; 6] = [300.0, 600.0, 900.0, 3000.0, 6000.0, 9000.0];
/// 기본 상대조도 ε/D
pub const DEFAULT_RELATIVE_ROUGHNESS: f64 = 0.000166;

/// 마찰계수 표 계산 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrictionConfig {
    pub reynolds_numbers: Vec<f64>,
    pub relative_roughness: f64,
    pub initial_guess: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for FrictionConfig {
    fn default() -> Self {
        Self {
            reynolds_numbers: DEFAULT_REYNOLDS_NUMBERS.to_vec(),
            relative_roughness: DEFAULT_RELATIVE_ROUGHNESS,
            initial_guess: DEFAULT_INITIAL_GUESS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl FrictionConfig {
    /// 반복 계산 파라미터만 꺼낸다.
    pub fn params(&self) -> ColebrookParams {
        ColebrookParams {
            initial_guess: self.initial_guess,
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }
}

/// 혈압 입력 설정.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloodPressureConfig {
    /// 입력 단위. 분류 전에 mmHg로 환산한다.
    pub unit: PressureUnit,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub friction: FrictionConfig,
    pub blood_pressure: BloodPressureConfig,
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// 설정 파일이 있으면 읽고, 없으면 기본 설정을 반환한다. 파일을 새로 만들지는 않는다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::default())
    }
}
