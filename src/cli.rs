use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::units::PressureUnit;

/// 명령줄 인자. 모든 항목은 선택이며, 지정하면 설정 파일 값을 덮어쓴다.
#[derive(Debug, Parser)]
#[command(name = "friction_bp_toolbox")]
#[command(
    about = "Colebrook friction factor table and blood pressure check",
    long_about = None
)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Reynolds numbers to tabulate, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub reynolds: Option<Vec<f64>>,

    /// Relative roughness (roughness height / pipe diameter)
    #[arg(long)]
    pub roughness: Option<f64>,

    /// Initial friction factor guess
    #[arg(long)]
    pub initial_guess: Option<f64>,

    /// Maximum Colebrook iterations per Reynolds number
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Convergence tolerance on successive friction factors
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Unit of the entered blood pressure values (mmHg, kPa, psi, ...)
    #[arg(long)]
    pub unit: Option<PressureUnit>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// 지정된 인자를 설정 위에 덮어쓴다.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(reynolds) = &self.reynolds {
            config.friction.reynolds_numbers = reynolds.clone();
        }
        if let Some(roughness) = self.roughness {
            config.friction.relative_roughness = roughness;
        }
        if let Some(guess) = self.initial_guess {
            config.friction.initial_guess = guess;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.friction.max_iterations = max_iterations;
        }
        if let Some(tolerance) = self.tolerance {
            config.friction.tolerance = tolerance;
        }
        if let Some(unit) = self.unit {
            config.blood_pressure.unit = unit;
        }
        config
    }

    /// 로그 출력 수준. 기본은 경고 이상만 표시한다.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
