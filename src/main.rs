use clap::Parser;
use friction_bp_toolbox::{app, cli::Cli, config};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 한 번의 세션을 실행한다.
fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = try_run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = cli.apply(config::load_or_default(&cli.config)?);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app::run(&cfg, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
