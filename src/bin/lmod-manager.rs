use anyhow::Result;
use clap::{CommandFactory, Parser};
use lmod_manager::cli::{self, LmodManagerCli};
use lmod_manager::ManagerConfig;
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = LmodManagerCli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli::log_level(cli.verbosity))
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting lmod-manager v{}", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: LmodManagerCli) -> Result<ExitCode> {
    let config = ManagerConfig::from(&cli);

    let Some(command) = cli.command else {
        eprint!("{}", LmodManagerCli::command().render_usage());
        eprintln!();
        return Ok(ExitCode::from(2));
    };

    cli::execute(config, command).await?;
    Ok(ExitCode::SUCCESS)
}
