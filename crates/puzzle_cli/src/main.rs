mod cli;
mod commands;
mod error;
mod logging;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use crate::cli::{Cli, Commands};
use crate::error::Result;

async fn run_app(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    debug!("parsed arguments: {:?}", cli);
    match &cli.command {
        Commands::Letters(args) => commands::letters::run(args, out),
        Commands::Animate(args) => commands::animate::run(args, out).await,
        Commands::Examples => commands::examples::run(out),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_app(&cli, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("command failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
