//! `ifdb-dl`: download IFDB games through the terminal

mod cli;
mod help;

use std::process::ExitCode;

use clap::Parser;
use ifdb_core::{FsStore, IfdbClient, Session, SessionOutcome, Terminal};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.wants_help() {
        return match Cli::print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    match run(&cli).await {
        Ok(outcome) => {
            debug!(?outcome, "session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ifdb-dl: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> ifdb_core::Result<SessionOutcome> {
    let client = IfdbClient::with_config(cli.client_config())?;
    let mut terminal = Terminal::stdio();

    Session::new(&client, &FsStore, cli.session_config())
        .run(&mut terminal)
        .await
}
