//! eventdates CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eventdates_cli::cli::Cli;
use eventdates_cli::commands::run;
use eventdates_cli::output::format_state;
use eventdates_cli::{Config, StateFile};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventdates=info,eventdates_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let file = StateFile::new(&cli.state);
    let read_only = cli.command.is_read_only();

    tracing::debug!(path = %file.path().display(), ?config, "Loading state");

    let outcome = run(cli.command, &file, &config)?;

    if read_only || !cli.quiet {
        println!("{}", format_state(&outcome.state, cli.format));
    }

    Ok(())
}
