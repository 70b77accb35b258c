//! # rfpdraft: draft RFP answers from the terminal
//!
//! A thin entrypoint; all logic lives in the `rfpdraft_cli` library crate.

use anyhow::Result;
use clap::Parser;
use rfpdraft_cli::{run, Cli};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the draft.
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("rfpdraft_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("[rfpdraft error] {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
