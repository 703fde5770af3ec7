use anyhow::Context;
use clap::Parser;

use jotto::config::Config;
use jotto::logging::init_tracing;
use jotto::ui;

/// Terminal client for the Jotto word-guessing service.
#[derive(Parser)]
#[command(name = "jotto", version, about)]
struct Cli {
    /// Puzzle id to start with; malformed or non-positive values pick a
    /// random puzzle, as does omitting the flag.
    #[arg(long)]
    puzzle: Option<String>,

    /// Scoring endpoint URL, overriding the config file.
    #[arg(long)]
    server: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    config.validate().context("invalid configuration")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    ui::runtime::run(config, runtime.handle().clone(), cli.puzzle)
        .context("terminal UI failed")?;
    Ok(())
}
