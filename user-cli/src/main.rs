mod app;
mod commands;
mod output;
mod prompt;

use app::App;

use std::io::{self, IsTerminal};

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
use user_service::InMemoryUserStore;

/// Interactive in-memory user directory
#[derive(Parser, Debug)]
#[command(name = "userdir", version, about)]
struct Cli {
    /// Log filter for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, env = "USERDIR_LOG", default_value = "error", value_name = "FILTER")]
    log_level: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    App::new(InMemoryUserStore::new(), stdin.lock(), stdout.lock(), color).run()
}
