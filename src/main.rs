use std::path::PathBuf;

use clap::{Parser, Subcommand};

use active_window::{run_parse, Config, ParseArgs};

#[derive(Parser)]
#[command(
    name = "active_window",
    about = "Parses the JSON dump from ActivityWatch's window watchers"
)]
struct Cli {
    /// Write debug logs (including dropped CSV rows) to stderr.
    #[arg(long, global = true)]
    debug: bool,

    /// Extra config file layered over ~/.config/active-window/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a JSON or CSV (window_watcher) file.
    Parse(ParseArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("active_window debug log started");
    }

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Parse(args) => {
            let stdout = std::io::stdout();
            run_parse(&args, config, &mut stdout.lock())?;
        }
    }
    Ok(())
}
