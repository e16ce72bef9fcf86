use clap::{CommandFactory, Parser};
use tracing::Level;

mod cli;
mod commands;
mod config;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(command) => commands::run_command(command, cli.config.as_deref()),
        None => {
            cli::Cli::command().print_help()?;
            Ok(())
        }
    }
}
