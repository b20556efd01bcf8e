// taskdesk CLI entry point.

use clap::Parser;

mod commands;
mod config;
mod exit_code;
mod output;

#[derive(Parser)]
#[command(name = "taskdesk", about = "Ticket templates and structured descriptions")]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::run(cli.command)
}
