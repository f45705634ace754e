use clap::Parser;
use glampsite_cli::commands::{self, Command, Output};
use glampsite_cli::config::Config;
use glampsite_cli::{build_state, init_tracing};

#[derive(Parser, Debug)]
#[command(name = "glampsite", about = "Glamping site reservation console")]
struct Cli {
    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing();
    let state = build_state(&config)?;

    let mut stdout = std::io::stdout().lock();
    commands::run(cli.command, &state, Output { json: cli.json }, &mut stdout).await
}
