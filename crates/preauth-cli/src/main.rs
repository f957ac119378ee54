use clap::Parser;
use eyre::Result;

mod cli;
mod commands;
mod config;

use cli::{Cli, Command};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Command::Generate(args) => commands::generate(&args),
        Command::Lexicon(args) => commands::print_lexicon(&args),
    }
}

// Logs go to stderr so stdout stays clean for `preauth lexicon > file.json`.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
