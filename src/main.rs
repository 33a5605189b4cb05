// logsieve - main.rs
// CLI entry point: diagnostics first, then config, then dispatch

use std::process::exit;

use clap::Parser;
use logsieve::cli::{dispatch, Cli};
use logsieve::config::load_config;

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            exit(1);
        }
    };

    dispatch(cli, config);
}
