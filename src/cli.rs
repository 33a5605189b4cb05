use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use crate::config::SinkConfig;
use crate::reader;
use crate::severity::Severity;
use crate::sink::FileSink;

/// Top-level CLI interface for logsieve
#[derive(Parser)]
#[command(
    name = "logsieve",
    version = "0.1.0",
    about = "Level-filtered append-only log sink"
)]
pub struct Cli {
    /// Override the configured log file path
    #[arg(long, global = true)]
    pub path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append one message, subject to the configured threshold
    Write {
        #[arg(short, long)]
        message: String,
        #[arg(short, long, default_value = "INFO")]
        level: Severity,
    },

    /// Print persisted lines whose tag matches the level exactly
    Read {
        #[arg(short, long)]
        level: Severity,
    },

    /// Race two writer threads against one sink, then read back errors
    Demo,
}

pub fn dispatch(cli: Cli, mut config: SinkConfig) {
    if let Some(path) = cli.path {
        config.log_path = path;
    }

    match cli.command {
        Commands::Write { message, level } => {
            let sink = FileSink::from_config(&config);
            sink.log(&message, level);
        }
        Commands::Read { level } => {
            for line in reader::read_filtered(&config.log_path, level) {
                println!("{line}");
            }
        }
        Commands::Demo => run_demo(&config),
    }
}

/// Two threads race to append through one shared sink. The ERROR line
/// persists; the INFO line falls below the WARNING threshold and never
/// reaches the file.
fn run_demo(config: &SinkConfig) {
    let sink = Arc::new(FileSink::from_config(config));
    sink.set_threshold(Severity::Warning);

    let error_writer = {
        let sink = Arc::clone(&sink);
        thread::spawn(move || sink.log("worker 1 hit an error", Severity::Error))
    };
    let info_writer = {
        let sink = Arc::clone(&sink);
        thread::spawn(move || sink.log("worker 2 reporting in", Severity::Info))
    };

    if error_writer.join().is_err() || info_writer.join().is_err() {
        eprintln!("Demo writer thread panicked");
        return;
    }

    println!(
        "--- {} lines tagged {} ---",
        sink.path().display(),
        Severity::Error
    );
    for line in sink.read_filtered(Severity::Error) {
        println!("{line}");
    }
}
