//! snss-dump
//!
//! Prints the commands of a browser session file.

use std::path::PathBuf;

use clap::Parser;
use snss::{ReaderConfig, SnssReader};
use tracing_subscriber::{fmt, EnvFilter};

/// SNSS session file dumper
#[derive(Parser, Debug)]
#[command(name = "snss-dump")]
#[command(about = "Decode and print the commands of a browser session file")]
#[command(version)]
struct Args {
    /// Session file to parse
    file: PathBuf,

    /// Print one JSON object per command
    #[arg(short, long)]
    json: bool,

    /// Hide commands whose payload is not decoded
    #[arg(short, long)]
    skip_unknown: bool,

    /// Stop after this many commands
    #[arg(short, long)]
    limit: Option<usize>,

    /// Log frame-level detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let default_filter = if args.verbose { "info,snss=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = ReaderConfig::builder().skip_unknown(args.skip_unknown);
    if let Some(limit) = args.limit {
        builder = builder.max_commands(limit);
    }
    let config = builder.build();

    let reader = match SnssReader::open_with_config(&args.file, config) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to open {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    if !args.json {
        println!("File version: {}", reader.version());
    }

    let mut commands = reader.commands();
    for result in &mut commands {
        let command = match result {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("Decode failed: {}", e);
                std::process::exit(1);
            }
        };

        if args.json {
            match serde_json::to_string(&command) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    tracing::error!("JSON encoding failed: {}", e);
                    std::process::exit(1);
                }
            }
        } else {
            println!("{command}");
            println!("----");
        }
    }

    let reader = commands.reader();
    tracing::info!(
        frames = reader.frames_read(),
        skipped = reader.frames_skipped(),
        "Done"
    );
}
