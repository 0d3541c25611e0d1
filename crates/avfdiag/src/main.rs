//! avfdiag entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use avfdiag::{Command, DiagConfig, Snapshot};

/// AVF virtual function diagnostics
#[derive(Parser, Debug)]
#[command(name = "avfdiag")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (default: /etc/avfdiag/avfdiag.toml)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Driver snapshot file, overrides the configured path
    #[arg(short = 's', long)]
    snapshot: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Graph node index of the AVF input node
    #[arg(long)]
    trace_node_index: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

/// Logs go to stderr so report output on stdout stays clean.
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<DiagConfig> {
    let config = DiagConfig::load(args.config.as_deref())?.with_overrides(
        args.snapshot.clone(),
        args.log_level.clone(),
        args.trace_node_index,
    )?;
    Ok(config)
}

fn report(command: &Command, config: &DiagConfig) -> anyhow::Result<String> {
    let snapshot = Snapshot::from_file(&config.snapshot_path)?;
    command
        .run(&snapshot, config)
        .with_context(|| format!("{} failed", command.label()))
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logging is configured from the file, so config errors go straight to stderr.
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("avfdiag: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_level);
    debug!(?config, "configuration loaded");

    match report(&args.command, &config) {
        Ok(text) => {
            if !text.is_empty() {
                println!("{}", text);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
