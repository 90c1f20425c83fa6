//! Headless driver for the skier scroll controller.
//!
//! - Parse command-line arguments.
//! - Load tuning from `conf/config.toml` (or `--config <path>`).
//! - Replay a recorded JSON-lines scroll session and print one frame per event.

use anyhow::{Context, Result, anyhow};
use skier_scroll::config::load_config;
use skier_scroll::replay::replay;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

struct Args {
    config_path: PathBuf,
    /// `None` reads events from stdin.
    events_path: Option<PathBuf>,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args()?;
    let config = load_config(&args.config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        config = %args.config_path.display(),
        level = %config.log_level,
        landmarks = config.landmarks.len(),
        popup_speed = %config.popup_speed,
        "Starting skier scroll replay"
    );

    let stdout = io::stdout().lock();
    let summary = match &args.events_path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open events file {}", path.display()))?;
            replay(BufReader::new(file), config, stdout)?
        }
        None => replay(io::stdin().lock(), config, stdout)?,
    };
    info!(events = summary.events, effects = summary.effects, "Done");
    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut config_path = PathBuf::from("conf/config.toml");
    let mut events_path = None;
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("--config needs a path"))?;
                config_path = PathBuf::from(value);
            }
            "-" => events_path = None,
            _ if events_path.is_none() => {
                let path = PathBuf::from(&arg);
                if !path.exists() {
                    return Err(anyhow!("File not found: {}", Path::new(&arg).display()));
                }
                events_path = Some(path);
            }
            _ => {
                return Err(anyhow!(
                    "Usage: skier-scroll [--config <config.toml>] [<events.jsonl> | -]"
                ));
            }
        }
    }

    Ok(Args {
        config_path,
        events_path,
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
