#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use testnet_core::logging::{filter_for_verbosity, JsonlLayer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Launch settings, set once from the command line
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub data_dir: PathBuf,
    pub instance: String,
    /// Zero every simulated delay
    pub instant: bool,
}

static SETTINGS: OnceLock<LaunchSettings> = OnceLock::new();

/// Get the launch settings (set from command line or defaults)
pub fn launch_settings() -> LaunchSettings {
    SETTINGS.get().cloned().unwrap_or_else(|| LaunchSettings {
        data_dir: default_data_dir(),
        instance: "main".to_string(),
        instant: false,
    })
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("testnet-portal")
}

/// Sui Testnet Portal - desktop app
#[derive(Parser, Debug)]
#[command(name = "testnet-portal-desktop")]
#[command(about = "Sui Testnet Portal - wallet, faucet and NFT minting on devnet/testnet")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: testnet-portal-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Skip all simulated network delays
    #[arg(long)]
    instant: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Console output plus a per-instance JSONL file under `<data-dir>/logs`.
fn setup_logging(verbosity: u8, data_dir: &std::path::Path, instance: &str) {
    // -v on the command line wins over the default, RUST_LOG wins over both.
    let default = if verbosity == 0 { "info" } else { filter_for_verbosity(verbosity) };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let jsonl = match JsonlLayer::new(data_dir.join("logs"), instance) {
        Ok(layer) => Some(layer),
        Err(e) => {
            eprintln!("Could not open log file in {}: {}", data_dir.display(), e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(jsonl)
        .init();
}

fn main() {
    let args = Args::parse();

    // Determine data directory and instance name
    let (data_dir, instance) = if let Some(dir) = args.data_dir {
        let name = args.name.clone().unwrap_or_else(|| {
            dir.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("custom")
                .to_string()
        });
        (dir, name)
    } else if let Some(name) = args.name.clone() {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("testnet-portal-{}", name));
        (base, name)
    } else {
        (default_data_dir(), "main".to_string())
    };

    setup_logging(args.verbose, &data_dir, &instance);

    let _ = SETTINGS.set(LaunchSettings {
        data_dir: data_dir.clone(),
        instance: instance.clone(),
        instant: args.instant,
    });

    let title = if instance == "main" {
        "Sui Testnet Portal".to_string()
    } else {
        format!("Sui Testnet Portal - {}", instance)
    };

    tracing::info!(%instance, data_dir = %data_dir.display(), "Starting desktop portal");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
