//! Sui Testnet Portal CLI
//!
//! Drives the same wallet session, faucet and mint workflows as the desktop
//! app from a terminal. The wallet snapshot lives in the data directory, so a
//! `connect` in one invocation is still connected in the next.
//!
//! ## Usage
//!
//! ```bash
//! # Show the wallet session
//! testnet-portal status
//!
//! # Connect the mock wallet
//! testnet-portal connect
//!
//! # Switch to testnet
//! testnet-portal network testnet
//!
//! # Request faucet tokens
//! testnet-portal faucet
//!
//! # Mint an NFT from a local image
//! testnet-portal mint --name "Genesis" --image ./art.png
//!
//! # Show recent activity and network stats
//! testnet-portal activity
//!
//! # Browse example contracts and developer resources
//! testnet-portal contracts --source
//! testnet-portal resources
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use testnet_core::catalog;
use testnet_core::logging::filter_for_verbosity;
use testnet_core::{
    format_thousands, Faucet, MintDraft, MockBackend, Network, NftImage, NftMinter, Notification,
    Notifier, PortalConfig, PortalError, RedbStore, SessionState, SimulationTiming, WalletBackend,
    WalletSession,
};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Database file inside the data directory.
const DB_FILE: &str = "portal.redb";

/// Sui Testnet Portal - wallet, faucet and NFT minting on devnet/testnet
#[derive(Parser)]
#[command(name = "testnet-portal")]
#[command(version = "0.1.0")]
#[command(about = "Sui Testnet Portal - wallet, faucet and NFT minting on devnet/testnet")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir + /testnet-portal)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Skip all simulated network delays
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show connection status, address, network and balance
    Status,

    /// Connect the wallet
    Connect,

    /// Disconnect the wallet and forget the saved session
    Disconnect,

    /// Switch the active network
    Network {
        /// devnet or testnet
        network: Network,
    },

    /// Request test tokens from the faucet
    Faucet,

    /// Mint an NFT from a local image file
    Mint {
        /// NFT name
        #[arg(short, long)]
        name: String,
        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
        /// Path to a PNG, JPEG or WebP image
        #[arg(short, long)]
        image: PathBuf,
    },

    /// Show recent wallet activity and network stats
    Activity,

    /// List example Move contracts
    Contracts {
        /// Print the example counter module source
        #[arg(long)]
        source: bool,
    },

    /// List developer resources and the quick start guide
    Resources,
}

type Session = WalletSession<MockBackend, RedbStore>;

fn setup_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_for_verbosity(verbosity))),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Get the default data directory (<platform data dir>/testnet-portal)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("testnet-portal")
}

/// Print every notification raised so far, destructive ones to stderr.
fn drain_notifications(rx: &mut broadcast::Receiver<Notification>) {
    while let Ok(notification) = rx.try_recv() {
        if notification.is_destructive() {
            eprintln!("! {}: {}", notification.title, notification.description);
        } else {
            println!("* {}: {}", notification.title, notification.description);
        }
    }
}

/// Echo workflow progress on stderr until it reaches 100%.
fn spawn_progress_printer(mut rx: watch::Receiver<u8>, label: &'static str) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let value = *rx.borrow_and_update();
            eprintln!("{} {}%", label, value);
            if value >= 100 {
                break;
            }
        }
    })
}

fn require_connected(state: &SessionState) -> Result<()> {
    if state.is_connected() {
        Ok(())
    } else {
        Err(PortalError::NotConnected).context("Run `testnet-portal connect` first")
    }
}

fn print_status(state: &SessionState, symbol: &str) {
    println!("Wallet:");
    println!("  Status:  {}", state.status);
    if let Some(address) = &state.address {
        println!("  Address: {}", address);
    }
    println!("  Network: {}", state.network.label());
    if state.is_connected() {
        match state.balance {
            Some(balance) => println!("  Balance: {} {}", format_thousands(balance), symbol),
            None => println!("  Balance: (unavailable)"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    // Static listings need no wallet at all.
    match &cli.command {
        Commands::Contracts { source } => {
            print_contracts(*source);
            return Ok(());
        }
        Commands::Resources => {
            print_resources();
            return Ok(());
        }
        _ => {}
    }

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let mut config = PortalConfig::load(&data_dir)
        .with_context(|| format!("Could not load config from {}", data_dir.display()))?;
    if cli.instant {
        config.timing = SimulationTiming::instant();
    }
    let symbol = config.token_symbol.clone();

    let store = Arc::new(
        RedbStore::new(data_dir.join(DB_FILE))
            .with_context(|| format!("Could not open database in {}", data_dir.display()))?,
    );
    let backend = Arc::new(MockBackend::new(config.clone()));
    let session: Session = WalletSession::restore(backend, store, Notifier::new());
    let mut notifications = session.notifier().subscribe();

    match cli.command {
        Commands::Status => {
            session.resume().await?;
            print_status(&session.state(), &symbol);
        }

        Commands::Connect => {
            let was_connected = session.state().is_connected();
            let result = session.connect().await;
            drain_notifications(&mut notifications);
            let address = result?;
            if was_connected {
                println!("Already connected as {}", address);
                session.resume().await?;
            }
            println!();
            print_status(&session.state(), &symbol);
        }

        Commands::Disconnect => {
            session.disconnect();
            drain_notifications(&mut notifications);
        }

        Commands::Network { network } => {
            let connected = session.state().is_connected();
            session.switch_network(network).await;
            drain_notifications(&mut notifications);
            if connected {
                println!();
                print_status(&session.state(), &symbol);
            } else {
                println!(
                    "{} selected. Connect a wallet to keep this choice.",
                    network.label()
                );
            }
        }

        Commands::Faucet => {
            run_faucet(&session, &config, &mut notifications).await?;
        }

        Commands::Mint {
            name,
            description,
            image,
        } => {
            let image = NftImage::load(&image)
                .with_context(|| format!("Could not read image {}", image.display()))?;
            let draft = MintDraft {
                name,
                description,
                image: Some(image),
            };
            run_mint(&session, &draft, &mut notifications).await?;
        }

        Commands::Activity => {
            session.resume().await?;
            let state = session.state();
            require_connected(&state)?;
            print_activity(&session, &state, &symbol).await?;
        }

        Commands::Contracts { .. } | Commands::Resources => {}
    }

    Ok(())
}

async fn run_faucet(
    session: &Session,
    config: &PortalConfig,
    notifications: &mut broadcast::Receiver<Notification>,
) -> Result<()> {
    let state = session.state();
    require_connected(&state)?;

    let faucet = Faucet::new(
        session.backend().clone(),
        session.notifier().clone(),
        config.faucet_amount,
        config.token_symbol.clone(),
    );
    let printer = spawn_progress_printer(faucet.subscribe_progress(), "Processing request...");
    let result = faucet.request_tokens(&state).await;
    printer.abort();
    drain_notifications(notifications);

    let record = result?;
    println!();
    println!("Faucet request:");
    println!("  ID:      {}", record.id);
    println!("  Amount:  {} {}", record.amount, config.token_symbol);
    println!("  Network: {}", record.network.label());
    println!("  Status:  {}", record.status.label());
    println!(
        "  Time:    {}",
        record.requested_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}

async fn run_mint(
    session: &Session,
    draft: &MintDraft,
    notifications: &mut broadcast::Receiver<Notification>,
) -> Result<()> {
    let state = session.state();
    require_connected(&state)?;

    let minter = NftMinter::new(session.backend().clone(), session.notifier().clone());
    let printer = spawn_progress_printer(minter.subscribe_progress(), "Minting NFT...");
    let result = minter.mint(&state, draft).await;
    printer.abort();
    drain_notifications(notifications);

    let nft = result?;
    println!();
    println!("Minted NFT:");
    println!("  ID:      {}", nft.id);
    println!("  Name:    {}", nft.name);
    if !nft.description.is_empty() {
        println!("  About:   {}", nft.description);
    }
    println!("  Owner:   {}", nft.owner.short());
    println!("  Network: {}", nft.network.label());
    Ok(())
}

async fn print_activity(session: &Session, state: &SessionState, symbol: &str) -> Result<()> {
    let Some((address, network)) = state.connected_identity() else {
        return Ok(());
    };
    let backend = session.backend();
    let (activity, stats) = tokio::try_join!(
        backend.recent_activity(&address, network),
        backend.network_stats(network),
    )?;

    println!("Recent Activity:");
    if activity.is_empty() {
        println!("  No recent activity found");
    }
    for item in &activity {
        println!(
            "  {:<14} {:>+6} {}  {:<10} {}",
            item.kind.label(),
            item.amount,
            symbol,
            item.status,
            item.timestamp.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")
        );
    }

    println!();
    println!("Network Stats:");
    println!("  Gas Usage:    {}%", stats.gas_usage_percent);
    println!("  Block Height: {}", format_thousands(stats.block_height));
    println!(
        "  Status:       {}",
        if stats.operational { "Operational" } else { "Degraded" }
    );
    Ok(())
}

fn print_contracts(source: bool) {
    println!("Example Contracts:");
    for contract in &catalog::EXAMPLE_CONTRACTS {
        println!(
            "  {:<18} [{}] {}",
            contract.name,
            contract.complexity.label(),
            contract.description
        );
    }

    if source {
        println!();
        println!("{}", catalog::COUNTER_MODULE);
    }
}

fn print_resources() {
    println!("Developer Resources:");
    for card in &catalog::RESOURCE_CARDS {
        println!("  {} - {}", card.title, card.description);
        println!("    {}", card.url);
    }

    println!();
    println!("Latest Updates:");
    for update in &catalog::LATEST_UPDATES {
        println!("  {} ({})", update.title, update.date);
        println!("    {}", update.description);
    }

    println!();
    println!("Quick Start:");
    for (i, step) in catalog::QUICK_START.iter().enumerate() {
        match step.command {
            Some(command) => println!("  {}. {} `{}`", i + 1, step.text, command),
            None => println!("  {}. {}", i + 1, step.text),
        }
    }
    println!("  Install the Sui CLI: {}", catalog::INSTALL_CLI_URL);

    println!();
    println!("Top Resources:");
    for link in &catalog::TOP_RESOURCES {
        println!("  {} - {}", link.title, link.description);
        println!("    {}", link.url);
    }
}
