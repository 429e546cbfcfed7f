//! CLI Integration Tests
//!
//! These tests drive the binary end-to-end against a temporary data
//! directory. Every command runs with `--instant` so no simulated delay
//! slows the suite down.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory and no simulated latency
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("testnet-portal").expect("Failed to find testnet-portal binary");
    cmd.arg("--data-dir").arg(data_dir.path()).arg("--instant");
    cmd
}

/// Extract the wallet address from `status` output (format: "  Address: 0x...")
fn extract_address(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("  Address: "))
        .map(|a| a.trim().to_string())
}

fn connect(data_dir: &TempDir) -> String {
    let output = cli_cmd(data_dir).arg("connect").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_address(&stdout).expect("connect should print the address")
}

/// Write a small PNG and return its path.
fn write_png(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("art.png");
    image::RgbaImage::from_pixel(8, 8, image::Rgba([80, 120, 255, 255]))
        .save(&path)
        .unwrap();
    path
}

// ============================================================================
// Session Command Tests
// ============================================================================

#[test]
fn test_status_when_disconnected() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status:  Disconnected"))
        .stdout(predicate::str::contains("Network: Devnet"))
        .stdout(predicate::str::contains("Address:").not());
}

#[test]
fn test_connect_announces_and_shows_balance() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("connect")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wallet Connected: Connected to devnet successfully."))
        .stdout(predicate::str::contains("Status:  Connected"))
        .stdout(predicate::str::contains("Balance: 1,000 SUI"));
}

#[test]
fn test_session_survives_between_invocations() {
    let data_dir = TempDir::new().unwrap();
    let address = connect(&data_dir);
    assert!(address.starts_with("0x"));
    assert_eq!(address.len(), 42);

    cli_cmd(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status:  Connected"))
        .stdout(predicate::str::contains(address.as_str()));
}

#[test]
fn test_connect_when_already_connected_keeps_address() {
    let data_dir = TempDir::new().unwrap();
    let address = connect(&data_dir);

    cli_cmd(&data_dir)
        .arg("connect")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Already connected as {}", address)))
        .stdout(predicate::str::contains("Wallet Connected").not());
}

#[test]
fn test_switch_network_while_connected() {
    let data_dir = TempDir::new().unwrap();
    connect(&data_dir);

    cli_cmd(&data_dir)
        .args(["network", "testnet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Network Switched: Switched to testnet successfully."))
        .stdout(predicate::str::contains("Balance: 500 SUI"));

    cli_cmd(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Network: Testnet"));
}

#[test]
fn test_switch_network_while_disconnected_is_not_kept() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["network", "testnet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Testnet selected"))
        .stdout(predicate::str::contains("Network Switched").not());

    cli_cmd(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Network: Devnet"));
}

#[test]
fn test_invalid_network_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["network", "mainnet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid network"));
}

#[test]
fn test_disconnect_forgets_session() {
    let data_dir = TempDir::new().unwrap();
    connect(&data_dir);

    cli_cmd(&data_dir)
        .arg("disconnect")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wallet Disconnected"));

    cli_cmd(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status:  Disconnected"));
}

// ============================================================================
// Faucet and Mint Tests
// ============================================================================

#[test]
fn test_faucet_requires_connection() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("faucet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet not connected"));
}

#[test]
fn test_faucet_request() {
    let data_dir = TempDir::new().unwrap();
    connect(&data_dir);

    cli_cmd(&data_dir)
        .arg("faucet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success!: 100 SUI tokens have been sent to your wallet."))
        .stdout(predicate::str::contains("Amount:  100 SUI"))
        .stdout(predicate::str::contains("Status:  Completed"));
}

#[test]
fn test_mint_nft() {
    let data_dir = TempDir::new().unwrap();
    let image = write_png(&data_dir);
    connect(&data_dir);

    cli_cmd(&data_dir)
        .args(["mint", "--name", "Genesis", "--description", "First drop", "--image"])
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your NFT \"Genesis\" has been minted on the devnet.",
        ))
        .stdout(predicate::str::contains("Name:    Genesis"))
        .stdout(predicate::str::contains("About:   First drop"));
}

#[test]
fn test_mint_rejects_missing_image_file() {
    let data_dir = TempDir::new().unwrap();
    connect(&data_dir);

    cli_cmd(&data_dir)
        .args(["mint", "--name", "Ghost", "--image"])
        .arg(data_dir.path().join("missing.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read image"));
}

#[test]
fn test_mint_rejects_blank_name() {
    let data_dir = TempDir::new().unwrap();
    let image = write_png(&data_dir);
    connect(&data_dir);

    cli_cmd(&data_dir)
        .args(["mint", "--name", "   ", "--image"])
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mint draft incomplete: name"));
}

#[test]
fn test_activity_lists_feed_and_stats() {
    let data_dir = TempDir::new().unwrap();
    connect(&data_dir);

    cli_cmd(&data_dir)
        .arg("activity")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent Activity:"))
        .stdout(predicate::str::contains("NFT Mint"))
        .stdout(predicate::str::contains("Block Height: 1,243,098"))
        .stdout(predicate::str::contains("Operational"));
}

// ============================================================================
// Static Listing Tests
// ============================================================================

#[test]
fn test_contracts_listing() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("contracts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Counter"))
        .stdout(predicate::str::contains("[Advanced]"))
        .stdout(predicate::str::contains("module example::counter").not());
}

#[test]
fn test_contracts_source() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["contracts", "--source"])
        .assert()
        .success()
        .stdout(predicate::str::contains("module example::counter"));
}

#[test]
fn test_resources_listing() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("resources")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://docs.sui.io"))
        .stdout(predicate::str::contains("sui move new"))
        .stdout(predicate::str::contains("Top Resources:"));
}
