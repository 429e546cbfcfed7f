//! Core types for the Testnet Portal
//!
//! These are the plain data types shared by the session store, the
//! simulated workflows and both front ends.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// Number of hex digits in a mock wallet address (after the `0x` prefix).
pub const ADDRESS_HEX_LEN: usize = 40;

/// One of the two simulated chain environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Devnet,
    Testnet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Devnet, Network::Testnet];

    /// Wire name, as stored in the snapshot (`"devnet"` / `"testnet"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
        }
    }

    /// Capitalized name for buttons and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Network::Devnet => "Devnet",
            Network::Testnet => "Testnet",
        }
    }

    /// The other network (the wallet widget offers a single toggle).
    pub fn toggled(&self) -> Network {
        match self {
            Network::Devnet => Network::Testnet,
            Network::Testnet => Network::Devnet,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devnet" => Ok(Network::Devnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(PortalError::InvalidNetwork(other.to_string())),
        }
    }
}

/// Wallet connection state machine.
///
/// ```text
/// Disconnected ──connect──▶ Connecting ──ok──▶ Connected
///      ▲                        │                  │
///      └────────failure─────────┘                  │
///      └──────────────────disconnect───────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Disconnected => write!(f, "Disconnected"),
            ConnectionStatus::Connecting => write!(f, "Connecting"),
            ConnectionStatus::Connected => write!(f, "Connected"),
        }
    }
}

/// A mock wallet address: `0x` followed by exactly 40 hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Validate and wrap an address string.
    pub fn parse(raw: &str) -> Result<Self, PortalError> {
        let hex_part = raw
            .strip_prefix("0x")
            .ok_or_else(|| PortalError::InvalidAddress(raw.to_string()))?;

        if hex_part.len() != ADDRESS_HEX_LEN || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PortalError::InvalidAddress(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    /// Build an address from 20 raw bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for tight spaces: `0x1234...abcd`.
    pub fn short(&self) -> String {
        let s = &self.0;
        format!("{}...{}", &s[..6], &s[s.len() - 4..])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = PortalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Address::parse(&value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

/// Everything the UI knows about the wallet at one instant.
///
/// `address` is `Some` iff `status` is `Connected`; `balance` is only
/// meaningful while connected and stays `None` until the first fetch lands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub status: ConnectionStatus,
    pub address: Option<Address>,
    pub balance: Option<u64>,
    pub network: Network,
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    pub fn is_connecting(&self) -> bool {
        self.status == ConnectionStatus::Connecting
    }

    /// Address and network, if connected.
    pub fn connected_identity(&self) -> Option<(Address, Network)> {
        match (&self.status, &self.address) {
            (ConnectionStatus::Connected, Some(address)) => Some((address.clone(), self.network)),
            _ => None,
        }
    }
}

/// Kind of entry in the dashboard activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Transfer,
    NftMint,
    ContractCall,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Transfer => "Transfer",
            ActivityKind::NftMint => "NFT Mint",
            ActivityKind::ContractCall => "Contract Call",
        }
    }
}

/// One row of recent wallet activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    /// Signed amount in whole tokens; negative means spent.
    pub amount: i64,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    pub fn is_debit(&self) -> bool {
        self.amount < 0
    }
}

/// Headline numbers shown in the dashboard's network panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkStats {
    pub gas_usage_percent: u8,
    pub block_height: u64,
    pub operational: bool,
}

/// Format an integer with thousands separators (`1243098` → `1,243,098`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "0x00112233445566778899aabbccddeeff00112233";

    #[test]
    fn network_round_trips_through_str() {
        for network in Network::ALL {
            assert_eq!(network.as_str().parse::<Network>().unwrap(), network);
        }
        assert_eq!("TESTNET".parse::<Network>().unwrap(), Network::Testnet);
        assert!("mainnet".parse::<Network>().is_err());
    }

    #[test]
    fn network_toggle_and_labels() {
        assert_eq!(Network::Devnet.toggled(), Network::Testnet);
        assert_eq!(Network::Testnet.toggled(), Network::Devnet);
        assert_eq!(Network::Testnet.label(), "Testnet");
        assert_eq!(Network::default(), Network::Devnet);
    }

    #[test]
    fn network_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Network::Testnet).unwrap(), "\"testnet\"");
    }

    #[test]
    fn address_accepts_forty_hex_digits() {
        let addr = Address::parse(VALID).unwrap();
        assert_eq!(addr.as_str(), VALID);
        assert_eq!(addr.short(), "0x0011...2233");
    }

    #[test]
    fn address_rejects_malformed_input() {
        assert!(Address::parse("").is_err());
        assert!(Address::parse("00112233445566778899aabbccddeeff00112233").is_err());
        assert!(Address::parse("0x1234").is_err());
        assert!(Address::parse("0xzz112233445566778899aabbccddeeff00112233").is_err());
        assert!(Address::parse(&format!("{}00", VALID)).is_err());
    }

    #[test]
    fn address_from_bytes_is_valid() {
        let addr = Address::from_bytes([0xab; 20]);
        assert!(Address::parse(addr.as_str()).is_ok());
        assert!(addr.as_str().starts_with("0xabab"));
    }

    #[test]
    fn address_deserialization_validates() {
        let ok: Result<Address, _> = serde_json::from_str(&format!("\"{}\"", VALID));
        assert!(ok.is_ok());
        let bad: Result<Address, _> = serde_json::from_str("\"0xnope\"");
        assert!(bad.is_err());
    }

    #[test]
    fn session_state_default_is_disconnected() {
        let state = SessionState::default();
        assert_eq!(state.status, ConnectionStatus::Disconnected);
        assert!(state.address.is_none());
        assert!(state.balance.is_none());
        assert!(state.connected_identity().is_none());
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1_243_098), "1,243,098");
    }
}
