//! Persisted session snapshot.
//!
//! Only the address and network survive a restart. The balance is always
//! fetched again, never trusted from disk.

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};
use crate::types::{Address, Network};

/// Storage key for the snapshot.
pub const SNAPSHOT_KEY: &str = "walletState";

/// The minimal part of the session written to local storage.
///
/// Wire format: `{"address":"0x…","network":"devnet"}`. A missing network
/// falls back to devnet; a missing or malformed address rejects the whole
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub address: Address,
    #[serde(default)]
    pub network: Network,
}

impl Snapshot {
    pub fn new(address: Address, network: Network) -> Self {
        Self { address, network }
    }

    /// Serialize to the stored text form.
    pub fn encode(&self) -> PortalResult<String> {
        serde_json::to_string(self).map_err(|e| PortalError::Serialization(e.to_string()))
    }

    /// Parse and validate stored text.
    pub fn decode(raw: &str) -> PortalResult<Self> {
        serde_json::from_str(raw).map_err(|e| PortalError::MalformedSnapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";

    #[test]
    fn encodes_expected_wire_format() {
        let snap = Snapshot::new(Address::parse(ADDR).unwrap(), Network::Testnet);
        let text = snap.encode().unwrap();
        assert_eq!(text, format!(r#"{{"address":"{}","network":"testnet"}}"#, ADDR));
        assert_eq!(Snapshot::decode(&text).unwrap(), snap);
    }

    #[test]
    fn missing_network_defaults_to_devnet() {
        let snap = Snapshot::decode(&format!(r#"{{"address":"{}"}}"#, ADDR)).unwrap();
        assert_eq!(snap.network, Network::Devnet);
    }

    #[test]
    fn rejects_malformed_snapshots() {
        let cases = [
            "",
            "not json",
            "{}",
            r#"{"network":"devnet"}"#,
            r#"{"address":null,"network":"devnet"}"#,
            r#"{"address":"0x1234","network":"devnet"}"#,
            r#"{"address":42}"#,
        ];
        for raw in cases {
            assert!(
                matches!(Snapshot::decode(raw), Err(PortalError::MalformedSnapshot(_))),
                "accepted {raw:?}"
            );
        }

        let bad_network = format!(r#"{{"address":"{}","network":"mainnet"}}"#, ADDR);
        assert!(Snapshot::decode(&bad_network).is_err());
    }
}
