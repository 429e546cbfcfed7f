//! Portal configuration.
//!
//! Every field has a default matching the stock portal behaviour, so a
//! `config.json` in the data directory only needs the fields it changes:
//!
//! ```json
//! { "timing": { "connect_latency_ms": 300 }, "faucet_amount": 250 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};
use crate::types::Network;

/// File name looked up inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Stepped progress schedule for a simulated workflow.
///
/// Progress starts at 0, grows by `step` every `tick_ms`, and once it hits
/// 100 the run waits `settle_ms` before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPlan {
    pub step: u8,
    pub tick_ms: u64,
    pub settle_ms: u64,
}

impl ProgressPlan {
    pub const FAUCET: ProgressPlan = ProgressPlan {
        step: 10,
        tick_ms: 150,
        settle_ms: 500,
    };

    pub const MINT: ProgressPlan = ProgressPlan {
        step: 5,
        tick_ms: 100,
        settle_ms: 500,
    };

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Number of ticks needed to reach 100.
    pub fn ticks(&self) -> u32 {
        let step = u32::from(self.step.max(1));
        100u32.div_ceil(step)
    }

    /// Progress values reported over one run, starting at 0 and ending at 100.
    pub fn checkpoints(&self) -> Vec<u8> {
        let step = self.step.max(1);
        let mut values = vec![0u8];
        let mut current = 0u8;
        while current < 100 {
            current = current.saturating_add(step).min(100);
            values.push(current);
        }
        values
    }

    /// Wall time of one full run.
    pub fn total(&self) -> Duration {
        self.tick() * self.ticks() + self.settle()
    }

    fn instant(self) -> Self {
        Self {
            tick_ms: 0,
            settle_ms: 0,
            ..self
        }
    }
}

/// Delays used by the mock backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationTiming {
    pub connect_latency_ms: u64,
    pub balance_latency_ms: u64,
    pub activity_latency_ms: u64,
    pub faucet: ProgressPlan,
    pub mint: ProgressPlan,
}

impl Default for SimulationTiming {
    fn default() -> Self {
        Self {
            connect_latency_ms: 1500,
            balance_latency_ms: 1000,
            activity_latency_ms: 1500,
            faucet: ProgressPlan::FAUCET,
            mint: ProgressPlan::MINT,
        }
    }
}

impl SimulationTiming {
    pub fn connect_latency(&self) -> Duration {
        Duration::from_millis(self.connect_latency_ms)
    }

    pub fn balance_latency(&self) -> Duration {
        Duration::from_millis(self.balance_latency_ms)
    }

    pub fn activity_latency(&self) -> Duration {
        Duration::from_millis(self.activity_latency_ms)
    }

    /// Same progress steps, no waiting.
    pub fn instant() -> Self {
        let stock = Self::default();
        Self {
            connect_latency_ms: 0,
            balance_latency_ms: 0,
            activity_latency_ms: 0,
            faucet: stock.faucet.instant(),
            mint: stock.mint.instant(),
        }
    }
}

/// Balance the mock backend reports for each network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockBalances {
    pub devnet: u64,
    pub testnet: u64,
}

impl Default for MockBalances {
    fn default() -> Self {
        Self {
            devnet: 1000,
            testnet: 500,
        }
    }
}

impl MockBalances {
    pub fn for_network(&self, network: Network) -> u64 {
        match network {
            Network::Devnet => self.devnet,
            Network::Testnet => self.testnet,
        }
    }
}

/// Top-level portal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub timing: SimulationTiming,
    pub balances: MockBalances,
    pub faucet_amount: u64,
    pub token_symbol: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            timing: SimulationTiming::default(),
            balances: MockBalances::default(),
            faucet_amount: 100,
            token_symbol: "SUI".to_string(),
        }
    }
}

impl PortalConfig {
    /// Default config with every simulated delay set to zero.
    pub fn instant() -> Self {
        Self {
            timing: SimulationTiming::instant(),
            ..Self::default()
        }
    }

    /// Load `config.json` from `data_dir`, falling back to defaults when absent.
    pub fn load(data_dir: impl AsRef<Path>) -> PortalResult<Self> {
        let path = data_dir.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        let config: PortalConfig =
            serde_json::from_str(&raw).map_err(|e| PortalError::Serialization(e.to_string()))?;
        tracing::debug!(path = %path.display(), "Loaded portal config");
        Ok(config)
    }
}
