//! JSONL logging for portal instances.
//!
//! Every running portal writes its own file, so several desktop windows can
//! share a data directory without interleaving output:
//!
//! ```text
//! <data-dir>/logs/
//! ├── 2026-10-16_main.jsonl
//! └── 2026-10-16_second.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use testnet_core::logging::JsonlLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let jsonl = JsonlLayer::new(data_dir.join("logs"), "main")?;
//! tracing_subscriber::registry()
//!     .with(tracing_subscriber::EnvFilter::new("info"))
//!     .with(tracing_subscriber::fmt::layer())
//!     .with(jsonl)
//!     .init();
//! ```
//!
//! Errors only:
//!
//! ```bash
//! jq 'select(.level == "error")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::{filter_for_verbosity, JsonlLayer};
pub use writer::{read_entries, InstanceLogWriter};
