//! Visual theme for the Testnet Portal.

mod styles;

pub use styles::GLOBAL_STYLES;
