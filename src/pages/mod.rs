//! Page components for the Testnet Portal, one per route.

mod contracts;
mod dashboard;
mod faucet;
mod landing;
mod nft_mint;
mod resources;

pub use contracts::Contracts;
pub use dashboard::Dashboard;
pub use faucet::Faucet;
pub use landing::Landing;
pub use nft_mint::NftMint;
pub use resources::Resources;
