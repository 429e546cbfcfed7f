//! Application components for the Testnet Portal.
//!
//! Stateful pieces that know about the wallet session. Stateless styling
//! primitives live in `testnet-ui`.

mod connect_prompt;
mod image_picker;
mod navbar;
mod toast;
mod wallet_widget;

pub use connect_prompt::ConnectPrompt;
pub use image_picker::ImagePicker;
pub use navbar::{NavLocation, Navbar};
pub use toast::Toaster;
pub use wallet_widget::WalletWidget;
