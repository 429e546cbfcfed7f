//! Testnet Portal UI Components
//!
//! Stateless Dioxus building blocks for the portal's glass-morphism look.
//! Nothing in here knows about wallets or sessions; every component is a
//! pure function of its props.
//!
//! ## Styling
//!
//! Components only emit class names. The matching rules live in the desktop
//! app's global stylesheet, so each variant enum exposes `class()` and the
//! mapping can be tested without rendering.
//!
//! - **Sui blue (#4da2ff)**: primary actions, links, highlights
//! - **Purple / cyan**: secondary accents on gradients and cards
//! - **Glass**: translucent white panels over a soft gradient backdrop

pub mod components;

pub use components::*;
