//! NFT mint page workflow.
//!
//! A mint needs a name and an image; the description is optional. Images are
//! normalised to a PNG thumbnail and carried around as a data URL so both the
//! desktop preview and the minted record can show them without touching disk.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use base64::Engine as _;
use chrono::{DateTime, Utc};
use image::ImageFormat;
use tokio::sync::watch;

use crate::backend::WalletBackend;
use crate::error::{PortalError, PortalResult};
use crate::notification::{Notification, Notifier};
use crate::types::{Address, Network, SessionState};
use crate::workflow::Workflow;

/// Longest edge of a stored NFT image.
pub const MAX_IMAGE_EDGE: u32 = 512;

/// An image ready to show in an `img` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftImage {
    data_url: String,
}

impl NftImage {
    /// Wrap an existing data URL as-is.
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }

    /// Decode any supported image, shrink it to fit [`MAX_IMAGE_EDGE`] and
    /// re-encode it as PNG.
    pub fn from_bytes(bytes: &[u8]) -> PortalResult<Self> {
        let img = image::load_from_memory(bytes).map_err(|e| PortalError::Image(e.to_string()))?;
        let img = if img.width() > MAX_IMAGE_EDGE || img.height() > MAX_IMAGE_EDGE {
            img.thumbnail(MAX_IMAGE_EDGE, MAX_IMAGE_EDGE)
        } else {
            img
        };

        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| PortalError::Image(e.to_string()))?;

        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        Ok(Self {
            data_url: format!("data:image/png;base64,{}", encoded),
        })
    }

    /// Read and normalise an image file.
    pub fn load(path: impl AsRef<Path>) -> PortalResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

/// The mint form as the user is filling it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintDraft {
    pub name: String,
    pub description: String,
    pub image: Option<NftImage>,
}

impl MintDraft {
    /// Whether the mint button should be enabled.
    pub fn is_ready(&self) -> bool {
        self.missing_field().is_none()
    }

    fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.image.is_none() {
            Some("image")
        } else {
            None
        }
    }
}

/// A minted NFT as shown in the collection grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintedNft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: NftImage,
    pub owner: Address,
    pub network: Network,
    pub minted_at: DateTime<Utc>,
}

/// NFT mint workflow bound to a backend.
pub struct NftMinter<B> {
    backend: Arc<B>,
    notifier: Notifier,
    workflow: Workflow<MintedNft>,
}

impl<B> Clone for NftMinter<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            notifier: self.notifier.clone(),
            workflow: self.workflow.clone(),
        }
    }
}

impl<B: WalletBackend> NftMinter<B> {
    pub fn new(backend: Arc<B>, notifier: Notifier) -> Self {
        Self {
            backend,
            notifier,
            workflow: Workflow::new("NFT mint"),
        }
    }

    pub fn is_running(&self) -> bool {
        self.workflow.is_running()
    }

    pub fn progress(&self) -> u8 {
        self.workflow.progress()
    }

    pub fn subscribe_progress(&self) -> watch::Receiver<u8> {
        self.workflow.subscribe_progress()
    }

    /// Minted NFTs, most recent first.
    pub fn collection(&self) -> Vec<MintedNft> {
        self.workflow.history()
    }

    /// Mint `draft` for the wallet described by `session`.
    pub async fn mint(&self, session: &SessionState, draft: &MintDraft) -> PortalResult<MintedNft> {
        let (owner, network) = session.connected_identity().ok_or(PortalError::NotConnected)?;
        if let Some(field) = draft.missing_field() {
            return Err(PortalError::IncompleteDraft(field));
        }

        let backend = self.backend.clone();
        let draft = draft.clone();
        tracing::info!(owner = %owner.short(), %network, name = %draft.name, "Minting NFT");

        let nft = self
            .workflow
            .run(|progress| async move { backend.mint_nft(&owner, network, &draft, progress).await })
            .await?;

        self.notifier.notify(Notification::info(
            "NFT Minted Successfully!",
            format!("Your NFT \"{}\" has been minted on the {}.", nft.name, network),
        ));
        Ok(nft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(width, height));
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png).unwrap();
        out
    }

    fn decode_data_url(image: &NftImage) -> DynamicImage {
        let b64 = image.data_url().strip_prefix("data:image/png;base64,").unwrap();
        let bytes = base64::engine::general_purpose::STANDARD.decode(b64).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn small_images_keep_their_size() {
        let image = NftImage::from_bytes(&png_bytes(32, 16)).unwrap();
        let decoded = decode_data_url(&image);
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
    }

    #[test]
    fn large_images_are_shrunk() {
        let image = NftImage::from_bytes(&png_bytes(2048, 1024)).unwrap();
        let decoded = decode_data_url(&image);
        assert_eq!(decoded.width(), MAX_IMAGE_EDGE);
        assert!(decoded.height() <= MAX_IMAGE_EDGE);
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(matches!(
            NftImage::from_bytes(b"definitely not an image"),
            Err(PortalError::Image(_))
        ));
    }

    #[test]
    fn draft_readiness() {
        let mut draft = MintDraft::default();
        assert!(!draft.is_ready());

        draft.name = "   ".to_string();
        draft.image = Some(NftImage::from_data_url("data:image/png;base64,AA=="));
        assert!(!draft.is_ready());

        draft.name = "Genesis".to_string();
        assert!(draft.is_ready());

        draft.image = None;
        assert!(!draft.is_ready());
    }
}
