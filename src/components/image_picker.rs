//! Image Picker Component
//!
//! Native file dialog plus preview for the NFT mint form. Chosen files are
//! decoded and shrunk through [`NftImage::load`] off the UI thread.

use dioxus::prelude::*;
use rfd::FileDialog;
use testnet_core::NftImage;
use testnet_ui::{Button, ButtonSize, ButtonVariant, Icon, IconKind};

/// Image file picker with preview
///
/// # Examples
///
/// ```rust
/// rsx! {
///     ImagePicker {
///         image: draft().image,
///         on_change: move |image| draft.write().image = image,
///     }
/// }
/// ```
#[component]
pub fn ImagePicker(
    /// Currently chosen image
    image: Option<NftImage>,
    /// Called with the new image, or `None` when removed
    on_change: EventHandler<Option<NftImage>>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let choose = move |_: ()| {
        loading.set(true);
        error.set(None);

        spawn(async move {
            // Dialog and decoding both block, keep them off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select NFT Image")
                    .pick_file()
                    .map(|path| (path.display().to_string(), NftImage::load(&path)))
            })
            .await;

            match picked {
                Ok(Some((_, Ok(image)))) => on_change.call(Some(image)),
                Ok(Some((path, Err(e)))) => {
                    tracing::warn!(%path, error = %e, "Could not load NFT image");
                    error.set(Some(format!("Could not load image: {}", e)));
                }
                // User cancelled
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(error = %e, "File picker task failed");
                    error.set(Some("File picker failed".to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "image-picker",
            {match &image {
                Some(image) => rsx! {
                    div { class: "image-preview",
                        img { src: "{image.data_url()}", alt: "NFT preview" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Sm,
                        disabled: disabled,
                        onclick: move |_| on_change.call(None),
                        Icon { kind: IconKind::X, size: 14 }
                        "Remove Image"
                    }
                },
                None => rsx! {
                    div { class: "image-dropzone",
                        Icon { kind: IconKind::Upload, size: 32 }
                        p { class: "image-dropzone-hint", "PNG, JPG or WebP" }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Sm,
                            disabled: disabled || loading(),
                            onclick: choose,
                            Icon { kind: IconKind::Image, size: 14 }
                            if loading() { "Loading..." } else { "Choose File" }
                        }
                    }
                },
            }}

            if let Some(err) = error() {
                div { class: "image-picker-error",
                    Icon { kind: IconKind::AlertCircle, size: 14 }
                    "{err}"
                }
            }
        }
    }
}
