//! Blob object URLs for previewing the selected photo.
//!
//! Dioxus has no built-in way to show an in-memory image. This module
//! wraps the uploaded bytes in a `Blob` and hands back an object URL
//! for use as an `<img src>`.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use aroi_api::SelectedImage;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating a preview URL.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PreviewError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Wrap raw bytes in a `Blob` with the given MIME type.
///
/// Shared by the preview URL path here and the multipart upload body
/// in [`crate::client`].
pub(crate) fn bytes_to_blob(bytes: &[u8], mime_type: &str) -> Result<web_sys::Blob, JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);

    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
}

/// Create an object URL displaying the selected image.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when the
/// image is replaced or the page is reset, to avoid leaking the Blob.
///
/// # Errors
///
/// Returns [`PreviewError::JsError`] if Blob or URL creation fails.
pub fn image_to_blob_url(image: &SelectedImage) -> Result<String, PreviewError> {
    let blob = bytes_to_blob(image.bytes(), image.mime_type())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke a Blob URL previously created by [`image_to_blob_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked.
pub fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
