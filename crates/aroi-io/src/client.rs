//! Prediction-service client over the browser fetch API.
//!
//! One multipart `POST /predict` per submission, plus a startup
//! `GET /health` probe. Transport failures, non-OK statuses, and
//! malformed bodies are distinguished internally for console
//! diagnostics, but the UI collapses all of them into
//! [`GENERIC_FAILURE_MESSAGE`].

use aroi_api::{ApiConfig, HealthResponse, PredictionResponse, SelectedImage};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::console;
use crate::preview::bytes_to_blob;

/// Multipart field name the service reads the image from.
const IMAGE_FIELD: &str = "image";

/// Filename attached to the multipart field. The service keys on the
/// field name, not the filename, so a fixed name is fine.
const IMAGE_FILENAME: &str = "image.jpg";

/// The single user-facing failure message. Every [`PredictError`]
/// variant maps to this; the cause only reaches the console.
pub const GENERIC_FAILURE_MESSAGE: &str = "การทำนายล้มเหลว กรุณาลองใหม่อีกครั้ง";

/// Errors that can occur when talking to the prediction service.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// A browser API call returned an error (includes network failure).
    #[error("browser API error: {0}")]
    JsError(String),

    /// The service answered with a non-success HTTP status.
    #[error("service returned HTTP {0}")]
    Http(u16),

    /// The response body did not decode as the expected JSON shape.
    #[error("malformed response body: {0}")]
    InvalidBody(String),
}

impl From<JsValue> for PredictError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Submit the selected image for classification.
///
/// Builds a multipart form with the image bytes under the `image`
/// field, POSTs it to `{base_url}/predict`, and decodes the JSON body.
///
/// # Errors
///
/// Returns [`PredictError::JsError`] on transport or browser API
/// failure, [`PredictError::Http`] on a non-success status, and
/// [`PredictError::InvalidBody`] when the body does not decode.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn predict(
    config: &ApiConfig,
    image: &SelectedImage,
) -> Result<PredictionResponse, PredictError> {
    let form = build_form(image)?;
    let body = fetch_text(&config.predict_url(), Some(&form)).await?;
    decode_prediction(&body)
}

/// Probe the service's health endpoint.
///
/// Informational only: callers use the outcome for a status badge and
/// never block the upload flow on it.
///
/// # Errors
///
/// Same taxonomy as [`predict`].
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn health(config: &ApiConfig) -> Result<HealthResponse, PredictError> {
    let body = fetch_text(&config.health_url(), None).await?;
    decode_health(&body)
}

/// Trace a structured error to the developer console.
pub fn trace_error(err: &PredictError) {
    console::error(&format!("prediction request failed: {err}"));
}

/// Build the multipart form carrying the image bytes.
fn build_form(image: &SelectedImage) -> Result<web_sys::FormData, PredictError> {
    let blob = bytes_to_blob(image.bytes(), image.mime_type())?;
    let form = web_sys::FormData::new()?;
    form.append_with_blob_and_filename(IMAGE_FIELD, &blob, IMAGE_FILENAME)?;
    Ok(form)
}

/// Issue one fetch and return the response body as text.
///
/// `form` present means `POST` with that body; absent means `GET`.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
async fn fetch_text(url: &str, form: Option<&web_sys::FormData>) -> Result<String, PredictError> {
    let opts = web_sys::RequestInit::new();
    match form {
        Some(form) => {
            opts.set_method("POST");
            let body: &JsValue = form.as_ref();
            opts.set_body(body);
        }
        None => opts.set_method("GET"),
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)?;
    let window =
        web_sys::window().ok_or_else(|| PredictError::JsError("no global window".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| PredictError::JsError("fetch did not yield a Response".into()))?;

    if !resp.ok() {
        return Err(PredictError::Http(resp.status()));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| PredictError::JsError("response body is not text".into()))
}

/// Decode a `/predict` body.
fn decode_prediction(body: &str) -> Result<PredictionResponse, PredictError> {
    serde_json::from_str(body).map_err(|e| PredictError::InvalidBody(e.to_string()))
}

/// Decode a `/health` body.
fn decode_health(body: &str) -> Result<HealthResponse, PredictError> {
    serde_json::from_str(body).map_err(|e| PredictError::InvalidBody(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_prediction_body() {
        let body = r#"{"prediction": "ต้มยำ", "confidence": 0.91, "all_predictions": []}"#;
        let resp = decode_prediction(body).unwrap();
        assert_eq!(resp.prediction.as_deref(), Some("ต้มยำ"));
    }

    #[test]
    fn malformed_prediction_body_is_invalid() {
        let result = decode_prediction("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(PredictError::InvalidBody(_))));
    }

    #[test]
    fn decodes_health_body() {
        let health = decode_health(r#"{"status": "ok", "model_loaded": true}"#).unwrap();
        assert!(health.is_ready());
    }
}
