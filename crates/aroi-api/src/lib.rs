//! aroi-api: Wire contract and view-session state for the aroi client.
//!
//! This crate has **no I/O dependencies** -- it defines the prediction
//! service's response shapes, the selected-image value object, endpoint
//! configuration, confidence formatting, and the pure state machine the
//! page is driven by. All browser and network interaction lives in
//! `aroi-io`.

pub mod config;
pub mod format;
pub mod image;
pub mod response;
pub mod session;

pub use config::ApiConfig;
pub use image::{SelectImageError, SelectedImage};
pub use response::{ClassScore, HealthResponse, PredictionResponse, Verdict};
pub use session::{Session, SessionEvent};
