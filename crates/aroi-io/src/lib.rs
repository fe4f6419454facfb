//! aroi-io: Browser I/O and Dioxus component library.
//!
//! Handles the prediction-service fetch calls, Blob URL creation for
//! image previews, console diagnostics, and provides the UI components
//! for the aroi web application.

pub mod client;
pub mod components;
pub mod console;
pub mod preview;

pub use client::{GENERIC_FAILURE_MESSAGE, PredictError};
pub use components::{ErrorBanner, FileUpload, ResultsPanel, ServiceStatus, StatusBadge};
