//! Dioxus UI components for aroi.
//!
//! Provides the upload drop-zone with inline preview, the prediction
//! result cards, the error banner, and the service status badge.

mod error_banner;
mod health;
mod results;
mod upload;

pub use error_banner::ErrorBanner;
pub use health::ServiceStatus;
pub use health::StatusBadge;
pub use results::ResultsPanel;
pub use upload::FileUpload;
