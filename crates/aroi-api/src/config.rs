//! Prediction service endpoint configuration.
//!
//! The base URL is baked in at compile time from the `AROI_API_URL`
//! environment variable, the same way the rest of the app embeds
//! build-time values. When unset, the local development address of the
//! backing service is used.

/// Base URL used when `AROI_API_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Resolved endpoint configuration for the prediction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config from an explicit base URL.
    ///
    /// A trailing slash is stripped so endpoint joining never produces
    /// a double slash.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Resolve from the `AROI_API_URL` compile-time environment
    /// variable, falling back to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("AROI_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// The configured base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the prediction endpoint.
    #[must_use]
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    /// Full URL of the health endpoint.
    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_endpoints() {
        let config = ApiConfig::new("http://localhost:5000");
        assert_eq!(config.predict_url(), "http://localhost:5000/predict");
        assert_eq!(config.health_url(), "http://localhost:5000/health");
    }

    #[test]
    fn strips_trailing_slash() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.predict_url(), "https://api.example.com/predict");
    }

    #[test]
    fn default_falls_back_to_localhost() {
        // AROI_API_URL is unset in the test environment.
        assert_eq!(ApiConfig::default().base_url(), DEFAULT_BASE_URL);
    }
}
