//! Frontend configuration module
//!
//! Configuration is built once at startup and handed down through context;
//! nothing else in the app reads the environment.

/// Where the backend API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the VaultGuard backend, without a trailing slash.
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("VAULTGUARD_API_URL")
                .unwrap_or("http://localhost:8000")
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

impl AppConfig {
    /// Create the startup configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
