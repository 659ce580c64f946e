use crate::error::Error;
use std::time::Duration;

/// Base endpoint every request is sent to; the bot token is appended verbatim
pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org/bot";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings used to construct the HTTP transport
#[derive(Debug, Clone)]
pub struct Configuration {
    /// URL prefix the bot token is appended to
    base_url: String,
    /// Request timeout. Must outlast any long-polling timeout passed to getUpdates.
    timeout: Duration,
    /// Whether to log full request and response bodies
    log_traffic: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_traffic: false,
        }
    }
}

impl Configuration {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL prefix the bot token is appended to
    pub fn set_base_url<S: AsRef<str>>(&mut self, base_url: S) -> &mut Self {
        self.base_url = base_url.as_ref().to_string();
        self
    }

    /// Get the URL prefix the bot token is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the request timeout
    pub fn set_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Get the request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Enable or disable logging of full request and response bodies
    pub fn set_log_traffic(&mut self, enabled: bool) -> &mut Self {
        self.log_traffic = enabled;
        self
    }

    /// Get whether full request and response bodies are logged
    pub fn log_traffic(&self) -> bool {
        self.log_traffic
    }

    /// Build the endpoint root for a bot token
    pub fn endpoint(&self, token: &str) -> String {
        format!("{}{}", self.base_url, token)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::configuration(format!(
                "Invalid base URL: '{}'. Must start with http:// or https://",
                self.base_url
            )));
        }

        if self.timeout.is_zero() {
            return Err(Error::configuration("Timeout must be greater than zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.base_url(), "https://api.telegram.org/bot");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.log_traffic());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_appends_token_verbatim() {
        let config = Configuration::default();
        assert_eq!(
            config.endpoint("123:abc"),
            "https://api.telegram.org/bot123:abc"
        );
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut config = Configuration::new();
        config.set_base_url("ftp://example.com/bot");
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));

        let mut config = Configuration::new();
        config.set_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }
}
