//! EiBi schedule HTTP client.

use super::error::EibiError;

/// Default base URL for the EiBi distribution site.
const DEFAULT_BASE_URL: &str = "http://www.eibispace.de/dx";

/// File name of the full schedule on the server.
const SCHEDULE_FILE: &str = "eibi.txt";

/// Configuration for the EiBi client.
#[derive(Debug, Clone)]
pub struct EibiConfig {
    /// Base URL for the download site
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl EibiConfig {
    /// Create a config with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for EibiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for downloading the EiBi schedule.
#[derive(Debug, Clone)]
pub struct EibiClient {
    http: reqwest::Client,
    base_url: String,
}

impl EibiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: EibiConfig) -> Result<Self, EibiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Download the full schedule as text.
    pub async fn fetch_schedule(&self) -> Result<String, EibiError> {
        let url = format!("{}/{}", self.base_url, SCHEDULE_FILE);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(EibiError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = EibiConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_with_base_url() {
        let config = EibiConfig::new().with_base_url("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
