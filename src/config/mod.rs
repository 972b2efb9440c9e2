use crate::core::encryption::derive_encryption_key;
use crate::core::{RaveError, Result};
use std::env;
use std::fmt;

pub mod environment;

pub use environment::Environment;

pub const DEFAULT_LIVE_URL: &str = "https://api.ravepay.co";
pub const DEFAULT_TEST_URL: &str = "https://ravesandboxapi.flutterwave.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration loaded by the demo binary
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub rave: RaveConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
}

/// Credentials and endpoints for one merchant account
#[derive(Clone)]
pub struct RaveConfig {
    pub public_key: String,
    pub secret_key: String,
    pub environment: Environment,
    pub live_url: String,
    pub test_url: String,
    pub timeout_secs: u64,
}

// Keys stay out of logs
impl fmt::Debug for RaveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RaveConfig")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("live_url", &self.live_url)
            .field("test_url", &self.test_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl RaveConfig {
    pub fn new(
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            environment,
            live_url: DEFAULT_LIVE_URL.to_string(),
            test_url: DEFAULT_TEST_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override both base URLs, e.g. to point at a mock server
    pub fn with_base_urls(
        mut self,
        live_url: impl Into<String>,
        test_url: impl Into<String>,
    ) -> Self {
        self.live_url = live_url.into();
        self.test_url = test_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Returns the base URL matching the configured environment
    pub fn base_url(&self) -> &str {
        let url = if self.environment.is_live() {
            &self.live_url
        } else {
            &self.test_url
        };
        url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        if self.public_key.trim().is_empty() {
            return Err(RaveError::configuration("public key must not be empty"));
        }

        derive_encryption_key(&self.secret_key).map_err(|_| {
            RaveError::configuration("secret key is too short to derive an encryption key")
        })?;

        if self.timeout_secs == 0 {
            return Err(RaveError::configuration(
                "HTTP timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("RAVE_ENV") {
            Some(value) => value.parse().map_err(RaveError::Configuration)?,
            None => Environment::default(),
        };

        let timeout_secs = lookup("RAVE_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| RaveError::configuration("Invalid RAVE_HTTP_TIMEOUT_SECS"))?;

        let config = Config {
            app: AppConfig {
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            },
            rave: RaveConfig {
                public_key: lookup("RAVE_PUBKEY")
                    .ok_or_else(|| RaveError::configuration("RAVE_PUBKEY not set"))?,
                secret_key: lookup("RAVE_SECKEY")
                    .ok_or_else(|| RaveError::configuration("RAVE_SECKEY not set"))?,
                environment,
                live_url: lookup("RAVE_LIVE_URL").unwrap_or_else(|| DEFAULT_LIVE_URL.to_string()),
                test_url: lookup("RAVE_TEST_URL").unwrap_or_else(|| DEFAULT_TEST_URL.to_string()),
                timeout_secs,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.rave.validate()
    }
}
