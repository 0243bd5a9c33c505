use crate::error::{Error, Result};
use dotenvy::dotenv;
use secrecy::Secret;
use std::env;
use std::time::Duration;

pub const SANDBOX_BASE_URL: &str = "https://sandbox.opayo.eu.elavon.com/api/v1";
pub const LIVE_BASE_URL: &str = "https://live.opayo.eu.elavon.com/api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Test,
    Live,
}

impl Environment {
    /// `test` in any case selects the sandbox; every other value is live.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("test") {
            Self::Test
        } else {
            Self::Live
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::Test => SANDBOX_BASE_URL,
            Self::Live => LIVE_BASE_URL,
        }
    }
}

/// How transaction lookups are retried on non-success responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(1),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub environment: Environment,
    pub key: String,
    pub password: Secret<String>,
    pub vendor: String,
    /// Replaces the environment's host, e.g. for a proxy or a test server.
    pub base_url: Option<String>,
    pub retry: RetryPolicy,
}

impl GatewayConfig {
    pub fn new(
        environment: Environment,
        key: impl Into<String>,
        password: impl Into<String>,
        vendor: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            key: key.into(),
            password: Secret::new(password.into()),
            vendor: vendor.into(),
            base_url: None,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(self.environment.base_url())
            .trim_end_matches('/')
    }

    /// Loads the gateway settings from `OPAYO_*` environment variables,
    /// reading a `.env` file first when one exists.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::Config(format!("{name} must be set")))
        };

        let environment = Environment::parse(&lookup("OPAYO_ENV").unwrap_or_else(|| "test".into()));
        let mut config = Self::new(
            environment,
            required("OPAYO_KEY")?,
            required("OPAYO_PASSWORD")?,
            required("OPAYO_VENDOR")?,
        );

        if let Some(base_url) = lookup("OPAYO_BASE_URL").filter(|v| !v.is_empty()) {
            config.base_url = Some(base_url);
        }

        if let Some(delay) = lookup("OPAYO_RETRY_DELAY_MS") {
            let millis = delay
                .parse()
                .map_err(|_| Error::Config(format!("invalid OPAYO_RETRY_DELAY_MS: {delay}")))?;
            config.retry.delay = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
