use std::collections::HashMap;
use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::ContactFormError;

pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

const ACCESS_KEY: &str = "access_key";
const ENDPOINT: &str = "endpoint";
const TIMEOUT_SECS: &str = "timeout_secs";

const MASK_MIN_CHARS: usize = 8;

// settings key -> environment variable consulted when the key is unset
const ENV_FALLBACKS: [(&str, &str); 3] = [
    (ACCESS_KEY, "CONTACTFORM_ACCESS_KEY"),
    (ENDPOINT, "CONTACTFORM_ENDPOINT"),
    (TIMEOUT_SECS, "CONTACTFORM_TIMEOUT_SECS"),
];

#[derive(Clone, Default, Debug)]
pub struct EnvironmentConfig {
    pub settings: HashMap<String, String>,
}

impl EnvironmentConfig {
    pub fn new(settings: HashMap<String, String>) -> EnvironmentConfig {
        EnvironmentConfig { settings }
    }

    /// Fill every relay setting that is not set yet from its
    /// `CONTACTFORM_*` environment variable.
    pub fn with_env_fallback(mut self) -> EnvironmentConfig {
        for (key, var) in ENV_FALLBACKS {
            if self.contains_key(key) {
                continue;
            }
            if let Ok(value) = env::var(var) {
                self.insert(key.to_string(), value);
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.settings.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.settings.insert(key, value);
    }
}

/// Where and how submissions are relayed.
///
/// The access key identifies the site owner at the relay service. It is
/// always supplied at runtime (or build time for the browser build), never
/// compiled in as a literal.
#[derive(Clone)]
pub struct RelayConfig {
    endpoint: String,
    access_key: String,
    timeout: Option<Duration>,
}

impl RelayConfig {
    pub fn new(access_key: &str) -> Result<Self, ContactFormError> {
        if access_key.is_empty() {
            return Err(ContactFormError::ConfigError(
                "access_key must not be empty".to_string(),
            ));
        }
        Ok(RelayConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_key: access_key.to_string(),
            timeout: None,
        })
    }

    pub fn with_endpoint(
        mut self,
        endpoint: &str,
    ) -> Result<Self, ContactFormError> {
        let url = Url::parse(endpoint).map_err(|e| {
            ContactFormError::ConfigError(format!(
                "invalid endpoint \"{}\": {}",
                endpoint, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ContactFormError::ConfigError(format!(
                "endpoint must use http or https, got \"{}\"",
                url.scheme()
            )));
        }
        self.endpoint = url.to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_config(
        config: &EnvironmentConfig,
    ) -> Result<Self, ContactFormError> {
        let access_key = config.get(ACCESS_KEY).ok_or_else(|| {
            ContactFormError::ConfigError(format!(
                "{} not set (use --access-key or CONTACTFORM_ACCESS_KEY)",
                ACCESS_KEY
            ))
        })?;
        let mut relay_config = RelayConfig::new(access_key)?;

        if let Some(endpoint) = config.get(ENDPOINT) {
            relay_config = relay_config.with_endpoint(endpoint)?;
        }

        if let Some(timeout) = config.get(TIMEOUT_SECS) {
            let seconds = timeout
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    ContactFormError::ConfigError(format!(
                        "{} must be a positive number of seconds, got \"{}\"",
                        TIMEOUT_SECS, timeout
                    ))
                })?;
            relay_config =
                relay_config.with_timeout(Duration::from_secs(seconds));
        }
        Ok(relay_config)
    }

    pub fn from_env() -> Result<Self, ContactFormError> {
        let config = EnvironmentConfig::default().with_env_fallback();
        RelayConfig::from_config(&config)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn masked_access_key(&self) -> String {
        // short keys are hidden entirely
        if self.access_key.chars().count() <= MASK_MIN_CHARS {
            return "****".to_string();
        }
        let visible: String = self.access_key.chars().take(4).collect();
        format!("{}****", visible)
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key", &self.masked_access_key())
            .field("timeout", &self.timeout)
            .finish()
    }
}
