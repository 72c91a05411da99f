use contactform::{ContactFormError, EnvironmentConfig, RelayConfig};

use crate::vars::{RELAY_ACCESS_KEY, RELAY_ENDPOINT};

/// Relay configuration baked in at build time.
pub fn relay_config() -> Result<RelayConfig, ContactFormError> {
    let mut config = EnvironmentConfig::default();
    if let Some(access_key) = RELAY_ACCESS_KEY {
        config.insert("access_key".to_string(), access_key.to_string());
    }
    if let Some(endpoint) = RELAY_ENDPOINT {
        config.insert("endpoint".to_string(), endpoint.to_string());
    }
    RelayConfig::from_config(&config)
}
