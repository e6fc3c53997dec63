//! Configuration schema for the census verification client.

use serde::{Deserialize, Serialize};

/// Connection and signing parameters for the census registry.
///
/// Every secret is injected through this struct; nothing is read from
/// globals or hardcoded at the call site.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CensusConfig {
    /// Census web service endpoint URL.
    pub endpoint: String,

    /// Caller identity string (`identitatID` in the envelope).
    pub identity: String,

    /// Shared key identifying the caller (`clauID` in the envelope),
    /// also the first half of the inner signing key.
    pub shared_key: String,

    /// Deployment domain the registry expects (`mqconfiID`).
    pub domain: String,

    /// Private signing key. Never leaves the process; only its SHA1
    /// derivations are sent on the wire.
    pub private_key: String,

    /// Host application secret used to derive the per-citizen `unique_id`.
    pub app_secret: String,

    /// HTTP timeout in seconds for the verification POST.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl CensusConfig {
    /// Get the effective endpoint, prioritizing a compile-time default.
    pub fn get_endpoint(&self) -> String {
        // If CENSUS_ENDPOINT was set at compile time, use it (hardcoded into binary)
        if let Some(compile_time_url) = option_env!("CENSUS_ENDPOINT") {
            if !compile_time_url.is_empty() {
                return compile_time_url.to_string();
            }
        }

        self.endpoint.clone()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let effective_endpoint = self.get_endpoint();

        if effective_endpoint.is_empty() {
            return Err(ConfigError::Invalid("endpoint cannot be empty"));
        }

        if !effective_endpoint.starts_with("http://") && !effective_endpoint.starts_with("https://")
        {
            return Err(ConfigError::Invalid(
                "endpoint must start with http:// or https://",
            ));
        }

        if self.identity.is_empty() {
            return Err(ConfigError::Invalid("identity cannot be empty"));
        }

        if self.shared_key.is_empty() {
            return Err(ConfigError::Invalid("shared_key cannot be empty"));
        }

        if self.domain.is_empty() {
            return Err(ConfigError::Invalid("domain cannot be empty"));
        }

        if self.private_key.is_empty() {
            return Err(ConfigError::Invalid("private_key cannot be empty"));
        }

        if self.app_secret.is_empty() {
            return Err(ConfigError::Invalid("app_secret cannot be empty"));
        }

        Ok(())
    }
}

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> CensusConfig {
        CensusConfig {
            endpoint: "https://census.example.test/service".to_string(),
            identity: "intfred01".to_string(),
            shared_key: "jotalo1000".to_string(),
            domain: "pressupostparticipatiu.ad".to_string(),
            private_key: "qwertyasdf0123456789".to_string(),
            app_secret: "s3cr3t".to_string(),
            timeout_secs: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = sample_config();
        assert!(config.validate().is_ok());

        config.private_key = "".to_string();
        assert!(config.validate().is_err());

        config = sample_config();
        config.endpoint = "ftp://census.example.test".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_values() {
        let json = r#"{
            "endpoint": "https://census.example.test/service",
            "identity": "intfred01",
            "shared_key": "jotalo1000",
            "domain": "pressupostparticipatiu.ad",
            "private_key": "qwertyasdf0123456789",
            "app_secret": "s3cr3t"
        }"#;

        let config: CensusConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.timeout_secs, 10);
    }
}
