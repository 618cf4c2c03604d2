//! Provider configuration read from the process environment.

use std::path::PathBuf;

/// Environment variable holding the Alpha Vantage API key.
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";
/// Optional override for the Alpha Vantage query endpoint.
pub const BASE_URL_ENV: &str = "FINSIGHT_ALPHAVANTAGE_BASE_URL";
/// Directory holding the JSON alert and performance stores.
pub const DATA_DIR_ENV: &str = "FINSIGHT_DATA_DIR";

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_DATA_DIR: &str = ".finsight";

/// Where the provider API key comes from.
///
/// `Environment` is resolved on every call so a key exported after start-up
/// is picked up without rebuilding the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Environment { var: String },
    Static(String),
    Missing,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::Environment {
            var: String::from(API_KEY_ENV),
        }
    }

    /// Current key, or `None` when unset or blank.
    pub fn resolve(&self) -> Option<String> {
        let key = match self {
            Self::Environment { var } => std::env::var(var).ok()?,
            Self::Static(key) => key.clone(),
            Self::Missing => return None,
        };

        let key = key.trim();
        if key.is_empty() {
            None
        } else {
            Some(key.to_owned())
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Provider endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub credentials: Credentials,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));
        Self::new(base_url, Credentials::from_env())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Credentials::from_env())
    }
}

/// Store directory from `FINSIGHT_DATA_DIR`, falling back to `./.finsight`.
pub fn data_dir_from_env() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_static_key_counts_as_missing() {
        assert_eq!(Credentials::Static(String::from("   ")).resolve(), None);
        assert_eq!(Credentials::Missing.resolve(), None);
        assert_eq!(
            Credentials::Static(String::from(" demo ")).resolve().as_deref(),
            Some("demo")
        );
    }

    #[test]
    fn unset_environment_variable_resolves_to_none() {
        let credentials = Credentials::Environment {
            var: String::from("FINSIGHT_TEST_KEY_THAT_IS_NEVER_SET"),
        };
        assert_eq!(credentials.resolve(), None);
    }
}
