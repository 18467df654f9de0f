pub mod server;
pub mod tracing;

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment (dev = local/kind, prod = full k8s)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Static application metadata reported by the health endpoint.
///
/// Build it with [`app_info!`] so the values come from the calling crate's
/// `Cargo.toml`, not from this one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Capture the calling crate's package name and version as an [`AppInfo`].
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load and parse environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load and parse environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Parse an environment variable into `T`, falling back to `default` when unset.
///
/// A set-but-unparseable value is an error rather than a silent fallback.
pub fn env_parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Production);
            });
        }
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("CORE_CONFIG_TEST_VAR", Some("set"), || {
            assert_eq!(env_or_default("CORE_CONFIG_TEST_VAR", "fallback"), "set");
        });
        temp_env::with_var_unset("CORE_CONFIG_TEST_VAR", || {
            assert_eq!(env_or_default("CORE_CONFIG_TEST_VAR", "fallback"), "fallback");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("CORE_CONFIG_REQUIRED", || {
            let err = env_required("CORE_CONFIG_REQUIRED").unwrap_err();
            assert!(err.to_string().contains("CORE_CONFIG_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_parse_or_uses_default_when_unset() {
        temp_env::with_var_unset("CORE_CONFIG_TIMEOUT", || {
            let value: u64 = env_parse_or("CORE_CONFIG_TIMEOUT", 30).unwrap();
            assert_eq!(value, 30);
        });
    }

    #[test]
    fn test_env_parse_or_parses_value() {
        temp_env::with_var("CORE_CONFIG_TIMEOUT", Some(" 12 "), || {
            let value: u64 = env_parse_or("CORE_CONFIG_TIMEOUT", 30).unwrap();
            assert_eq!(value, 12);
        });
    }

    #[test]
    fn test_env_parse_or_rejects_garbage() {
        temp_env::with_var("CORE_CONFIG_TIMEOUT", Some("soon"), || {
            let err = env_parse_or::<u64>("CORE_CONFIG_TIMEOUT", 30).unwrap_err();
            assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "CORE_CONFIG_TIMEOUT"));
        });
    }

    #[test]
    fn test_app_info_macro_reads_package_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }
}
