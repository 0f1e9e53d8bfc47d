use std::env;

use thiserror::Error;

/// Table used when `DYNAMODB_TABLE_NAME` is not set.
pub const DEFAULT_TABLE_NAME: &str = "DepatureManageTable";

/// Errors raised while reading startup configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Table holding the departure items (default: "DepatureManageTable")
    pub table_name: String,
    /// Serve the GraphiQL IDE on `GET /graphql` (default: true)
    pub graphiql_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "DepatureManageTable")
    /// - `GRAPHIQL_ENABLED` - Serve GraphiQL (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup("DYNAMODB_TABLE_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        let graphiql_enabled = match lookup("GRAPHIQL_ENABLED") {
            Some(value) => parse_flag("GRAPHIQL_ENABLED", &value)?,
            None => true,
        };

        Ok(Self {
            table_name,
            graphiql_enabled,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            graphiql_enabled: true,
        }
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidVar {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.table_name, "DepatureManageTable");
        assert!(config.graphiql_enabled);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DYNAMODB_TABLE_NAME", "Departures-dev"),
            ("GRAPHIQL_ENABLED", "false"),
        ]))
        .unwrap();

        assert_eq!(config.table_name, "Departures-dev");
        assert!(!config.graphiql_enabled);
    }

    #[test]
    fn test_blank_table_name_uses_default() {
        let config = Config::from_lookup(lookup(&[("DYNAMODB_TABLE_NAME", "  ")])).unwrap();

        assert_eq!(config.table_name, DEFAULT_TABLE_NAME);
    }

    #[test]
    fn test_invalid_flag() {
        let err = Config::from_lookup(lookup(&[("GRAPHIQL_ENABLED", "maybe")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidVar {
                name: "GRAPHIQL_ENABLED",
                value: "maybe".to_string()
            }
        );
    }

    #[test]
    fn test_missing_var_display() {
        assert_eq!(
            ConfigError::MissingVar("AWS_ACCESS_KEY_ID").to_string(),
            "Missing required environment variable: AWS_ACCESS_KEY_ID"
        );
    }
}
