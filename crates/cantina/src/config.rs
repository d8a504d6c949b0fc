use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CantinaConfig {
    /// Mailbox capacity of each resource actor.
    pub mailbox_capacity: usize,
    /// Whether the demo binary seeds a sample menu on startup.
    pub demo_seed: bool,
}

impl Default for CantinaConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            demo_seed: true,
        }
    }
}

impl CantinaConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mailbox_capacity = try_load(&lookup, "CANTINA_MAILBOX_CAPACITY", defaults.mailbox_capacity)?;
        if mailbox_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "CANTINA_MAILBOX_CAPACITY",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            mailbox_capacity,
            demo_seed: try_load(&lookup, "CANTINA_DEMO_SEED", defaults.demo_seed)?,
        })
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(value) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_use_defaults() {
        let config = CantinaConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CantinaConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = CantinaConfig::from_lookup(lookup(&[
            ("CANTINA_MAILBOX_CAPACITY", "8"),
            ("CANTINA_DEMO_SEED", "false"),
        ]))
        .unwrap();
        assert_eq!(config.mailbox_capacity, 8);
        assert!(!config.demo_seed);
    }

    #[test]
    fn bad_values_are_errors() {
        let err = CantinaConfig::from_lookup(lookup(&[("CANTINA_MAILBOX_CAPACITY", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "CANTINA_MAILBOX_CAPACITY", .. }));

        assert!(CantinaConfig::from_lookup(lookup(&[("CANTINA_MAILBOX_CAPACITY", "0")])).is_err());
        assert!(CantinaConfig::from_lookup(lookup(&[("CANTINA_DEMO_SEED", "maybe")])).is_err());
    }
}
