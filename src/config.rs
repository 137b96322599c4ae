//! # Configuration
//!
//! Runtime settings read from the process environment. Every value has a default, so an
//! empty environment yields a working demo; only the chef needs `GEMINI_API_KEY`.
//!
//! | Variable | Default |
//! |---|---|
//! | `KHANA_TICK_INTERVAL_MS` | `10000` |
//! | `KHANA_ESTIMATE_MIN` / `KHANA_ESTIMATE_MAX` | `30` / `44` |
//! | `KHANA_ACTOR_BUFFER` | `32` |
//! | `KHANA_CATALOG_PATH` | built-in menu |
//! | `GEMINI_API_KEY` | unset (chef disabled) |
//! | `GEMINI_MODEL` | `gemini-2.5-flash` |
//! | `GEMINI_ENDPOINT` | `https://generativelanguage.googleapis.com/v1beta` |
//! | `KHANA_CHEF_TIMEOUT_SECS` | `30` |

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },

    #[error("estimate range is inverted: min {min} > max {max}")]
    InvertedEstimate { min: u32, max: u32 },
}

/// Settings for the session actor and the order trackers it spawns.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Time between two order status steps.
    pub tick_interval: Duration,
    pub estimate_min: u32,
    pub estimate_max: u32,
    /// Capacity of the session actor's request channel.
    pub actor_buffer: usize,
}

impl SessionConfig {
    /// Range the delivery estimate (in minutes) is drawn from.
    pub fn estimate_range(&self) -> RangeInclusive<u32> {
        self.estimate_min..=self.estimate_max
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Rejects values the actor cannot run with: a zero tick, an inverted estimate range
    /// or an empty request buffer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::Zero {
                name: "tick_interval",
            });
        }
        if self.estimate_min > self.estimate_max {
            return Err(ConfigError::InvertedEstimate {
                min: self.estimate_min,
                max: self.estimate_max,
            });
        }
        if self.actor_buffer == 0 {
            return Err(ConfigError::Zero {
                name: "actor_buffer",
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(10),
            estimate_min: 30,
            estimate_max: 44,
            actor_buffer: 32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChefConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    /// Upper bound on one model call; past it the fallback reply is used.
    pub timeout: Duration,
}

impl Default for ChefConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub chef: ChefConfig,
    /// JSON menu to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any key lookup; unset and blank keys take the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = AppConfig::default();

        let tick_ms = parse(&get, "KHANA_TICK_INTERVAL_MS")?
            .unwrap_or(defaults.session.tick_interval.as_millis() as u64);
        let session = SessionConfig {
            tick_interval: Duration::from_millis(tick_ms),
            estimate_min: parse(&get, "KHANA_ESTIMATE_MIN")?
                .unwrap_or(defaults.session.estimate_min),
            estimate_max: parse(&get, "KHANA_ESTIMATE_MAX")?
                .unwrap_or(defaults.session.estimate_max),
            actor_buffer: parse(&get, "KHANA_ACTOR_BUFFER")?
                .unwrap_or(defaults.session.actor_buffer),
        };
        session.validate()?;
        let timeout_secs = parse(&get, "KHANA_CHEF_TIMEOUT_SECS")?
            .unwrap_or(defaults.chef.timeout.as_secs());

        Ok(Self {
            session,
            chef: ChefConfig {
                api_key: get("GEMINI_API_KEY"),
                model: get("GEMINI_MODEL").unwrap_or(defaults.chef.model),
                endpoint: get("GEMINI_ENDPOINT").unwrap_or(defaults.chef.endpoint),
                timeout: Duration::from_secs(timeout_secs),
            },
            catalog_path: get("KHANA_CATALOG_PATH").map(PathBuf::from),
        })
    }
}

fn parse<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match get(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.estimate_range(), 30..=44);
        assert_eq!(config.session.tick_interval, Duration::from_secs(10));
        assert!(config.chef.api_key.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            ("KHANA_TICK_INTERVAL_MS", "250"),
            ("KHANA_ESTIMATE_MIN", "5"),
            ("KHANA_ESTIMATE_MAX", "5"),
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-pro"),
            ("KHANA_CATALOG_PATH", "/tmp/menu.json"),
        ]))
        .unwrap();

        assert_eq!(config.session.tick_interval, Duration::from_millis(250));
        assert_eq!(config.session.estimate_range(), 5..=5);
        assert_eq!(config.chef.api_key.as_deref(), Some("secret"));
        assert_eq!(config.chef.model, "gemini-pro");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/menu.json")));
    }

    #[test]
    fn blank_api_key_counts_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap();
        assert!(config.chef.api_key.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("KHANA_ACTOR_BUFFER", "lots")])),
            Err(ConfigError::InvalidNumber {
                name: "KHANA_ACTOR_BUFFER",
                value: "lots".into()
            })
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("KHANA_TICK_INTERVAL_MS", "0")])),
            Err(ConfigError::Zero {
                name: "tick_interval"
            })
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("KHANA_ACTOR_BUFFER", "0")])),
            Err(ConfigError::Zero {
                name: "actor_buffer"
            })
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[
                ("KHANA_ESTIMATE_MIN", "50"),
                ("KHANA_ESTIMATE_MAX", "40")
            ])),
            Err(ConfigError::InvertedEstimate { min: 50, max: 40 })
        );
    }

    #[test]
    fn validate_catches_hand_built_configs() {
        assert_eq!(SessionConfig::default().validate(), Ok(()));
        assert_eq!(
            SessionConfig::default()
                .with_tick_interval(Duration::ZERO)
                .validate(),
            Err(ConfigError::Zero {
                name: "tick_interval"
            })
        );
        let inverted = SessionConfig {
            estimate_min: 50,
            estimate_max: 40,
            ..SessionConfig::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::InvertedEstimate { min: 50, max: 40 })
        );
        let unbuffered = SessionConfig {
            actor_buffer: 0,
            ..SessionConfig::default()
        };
        assert_eq!(
            unbuffered.validate(),
            Err(ConfigError::Zero {
                name: "actor_buffer"
            })
        );
    }
}
