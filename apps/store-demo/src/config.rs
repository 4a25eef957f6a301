//! Demo configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! | Variable                  | Default | Meaning                         |
//! |---------------------------|---------|---------------------------------|
//! | `STORE_VIP`               | `true`  | Price the order as VIP          |
//! | `STORE_VIP_DISCOUNT_BPS`  | `1000`  | VIP discount (basis points)     |
//! | `STORE_BULK_DISCOUNT_BPS` | `500`   | Quantity discount (basis points)|
//! | `STORE_BULK_THRESHOLD`    | `10`    | Units for the quantity discount |
//! | `STORE_OUTPUT`            | `text`  | `text` or `json`                |

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

use store_core::{
    DiscountPolicy, DiscountRate, DEFAULT_BULK_DISCOUNT_BPS, DEFAULT_BULK_THRESHOLD,
    DEFAULT_VIP_DISCOUNT_BPS,
};

// =============================================================================
// Output Format
// =============================================================================

/// How the demo prints the order result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Total on the first line, one message per following line.
    #[default]
    Text,

    /// The serialized `OrderResult`.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("STORE_OUTPUT".to_string())),
        }
    }
}

// =============================================================================
// Demo Config
// =============================================================================

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Whether the demo order is priced as VIP
    pub is_vip: bool,

    /// Discounts handed to the order processor
    pub policy: DiscountPolicy,

    /// Output rendering
    pub output: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            is_vip: true,
            policy: DiscountPolicy::default(),
            output: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (env vars in production,
    /// a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vip_bps: u32 = parse_var(&lookup, "STORE_VIP_DISCOUNT_BPS", DEFAULT_VIP_DISCOUNT_BPS)?;
        let bulk_bps: u32 =
            parse_var(&lookup, "STORE_BULK_DISCOUNT_BPS", DEFAULT_BULK_DISCOUNT_BPS)?;

        Ok(DemoConfig {
            is_vip: parse_var(&lookup, "STORE_VIP", true)?,
            policy: DiscountPolicy {
                vip_discount: DiscountRate::from_bps(vip_bps),
                bulk_discount: DiscountRate::from_bps(bulk_bps),
                bulk_threshold: parse_var(&lookup, "STORE_BULK_THRESHOLD", DEFAULT_BULK_THRESHOLD)?,
            },
            output: parse_var(&lookup, "STORE_OUTPUT", OutputFormat::Text)?,
        })
    }
}

/// Reads `key`, falling back to `default` when unset.
fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.policy.vip_discount.bps(), 1000);
        assert_eq!(config.policy.bulk_threshold, 10);
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("STORE_VIP", "false"),
            ("STORE_VIP_DISCOUNT_BPS", "1500"),
            ("STORE_BULK_DISCOUNT_BPS", " 250 "),
            ("STORE_BULK_THRESHOLD", "3"),
            ("STORE_OUTPUT", "JSON"),
        ]))
        .unwrap();

        assert!(!config.is_vip);
        assert_eq!(config.policy.vip_discount.bps(), 1500);
        assert_eq!(config.policy.bulk_discount.bps(), 250);
        assert_eq!(config.policy.bulk_threshold, 3);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        let err = DemoConfig::from_lookup(lookup_from(&[("STORE_BULK_THRESHOLD", "ten")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STORE_BULK_THRESHOLD");

        let err = DemoConfig::from_lookup(lookup_from(&[("STORE_VIP_DISCOUNT_BPS", "-1")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STORE_VIP_DISCOUNT_BPS");

        assert!(DemoConfig::from_lookup(lookup_from(&[("STORE_OUTPUT", "xml")])).is_err());
        assert!(DemoConfig::from_lookup(lookup_from(&[("STORE_VIP", "yes")])).is_err());
    }

    #[test]
    fn test_output_format_round_trip() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
