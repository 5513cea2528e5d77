//! Runtime settings for the binary, read from the environment.
//!
//! A `.env` file is loaded by `main` before [`Config::from_env`] runs.

use crate::models::Base;
use std::error::Error;

pub const ENV_LOG_CONFIG: &str = "CIDR_CALC_LOG_CONFIG";
pub const ENV_DEFAULT_CIDR: &str = "CIDR_CALC_DEFAULT_CIDR";
pub const ENV_BASE: &str = "CIDR_CALC_BASE";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_CIDR: &str = "192.168.1.0/24";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    /// CIDR shown when none is given on the command line.
    pub default_cidr: String,
    /// Raw `CIDR_CALC_BASE` value, validated only when no base is given on the
    /// command line.
    pub base: Option<String>,
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Config {
            log_config: get(ENV_LOG_CONFIG)
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string()),
            default_cidr: get(ENV_DEFAULT_CIDR).unwrap_or_else(|| DEFAULT_CIDR.to_string()),
            base: get(ENV_BASE),
        }
    }

    /// Pick the display base, a command-line radix taking precedence over the environment.
    ///
    /// # Arguments
    /// * `cli_base` - Radix given on the command line, if any
    ///
    /// # Returns
    /// * `Ok(Base)` - The CLI radix, else `CIDR_CALC_BASE`, else decimal
    /// * `Err` - If the chosen value is not 2 or 10
    pub fn resolve_base(&self, cli_base: Option<u32>) -> Result<Base, Box<dyn Error>> {
        if let Some(radix) = cli_base {
            return Ok(Base::try_from(radix)?);
        }
        match &self.base {
            Some(raw) => {
                let radix: u32 = raw
                    .parse()
                    .map_err(|e| format!("Invalid {ENV_BASE} '{raw}': {e}"))?;
                Ok(Base::try_from(radix)?)
            }
            None => Ok(Base::Decimal),
        }
    }
}
