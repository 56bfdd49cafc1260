use dotenvy::dotenv;
use std::str::FromStr;

use crate::error::{ProfileError, Result};
use crate::services::output::OutputFormat;

pub const DEFAULT_SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct ProfilerConfig {
    /// Maximum number of distinct sample values kept per column.
    pub sample_size: usize,
    /// Profile columns on the rayon pool.
    pub parallel: bool,
    pub delimiter: u8,
    /// Accept CSV records whose field count differs from the header.
    pub flexible: bool,
    /// Worksheet to profile for workbook inputs; the first one when unset.
    pub sheet: Option<String>,
    pub default_format: Option<OutputFormat>,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            parallel: true,
            delimiter: b',',
            flexible: false,
            sheet: None,
            default_format: None,
        }
    }
}

impl ProfilerConfig {
    /// Builds a config from `DATACHECK_*` variables, loading `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("DATACHECK_SAMPLE_SIZE") {
            config.sample_size = parse_var("DATACHECK_SAMPLE_SIZE", &raw)?;
        }
        if let Some(raw) = lookup("DATACHECK_PARALLEL") {
            config.parallel = parse_flag("DATACHECK_PARALLEL", &raw)?;
        }
        if let Some(raw) = lookup("DATACHECK_DELIMITER") {
            config.delimiter = parse_delimiter(&raw)?;
        }
        if let Some(raw) = lookup("DATACHECK_FLEXIBLE") {
            config.flexible = parse_flag("DATACHECK_FLEXIBLE", &raw)?;
        }
        if let Some(raw) = lookup("DATACHECK_SHEET") {
            if !raw.is_empty() {
                config.sheet = Some(raw);
            }
        }
        if let Some(raw) = lookup("DATACHECK_FORMAT") {
            config.default_format = Some(OutputFormat::from_str(&raw)?);
        }

        Ok(config)
    }
}

pub fn load_config() -> Result<ProfilerConfig> {
    ProfilerConfig::from_env()
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| ProfileError::InvalidConfig(format!("{key}={raw:?} is not a valid value")))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileError::InvalidConfig(format!(
            "{key}={raw:?} is not a boolean"
        ))),
    }
}

/// Accepts a single ASCII character, or `\t` / `tab` for tab-separated files.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "\\t" | "tab" => return Ok(b'\t'),
        _ => {}
    }
    let bytes = raw.as_bytes();
    if bytes.len() == 1 && bytes[0].is_ascii() {
        Ok(bytes[0])
    } else {
        Err(ProfileError::InvalidConfig(format!(
            "delimiter must be a single ASCII character, got {raw:?}"
        )))
    }
}
