// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::compressor::CompressorConfig;
use crate::error::{PressError, Result};
use crate::filter::FilterConfig;
use crate::logging::LoggingConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub compressor: CompressorConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                PressError::Config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        serde_yaml::from_str(&substituted).map_err(|e| PressError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| PressError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        self.compressor.validate()?;

        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            PressError::Config(format!(
                "invalid log level '{}': {}",
                self.logging.level, e
            ))
        })?;

        Ok(())
    }
}
