use super::traits::ConfigSection;
use crate::error::CgaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit per-iteration traces at debug level
    pub verbose: bool,
    /// env_logger filter directive, replaces the level derived from `verbose`
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            filter: None,
        }
    }
}

impl LoggingConfig {
    /// Filter handed to env_logger when RUST_LOG is unset
    pub fn default_filter(&self) -> String {
        match &self.filter {
            Some(filter) => filter.clone(),
            None if self.verbose => "debug".to_string(),
            None => "info".to_string(),
        }
    }
}

impl ConfigSection for LoggingConfig {
    fn section_name() -> &'static str {
        "logging"
    }

    fn validate(&self) -> Result<(), CgaError> {
        if let Some(filter) = &self.filter {
            if filter.trim().is_empty() {
                return Err(Self::invalid("Log filter must not be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_follows_verbosity() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.default_filter(), "debug");

        config.verbose = false;
        assert_eq!(config.default_filter(), "info");

        config.filter = Some("onemax_cga=trace".to_string());
        assert_eq!(config.default_filter(), "onemax_cga=trace");
    }

    #[test]
    fn test_blank_filter_is_rejected() {
        let config = LoggingConfig {
            verbose: true,
            filter: Some("  ".to_string()),
        };
        assert!(config.validate().is_err());
    }
}
