use crate::error::CgaError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), CgaError>;

    /// Builds an `InvalidConfiguration` error prefixed with the section name
    fn invalid(message: impl Into<String>) -> CgaError {
        CgaError::InvalidConfiguration(format!("[{}] {}", Self::section_name(), message.into()))
    }
}
