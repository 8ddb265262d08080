use super::{logging::LoggingConfig, solver::SolverConfig, traits::ConfigSection};
use crate::error::CgaError;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `ONEMAX_SOLVER__POPULATION_SIZE=50`
pub const ENV_PREFIX: &str = "ONEMAX";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub solver: SolverConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), CgaError> {
        self.solver.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Defaults, then the optional TOML file, then `ONEMAX_*` environment variables
    pub fn load_layered(path: Option<&Path>) -> Result<Self, CgaError> {
        Self::load_layered_with_prefix(path, ENV_PREFIX)
    }

    /// `load_layered` reading environment variables under `env_prefix` instead
    pub fn load_layered_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, CgaError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(Self { config })
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CgaError> {
        let contents = std::fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| CgaError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CgaError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| CgaError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_inner(self) -> AppConfig {
        self.config
    }

    /// Applies `f` and keeps the result only if it still validates
    pub fn update<F>(&mut self, f: F) -> Result<(), CgaError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpdateRule;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("onemax.toml");

        let mut manager = ConfigManager::new();
        manager
            .update(|config| {
                config.solver.population_size = 32;
                config.solver.seed = Some(7);
                config.solver.update_rule = UpdateRule::Disagreement;
                config.logging.verbose = false;
            })
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let mut reloaded = ConfigManager::new();
        reloaded.load_from_file(&path).unwrap();
        assert_eq!(reloaded.get(), manager.get());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_temp("[solver]\nmax_iterations = 5000\n");

        let mut manager = ConfigManager::new();
        manager.load_from_file(file.path()).unwrap();

        let config = manager.get();
        assert_eq!(config.solver.max_iterations, Some(5000));
        assert_eq!(config.solver.population_size, 100);
        assert!(config.logging.verbose);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let file = write_temp("[solver]\npopulation_size = 0\n");

        let mut manager = ConfigManager::new();
        let err = manager.load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, CgaError::InvalidConfiguration(_)));

        // Previous config untouched
        assert_eq!(manager.get(), &AppConfig::default());
    }

    #[test]
    fn test_update_rolls_back_on_validation_failure() {
        let mut manager = ConfigManager::new();
        let result = manager.update(|config| config.solver.population_size = 0);

        assert!(result.is_err());
        assert_eq!(manager.get().solver.population_size, 100);
    }

    #[test]
    fn test_layered_load_reads_file() {
        let file = write_temp(
            "[solver]\npopulation_size = 20\nupdate_rule = \"disagreement\"\nseed = 99\n\n[logging]\nverbose = false\n",
        );

        let config = ConfigManager::load_layered(Some(file.path())).unwrap().into_inner();
        assert_eq!(config.solver.population_size, 20);
        assert_eq!(config.solver.update_rule, UpdateRule::Disagreement);
        assert_eq!(config.solver.seed, Some(99));
        assert!(!config.logging.verbose);
    }

    #[test]
    fn test_layered_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(ConfigManager::load_layered(Some(&missing)).is_err());
    }

    #[test]
    fn test_layered_load_applies_environment_over_file() {
        // Prefix private to this test so parallel tests never see these variables
        const PREFIX: &str = "ONEMAX_ENV_LAYER_TEST";
        let file = write_temp("[solver]\npopulation_size = 20\nseed = 99\n");

        std::env::set_var("ONEMAX_ENV_LAYER_TEST_SOLVER__POPULATION_SIZE", "50");
        std::env::set_var("ONEMAX_ENV_LAYER_TEST_SOLVER__UPDATE_RULE", "disagreement");
        std::env::set_var("ONEMAX_ENV_LAYER_TEST_SOLVER__SEED", "9");
        std::env::set_var("ONEMAX_ENV_LAYER_TEST_LOGGING__VERBOSE", "false");

        let result = ConfigManager::load_layered_with_prefix(Some(file.path()), PREFIX);

        for key in [
            "SOLVER__POPULATION_SIZE",
            "SOLVER__UPDATE_RULE",
            "SOLVER__SEED",
            "LOGGING__VERBOSE",
        ] {
            std::env::remove_var(format!("{}_{}", PREFIX, key));
        }

        let config = result.unwrap().into_inner();
        assert_eq!(config.solver.population_size, 50);
        assert_eq!(config.solver.update_rule, UpdateRule::Disagreement);
        assert_eq!(config.solver.seed, Some(9));
        assert!(!config.logging.verbose);
        // Untouched keys fall through to the defaults
        assert_eq!(config.solver.max_iterations, None);
    }

    #[test]
    fn test_invalid_environment_value_is_rejected() {
        const PREFIX: &str = "ONEMAX_ENV_INVALID_TEST";
        std::env::set_var("ONEMAX_ENV_INVALID_TEST_SOLVER__POPULATION_SIZE", "0");

        let result = ConfigManager::load_layered_with_prefix(None, PREFIX);
        std::env::remove_var("ONEMAX_ENV_INVALID_TEST_SOLVER__POPULATION_SIZE");

        assert!(matches!(result, Err(CgaError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let mut manager = ConfigManager::new();
        let err = manager.load_from_file(dir.path().join("absent.toml")).unwrap_err();

        assert!(matches!(err, CgaError::Io(_)));
    }

    #[test]
    fn test_save_into_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("onemax.toml");

        let err = ConfigManager::new().save_to_file(&path).unwrap_err();
        assert!(matches!(err, CgaError::Io(_)));
    }
}
