pub mod traits;
pub mod solver;
pub mod logging;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use solver::{SolverConfig, UpdateRule};
pub use logging::LoggingConfig;
pub use traits::ConfigSection;
