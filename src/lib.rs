pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use crate::config::{AppConfig, ConfigManager, LoggingConfig, SolverConfig, UpdateRule};
pub use crate::engines::compact::{
    Bit, Candidate, CompactGeneticSolver, LogObserver, NoopObserver, RunLimits, SolverObserver,
    SolverState, Tournament,
};
pub use crate::error::{CgaError, Result};
pub use crate::types::{RunReport, RunStatus};
