use super::traits::ConfigSection;
use crate::error::CgaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_POPULATION_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub population_size: usize,
    pub update_rule: UpdateRule,
    pub seed: Option<u64>,
    pub max_iterations: Option<u64>,
    pub max_evaluations: Option<u64>,
}

/// Which bits a decided tournament pushes toward 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateRule {
    /// Every bit where the winner holds a 0, whatever the loser holds there.
    #[default]
    WinnerBiased,
    /// Only bits where the winner holds a 0 and the loser a 1.
    Disagreement,
}

impl fmt::Display for UpdateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateRule::WinnerBiased => write!(f, "winner-biased"),
            UpdateRule::Disagreement => write!(f, "disagreement"),
        }
    }
}

impl FromStr for UpdateRule {
    type Err = CgaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "winner-biased" => Ok(UpdateRule::WinnerBiased),
            "disagreement" => Ok(UpdateRule::Disagreement),
            other => Err(CgaError::InvalidConfiguration(format!(
                "Unknown update rule '{}', expected 'winner-biased' or 'disagreement'",
                other
            ))),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            update_rule: UpdateRule::default(),
            seed: None,
            max_iterations: None,
            max_evaluations: None,
        }
    }
}

impl ConfigSection for SolverConfig {
    fn section_name() -> &'static str {
        "solver"
    }

    fn validate(&self) -> Result<(), CgaError> {
        if self.population_size < 1 {
            return Err(Self::invalid("Population size must be at least 1"));
        }
        Ok(())
    }
}
