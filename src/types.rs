use crate::engines::compact::Candidate;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How a call to `run()` ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Converged,
    IterationLimit,
    EvaluationLimit,
    /// Probability vector fixed at 0.0/1.0 short of the optimum
    Stalled,
}

/// Summary of a solver run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub num_bits: usize,
    pub population_size: usize,
    pub status: RunStatus,
    pub iterations: u64,
    pub evaluations: u64,
    pub best_fitness: usize,
    pub candidate: Candidate,
}

impl RunReport {
    pub fn converged(&self) -> bool {
        self.status == RunStatus::Converged
    }

    /// Steps where both samples had equal fitness
    pub fn ties(&self) -> u64 {
        self.iterations.saturating_sub(self.evaluations)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stalled_report_as_json() {
        let report = RunReport {
            num_bits: 3,
            population_size: 4,
            status: RunStatus::Stalled,
            iterations: 9,
            evaluations: 5,
            best_fitness: 2,
            candidate: vec![1, 0, 1],
        };

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["status"], "stalled");
        assert_eq!(json["iterations"], 9);
        assert_eq!(json["candidate"], serde_json::json!([1, 0, 1]));
        assert!(!report.converged());
        assert_eq!(report.ties(), 4);
    }
}
