use crate::config::UpdateRule;
use crate::engines::compact::candidate::{Bit, Candidate};
use crate::engines::compact::fitness::{fitness, is_optimal};
use serde::{Deserialize, Serialize};

/// Everything the compact GA carries from one iteration to the next
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverState {
    /// `probabilities[i]` is the chance that bit `i` is sampled as 1
    pub probabilities: Vec<f64>,
    pub candidate: Candidate,
    /// Every step, ties included
    pub iterations: u64,
    /// Decided steps only
    pub evaluations: u64,
}

/// Result of comparing the two candidates sampled in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tournament {
    Tie {
        fitness: usize,
    },
    Decided {
        winner_fitness: usize,
        loser_fitness: usize,
    },
}

impl SolverState {
    /// Fresh state around an initial candidate, every probability at 0.5
    pub fn new(candidate: Candidate) -> Self {
        Self {
            probabilities: vec![0.5; candidate.len()],
            candidate,
            iterations: 0,
            evaluations: 0,
        }
    }

    pub fn num_bits(&self) -> usize {
        self.probabilities.len()
    }

    pub fn best_fitness(&self) -> usize {
        fitness(&self.candidate)
    }

    pub fn is_converged(&self) -> bool {
        is_optimal(&self.candidate, self.num_bits())
    }

    /// Every probability sits at 0.0 or 1.0
    ///
    /// Sampling is then deterministic: both candidates of a step are the same
    /// string, every step ties, and neither the vector nor the candidate can
    /// change again. Repeated `step` updates leave rounding residue (0.5 minus
    /// five steps of 0.1 is 2.8e-17, not 0.0), so anything within a quarter
    /// step of a bound counts as on it. Exact arithmetic never lands that close
    /// without landing on the bound itself.
    pub fn is_degenerate(&self, step: f64) -> bool {
        let slack = step / 4.0;
        self.probabilities
            .iter()
            .all(|&p| p <= slack || p >= 1.0 - slack)
    }

    pub fn ties(&self) -> u64 {
        self.iterations.saturating_sub(self.evaluations)
    }
}

/// Move the probability vector toward `winner`
///
/// Bits where the winner has 1 and the loser 0 move up by `step`. Bits where the
/// winner has 0 move down by `step`; under `UpdateRule::Disagreement` only when
/// the loser has 1 there. Results are clamped to [0, 1].
pub fn update_probabilities(
    probabilities: &mut [f64],
    winner: &[Bit],
    loser: &[Bit],
    step: f64,
    rule: UpdateRule,
) {
    debug_assert_eq!(probabilities.len(), winner.len());
    debug_assert_eq!(probabilities.len(), loser.len());

    for ((probability, &winner_bit), &loser_bit) in
        probabilities.iter_mut().zip(winner).zip(loser)
    {
        if winner_bit == 1 && loser_bit == 0 {
            *probability = (*probability + step).min(1.0);
        } else if winner_bit == 0 {
            let decrease = match rule {
                UpdateRule::WinnerBiased => true,
                UpdateRule::Disagreement => loser_bit == 1,
            };
            if decrease {
                *probability = (*probability - step).max(0.0);
            }
        }
    }
}

/// One tournament between two sampled candidates
///
/// Takes the state by value and hands back the updated record. A tie only
/// advances the iteration counter. Otherwise the probabilities move toward the
/// winner, the winner becomes the current candidate, and both counters advance.
pub fn compete(
    mut state: SolverState,
    first: Candidate,
    second: Candidate,
    step: f64,
    rule: UpdateRule,
) -> (SolverState, Tournament) {
    let first_fitness = fitness(&first);
    let second_fitness = fitness(&second);

    state.iterations += 1;

    if first_fitness == second_fitness {
        return (state, Tournament::Tie { fitness: first_fitness });
    }

    let (winner, loser, winner_fitness, loser_fitness) = if first_fitness > second_fitness {
        (first, second, first_fitness, second_fitness)
    } else {
        (second, first, second_fitness, first_fitness)
    };

    update_probabilities(&mut state.probabilities, &winner, &loser, step, rule);
    state.candidate = winner;
    state.evaluations += 1;

    (
        state,
        Tournament::Decided {
            winner_fitness,
            loser_fitness,
        },
    )
}
