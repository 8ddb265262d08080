use crate::config::{ConfigSection, SolverConfig, UpdateRule};
use crate::engines::compact::{
    candidate::{Bit, Candidate},
    fitness::fitness,
    operators::{random_candidate, sample_candidate},
    progress::{NoopObserver, SolverObserver},
    state::{compete, SolverState, Tournament},
};
use crate::error::{CgaError, Result};
use crate::types::{RunReport, RunStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Optional ceilings on a run; `None` means unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunLimits {
    pub max_iterations: Option<u64>,
    pub max_evaluations: Option<u64>,
}

impl RunLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            max_evaluations: config.max_evaluations,
        }
    }

    fn reached(&self, state: &SolverState) -> Option<RunStatus> {
        if matches!(self.max_iterations, Some(max) if state.iterations >= max) {
            return Some(RunStatus::IterationLimit);
        }
        if matches!(self.max_evaluations, Some(max) if state.evaluations >= max) {
            return Some(RunStatus::EvaluationLimit);
        }
        None
    }
}

/// Compact genetic algorithm for OneMax
///
/// Holds a probability vector instead of a population. Each `step()` samples two
/// candidates from it, lets the fitter one pull the vector toward itself and
/// keeps it as the current candidate. `run()` repeats until the current
/// candidate is all ones, until every probability is pinned at 0.0 or 1.0 and
/// nothing can change any more, or until one of the configured `RunLimits` is
/// hit.
pub struct CompactGeneticSolver<R = StdRng, O = NoopObserver> {
    state: SolverState,
    population_size: usize,
    update_rule: UpdateRule,
    limits: RunLimits,
    rng: R,
    observer: O,
}

impl CompactGeneticSolver {
    /// Entropy-seeded solver without tracing
    pub fn new(num_bits: usize, population_size: usize) -> Result<Self> {
        Self::with_rng(num_bits, population_size, StdRng::from_entropy(), NoopObserver)
    }
}

impl<O: SolverObserver> CompactGeneticSolver<StdRng, O> {
    pub fn from_config(num_bits: usize, config: &SolverConfig, observer: O) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self::with_rng(num_bits, config.population_size, rng, observer)?
            .with_update_rule(config.update_rule)
            .with_limits(RunLimits::from_config(config)))
    }
}

impl<R: Rng, O: SolverObserver> CompactGeneticSolver<R, O> {
    pub fn with_rng(num_bits: usize, population_size: usize, mut rng: R, observer: O) -> Result<Self> {
        if population_size < 1 {
            return Err(CgaError::InvalidConfiguration(
                "Population size must be at least 1".to_string(),
            ));
        }

        let candidate = random_candidate(num_bits, &mut rng);

        Ok(Self {
            state: SolverState::new(candidate),
            population_size,
            update_rule: UpdateRule::default(),
            limits: RunLimits::unbounded(),
            rng,
            observer,
        })
    }

    pub fn with_update_rule(mut self, update_rule: UpdateRule) -> Self {
        self.update_rule = update_rule;
        self
    }

    pub fn with_limits(mut self, limits: RunLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn fitness(&self, candidate: &[Bit]) -> usize {
        fitness(candidate)
    }

    /// One generation: sample two candidates and let them compete
    pub fn step(&mut self) -> Tournament {
        let iteration = self.state.iterations;

        let first = sample_candidate(&self.state.probabilities, &mut self.rng);
        let second = sample_candidate(&self.state.probabilities, &mut self.rng);
        self.observer.on_candidates_sampled(
            iteration,
            &first,
            fitness(&first),
            &second,
            fitness(&second),
        );

        let state = std::mem::take(&mut self.state);
        let (state, outcome) = compete(state, first, second, self.step_size(), self.update_rule);
        self.state = state;

        match outcome {
            Tournament::Tie { fitness } => self.observer.on_tie(iteration, fitness),
            Tournament::Decided {
                winner_fitness,
                loser_fitness,
            } => self.observer.on_probabilities_updated(
                iteration,
                winner_fitness,
                loser_fitness,
                &self.state,
            ),
        }

        outcome
    }

    /// Step until the current candidate is all ones, the vector stalls, or a
    /// limit is reached
    pub fn run(&mut self) -> RunReport {
        self.observer.on_run_start(self.num_bits(), self.population_size);

        let status = loop {
            if self.state.is_converged() {
                break RunStatus::Converged;
            }
            if self.state.is_degenerate(self.step_size()) {
                break RunStatus::Stalled;
            }
            if let Some(status) = self.limits.reached(&self.state) {
                break status;
            }
            self.step();
        };

        let report = self.report(status);
        self.observer.on_run_complete(&report);
        report
    }

    fn report(&self, status: RunStatus) -> RunReport {
        RunReport {
            num_bits: self.num_bits(),
            population_size: self.population_size,
            status,
            iterations: self.state.iterations,
            evaluations: self.state.evaluations,
            best_fitness: self.state.best_fitness(),
            candidate: self.state.candidate.clone(),
        }
    }

    pub fn step_size(&self) -> f64 {
        1.0 / self.population_size as f64
    }

    pub fn num_bits(&self) -> usize {
        self.state.num_bits()
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn update_rule(&self) -> UpdateRule {
        self.update_rule
    }

    pub fn limits(&self) -> RunLimits {
        self.limits
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.state.probabilities
    }

    pub fn candidate(&self) -> &Candidate {
        &self.state.candidate
    }

    pub fn iteration_count(&self) -> u64 {
        self.state.iterations
    }

    pub fn evaluation_count(&self) -> u64 {
        self.state.evaluations
    }

    pub fn is_converged(&self) -> bool {
        self.state.is_converged()
    }

    pub fn state(&self) -> &SolverState {
        &self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
