use crate::engines::compact::candidate::{format_bits, Bit};
use crate::engines::compact::state::SolverState;
use crate::types::RunReport;
use log::Level;

/// Receives the solver's diagnostic events; must not influence the run
pub trait SolverObserver {
    fn on_run_start(&mut self, num_bits: usize, population_size: usize);
    fn on_candidates_sampled(
        &mut self,
        iteration: u64,
        first: &[Bit],
        first_fitness: usize,
        second: &[Bit],
        second_fitness: usize,
    );
    fn on_tie(&mut self, iteration: u64, fitness: usize);
    fn on_probabilities_updated(
        &mut self,
        iteration: u64,
        winner_fitness: usize,
        loser_fitness: usize,
        state: &SolverState,
    );
    fn on_run_complete(&mut self, report: &RunReport);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SolverObserver for NoopObserver {
    fn on_run_start(&mut self, _num_bits: usize, _population_size: usize) {}

    fn on_candidates_sampled(
        &mut self,
        _iteration: u64,
        _first: &[Bit],
        _first_fitness: usize,
        _second: &[Bit],
        _second_fitness: usize,
    ) {
    }

    fn on_tie(&mut self, _iteration: u64, _fitness: usize) {}

    fn on_probabilities_updated(
        &mut self,
        _iteration: u64,
        _winner_fitness: usize,
        _loser_fitness: usize,
        _state: &SolverState,
    ) {
    }

    fn on_run_complete(&mut self, _report: &RunReport) {}
}

/// Forwards solver events to the `log` facade
///
/// Per-iteration traces go out at `trace_level`; run start and the final
/// summary always go out at `Info`.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    trace_level: Level,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl LogObserver {
    pub fn new(trace_level: Level) -> Self {
        Self { trace_level }
    }
}

impl SolverObserver for LogObserver {
    fn on_run_start(&mut self, num_bits: usize, population_size: usize) {
        log::info!(
            "compact genetic algorithm for {} bits (population size {})",
            num_bits,
            population_size
        );
    }

    fn on_candidates_sampled(
        &mut self,
        iteration: u64,
        first: &[Bit],
        first_fitness: usize,
        second: &[Bit],
        second_fitness: usize,
    ) {
        log::log!(
            self.trace_level,
            "iteration[{}] first {} - {}, second {} - {}",
            iteration,
            first_fitness,
            format_bits(first),
            second_fitness,
            format_bits(second)
        );
    }

    fn on_tie(&mut self, iteration: u64, fitness: usize) {
        log::log!(
            self.trace_level,
            "iteration[{}] no winner, both candidates at fitness {}",
            iteration,
            fitness
        );
    }

    fn on_probabilities_updated(
        &mut self,
        iteration: u64,
        winner_fitness: usize,
        loser_fitness: usize,
        state: &SolverState,
    ) {
        if !log::log_enabled!(self.trace_level) {
            return;
        }
        let probabilities: Vec<String> =
            state.probabilities.iter().map(|p| format!("{:.2}", p)).collect();
        log::log!(
            self.trace_level,
            "iteration[{}] winner {} - {} beat {}, probabilities [{}]",
            iteration,
            winner_fitness,
            format_bits(&state.candidate),
            loser_fitness,
            probabilities.join(", ")
        );
    }

    fn on_run_complete(&mut self, report: &RunReport) {
        log::info!(
            "{:?} after {} iterations, {} evaluations ({} ties), best fitness {}/{}",
            report.status,
            report.iterations,
            report.evaluations,
            report.ties(),
            report.best_fitness,
            report.num_bits
        );
    }
}
