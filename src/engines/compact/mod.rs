pub mod candidate;
pub mod fitness;
pub mod operators;
pub mod state;
pub mod progress;
pub mod solver;

pub use candidate::{Bit, Candidate, format_bits};
pub use fitness::{fitness, is_optimal};
pub use operators::{bernoulli, random_candidate, sample_candidate};
pub use state::{compete, update_probabilities, SolverState, Tournament};
pub use progress::{LogObserver, NoopObserver, SolverObserver};
pub use solver::{CompactGeneticSolver, RunLimits};
