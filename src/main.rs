use anyhow::{bail, Context};
use clap::Parser;
use onemax_cga::config::{AppConfig, ConfigManager, LoggingConfig, UpdateRule};
use onemax_cga::engines::compact::{CompactGeneticSolver, LogObserver};
use std::path::PathBuf;

/// Compact genetic algorithm solver for the OneMax problem
#[derive(Parser, Debug)]
#[command(name = "onemax-cga", version, about)]
struct Cli {
    /// Length of the bit string to optimize
    #[arg(value_name = "NUM_BITS", value_parser = parse_num_bits)]
    num_bits: usize,

    /// Trace every iteration (pass --verbose=false to silence)
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    verbose: Option<bool>,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Update step is 1 / population size
    #[arg(short, long)]
    population_size: Option<usize>,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many iterations
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Give up after this many decided tournaments
    #[arg(long)]
    max_evaluations: Option<u64>,

    /// winner-biased or disagreement
    #[arg(long, value_parser = parse_update_rule)]
    update_rule: Option<UpdateRule>,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

fn parse_num_bits(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("must be a positive integer: {}", e)),
    }
}

fn parse_update_rule(s: &str) -> Result<UpdateRule, String> {
    s.parse().map_err(|e: onemax_cga::CgaError| e.to_string())
}

impl Cli {
    fn apply_overrides(&self, manager: &mut ConfigManager) -> onemax_cga::Result<()> {
        manager.update(|config| {
            if let Some(verbose) = self.verbose {
                config.logging.verbose = verbose;
            }
            if let Some(population_size) = self.population_size {
                config.solver.population_size = population_size;
            }
            if let Some(seed) = self.seed {
                config.solver.seed = Some(seed);
            }
            if let Some(max_iterations) = self.max_iterations {
                config.solver.max_iterations = Some(max_iterations);
            }
            if let Some(max_evaluations) = self.max_evaluations {
                config.solver.max_evaluations = Some(max_evaluations);
            }
            if let Some(update_rule) = self.update_rule {
                config.solver.update_rule = update_rule;
            }
        })
    }
}

fn init_logging(config: &LoggingConfig) {
    let env = env_logger::Env::default().default_filter_or(config.default_filter());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut manager = ConfigManager::load_layered(cli.config.as_deref())
        .context("Failed to load configuration")?;
    cli.apply_overrides(&mut manager)
        .context("Invalid command line options")?;
    let AppConfig { solver, logging } = manager.into_inner();

    init_logging(&logging);

    let mut cga = CompactGeneticSolver::from_config(cli.num_bits, &solver, LogObserver::default())?;
    let report = cga.run();

    if cli.json {
        println!("{}", report.to_json()?);
    }

    if !report.converged() {
        bail!(
            "no all-ones candidate after {} iterations ({} evaluations), best fitness {}/{}",
            report.iterations,
            report.evaluations,
            report.best_fitness,
            report.num_bits
        );
    }

    Ok(())
}
