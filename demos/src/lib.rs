//! Driver pieces shared by the `pathviz` binary: CLI arguments, run
//! configuration, random wall generation, and result formatting.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use pathviz_core::{DEFAULT_SIZE, GridError, Point};
use pathviz_search::{Algorithm, PathResult, SearchContext, UnknownAlgorithm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub const DEFAULT_WALL_DENSITY: f64 = 0.3;
pub const DEFAULT_DELAY_MS: u64 = 10;
pub const DEFAULT_SEED: u64 = 42;
/// Largest accepted grid side.
pub const MAX_SIZE: i32 = 1024;

/// Which algorithms to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    One(Algorithm),
}

impl Selection {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Selection::All => Algorithm::ALL.to_vec(),
            Selection::One(alg) => vec![alg],
        }
    }
}

impl FromStr for Selection {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::One)
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::One(alg) => write!(f, "{alg}"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pathviz")]
#[command(author, version, about = "Watch grid search algorithms explore a random maze")]
/// Command-line arguments for the visualizer
pub struct Cli {
    /// bfs, dfs, astar, dijkstra, greedy, or all
    #[arg(value_name = "ALGORITHM", default_value = "all")]
    pub algorithm: Selection,

    /// Grid side length in cells
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    pub size: i32,

    /// Probability that a cell becomes a wall
    #[arg(short, long, default_value_t = DEFAULT_WALL_DENSITY)]
    pub walls: f64,

    /// Random seed for wall placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Pause after each painted cell, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay: u64,

    /// Print ASCII grids instead of animating in the terminal
    #[arg(long)]
    pub headless: bool,
}

/// Validated run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub selection: Selection,
    pub size: i32,
    pub wall_density: f64,
    pub seed: u64,
    pub delay: Duration,
    pub headless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selection: Selection::All,
            size: DEFAULT_SIZE,
            wall_density: DEFAULT_WALL_DENSITY,
            seed: DEFAULT_SEED,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            headless: false,
        }
    }
}

/// Rejected command-line settings.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Start and End need two distinct cells.
    GridTooSmall(i32),
    /// Side longer than [`MAX_SIZE`].
    GridTooLarge(i32),
    /// Wall density outside `[0, 1]`.
    Density(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall(n) => write!(f, "grid size must be at least 2, got {n}"),
            Self::GridTooLarge(n) => write!(f, "grid size must be at most {MAX_SIZE}, got {n}"),
            Self::Density(d) => write!(f, "wall density must be between 0 and 1, got {d}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.size < 2 {
            return Err(ConfigError::GridTooSmall(cli.size));
        }
        if cli.size > MAX_SIZE {
            return Err(ConfigError::GridTooLarge(cli.size));
        }
        if !(0.0..=1.0).contains(&cli.walls) {
            return Err(ConfigError::Density(cli.walls));
        }
        Ok(Self {
            selection: cli.algorithm,
            size: cli.size,
            wall_density: cli.walls,
            seed: cli.seed,
            delay: Duration::from_millis(cli.delay),
            headless: cli.headless,
        })
    }
}

/// Install the stderr logger. `RUST_LOG` overrides the default `warn` level.
///
/// Fails if a global subscriber (or `log` logger) is already installed.
pub fn init_logging() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
}

/// Fill every non-terminal cell with a wall with probability `density`.
pub fn random_walls<R: Rng>(ctx: &mut SearchContext, density: f64, rng: &mut R) {
    let density = density.clamp(0.0, 1.0);
    ctx.fill_walls(|_| rng.random_bool(density));
}

/// A fresh context with Start and End in opposite corners and random walls.
pub fn build_context(config: &Config) -> Result<SearchContext, GridError> {
    let last = config.size - 1;
    let mut ctx = SearchContext::new(config.size);
    ctx.set_start(Point::new(0, 0))?;
    ctx.set_end(Point::new(last, last))?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    random_walls(&mut ctx, config.wall_density, &mut rng);
    log::debug!(
        "built {0}x{0} grid, density {1}, seed {2}",
        config.size,
        config.wall_density,
        config.seed
    );
    Ok(ctx)
}

/// One status line per run.
pub fn summary(result: &PathResult) -> String {
    let outcome = if result.found { "Path found" } else { "No path" };
    format!(
        "{:<8} {:<10}  length {:>4}  visited {:>5}  time {:.3}s",
        result.algorithm,
        outcome,
        result.path_len(),
        result.visited,
        result.elapsed.as_secs_f64()
    )
}
