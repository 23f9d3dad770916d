//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use solver::DepthSchedule;

/// Configuration required to run the duel solver binary.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Path to the boss description.
    pub input: PathBuf,
    /// Depth-bound schedule handed to the solver.
    pub schedule: DepthSchedule,
}

impl ClientConfig {
    /// Construct configuration from the command line and process
    /// environment.
    ///
    /// The first positional argument, when present, overrides the input
    /// path. Environment variables:
    /// - `DUEL_INPUT` - Path to the boss description (default: input.txt)
    /// - `DUEL_INITIAL_DEPTH_LIMIT` - Depth bound of the first search pass
    /// - `DUEL_PROBE_STEP` - Bound increment while no win is known
    /// - `DUEL_BOUNDED_STEP` - Bound increment once a win bounds the cost
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = env::args().nth(1) {
            config.input = PathBuf::from(path);
        } else if let Some(path) = env::var_os("DUEL_INPUT") {
            config.input = PathBuf::from(path);
        }

        if let Some(initial) = read_env::<u32>("DUEL_INITIAL_DEPTH_LIMIT") {
            config.schedule.initial = initial.max(1);
        }
        if let Some(step) = read_env::<u32>("DUEL_PROBE_STEP") {
            config.schedule.probe_step = step.max(1);
        }
        if let Some(step) = read_env::<u32>("DUEL_BOUNDED_STEP") {
            config.schedule.bounded_step = step.max(1);
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            schedule: DepthSchedule::default(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
