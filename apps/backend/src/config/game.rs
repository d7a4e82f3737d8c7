use std::path::PathBuf;
use std::time::Duration;

use super::{env_lookup, parse_or};
use crate::error::AppError;

pub const DEFAULT_INACTIVITY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Gameplay tunables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// A turn holder idle for longer than this is evicted.
    pub inactivity_timeout: Duration,
    /// How often the idle sweeper runs.
    pub sweep_interval: Duration,
    /// Directory finished rounds are written to.
    pub results_dir: PathBuf,
    /// Fixed seed for secrets and turn order; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout: Duration::from_secs(DEFAULT_INACTIVITY_TIMEOUT_SECS),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Read `GAME_*` variables from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = parse_or(
            &lookup,
            "GAME_INACTIVITY_TIMEOUT_SECS",
            DEFAULT_INACTIVITY_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(AppError::config(
                "GAME_INACTIVITY_TIMEOUT_SECS must be greater than zero",
            ));
        }
        let sweep_secs = parse_or(
            &lookup,
            "GAME_SWEEP_INTERVAL_SECS",
            DEFAULT_SWEEP_INTERVAL_SECS,
        )?;
        if sweep_secs == 0 {
            return Err(AppError::config(
                "GAME_SWEEP_INTERVAL_SECS must be greater than zero",
            ));
        }

        let results_dir = lookup("GAME_RESULTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR));

        let rng_seed = match lookup("GAME_RNG_SEED") {
            None => None,
            Some(_) => Some(parse_or(&lookup, "GAME_RNG_SEED", 0u64)?),
        };

        Ok(Self {
            inactivity_timeout: Duration::from_secs(timeout_secs),
            sweep_interval: Duration::from_secs(sweep_secs),
            results_dir,
            rng_seed,
        })
    }
}
