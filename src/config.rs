//! Runtime configuration for the terminal front end.
//!
//! Read once at start-up from environment variables. Invalid values fall
//! back to the defaults rather than aborting.
//!
//! - `TWENTY48_SEED`: RNG seed (default: derived from the system clock)
//! - `TWENTY48_TARGET`: winning tile, a power of two ≥ 8 (default: 2048)
//! - `TWENTY48_FLASH_MS`: merge highlight duration (default: 120)
//! - `TWENTY48_LOG_PATH`: write tracing output to this file (default: no logging)
//! - `TWENTY48_LOG`: tracing filter directives (default: "info")

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{MERGE_FLASH_MS, TARGET_TILE};

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub target: u32,
    pub flash_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            target: TARGET_TILE,
            flash_ms: MERGE_FLASH_MS,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get("TWENTY48_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let target = get("TWENTY48_TARGET")
            .and_then(|s| s.parse().ok())
            .filter(|&t| is_valid_target(t))
            .unwrap_or(TARGET_TILE);

        let flash_ms = get("TWENTY48_FLASH_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(MERGE_FLASH_MS);

        let log_path = get("TWENTY48_LOG_PATH").map(PathBuf::from);

        let log_filter = get("TWENTY48_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            target,
            flash_ms,
            log_path,
            log_filter,
        }
    }
}

/// Targets must be reachable by merging: a power of two, at least 8.
pub fn is_valid_target(target: u32) -> bool {
    target >= 8 && target.is_power_of_two()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
