//! Solver and logging configuration.

use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Brute force is practical up to this many points; above it the search
/// still runs but logs a warning.
pub const DEFAULT_PRACTICAL_LIMIT: usize = 10;

/// Which orderings the exhaustive search walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enumeration {
    /// Index 0 is pinned as the start and the remaining `n - 1` indices are
    /// permuted: `(n - 1)!` candidates, one per rotation class.
    #[default]
    FixedStart,
    /// Every ordering of all `n` indices: `n!` candidates, each cycle seen
    /// once per rotation.
    AllOrderings,
}

/// Configuration for the exhaustive search.
///
/// # Examples
///
/// ```
/// use geotour::config::{BruteForceConfig, Enumeration};
///
/// let config = BruteForceConfig::new()
///     .with_enumeration(Enumeration::AllOrderings)
///     .with_time_limit(5_000);
/// assert_eq!(config.time_limit_ms, Some(5_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BruteForceConfig {
    pub enumeration: Enumeration,
    /// Stop searching after this many milliseconds. `None` runs to completion.
    pub time_limit_ms: Option<u64>,
    /// Warn when asked to search more points than this.
    pub practical_limit: usize,
}

impl BruteForceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumeration = enumeration;
        self
    }

    /// Sets the search deadline in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_practical_limit(mut self, n: usize) -> Self {
        self.practical_limit = n;
        self
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self {
            enumeration: Enumeration::FixedStart,
            time_limit_ms: None,
            practical_limit: DEFAULT_PRACTICAL_LIMIT,
        }
    }
}

/// Log line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// `LEVEL message`
    #[default]
    Compact,
    /// `LEVEL [target] message`
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub format: LogFormat,
    /// Prefix each line with a millisecond timestamp.
    pub timestamp: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            format: LogFormat::Compact,
            timestamp: false,
        }
    }
}

/// Top-level configuration.
///
/// Every field is optional in JSON; missing ones take their defaults.
///
/// # Examples
///
/// ```
/// use geotour::config::{Enumeration, SolverConfig};
///
/// let config = SolverConfig::from_json(r#"{
///     "brute_force": { "enumeration": "all_orderings", "time_limit_ms": 2000 },
///     "log": { "level": "debug" }
/// }"#).unwrap();
/// assert_eq!(config.brute_force.enumeration, Enumeration::AllOrderings);
/// assert_eq!(config.brute_force.practical_limit, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub brute_force: BruteForceConfig,
    pub log: LogConfig,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brute_force(mut self, brute_force: BruteForceConfig) -> Self {
        self.brute_force = brute_force;
        self
    }

    pub fn with_log(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    /// Parses a configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
