//! CLI configuration loaded from TOML.
//!
//! ```toml
//! log_level = "info"
//!
//! [solver]
//! tolerance = 1e-4
//! max_iters = 200
//!
//! [pricing]
//! unit_cost = 12.5
//! max_demand = 400
//! ```

use std::{fs, path::Path, path::PathBuf};

use clap::ValueEnum;
use optiprice_pricing::PricingRequest;
use optiprice_solvers::optimization::golden_section;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid solver settings: {0}")]
    Solver(#[from] golden_section::ConfigError),
}

/// Log levels accepted in the config file and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Returns the level as a tracing filter directive.
    pub fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Golden section search settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverSettings {
    /// Absolute bracket width at which the search stops.
    pub tolerance: f64,

    /// Iteration limit; a search that reaches it reports an approximate price.
    pub max_iters: usize,

    /// Width tolerance relative to the midpoint, added to `tolerance`.
    pub rel_tol: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        let config = golden_section::Config::default();
        Self {
            tolerance: config.x_abs_tol(),
            max_iters: config.max_iters(),
            rel_tol: config.x_rel_tol(),
        }
    }
}

impl SolverSettings {
    /// Applies command-line overrides.
    pub fn merge(&mut self, tolerance: Option<f64>, max_iters: Option<usize>) {
        if let Some(tolerance) = tolerance {
            self.tolerance = tolerance;
        }
        if let Some(max_iters) = max_iters {
            self.max_iters = max_iters;
        }
    }

    /// Builds a validated solver config.
    pub fn to_config(&self) -> Result<golden_section::Config, ConfigError> {
        Ok(golden_section::Config::new(
            self.max_iters,
            self.tolerance,
            self.rel_tol,
        )?)
    }
}

/// Settings shared by all commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub log_level: LogLevel,
    pub solver: SolverSettings,
    pub pricing: PricingRequest,
}

impl CliConfig {
    /// Loads and validates a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.solver.to_config()?;
        Ok(config)
    }
}
