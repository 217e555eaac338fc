use thiserror::Error;

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("x_abs_tol must be finite and positive")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-5,
            x_rel_tol: 0.0,
        }
    }
}

impl Config {
    /// Creates a new config with validated limits and tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero, `x_abs_tol` is not positive,
    /// or `x_rel_tol` is negative. Non-finite tolerances are rejected.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !x_abs_tol.is_finite() || x_abs_tol <= 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
        })
    }

    /// Creates a config with an absolute bracket-width tolerance only.
    ///
    /// Arguments follow the `(tolerance, max_iters)` order of a plain
    /// `optimize(low, high, objective, tolerance, max_iters)` call, so this is
    /// `Config::new(max_iters, tolerance, 0.0)`.
    ///
    /// # Errors
    ///
    /// See [`Config::new`].
    pub fn with_tolerance(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        Self::new(max_iters, tolerance, 0.0)
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance for x convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance for x convergence.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();

        assert_eq!(
            Config::new(config.max_iters(), config.x_abs_tol(), config.x_rel_tol()),
            Ok(config)
        );
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(Config::new(0, 1e-5, 0.0), Err(ConfigError::MaxIters));
        assert_eq!(Config::new(10, 0.0, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, -1e-5, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, f64::NAN, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, 1e-5, -0.1), Err(ConfigError::XRel));
        assert_eq!(Config::new(10, 1e-5, f64::INFINITY), Err(ConfigError::XRel));
    }

    #[test]
    fn with_tolerance_disables_relative_tolerance() {
        let config = Config::with_tolerance(1e-3, 50).unwrap();

        assert_eq!(config.max_iters(), 50);
        assert!((config.x_abs_tol() - 1e-3).abs() < f64::EPSILON);
        assert!(config.x_rel_tol().abs() < f64::EPSILON);
        assert_eq!(config, Config::new(50, 1e-3, 0.0).unwrap());
    }

    #[test]
    fn with_tolerance_validates_like_new() {
        assert_eq!(Config::with_tolerance(1e-3, 0), Err(ConfigError::MaxIters));
        assert_eq!(Config::with_tolerance(0.0, 50), Err(ConfigError::XAbs));
    }
}
