use crate::optimization::EvalError;

/// Errors that can occur during golden section search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid bracket [{low}, {high}]: bounds must be finite with low < high")]
    InvalidBracket { low: f64, high: f64 },

    #[error("objective is not finite at x = {x}: {objective}")]
    NonFiniteObjective { x: f64, objective: f64 },

    #[error("model error: {0}")]
    Model(Box<dyn std::error::Error + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Converts an evaluation failure at `x` into a solver error.
    pub(super) fn from_eval<ME, PE>(x: f64, error: EvalError<ME, PE>) -> Self
    where
        ME: std::error::Error + Send + Sync + 'static,
        PE: std::error::Error + Send + Sync + 'static,
    {
        match error {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
            EvalError::NonFinite { objective } => Self::NonFiniteObjective { x, objective },
        }
    }
}
