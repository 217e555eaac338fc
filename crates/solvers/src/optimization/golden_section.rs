//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval `[a, b]`. It maintains two interior points positioned
//! by the inverse golden ratio φ⁻¹ ≈ 0.618,
//!
//! - `c = b - φ⁻¹ (b - a)`
//! - `d = a + φ⁻¹ (b - a)`
//!
//! compares their objectives, and shrinks the bracket toward the better point.
//! The surviving interior point is reused, so each iteration costs exactly one
//! new evaluation and shrinks the bracket width by φ⁻¹.
//!
//! When both interior points score the same, the bracket shrinks to `[a, d]`.
//!
//! # Termination and reporting
//!
//! The search stops once the bracket width is within
//! `x_abs_tol + x_rel_tol * |midpoint|`, or after [`Config::max_iters`]
//! iterations. Either way the reported `x` is the midpoint of the final
//! bracket and `objective` is evaluated there. Reaching the iteration limit is
//! not an error: the solution carries [`Status::MaxIters`] and callers must
//! check [`Solution::is_converged`] before treating it as exact.
//!
//! # When to Use
//!
//! Golden section search is appropriate when:
//! - The objective function is unimodal (single optimum) on the bracket
//! - Derivative information is unavailable or expensive
//! - Function evaluations are relatively cheap
//!
//! Unimodality is a precondition and is not verified.
//!
//! # Errors
//!
//! - [`Error::InvalidBracket`] if the bounds are not finite or `low >= high`.
//!   Reversed bounds are rejected rather than swapped.
//! - [`Error::NonFiniteObjective`] if the objective is NaN or infinite at a
//!   probed point.
//! - [`Error::Model`] / [`Error::Problem`] if an evaluation fails.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation after initialization:
//!
//! - [`Event::Evaluated`] — evaluation succeeded
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or objective)
//! - [`Event::NonFinite`] — objective was NaN or infinite
//!
//! Each event includes `other`, the other interior point. During
//! **initialization**, the solver evaluates two points but emits only one event
//! (for the second point), since the first has no `other` yet. The final
//! midpoint evaluation is not observed.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the point as worse than `other` (useful for
//! error recovery or steering the search away from a region).

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod init;
mod point;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use optiprice_core::{FnModel, Model, Observer, OptimizationProblem};

use super::OutputObjective;
use search::search;

/// Finds the minimum of the objective using golden section search.
///
/// The observer receives an [`Event`] for each evaluation after the first.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, or if an evaluation fails
/// and the observer does not return [`Action::AssumeWorse`] to recover.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, observer, |v| v)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or an evaluation fails.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bracket, config, ())
}

/// Finds the maximum of the objective using golden section search.
///
/// The observer receives an [`Event`] for each evaluation after the first.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, or if an evaluation fails
/// and the observer does not return [`Action::AssumeWorse`] to recover.
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, observer, |v| -v)
}

/// Finds the maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or an evaluation fails.
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, bracket, config, ())
}

/// Finds the maximum of a plain scalar function.
///
/// # Example
///
/// ```
/// use optiprice_solvers::optimization::golden_section::{Config, maximize_fn};
///
/// let config = Config::with_tolerance(1e-6, 100).unwrap();
/// let solution = maximize_fn(|x| -(x - 5.0).powi(2), [0.0, 10.0], &config).unwrap();
///
/// assert!(solution.is_converged());
/// assert!((solution.x - 5.0).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the function returns a
/// non-finite value at a probed point.
pub fn maximize_fn<F>(
    objective: F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
{
    maximize_unobserved(&FnModel(objective), &OutputObjective, bracket, config)
}

/// Finds the minimum of a plain scalar function.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the function returns a
/// non-finite value at a probed point.
pub fn minimize_fn<F>(
    objective: F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
{
    minimize_unobserved(&FnModel(objective), &OutputObjective, bracket, config)
}
