//! Price → demand models.
//!
//! Every demand curve is a [`Model`] with `Input = f64` (price) and
//! `Output = f64` (units demanded), so it can be paired with
//! [`ProfitProblem`](crate::ProfitProblem) and handed to a solver.

mod interpolated;

use std::convert::Infallible;

use ninterp::error::{InterpolateError, ValidateError};
use optiprice_core::Model;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use interpolated::InterpolatedDemand;

/// Errors that can occur when building or evaluating a demand curve.
#[derive(Debug, Error)]
pub enum DemandError {
    #[error(
        "linear demand needs finite, non-negative parameters \
         (max_demand = {max_demand}, sensitivity = {sensitivity})"
    )]
    InvalidLinear { max_demand: f64, sensitivity: f64 },

    #[error("demand sample {index} must have a finite price and a finite, non-negative demand")]
    InvalidSample { index: usize },

    #[error("interpolation needs at least two distinct prices, got {0}")]
    TooFewPrices(usize),

    #[error(transparent)]
    Validation(#[from] ValidateError),

    #[error(transparent)]
    Interpolation(#[from] InterpolateError),
}

/// Linear demand `Q(p) = max(0, max_demand - sensitivity * p)`.
///
/// Deserialization goes through [`LinearDemand::new`], so invalid parameters
/// are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinearDemandParams")]
pub struct LinearDemand {
    max_demand: f64,
    sensitivity: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LinearDemandParams {
    max_demand: f64,
    sensitivity: f64,
}

impl TryFrom<LinearDemandParams> for LinearDemand {
    type Error = DemandError;

    fn try_from(params: LinearDemandParams) -> Result<Self, Self::Error> {
        Self::new(params.max_demand, params.sensitivity)
    }
}

impl LinearDemand {
    /// Creates a linear demand curve.
    ///
    /// # Errors
    ///
    /// Returns [`DemandError::InvalidLinear`] if either parameter is negative
    /// or not finite.
    pub fn new(max_demand: f64, sensitivity: f64) -> Result<Self, DemandError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(max_demand) || !valid(sensitivity) {
            return Err(DemandError::InvalidLinear {
                max_demand,
                sensitivity,
            });
        }
        Ok(Self {
            max_demand,
            sensitivity,
        })
    }

    /// Demand at a price of zero.
    #[must_use]
    pub fn max_demand(&self) -> f64 {
        self.max_demand
    }

    /// Units of demand lost per unit of price.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Returns demand at `price`, never negative.
    #[must_use]
    pub fn demand(&self, price: f64) -> f64 {
        (self.max_demand - self.sensitivity * price).max(0.0)
    }

    /// Price at which demand reaches zero, if demand responds to price.
    #[must_use]
    pub fn choke_price(&self) -> Option<f64> {
        (self.sensitivity > 0.0).then(|| self.max_demand / self.sensitivity)
    }

    /// Closed-form profit-maximizing price `(a / b + c) / 2` for unit cost `c`.
    ///
    /// Useful as a reference for the numerical search.
    #[must_use]
    pub fn analytic_optimum(&self, unit_cost: f64) -> Option<f64> {
        self.choke_price().map(|choke| 0.5 * (choke + unit_cost))
    }
}

impl Model for LinearDemand {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, price: &f64) -> Result<f64, Self::Error> {
        Ok(self.demand(*price))
    }
}

/// A demand curve supplied as a plain function of price.
///
/// This is the seam for data providers that already have a continuous demand
/// estimate (a fitted model, a lookup service, a static formula).
#[derive(Debug, Clone, Copy)]
pub struct DemandFn<F>(pub F);

impl<F> Model for DemandFn<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, price: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*price))
    }
}
