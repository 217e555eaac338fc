use optiprice_core::OptimizationProblem;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building or evaluating a profit objective.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProfitError {
    #[error("unit cost must be finite and non-negative, got {0}")]
    InvalidUnitCost(f64),

    #[error("price must be finite, got {0}")]
    InvalidPrice(f64),

    #[error("demand model returned {demand} at price {price}")]
    NegativeDemand { price: f64, demand: f64 },
}

/// Profit objective `(price - unit_cost) * demand(price)`.
///
/// Pairs with any price → demand [`Model`](optiprice_core::Model): the solver
/// variable is the price, the model output is the demand.
///
/// Deserialization goes through [`ProfitProblem::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfitParams")]
pub struct ProfitProblem {
    unit_cost: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfitParams {
    unit_cost: f64,
}

impl TryFrom<ProfitParams> for ProfitProblem {
    type Error = ProfitError;

    fn try_from(params: ProfitParams) -> Result<Self, Self::Error> {
        Self::new(params.unit_cost)
    }
}

impl ProfitProblem {
    /// Creates a profit objective for a product with the given unit cost.
    ///
    /// # Errors
    ///
    /// Returns [`ProfitError::InvalidUnitCost`] if `unit_cost` is negative or
    /// not finite.
    pub fn new(unit_cost: f64) -> Result<Self, ProfitError> {
        if unit_cost.is_finite() && unit_cost >= 0.0 {
            Ok(Self { unit_cost })
        } else {
            Err(ProfitError::InvalidUnitCost(unit_cost))
        }
    }

    /// Revenue objective `price * demand(price)`.
    #[must_use]
    pub fn revenue() -> Self {
        Self { unit_cost: 0.0 }
    }

    #[must_use]
    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    /// Profit at `price` given the demand there.
    #[must_use]
    pub fn profit(&self, price: f64, demand: f64) -> f64 {
        (price - self.unit_cost) * demand
    }
}

impl OptimizationProblem<1> for ProfitProblem {
    type Input = f64;
    type Output = f64;
    type Error = ProfitError;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        let price = x[0];
        if price.is_finite() {
            Ok(price)
        } else {
            Err(ProfitError::InvalidPrice(price))
        }
    }

    fn objective(&self, price: &f64, demand: &f64) -> Result<f64, Self::Error> {
        if *demand < 0.0 {
            return Err(ProfitError::NegativeDemand {
                price: *price,
                demand: *demand,
            });
        }
        Ok(self.profit(*price, *demand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn profit_is_margin_times_demand() {
        let problem = ProfitProblem::new(4.0).unwrap();

        assert_relative_eq!(problem.objective(&10.0, &20.0).unwrap(), 120.0);
        assert_relative_eq!(problem.objective(&3.0, &20.0).unwrap(), -20.0);
    }

    #[test]
    fn revenue_ignores_cost() {
        let problem = ProfitProblem::revenue();

        assert_relative_eq!(problem.unit_cost(), 0.0);
        assert_relative_eq!(problem.objective(&10.0, &20.0).unwrap(), 200.0);
    }

    #[test]
    fn rejects_invalid_unit_cost() {
        assert_eq!(
            ProfitProblem::new(-1.0),
            Err(ProfitError::InvalidUnitCost(-1.0))
        );
        assert!(ProfitProblem::new(f64::NAN).is_err());
    }

    #[test]
    fn deserialization_validates_unit_cost() {
        let problem: ProfitProblem = serde_json::from_str(r#"{"unit_cost": 2.5}"#).unwrap();
        assert_relative_eq!(problem.unit_cost(), 2.5);

        assert!(serde_json::from_str::<ProfitProblem>(r#"{"unit_cost": -1.0}"#).is_err());
    }

    #[test]
    fn rejects_negative_demand() {
        let problem = ProfitProblem::new(1.0).unwrap();

        assert_eq!(
            problem.objective(&5.0, &-2.0),
            Err(ProfitError::NegativeDemand {
                price: 5.0,
                demand: -2.0
            })
        );
    }

    #[test]
    fn input_passes_price_through() {
        let problem = ProfitProblem::revenue();

        assert_relative_eq!(problem.input(&[12.5]).unwrap(), 12.5);
        assert!(problem.input(&[f64::INFINITY]).is_err());
    }
}
