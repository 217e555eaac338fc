//! Market samples in, recommended price out.

use optiprice_core::Model;
use optiprice_observers::TraceObserver;
use optiprice_solvers::optimization::golden_section::{self, Config, Status};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    DemandFit, FitError, MarketSample, ProfitError, ProfitProblem, fit_linear_demand, price_range,
};

/// Fraction of the lowest observed price assumed as unit cost when none is given.
pub const DEFAULT_COST_RATIO: f64 = 0.7;

/// Errors that can occur while pricing a product.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("no market samples with a finite price")]
    NoSamples,

    #[error("all observed prices equal {0}, so there is no range to search")]
    DegenerateRange(f64),

    #[error("demand estimation failed")]
    Fit(#[from] FitError),

    #[error(transparent)]
    Profit(#[from] ProfitError),

    #[error("price search failed")]
    Search(#[from] golden_section::Error),
}

/// Caller-supplied overrides for [`optimize_price`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingRequest {
    /// Unit cost; defaults to [`DEFAULT_COST_RATIO`] times the lowest price.
    pub unit_cost: Option<f64>,

    /// Demand at a price of zero; see [`fit_linear_demand`] for the default.
    pub max_demand: Option<f64>,
}

/// How much to trust a quoted price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The search met its tolerance.
    Converged,

    /// The search hit its iteration limit; the price is an approximation.
    Unconverged,

    /// An observer ended the search early.
    StoppedEarly,
}

impl From<Status> for Outcome {
    fn from(status: Status) -> Self {
        match status {
            Status::Converged => Self::Converged,
            Status::MaxIters => Self::Unconverged,
            Status::StoppedByObserver => Self::StoppedEarly,
        }
    }
}

/// The best price found for a demand curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub optimal_price: f64,
    pub max_profit: f64,
    pub estimated_demand: f64,
    pub iterations: usize,
    pub outcome: Outcome,
}

impl Quote {
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }
}

/// Demand fit statistics carried in a [`PriceReport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    pub max_demand: f64,
    pub sensitivity: f64,
    pub r_squared: f64,
    pub through_origin: bool,
    pub samples: usize,
}

impl From<&DemandFit> for FitSummary {
    fn from(fit: &DemandFit) -> Self {
        Self {
            max_demand: fit.curve.max_demand(),
            sensitivity: fit.curve.sensitivity(),
            r_squared: fit.r_squared,
            through_origin: fit.through_origin,
            samples: fit.samples,
        }
    }
}

/// Everything [`optimize_price`] learned about a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceReport {
    #[serde(flatten)]
    pub quote: Quote,

    /// Observed `[lowest, highest]` price, also the search bracket.
    pub price_range: [f64; 2],

    /// Unit cost used for the profit objective.
    pub unit_cost: f64,

    pub fit: FitSummary,
}

impl PriceReport {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.quote.outcome
    }
}

/// Maximizes profit for a price → demand model over `range`.
///
/// The reported price is the midpoint of the final search bracket, and the
/// estimated demand is the model output there.
///
/// # Errors
///
/// Returns [`PricingError::Search`] if the range is invalid or the profit
/// cannot be evaluated at a probed price.
pub fn quote<M>(
    demand: &M,
    problem: &ProfitProblem,
    range: [f64; 2],
    config: &Config,
) -> Result<Quote, PricingError>
where
    M: Model<Input = f64, Output = f64>,
{
    traced_quote(demand, problem, range, config, TraceObserver::new())
}

/// Like [`quote`], with search log lines tagged by `label`.
///
/// # Errors
///
/// See [`quote`].
pub fn quote_labeled<M>(
    label: &str,
    demand: &M,
    problem: &ProfitProblem,
    range: [f64; 2],
    config: &Config,
) -> Result<Quote, PricingError>
where
    M: Model<Input = f64, Output = f64>,
{
    traced_quote(demand, problem, range, config, TraceObserver::labeled(label))
}

fn traced_quote<M>(
    demand: &M,
    problem: &ProfitProblem,
    range: [f64; 2],
    config: &Config,
    observer: TraceObserver,
) -> Result<Quote, PricingError>
where
    M: Model<Input = f64, Output = f64>,
{
    let solution = golden_section::maximize(demand, problem, range, config, observer)?;

    let quote = Quote {
        optimal_price: solution.x,
        max_profit: solution.objective,
        estimated_demand: solution.snapshot.output,
        iterations: solution.iters,
        outcome: solution.status.into(),
    };

    if !quote.is_converged() {
        warn!(
            outcome = ?quote.outcome,
            iterations = quote.iterations,
            width = solution.width(),
            "price search did not converge, reporting best estimate"
        );
    }

    Ok(quote)
}

/// Estimates demand from market samples and finds the profit-maximizing price.
///
/// The search is bounded by the lowest and highest observed price.
///
/// # Errors
///
/// Returns a [`PricingError`] if there are no usable samples, all prices are
/// equal, demand estimation fails, the unit cost is invalid, or the search
/// fails.
pub fn optimize_price(
    samples: &[MarketSample],
    request: &PricingRequest,
    config: &Config,
) -> Result<PriceReport, PricingError> {
    price_report(TraceObserver::new(), samples, request, config)
}

/// Like [`optimize_price`], with log lines tagged by the product name.
///
/// # Errors
///
/// See [`optimize_price`].
pub fn optimize_product(
    product: &str,
    samples: &[MarketSample],
    request: &PricingRequest,
    config: &Config,
) -> Result<PriceReport, PricingError> {
    price_report(TraceObserver::labeled(product), samples, request, config)
}

fn price_report(
    observer: TraceObserver,
    samples: &[MarketSample],
    request: &PricingRequest,
    config: &Config,
) -> Result<PriceReport, PricingError> {
    let range = price_range(samples).ok_or(PricingError::NoSamples)?;
    let [low, high] = range;
    if low >= high {
        return Err(PricingError::DegenerateRange(low));
    }
    info!(low, high, samples = samples.len(), "searching price range");

    let fit = fit_linear_demand(samples, request.max_demand)?;

    let unit_cost = request.unit_cost.unwrap_or_else(|| {
        let cost = DEFAULT_COST_RATIO * low;
        info!(unit_cost = cost, "no unit cost given, using default");
        cost
    });
    let problem = ProfitProblem::new(unit_cost)?;

    let quote = traced_quote(&fit.curve, &problem, range, config, observer)?;
    info!(
        optimal_price = quote.optimal_price,
        max_profit = quote.max_profit,
        estimated_demand = quote.estimated_demand,
        iterations = quote.iterations,
        "price optimization complete"
    );

    Ok(PriceReport {
        quote,
        price_range: range,
        unit_cost,
        fit: FitSummary::from(&fit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::LinearDemand;

    #[test]
    fn quote_matches_analytic_optimum() {
        let demand = LinearDemand::new(100.0, 2.0).unwrap();
        let problem = ProfitProblem::new(10.0).unwrap();

        let quote = quote(&demand, &problem, [10.0, 50.0], &Config::default()).unwrap();

        assert!(quote.is_converged());
        assert_relative_eq!(quote.optimal_price, 30.0, epsilon = 1e-4);
        assert_relative_eq!(quote.max_profit, 800.0, epsilon = 1e-6);
        assert_relative_eq!(quote.estimated_demand, 40.0, epsilon = 1e-3);
    }

    #[test]
    fn unconverged_quote_is_labelled() {
        let demand = LinearDemand::new(100.0, 2.0).unwrap();
        let config = Config::new(1, 1e-9, 0.0).unwrap();

        let quote = quote(&demand, &ProfitProblem::revenue(), [0.0, 50.0], &config).unwrap();

        assert_eq!(quote.outcome, Outcome::Unconverged);
        assert_eq!(quote.iterations, 1);
    }

    #[test]
    fn outcome_maps_solver_status() {
        assert_eq!(Outcome::from(Status::Converged), Outcome::Converged);
        assert_eq!(Outcome::from(Status::MaxIters), Outcome::Unconverged);
        assert_eq!(
            Outcome::from(Status::StoppedByObserver),
            Outcome::StoppedEarly
        );
    }

    #[test]
    fn empty_and_degenerate_samples_are_rejected() {
        let request = PricingRequest::default();
        let config = Config::default();

        assert!(matches!(
            optimize_price(&[], &request, &config),
            Err(PricingError::NoSamples)
        ));

        let same = [
            MarketSample::new(12.0, Some(3.0)),
            MarketSample::new(12.0, Some(5.0)),
        ];
        assert!(matches!(
            optimize_price(&same, &request, &config),
            Err(PricingError::DegenerateRange(p)) if p == 12.0
        ));
    }

    #[test]
    fn error_display_leaves_cause_to_source() {
        use std::error::Error as _;

        let demand = LinearDemand::new(100.0, 2.0).unwrap();
        let err = quote(&demand, &ProfitProblem::revenue(), [5.0, 5.0], &Config::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "price search failed");
        let source = err.source().unwrap().to_string();
        assert!(source.starts_with("invalid bracket"));

        let err = PricingError::from(FitError::NoRatings);
        assert_eq!(err.to_string(), "demand estimation failed");
        assert!(err.source().is_some());
    }

    #[test]
    fn labeled_searches_match_unlabeled() {
        let demand = LinearDemand::new(100.0, 2.0).unwrap();
        let problem = ProfitProblem::new(10.0).unwrap();
        let config = Config::default();

        assert_eq!(
            quote_labeled("lamp", &demand, &problem, [10.0, 50.0], &config).unwrap(),
            quote(&demand, &problem, [10.0, 50.0], &config).unwrap()
        );

        let samples = [
            MarketSample::new(10.0, Some(60.0)),
            MarketSample::new(20.0, Some(40.0)),
            MarketSample::new(30.0, Some(20.0)),
        ];
        let request = PricingRequest::default();
        assert_eq!(
            optimize_product("lamp", &samples, &request, &config).unwrap(),
            optimize_price(&samples, &request, &config).unwrap()
        );
    }

    #[test]
    fn request_rejects_unknown_fields() {
        let result = serde_json::from_str::<PricingRequest>(r#"{"unit_cots": 3.0}"#);

        assert!(result.is_err());
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let request: PricingRequest = serde_json::from_str(r#"{"unit_cost": 4.5}"#).unwrap();

        assert_eq!(
            request,
            PricingRequest {
                unit_cost: Some(4.5),
                max_demand: None,
            }
        );
    }
}
