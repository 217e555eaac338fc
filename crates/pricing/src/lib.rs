//! Demand models, profit objectives, and the price optimization pipeline.
//!
//! The pieces compose linearly:
//!
//! 1. A [`MarketData`] source yields [`MarketSample`]s for a product.
//! 2. [`fit_linear_demand`] turns them into a [`LinearDemand`] curve, or
//!    [`InterpolatedDemand`] / [`DemandFn`] provide demand directly.
//! 3. [`ProfitProblem`] adapts any price → demand [`Model`] into a profit
//!    objective.
//! 4. [`optimize_price`] and [`quote`] run golden section search and report
//!    the best price.
//!
//! [`Model`]: optiprice_core::Model

mod demand;
mod fit;
mod pipeline;
mod profit;
mod sample;
mod source;

pub use demand::{DemandError, DemandFn, InterpolatedDemand, LinearDemand};
pub use fit::{DemandFit, FitError, fit_linear_demand};
pub use pipeline::{
    DEFAULT_COST_RATIO, FitSummary, Outcome, PriceReport, PricingError, PricingRequest, Quote,
    optimize_price, optimize_product, quote, quote_labeled,
};
pub use profit::{ProfitError, ProfitProblem};
pub use sample::{DemandSample, MarketSample, fill_missing_ratings, price_range};
pub use source::{JsonMarket, MarketData, SourceError, StaticMarket};
