//! Linear demand estimation from rated listings.
//!
//! Ratings stand in for sales volume. Each listing's rating is normalized by
//! the highest rating, and the shortfall `1 - rating / max_rating` is regressed
//! on price. The slope of that regression, scaled by the maximum demand, gives
//! the price sensitivity of a [`LinearDemand`] curve.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{LinearDemand, MarketSample, fill_missing_ratings};

/// Intercepts smaller than this are dropped and the line refit through the origin.
const ORIGIN_INTERCEPT_THRESHOLD: f64 = 0.05;

/// Smallest default maximum demand.
const MIN_DEFAULT_MAX_DEMAND: f64 = 100.0;

/// Errors that can occur when fitting a demand curve.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FitError {
    #[error("no market samples to fit")]
    Empty,

    #[error("need at least two samples to fit a demand curve, got {0}")]
    TooFewSamples(usize),

    #[error("sample {index} has a non-finite price or rating")]
    NonFinite { index: usize },

    #[error("all samples share the same price, so price sensitivity is undefined")]
    ZeroPriceVariance,

    #[error("no sample has a positive rating")]
    NoRatings,

    #[error("max demand must be finite and positive, got {0}")]
    InvalidMaxDemand(f64),
}

/// A fitted linear demand curve and its regression statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandFit {
    /// The resulting demand curve.
    pub curve: LinearDemand,

    /// Coefficient of determination of the chosen regression.
    pub r_squared: f64,

    /// Regression intercept, zero when fit through the origin.
    pub intercept: f64,

    /// Regression slope of rating shortfall against price.
    pub slope: f64,

    /// Whether the regression was refit without an intercept.
    pub through_origin: bool,

    /// Number of samples used.
    pub samples: usize,
}

/// Fits a [`LinearDemand`] curve to rated market samples.
///
/// When `max_demand` is `None` it defaults to `max(100, ⌊n / 10⌋)` for `n`
/// samples. Missing ratings are filled with [`fill_missing_ratings`].
///
/// # Errors
///
/// Returns a [`FitError`] if there are fewer than two samples, any value is
/// not finite, all prices are equal, no rating is positive, or `max_demand`
/// is not a finite positive number.
pub fn fit_linear_demand(
    samples: &[MarketSample],
    max_demand: Option<f64>,
) -> Result<DemandFit, FitError> {
    match samples.len() {
        0 => return Err(FitError::Empty),
        1 => return Err(FitError::TooFewSamples(1)),
        _ => {}
    }

    if let Some(index) = samples.iter().position(|s| {
        !s.price.is_finite() || s.rating.is_some_and(|r| !r.is_finite())
    }) {
        return Err(FitError::NonFinite { index });
    }

    let max_demand = match max_demand {
        Some(a) if a.is_finite() && a > 0.0 => a,
        Some(a) => return Err(FitError::InvalidMaxDemand(a)),
        None => default_max_demand(samples.len()),
    };

    let ratings = fill_missing_ratings(samples);
    let max_rating = ratings.iter().copied().fold(0.0, f64::max);
    if max_rating <= 0.0 {
        return Err(FitError::NoRatings);
    }

    let prices: Vec<f64> = samples.iter().map(|s| s.price).collect();
    let shortfall: Vec<f64> = ratings.iter().map(|r| 1.0 - r / max_rating).collect();

    let line = Line::fit(&prices, &shortfall).ok_or(FitError::ZeroPriceVariance)?;
    let (line, through_origin) = if line.intercept.abs() < ORIGIN_INTERCEPT_THRESHOLD {
        debug!(intercept = line.intercept, "intercept near zero, refitting through origin");
        (Line::fit_through_origin(&prices, &shortfall), true)
    } else {
        (line, false)
    };

    if line.slope < 0.0 {
        warn!(
            slope = line.slope,
            "demand rises with price in the data, using the absolute slope"
        );
    }
    let sensitivity = line.slope.abs() * max_demand;
    let curve = LinearDemand::new(max_demand, sensitivity)
        .map_err(|_| FitError::InvalidMaxDemand(max_demand))?;
    let r_squared = line.r_squared(&prices, &shortfall);

    info!(
        max_demand,
        sensitivity,
        r_squared,
        through_origin,
        samples = samples.len(),
        "fitted linear demand"
    );

    Ok(DemandFit {
        curve,
        r_squared,
        intercept: line.intercept,
        slope: line.slope,
        through_origin,
        samples: samples.len(),
    })
}

#[allow(clippy::cast_precision_loss)]
fn default_max_demand(n: usize) -> f64 {
    MIN_DEFAULT_MAX_DEMAND.max((n / 10) as f64)
}

/// An ordinary least squares line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy)]
struct Line {
    intercept: f64,
    slope: f64,
}

impl Line {
    /// Fits with an intercept, or `None` if `x` has no variance.
    #[allow(clippy::cast_precision_loss)]
    fn fit(x: &[f64], y: &[f64]) -> Option<Self> {
        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let (sxx, sxy) = x
            .iter()
            .zip(y)
            .fold((0.0, 0.0), |(sxx, sxy), (xi, yi)| {
                let dx = xi - x_mean;
                (sxx + dx * dx, sxy + dx * (yi - y_mean))
            });

        if sxx <= 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self {
            intercept: y_mean - slope * x_mean,
            slope,
        })
    }

    /// Fits `y = slope * x`.
    ///
    /// Only called after [`Line::fit`] succeeded, so some `x` is non-zero.
    fn fit_through_origin(x: &[f64], y: &[f64]) -> Self {
        let (sxx, sxy) = x
            .iter()
            .zip(y)
            .fold((0.0, 0.0), |(sxx, sxy), (xi, yi)| (sxx + xi * xi, sxy + xi * yi));

        Self {
            intercept: 0.0,
            slope: sxy / sxx,
        }
    }

    fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Coefficient of determination.
    ///
    /// Constant `y` scores 1.0 for a perfect fit and 0.0 otherwise.
    #[allow(clippy::cast_precision_loss)]
    fn r_squared(&self, x: &[f64], y: &[f64]) -> f64 {
        let y_mean = y.iter().sum::<f64>() / y.len() as f64;
        let (ss_res, ss_tot) = x.iter().zip(y).fold((0.0, 0.0), |(res, tot), (xi, yi)| {
            let r = yi - self.predict(*xi);
            let t = yi - y_mean;
            (res + r * r, tot + t * t)
        });

        if ss_tot == 0.0 {
            if ss_res == 0.0 { 1.0 } else { 0.0 }
        } else {
            1.0 - ss_res / ss_tot
        }
    }
}
