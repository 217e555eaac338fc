use std::fmt;

use ndarray::Array1;
use ninterp::{
    interpolator::Extrapolate,
    prelude::{Interp1DOwned, Interpolator},
    strategy::Linear,
};
use optiprice_core::Model;

use super::DemandError;
use crate::DemandSample;

/// Demand interpolated from discrete (price, demand) observations.
///
/// The interpolation is piecewise-linear between observed prices and clamped
/// outside them: below the lowest price demand equals the demand observed
/// there, above the highest price likewise. Linear interpolation keeps the
/// profit objective continuous, which golden section search relies on.
///
/// Samples may arrive in any order. Repeated prices are merged by averaging
/// their demand.
pub struct InterpolatedDemand {
    prices: Vec<f64>,
    demands: Vec<f64>,
    interp: Interp1DOwned<f64, Linear>,
}

impl InterpolatedDemand {
    /// Builds an interpolated demand curve.
    ///
    /// # Errors
    ///
    /// Returns an error if any sample is not finite or has negative demand,
    /// or if fewer than two distinct prices remain after merging.
    pub fn new(samples: &[DemandSample]) -> Result<Self, DemandError> {
        if let Some(index) = samples.iter().position(|s| {
            !s.price.is_finite() || !s.demand.is_finite() || s.demand < 0.0
        }) {
            return Err(DemandError::InvalidSample { index });
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.price.total_cmp(&b.price));

        let mut prices: Vec<f64> = Vec::with_capacity(sorted.len());
        let mut demands: Vec<f64> = Vec::with_capacity(sorted.len());
        let mut counts: Vec<f64> = Vec::with_capacity(sorted.len());
        for sample in sorted {
            if prices.last() == Some(&sample.price) {
                let last = demands.len() - 1;
                demands[last] += sample.demand;
                counts[last] += 1.0;
            } else {
                prices.push(sample.price);
                demands.push(sample.demand);
                counts.push(1.0);
            }
        }
        for (demand, count) in demands.iter_mut().zip(&counts) {
            *demand /= count;
        }

        if prices.len() < 2 {
            return Err(DemandError::TooFewPrices(prices.len()));
        }

        let interp = Interp1DOwned::new(
            Array1::from(prices.clone()),
            Array1::from(demands.clone()),
            Linear,
            Extrapolate::Clamp,
        )?;

        Ok(Self {
            prices,
            demands,
            interp,
        })
    }

    /// Returns the merged, sorted sample prices.
    #[must_use]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Returns the demand at each merged price.
    #[must_use]
    pub fn demands(&self) -> &[f64] {
        &self.demands
    }

    /// Returns `[lowest, highest]` observed price.
    #[must_use]
    pub fn price_range(&self) -> [f64; 2] {
        [self.prices[0], self.prices[self.prices.len() - 1]]
    }
}

impl fmt::Debug for InterpolatedDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpolatedDemand")
            .field("prices", &self.prices)
            .field("demands", &self.demands)
            .finish_non_exhaustive()
    }
}

impl Model for InterpolatedDemand {
    type Input = f64;
    type Output = f64;
    type Error = DemandError;

    fn call(&self, price: &f64) -> Result<f64, Self::Error> {
        self.interp.interpolate(&[*price]).map_err(Into::into)
    }
}
