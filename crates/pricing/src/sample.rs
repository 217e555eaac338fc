use serde::{Deserialize, Serialize};

/// One observed product listing.
///
/// `rating` is a demand proxy such as a review count. Listings without a
/// rating keep `None` and are filled in by [`fill_missing_ratings`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSample {
    pub price: f64,

    #[serde(default)]
    pub rating: Option<f64>,
}

impl MarketSample {
    #[must_use]
    pub fn new(price: f64, rating: Option<f64>) -> Self {
        Self { price, rating }
    }
}

/// An observed (price, demand) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandSample {
    pub price: f64,
    pub demand: f64,
}

impl DemandSample {
    #[must_use]
    pub fn new(price: f64, demand: f64) -> Self {
        Self { price, demand }
    }
}

/// Returns one rating per sample, replacing missing or non-positive ratings
/// with the mean of the positive ones.
///
/// If no sample has a positive rating, missing ratings become `0.0`.
#[must_use]
pub fn fill_missing_ratings(samples: &[MarketSample]) -> Vec<f64> {
    let positive: Vec<f64> = samples
        .iter()
        .filter_map(|s| s.rating)
        .filter(|r| r.is_finite() && *r > 0.0)
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let mean = if positive.is_empty() {
        0.0
    } else {
        positive.iter().sum::<f64>() / positive.len() as f64
    };

    samples
        .iter()
        .map(|s| match s.rating {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => mean,
        })
        .collect()
}

/// Returns `[lowest, highest]` finite price, or `None` if there is none.
#[must_use]
pub fn price_range(samples: &[MarketSample]) -> Option<[f64; 2]> {
    samples
        .iter()
        .map(|s| s.price)
        .filter(|p| p.is_finite())
        .fold(None, |range, p| match range {
            None => Some([p, p]),
            Some([low, high]) => Some([low.min(p), high.max(p)]),
        })
}
