//! Sources of market observations.
//!
//! A [`MarketData`] implementation is the single replaceable provider of
//! listings for a product query. Sources are plain values owned by the caller.

use std::{
    collections::BTreeMap,
    convert::Infallible,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::MarketSample;

/// Provides market samples for a product query.
pub trait MarketData {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the listings that match `query`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the source cannot produce samples.
    fn samples(&self, query: &str) -> Result<Vec<MarketSample>, Self::Error>;
}

/// Errors that can occur when reading a JSON market file.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid market data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no market data for product `{0}`")]
    UnknownProduct(String),
}

/// A fixed set of samples returned for every query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticMarket {
    samples: Vec<MarketSample>,
}

impl StaticMarket {
    #[must_use]
    pub fn new(samples: Vec<MarketSample>) -> Self {
        Self { samples }
    }
}

impl MarketData for StaticMarket {
    type Error = Infallible;

    fn samples(&self, _query: &str) -> Result<Vec<MarketSample>, Self::Error> {
        Ok(self.samples.clone())
    }
}

/// Listings per product, loaded from JSON.
///
/// The expected layout is
///
/// ```json
/// { "products": { "desk lamp": [ { "price": 24.9, "rating": 118 } ] } }
/// ```
///
/// Product names are matched case-insensitively after trimming whitespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonMarket {
    products: BTreeMap<String, Vec<MarketSample>>,
}

#[derive(Deserialize)]
struct Catalog {
    products: BTreeMap<String, Vec<MarketSample>>,
}

impl JsonMarket {
    /// Loads a JSON market file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read and
    /// [`SourceError::Parse`] if it is not valid market JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let market: Self = text.parse()?;
        debug!(
            path = %path.display(),
            products = market.products.len(),
            "loaded market data"
        );
        Ok(market)
    }

    /// Returns the known product names, normalized to lowercase.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }
}

impl FromStr for JsonMarket {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let catalog: Catalog = serde_json::from_str(s)?;
        let mut products: BTreeMap<String, Vec<MarketSample>> = BTreeMap::new();
        for (name, samples) in catalog.products {
            products.entry(normalize(&name)).or_default().extend(samples);
        }
        Ok(Self { products })
    }
}

impl MarketData for JsonMarket {
    type Error = SourceError;

    fn samples(&self, query: &str) -> Result<Vec<MarketSample>, Self::Error> {
        self.products
            .get(&normalize(query))
            .cloned()
            .ok_or_else(|| SourceError::UnknownProduct(query.trim().to_owned()))
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
