// ── Data provider abstraction ──
//
// The provider is a black box to the rest of the system: a
// zero-argument asynchronous request that resolves to an ordered
// product collection. No retry, pagination, or filtering parameters.

use std::future::Future;
use std::path::PathBuf;

use tracing::debug;

use crate::error::CatalogError;
use crate::model::Product;

/// The mock dataset shipped with the crate. Guarantees the app has
/// data to show with zero configuration.
const SAMPLE_JSON: &str = include_str!("../data/products-small.json");

/// Asynchronous source of the product collection.
///
/// The returned future must be `Send` so callers can drive the fetch
/// from a spawned task.
pub trait ProductProvider: Send + Sync {
    /// Fetch the full collection. Ordering is provider-defined and
    /// preserved verbatim by consumers.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;
}

// ── JsonFileProvider ────────────────────────────────────────────────

/// Provider backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ProductProvider for JsonFileProvider {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        let products: Vec<Product> =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = products.len(), "catalog file loaded");
        Ok(products)
    }
}

// ── SampleProvider ──────────────────────────────────────────────────

/// Provider serving the embedded sample dataset. Infallible in
/// practice — the data is validated by the crate's own tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProvider;

impl ProductProvider for SampleProvider {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(sample_products())
    }
}

/// Parse the embedded sample dataset.
pub fn sample_products() -> Vec<Product> {
    serde_json::from_str(SAMPLE_JSON).expect("embedded dataset is valid")
}
