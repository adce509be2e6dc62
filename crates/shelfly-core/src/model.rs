// ── Product domain types ──
//
// ProductCode and Product form the foundation of the catalog. The wire
// format is the provider's camelCase JSON (`inventoryStatus` etc.),
// which the serde derives absorb so consumers only ever see the
// canonical Rust shapes.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// ── ProductCode ─────────────────────────────────────────────────────

/// Opaque per-product code (e.g. `f230fh0g3`). Distinct from `id`:
/// codes are what operators quote, ids are what the provider assigns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductCode {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ── StockStatus ─────────────────────────────────────────────────────

/// Inventory availability, as enumerated by the provider.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum StockStatus {
    #[default]
    #[serde(rename = "INSTOCK")]
    #[strum(serialize = "INSTOCK", to_string = "In Stock")]
    InStock,
    #[serde(rename = "LOWSTOCK")]
    #[strum(serialize = "LOWSTOCK", to_string = "Low Stock")]
    LowStock,
    #[serde(rename = "OUTOFSTOCK")]
    #[strum(serialize = "OUTOFSTOCK", to_string = "Out of Stock")]
    OutOfStock,
}

// ── Product ─────────────────────────────────────────────────────────

/// The canonical catalog record. Immutable once fetched — mutation
/// only ever happens by replacing the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub code: ProductCode,
    pub name: String,
    pub description: String,
    /// Image file reference (relative, provider-defined).
    pub image: String,
    pub price: f64,
    pub category: String,
    pub quantity: u32,
    pub inventory_status: StockStatus,
    /// 0-5 star rating.
    pub rating: u8,
}
