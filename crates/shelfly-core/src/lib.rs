//! Data layer between the product provider and UI consumers.
//!
//! This crate owns the domain model, the provider abstraction, and the
//! reactive catalog infrastructure for the shelfly workspace:
//!
//! - **[`ProductProvider`]** — the external asynchronous collaborator:
//!   a zero-argument request resolving to an ordered product
//!   collection. [`JsonFileProvider`] reads a JSON file;
//!   [`SampleProvider`] serves the embedded mock dataset.
//!
//! - **[`Catalog`]** — reactive snapshot store built on
//!   `tokio::sync::watch`. The collection is replaced wholesale on
//!   load; it is either empty (pre-fetch) or fully populated
//!   (post-fetch), never partially streamed.
//!
//! - **[`ProductStream`]** — subscription handle vended by the
//!   catalog. Exposes `current()` / `latest()` / `changed()` for
//!   reactive rendering.
//!
//! - **Domain model** — [`Product`], [`ProductCode`], [`StockStatus`].

pub mod catalog;
pub mod error;
pub mod model;
pub mod provider;

pub use catalog::{Catalog, ProductSnapshot, ProductStream};
pub use error::CatalogError;
pub use model::{Product, ProductCode, StockStatus};
pub use provider::{JsonFileProvider, ProductProvider, SampleProvider, sample_products};
