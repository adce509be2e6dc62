// ── Reactive catalog store ──
//
// Snapshot storage with push-based change notification via `watch`
// channels. The collection is only ever replaced wholesale: it is
// either empty (pre-fetch) or fully populated (post-fetch), never
// partially streamed.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use chrono::{DateTime, Utc};
use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::model::{Product, ProductCode};

/// Shared snapshot of the product collection.
pub type ProductSnapshot = Arc<Vec<Arc<Product>>>;

/// Reactive store holding the current product collection.
///
/// Cheaply cloneable; all clones observe the same snapshot. `load`
/// replaces the collection and notifies every subscriber.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    snapshot: watch::Sender<ProductSnapshot>,
    loaded_at: watch::Sender<Option<DateTime<Utc>>>,
}

impl Catalog {
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        let (loaded_at, _) = watch::channel(None);
        Self {
            inner: Arc::new(CatalogInner {
                snapshot,
                loaded_at,
            }),
        }
    }

    /// Replace the collection with a freshly fetched one.
    ///
    /// Replacement, never merge: loading the same collection twice
    /// yields the same snapshot (no duplication). Ordering is
    /// preserved verbatim from the provider.
    pub fn load(&self, products: Vec<Product>) {
        let snap: ProductSnapshot = Arc::new(products.into_iter().map(Arc::new).collect());
        // `send_modify` updates unconditionally, even with zero receivers.
        self.inner.snapshot.send_modify(|s| *s = snap);
        self.inner.loaded_at.send_modify(|t| *t = Some(Utc::now()));
    }

    /// Current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> ProductSnapshot {
        self.inner.snapshot.borrow().clone()
    }

    /// When the collection was last loaded, if ever.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        *self.inner.loaded_at.borrow()
    }

    pub fn len(&self) -> usize {
        self.inner.snapshot.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.snapshot.borrow().is_empty()
    }

    /// Look up a product by its code.
    pub fn product_by_code(&self, code: &ProductCode) -> Option<Arc<Product>> {
        self.inner
            .snapshot
            .borrow()
            .iter()
            .find(|p| &p.code == code)
            .map(Arc::clone)
    }

    /// Subscribe to collection changes.
    pub fn products(&self) -> ProductStream {
        ProductStream::new(self.inner.snapshot.subscribe())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// ── ProductStream ───────────────────────────────────────────────────

/// A subscription to the product collection.
///
/// Provides both point-in-time snapshot access and reactive change
/// notification via `changed()`, or a `Stream` adapter for use with
/// `StreamExt` combinators.
pub struct ProductStream {
    current: ProductSnapshot,
    receiver: watch::Receiver<ProductSnapshot>,
}

impl ProductStream {
    fn new(receiver: watch::Receiver<ProductSnapshot>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation or last `changed()` call.
    pub fn current(&self) -> &ProductSnapshot {
        &self.current
    }

    /// The latest snapshot (may have changed since `current`).
    pub fn latest(&self) -> ProductSnapshot {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the `Catalog` has been dropped.
    pub async fn changed(&mut self) -> Option<ProductSnapshot> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` yielding a snapshot per mutation.
    pub fn into_stream(self) -> ProductWatchStream {
        ProductWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by the catalog's `watch::Receiver`.
pub struct ProductWatchStream {
    inner: WatchStream<ProductSnapshot>,
}

impl Stream for ProductWatchStream {
    type Item = ProductSnapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream<Arc<_>> is Unpin, so projecting is fine.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::provider::sample_products;

    #[test]
    fn catalog_starts_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.loaded_at().is_none());
    }

    #[test]
    fn load_populates_snapshot_in_provider_order() {
        let catalog = Catalog::new();
        catalog.load(sample_products());

        let snap = catalog.snapshot();
        assert_eq!(snap.len(), 10);
        assert_eq!(snap[0].name, "Bamboo Watch");
        assert_eq!(snap[9].name, "Gaming Set");
        assert!(catalog.loaded_at().is_some());
    }

    #[test]
    fn reloading_the_same_collection_does_not_duplicate() {
        let catalog = Catalog::new();
        catalog.load(sample_products());
        catalog.load(sample_products());

        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn product_by_code_finds_the_record() {
        let catalog = Catalog::new();
        catalog.load(sample_products());

        let code = ProductCode::from("zz21cz3c1");
        let product = catalog.product_by_code(&code).expect("present");
        assert_eq!(product.name, "Blue Band");

        assert!(catalog.product_by_code(&ProductCode::from("missing")).is_none());
    }

    #[tokio::test]
    async fn stream_observes_a_load() {
        let catalog = Catalog::new();
        let mut stream = catalog.products();
        assert!(stream.current().is_empty());

        catalog.load(sample_products());

        let snap = stream.changed().await.expect("catalog alive");
        assert_eq!(snap.len(), 10);
        assert_eq!(stream.current().len(), 10);
    }

    #[tokio::test]
    async fn stream_ends_when_catalog_is_dropped() {
        let catalog = Catalog::new();
        let mut stream = catalog.products();
        drop(catalog);

        assert!(stream.changed().await.is_none());
    }

    #[tokio::test]
    async fn watch_stream_adapter_yields_snapshots() {
        use tokio_stream::StreamExt;

        let catalog = Catalog::new();
        let mut stream = catalog.products().into_stream();

        // WatchStream yields the initial value first.
        let initial = stream.next().await.expect("initial snapshot");
        assert!(initial.is_empty());

        catalog.load(sample_products());
        let snap = stream.next().await.expect("loaded snapshot");
        assert_eq!(snap.len(), 10);
    }
}
