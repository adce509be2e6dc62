//! Data bridge — connects the [`ProductProvider`] to TUI actions.
//!
//! Runs as a background task: issues the one-shot catalog fetch, loads
//! the result into the [`Catalog`], then forwards every snapshot change
//! as an [`Action`] through the TUI's action channel.
//!
//! A failed or never-resolving fetch leaves the catalog empty — the UI
//! keeps showing zero rows with no error surface. The only trace is a
//! warning in the log file.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use shelfly_core::{Catalog, ProductProvider};

use crate::action::Action;

/// Run the data bridge connecting the provider and catalog to the TUI.
///
/// The fetch is issued exactly once. The cancellation token guards the
/// in-flight request: if the app tears down before the provider
/// resolves, the update is dropped without ever touching the catalog.
pub async fn spawn_data_bridge<P: ProductProvider>(
    provider: P,
    catalog: Catalog,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut products = catalog.products();

    tokio::select! {
        () = cancel.cancelled() => return,

        fetched = provider.fetch() => match fetched {
            Ok(items) => {
                debug!(count = items.len(), "catalog fetch resolved");
                catalog.load(items);
            }
            Err(e) => {
                // Silent empty state: screens keep rendering zero rows.
                warn!(error = %e, "catalog fetch failed; collection stays empty");
            }
        }
    }

    // Forward snapshot changes until cancelled. The bridge owns a
    // Catalog clone, so the stream never closes underneath us.
    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Some(snap) = products.changed() => {
                let _ = action_tx.send(Action::ProductsLoaded(snap));
            }
        }
    }

    debug!("data bridge shut down");
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use shelfly_core::{CatalogError, Product, SampleProvider, sample_products};

    use super::*;

    /// Provider that never resolves — models the hung external service.
    struct StalledProvider;

    impl ProductProvider for StalledProvider {
        async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
            std::future::pending().await
        }
    }

    /// Provider that fails immediately.
    struct BrokenProvider;

    impl ProductProvider for BrokenProvider {
        async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::Io {
                path: "/dev/null/products.json".into(),
                source: std::io::Error::other("boom"),
            })
        }
    }

    #[tokio::test]
    async fn resolved_fetch_is_forwarded_as_an_action() {
        let catalog = Catalog::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(spawn_data_bridge(
            SampleProvider,
            catalog.clone(),
            tx,
            cancel.clone(),
        ));

        let action = rx.recv().await.expect("one ProductsLoaded action");
        let Action::ProductsLoaded(snap) = action else {
            panic!("unexpected action: {action:?}");
        };
        assert_eq!(snap.len(), sample_products().len());
        assert_eq!(catalog.len(), snap.len());

        cancel.cancel();
        handle.await.expect("bridge exits cleanly");
    }

    #[tokio::test]
    async fn stalled_provider_leaves_catalog_empty_indefinitely() {
        let catalog = Catalog::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(spawn_data_bridge(
            StalledProvider,
            catalog.clone(),
            tx,
            cancel.clone(),
        ));

        // No action arrives while the fetch hangs.
        let waited = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(waited.is_err(), "no action should be produced");
        assert!(catalog.is_empty());

        // Teardown drops the in-flight update without touching the catalog.
        cancel.cancel();
        handle.await.expect("bridge exits cleanly");
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_is_silent() {
        let catalog = Catalog::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(spawn_data_bridge(
            BrokenProvider,
            catalog.clone(),
            tx,
            cancel.clone(),
        ));

        let waited = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(waited.is_err(), "failure must not surface as an action");
        assert!(catalog.is_empty());

        cancel.cancel();
        handle.await.expect("bridge exits cleanly");
    }
}
