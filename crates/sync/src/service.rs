//! Sync orchestration: snapshot refresh, delta application, optimistic push.

use std::sync::mpsc::{Sender, channel};

use tracing::{debug, info, warn};

use vitrine_catalog::{CatalogStore, RemoteRecord, Subscription};

use crate::error::SyncError;
use crate::remote::RemoteCatalog;
use crate::status::ConnectivityState;

/// Transport-side handle feeding push notifications into the service.
///
/// The realtime transport is a black box; whatever bridges it simply clones
/// this sender and forwards each `{sku, price, stock}` delta as it arrives.
/// Delivery order into the channel defines application order (last-applied-
/// wins per SKU) — the transport is trusted to deliver in order, there are no
/// sequence numbers to recover from reordering.
#[derive(Debug, Clone)]
pub struct DeltaSender(Sender<RemoteRecord>);

impl DeltaSender {
    /// Forward one delta. Returns `false` once the subscription was dropped
    /// (component teardown), letting the bridge stop cleanly.
    pub fn send(&self, record: RemoteRecord) -> bool {
        self.0.send(record).is_ok()
    }
}

/// Create the push-notification channel: the sender goes to the transport
/// bridge, the subscription to the consumer loop.
pub fn delta_channel() -> (DeltaSender, Subscription<RemoteRecord>) {
    let (tx, rx) = channel();
    (DeltaSender(tx), Subscription::new(rx))
}

/// Coordinates the remote store with the local catalog.
pub struct SyncService<R> {
    remote: R,
    status: ConnectivityState,
}

impl<R: RemoteCatalog> SyncService<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            status: ConnectivityState::Offline,
        }
    }

    pub fn status(&self) -> ConnectivityState {
        self.status
    }

    /// Full sync: fetch the remote snapshot and reconcile it into the store.
    ///
    /// On any failure the store is left untouched and the status flag is
    /// downgraded instead of propagating a crash into the UI. A later push
    /// delta is applied on top of whatever this produced (arrival order).
    pub async fn refresh(&mut self, store: &mut CatalogStore) -> Result<usize, SyncError> {
        match self.remote.fetch_all().await {
            Ok(records) => {
                let matched = store.apply_snapshot(&records);
                self.status = ConnectivityState::Connected;
                info!(records = records.len(), matched, "remote snapshot reconciled");
                Ok(matched)
            }
            Err(err) => {
                self.status = if err.is_connectivity() {
                    ConnectivityState::Offline
                } else {
                    ConnectivityState::Error
                };
                warn!(status = self.status.as_str(), error = %err, "remote sync failed, keeping local catalog");
                Err(err)
            }
        }
    }

    /// Apply every queued push delta in arrival order.
    ///
    /// Returns how many deltas touched a product.
    pub fn drain_deltas(
        &self,
        store: &mut CatalogStore,
        feed: &Subscription<RemoteRecord>,
    ) -> usize {
        let mut applied = 0;
        while let Ok(record) = feed.try_recv() {
            if store.apply_delta(&record) {
                applied += 1;
            } else {
                debug!(sku = %record.sku, "delta for unknown sku ignored");
            }
        }
        applied
    }

    /// Fire-and-forget write-back of an optimistic admin edit.
    ///
    /// Local state already changed and stays the source of truth; a failed
    /// upsert is only logged and the next full sync converges.
    pub async fn push_edit(&self, record: &RemoteRecord) {
        match self.remote.upsert(record).await {
            Ok(()) => debug!(sku = %record.sku, "admin edit pushed to remote store"),
            Err(err) => {
                warn!(sku = %record.sku, error = %err, "admin edit push failed, local value kept")
            }
        }
    }
}
