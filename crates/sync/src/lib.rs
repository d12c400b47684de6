//! `vitrine-sync` — remote synchronization adapter.
//!
//! Boundary between the pure catalog/cart domain and the hosted product
//! store: snapshot fetches, upsert-by-SKU writes for admin edits, a push
//! delta feed, a connectivity status flag, and the optional SQLite cache that
//! persists catalog and cart between sessions.
//!
//! Failure policy: remote trouble degrades the status to offline/error and
//! leaves the local catalog exactly as it was. Nothing in this crate panics
//! the storefront.

pub mod cache;
pub mod error;
pub mod remote;
pub mod service;
pub mod status;

pub use cache::LocalStoreCache;
pub use error::SyncError;
pub use remote::{HttpRemoteCatalog, RemoteCatalog, RemoteEndpoint};
pub use service::{DeltaSender, SyncService, delta_channel};
pub use status::ConnectivityState;
