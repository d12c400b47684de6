//! Headless demo: seed the storefront, sync if configured, run a quote.

use tracing::info;

use vitrine_catalog::RemoteRecord;
use vitrine_core::{Money, Sku, StoreOptions, WholesaleConfig};
use vitrine_storefront::Storefront;
use vitrine_sync::{HttpRemoteCatalog, SyncService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vitrine_observability::init();

    let mut front = Storefront::new(StoreOptions::default(), WholesaleConfig::default())?;

    match HttpRemoteCatalog::from_env() {
        Some(remote) => {
            let mut sync = SyncService::new(remote);
            // Failures only degrade the status flag; seed data keeps working.
            let _ = sync.refresh(front.catalog_mut()).await;
            info!(status = sync.status().as_str(), "remote sync finished");
        }
        None => {
            info!("remote store not configured, overlaying demo prices");
            front.catalog_mut().apply_snapshot(&[
                RemoteRecord::new("LC0001", Money::from_centavos(1990), 40),
                RemoteRecord::new("LC0003", Money::from_reais(760), 12),
            ]);
        }
    }

    front.add_to_cart(&Sku::from("LC0001"), 3)?;
    front.add_to_cart(&Sku::from("LC0003"), 2)?;

    let eligibility = front.eligibility();
    info!(
        total = %front.cart().total_value(),
        eligible = eligibility.is_eligible,
        remaining = %eligibility.remaining,
        "quote built"
    );

    if let Some(link) = front.checkout_link() {
        info!(%link, "checkout ready");
    }

    Ok(())
}
