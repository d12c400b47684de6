//! SQLite-backed local cache for catalog and cart persistence.
//!
//! Slots are read once at startup and rewritten on every mutation, so a
//! returning session starts from the last-known catalog (and an unfinished
//! quote) instead of bare seed data.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::{Row, SqlitePool};
use tokio::sync::Mutex;

use vitrine_cart::CartLine;
use vitrine_catalog::Product;

const CATALOG_SLOT: &str = "catalog";
const CART_SLOT: &str = "cart";

/// SQLite-backed key-value cache.
///
/// Cheap to clone; the pool is shared and initialized lazily on first use.
#[derive(Debug, Clone)]
pub struct LocalStoreCache {
    pool: Arc<Mutex<Option<SqlitePool>>>,
    db_path: PathBuf,
}

impl LocalStoreCache {
    /// Create a cache backed by the SQLite file at `db_path` (created on
    /// first use).
    pub fn at(db_path: impl Into<PathBuf>) -> Self {
        Self {
            pool: Arc::new(Mutex::new(None)),
            db_path: db_path.into(),
        }
    }

    async fn ensure_initialized(&self) -> anyhow::Result<()> {
        let mut pool_guard = self.pool.lock().await;
        if pool_guard.is_some() {
            return Ok(());
        }

        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create cache directory at {parent:?}"))?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", self.db_path.to_string_lossy());
        let pool = SqlitePool::connect(&db_url)
            .await
            .with_context(|| format!("failed to open cache DB at {:?}", self.db_path))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS store_cache (
                slot      TEXT NOT NULL PRIMARY KEY,
                data      TEXT NOT NULL,
                cached_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .context("failed to create store_cache table")?;

        *pool_guard = Some(pool);
        Ok(())
    }

    async fn get_pool(&self) -> anyhow::Result<SqlitePool> {
        self.ensure_initialized().await?;
        let pool_guard = self.pool.lock().await;
        Ok(pool_guard
            .as_ref()
            .expect("pool initialized above")
            .clone())
    }

    async fn save_slot<T: Serialize>(&self, slot: &str, value: &T) -> anyhow::Result<()> {
        let pool = self.get_pool().await?;
        let data = serde_json::to_string(value).context("failed to serialize cache payload")?;

        sqlx::query(
            r#"
            INSERT INTO store_cache (slot, data, cached_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(slot) DO UPDATE SET data = excluded.data, cached_at = excluded.cached_at
            "#,
        )
        .bind(slot)
        .bind(data)
        .bind(Utc::now().to_rfc3339())
        .execute(&pool)
        .await
        .with_context(|| format!("failed to write cache slot {slot}"))?;

        Ok(())
    }

    async fn load_slot<T: DeserializeOwned>(&self, slot: &str) -> anyhow::Result<Option<T>> {
        let pool = self.get_pool().await?;
        let row = sqlx::query("SELECT data FROM store_cache WHERE slot = ?1")
            .bind(slot)
            .fetch_optional(&pool)
            .await
            .with_context(|| format!("failed to read cache slot {slot}"))?;

        match row {
            Some(row) => {
                let data: String = row.get("data");
                let value = serde_json::from_str(&data)
                    .with_context(|| format!("corrupt cache payload in slot {slot}"))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    pub async fn save_catalog(&self, products: &[Product]) -> anyhow::Result<()> {
        self.save_slot(CATALOG_SLOT, &products).await
    }

    pub async fn load_catalog(&self) -> anyhow::Result<Option<Vec<Product>>> {
        self.load_slot(CATALOG_SLOT).await
    }

    pub async fn save_cart(&self, lines: &[CartLine]) -> anyhow::Result<()> {
        self.save_slot(CART_SLOT, &lines).await
    }

    pub async fn load_cart(&self) -> anyhow::Result<Option<Vec<CartLine>>> {
        self.load_slot(CART_SLOT).await
    }
}
