//! Storefront wiring: catalog, cart, eligibility, checkout and admin gate.

use vitrine_auth::{AdminGate, GateState};
use vitrine_cart::{CartLedger, OrderEligibility};
use vitrine_catalog::{
    CatalogEvent, CatalogStore, CategoryFilter, Product, RemoteRecord, Subscription,
    category_options, filter_products, seed_catalog,
};
use vitrine_checkout::{STORE_WHATSAPP_PHONE, whatsapp_link};
use vitrine_core::{
    DomainError, DomainResult, Money, ProductId, Sku, StoreOptions, WholesaleConfig,
};

use crate::input::coerce_stock;

/// The storefront: explicit owner of all UI-facing state.
#[derive(Debug)]
pub struct Storefront {
    options: StoreOptions,
    config: WholesaleConfig,
    catalog: CatalogStore,
    cart: CartLedger,
    cart_open: bool,
    gate: AdminGate,
}

impl Storefront {
    /// Build a storefront on the static seed catalog.
    pub fn new(options: StoreOptions, config: WholesaleConfig) -> DomainResult<Self> {
        Self::with_catalog(options, config, seed_catalog())
    }

    /// Build a storefront on a caller-provided catalog (e.g. restored from
    /// the local cache).
    pub fn with_catalog(
        options: StoreOptions,
        config: WholesaleConfig,
        products: Vec<Product>,
    ) -> DomainResult<Self> {
        let gate = AdminGate::new(options.admin_secret.clone());
        Ok(Self {
            options,
            config,
            catalog: CatalogStore::new(products)?,
            cart: CartLedger::new(),
            cart_open: false,
            gate,
        })
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn config(&self) -> &WholesaleConfig {
        &self.config
    }

    // ── catalog ─────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Mutable catalog access for the sync layer (snapshot/delta
    /// application).
    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    pub fn subscribe_catalog(&mut self) -> Subscription<CatalogEvent> {
        self.catalog.subscribe()
    }

    /// The visible product subset for a search query and category selection.
    pub fn visible_products(&self, query: &str, selection: &str) -> Vec<&Product> {
        let filter = CategoryFilter::from_selection(selection);
        filter_products(self.catalog.products(), query, &filter)
    }

    /// Category menu entries ("Todos" first, then first-seen order).
    pub fn categories(&self) -> Vec<String> {
        category_options(self.catalog.products())
    }

    // ── cart ────────────────────────────────────────────────────────────

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Add a product to the quote, opening the cart view.
    ///
    /// The requested quantity is capped at the available stock; out-of-stock
    /// products are rejected.
    pub fn add_to_cart(&mut self, sku: &Sku, quantity: u32) -> DomainResult<()> {
        if !self.options.enable_cart {
            return Err(DomainError::Disabled("cart"));
        }
        let product = self.catalog.get(sku).ok_or(DomainError::NotFound)?.clone();
        if !product.in_stock() {
            return Err(DomainError::validation(format!("{sku} esgotado")));
        }
        self.cart.add_item(&product, quantity.min(product.stock));
        self.cart_open = true;
        Ok(())
    }

    /// Set a line's quantity (clamped to 1). Unknown identities are a no-op.
    pub fn update_cart_quantity(&mut self, id: &ProductId, quantity: u32) {
        self.cart.update_quantity(id, quantity);
    }

    /// Remove a line. Unknown identities are a no-op.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove_item(id);
    }

    pub fn eligibility(&self) -> OrderEligibility {
        OrderEligibility::evaluate(self.cart.total_value(), &self.config)
    }

    /// The WhatsApp deep link for the current quote, or `None` while the
    /// cart is disabled, empty, or below the wholesale minimum.
    pub fn checkout_link(&self) -> Option<String> {
        if !self.options.enable_cart || self.cart.is_empty() {
            return None;
        }
        let total = self.cart.total_value();
        if !self.eligibility().is_eligible {
            return None;
        }
        Some(whatsapp_link(STORE_WHATSAPP_PHONE, self.cart.lines(), total))
    }

    // ── admin ───────────────────────────────────────────────────────────

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.gate.is_unlocked()
    }

    pub fn request_edit_mode(&mut self) {
        self.gate.request_edit();
    }

    pub fn submit_admin_secret(&mut self, input: &str) -> bool {
        self.gate.submit_secret(input)
    }

    pub fn dismiss_auth(&mut self) {
        self.gate.dismiss();
    }

    pub fn exit_edit_mode(&mut self) {
        self.gate.exit_edit();
    }

    /// Apply an admin edit from raw form input.
    ///
    /// Local-first: the catalog changes immediately (non-numeric entries
    /// coerce to zero). When remote sync is enabled the returned record is
    /// handed to the sync layer for a fire-and-forget upsert — no rollback on
    /// push failure, the next full sync converges.
    pub fn submit_admin_edit(
        &mut self,
        sku: &Sku,
        price_input: &str,
        stock_input: &str,
    ) -> DomainResult<Option<RemoteRecord>> {
        if !self.gate.is_unlocked() {
            return Err(DomainError::Unauthorized);
        }

        let price = Money::parse_lenient(price_input);
        let stock = coerce_stock(stock_input);
        if !self.catalog.update_commercial(sku, price, stock) {
            return Err(DomainError::NotFound);
        }

        Ok(self
            .options
            .enable_remote_sync
            .then(|| RemoteRecord::new(sku.clone(), price, stock)))
    }
}
