//! The session cart manager.

use crate::cart::{identity_key, LineItem};
use crate::catalog::{ProductRef, Purchasable};
use crate::error::CartError;
use crate::notify::{Notification, NotificationSink};
use cartkit_store::{StorageBackend, Store, StoreError};
use serde_json::Value;
use tracing::warn;

/// Fixed key under which the cart collection is persisted.
pub const CART_STORAGE_KEY: &str = "cart-state-key";

/// Owns the authoritative in-memory cart collection for one session.
///
/// Construction performs the one-time load from the store; from then on
/// every mutation rewrites the full collection and emits one notification.
/// In-memory state is authoritative: store failures are logged and never
/// interrupt an operation.
///
/// There is exactly one writer. Consumers receive the manager by
/// reference from whatever owns the session; nothing else mutates the
/// collection.
pub struct CartManager<B: StorageBackend> {
    items: Vec<LineItem>,
    store: Store<B>,
    sink: Option<NotificationSink>,
    initialized: bool,
}

impl<B: StorageBackend> CartManager<B> {
    /// Create a manager over a backend, restoring any persisted cart.
    ///
    /// An absent entry leaves the cart empty. A present but malformed
    /// entry also leaves the cart empty and is deleted from the store, so
    /// the next session starts clean.
    pub fn new(backend: B) -> Self {
        let mut manager = Self {
            items: Vec::new(),
            store: Store::new(backend),
            sink: None,
            initialized: false,
        };
        manager.restore();
        manager.initialized = true;
        manager
    }

    /// Install the sink receiving one notification per mutation.
    ///
    /// Without a sink, events are dropped.
    pub fn set_notification_sink(&mut self, sink: impl FnMut(Notification) + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Add `quantity` units of a product, with optional customizations.
    ///
    /// An existing line with the same identity key absorbs the quantity in
    /// place, keeping its position and its originally stored
    /// customizations; otherwise a new line is appended. Quantity is not
    /// validated here; `update_quantity` owns the non-positive case.
    pub fn add_item(&mut self, product: &dyn Purchasable, quantity: i64, customizations: Option<Value>) {
        let key = identity_key(product.id(), customizations.as_ref());
        match self.items.iter_mut().find(|i| i.identity_key() == key) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(LineItem::new(
                ProductRef::snapshot(product),
                quantity,
                customizations,
            )),
        }
        self.persist_or_log();
        self.emit(Notification::success(format!(
            "{} added to cart",
            product.name()
        )));
    }

    /// Remove every line whose catalog id matches, across all
    /// customization variants.
    ///
    /// Removal is deliberately coarser than the add/merge key: variants
    /// are distinguished on the way in but collapsed on the way out.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
        self.persist_or_log();
        self.emit(Notification::info("Item removed from cart"));
    }

    /// Set the quantity of every line with the given catalog id.
    ///
    /// A non-positive quantity delegates to [`remove_item`], dropping all
    /// variants of the id (and emitting its removal notification); the
    /// assignment path emits none.
    ///
    /// [`remove_item`]: Self::remove_item
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        for item in self.items.iter_mut().filter(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
        self.persist_or_log();
    }

    /// Empty the cart and delete the persisted entry outright.
    pub fn clear(&mut self) {
        self.items.clear();
        if self.initialized {
            if let Err(e) = self.store.delete(CART_STORAGE_KEY) {
                warn!(error = %e, "failed to delete persisted cart");
            }
        }
        self.emit(Notification::info("Cart cleared"));
    }

    /// Sum of `price * quantity` over all lines. Pure query.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Total units across all lines, not distinct lines. Pure query.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the current collection, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by its identity key.
    pub fn get_item(&self, key: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.identity_key() == key)
    }

    /// One-time load at construction.
    ///
    /// Only a malformed payload is purged; a backend that cannot be read
    /// right now keeps its entry, since the next session may succeed.
    fn restore(&mut self) {
        match self.store.get::<Vec<LineItem>>(CART_STORAGE_KEY) {
            Ok(Some(items)) => self.items = items,
            Ok(None) => {}
            Err(e @ StoreError::SerializeError(_)) => {
                // Malformed payload: start empty and purge the entry.
                warn!(error = %e, "discarding malformed persisted cart");
                if let Err(e) = self.store.delete(CART_STORAGE_KEY) {
                    warn!(error = %e, "failed to purge malformed persisted cart");
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to load persisted cart; starting empty");
            }
        }
    }

    /// Rewrite the full collection to the store.
    fn persist(&self) -> Result<(), CartError> {
        if !self.initialized {
            return Ok(());
        }
        self.store.set(CART_STORAGE_KEY, &self.items)?;
        Ok(())
    }

    fn persist_or_log(&self) {
        if let Err(e) = self.persist() {
            warn!(error = %e, "failed to persist cart; in-memory state remains authoritative");
        }
    }

    fn emit(&mut self, notification: Notification) {
        if let Some(sink) = &mut self.sink {
            sink(notification);
        }
    }
}
