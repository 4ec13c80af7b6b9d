//! Session cart state manager for CartKit.
//!
//! Owns the authoritative in-memory collection of cart line items, keeps it
//! durable across sessions through a [`cartkit_store`] backend, and exposes
//! the mutation/query surface the rest of an application consumes:
//!
//! - **Catalog boundary**: any product shape implementing [`Purchasable`]
//!   can be added; the cart snapshots `{id, name, price}` and nothing else.
//! - **Merge by identity**: two additions merge into one line exactly when
//!   their product id and canonicalized customizations match.
//! - **Persistence**: loaded once at construction, rewritten after every
//!   mutation, with malformed persisted state discarded and purged.
//! - **Notifications**: each mutation emits one event for an optional
//!   display collaborator; the cart itself renders nothing.
//!
//! # Example
//!
//! ```rust
//! use cartkit_core::prelude::*;
//! use cartkit_store::MemoryBackend;
//!
//! let product = CatalogProduct::new("prod-1", "Espresso Beans", 12.50);
//!
//! let mut cart = CartManager::new(MemoryBackend::new());
//! cart.add_item(&product, 2, None);
//!
//! assert_eq!(cart.total(), 25.0);
//! assert_eq!(cart.item_count(), 2);
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod notify;

pub use cart::{identity_key, CartManager, LineItem, CART_STORAGE_KEY};
pub use catalog::{CatalogProduct, ProductRef, Purchasable};
pub use error::CartError;
pub use notify::{Notification, NotificationSink, Severity};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{identity_key, CartManager, LineItem, CART_STORAGE_KEY};
    pub use crate::catalog::{CatalogProduct, ProductRef, Purchasable};
    pub use crate::error::CartError;
    pub use crate::notify::{Notification, NotificationSink, Severity};
}
