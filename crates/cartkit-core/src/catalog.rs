//! Catalog boundary types.
//!
//! The cart accepts any product shape through the [`Purchasable`] trait and
//! stores only the [`ProductRef`] snapshot it takes at add time. Catalog
//! data is owned elsewhere; the cart never mutates or validates it.

use serde::{Deserialize, Serialize};

/// Capability set a catalog entity must expose to be added to a cart.
///
/// Different catalog collaborators ship differently shaped product records;
/// the cart only cares about these three fields.
pub trait Purchasable {
    /// Unique, stable catalog identifier.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Unit price. Treated as an opaque number; no currency or rounding
    /// policy is applied here.
    fn price(&self) -> f64;
}

/// Snapshot of a [`Purchasable`] as stored inside a line item.
///
/// Denormalized so the cart survives reloads without re-querying the
/// catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    /// Catalog identifier.
    pub id: String,
    /// Display name at the time the item was added.
    pub name: String,
    /// Unit price at the time the item was added.
    pub price: f64,
}

impl ProductRef {
    /// Snapshot a catalog entity.
    pub fn snapshot(product: &dyn Purchasable) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

impl Purchasable for ProductRef {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }
}

/// Plain owned product record, the default concrete catalog entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Unique catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

impl CatalogProduct {
    /// Create a product record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

impl Purchasable for CatalogProduct {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }
}
