//! Line items and identity-key derivation.

use crate::catalog::ProductRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Derive the identity key deciding whether two additions merge.
///
/// The key is the product id alone when no customizations are present,
/// otherwise the product id concatenated with the canonical JSON form of
/// the customization set. `serde_json` serializes object keys in sorted
/// order, so structurally equal customization sets always produce the same
/// key regardless of how the caller built them.
///
/// This is the single source of identity; lookup and insert both go
/// through it.
pub fn identity_key(product_id: &str, customizations: Option<&Value>) -> String {
    match customizations {
        Some(value) => {
            // Serializing a Value to a string cannot fail.
            let canonical = serde_json::to_string(value).unwrap_or_default();
            format!("{product_id}{canonical}")
        }
        None => product_id.to_string(),
    }
}

/// One entry in the cart: a catalog snapshot, a quantity, and optional
/// customizations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Snapshot of the catalog product.
    pub product: ProductRef,
    /// Units of this line.
    pub quantity: i64,
    /// Caller-supplied options distinguishing otherwise-identical products.
    /// Compared only through their canonical serialized form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizations: Option<Value>,
}

impl LineItem {
    /// Create a line item.
    pub fn new(product: ProductRef, quantity: i64, customizations: Option<Value>) -> Self {
        Self {
            product,
            quantity,
            customizations,
        }
    }

    /// The identity key for this line, recomputed from the stored fields.
    pub fn identity_key(&self) -> String {
        identity_key(&self.product.id, self.customizations.as_ref())
    }

    /// Price contribution of this line.
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}
