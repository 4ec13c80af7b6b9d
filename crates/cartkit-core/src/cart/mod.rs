//! Shopping cart module.
//!
//! Contains the line-item types, the identity-key derivation, and the
//! session cart manager.

mod item;
mod manager;

pub use item::{identity_key, LineItem};
pub use manager::{CartManager, CART_STORAGE_KEY};
