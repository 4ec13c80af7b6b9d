//! Key-value persistence boundary for CartKit.
//!
//! Provides a simple, ergonomic API for persisting state in a synchronous
//! key-value medium with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use cartkit_store::{MemoryBackend, Store};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Settings {
//!     theme: String,
//! }
//!
//! let store = Store::new(MemoryBackend::new());
//!
//! // Store a value
//! store.set("settings", &Settings { theme: "dark".into() }).unwrap();
//!
//! // Retrieve a value
//! let settings: Option<Settings> = store.get("settings").unwrap();
//!
//! // Delete a value
//! store.delete("settings").unwrap();
//! ```

mod backend;
mod error;
mod store;

pub use backend::{MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use store::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemoryBackend, StorageBackend, Store, StoreError};
}
