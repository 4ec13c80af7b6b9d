//! Cart error types.

use thiserror::Error;

/// Errors that can occur on the cart's persistence path.
///
/// Public cart operations never surface these: in-memory state is
/// authoritative for the session, so persistence failures are logged and
/// swallowed by the caller inside [`crate::CartManager`].
#[derive(Error, Debug)]
pub enum CartError {
    /// The persistence layer failed.
    #[error("Store error: {0}")]
    Store(#[from] cartkit_store::StoreError),
}
