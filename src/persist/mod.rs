pub mod json;

use thiserror::Error;

use crate::core::store::{InventorySnapshot, StoreError};

/// Failures reading or writing the backing file.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file exists but could not be read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid inventory document.
    #[error("malformed inventory data: {0}")]
    Malformed(#[source] serde_json::Error),
    /// The document decoded but could not be turned into a store.
    #[error("inconsistent inventory data: {0}")]
    Inconsistent(#[from] StoreError),
    /// The in-memory inventory could not be encoded.
    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Backend that loads and overwrites the whole inventory at once.
pub trait InventorySink {
    /// Reads the stored inventory. `Ok(None)` means nothing has been stored yet.
    fn load(&mut self) -> PersistResult<Option<InventorySnapshot>>;
    /// Replaces the stored inventory with `snapshot`.
    fn save(&mut self, snapshot: &InventorySnapshot) -> PersistResult<()>;
}
