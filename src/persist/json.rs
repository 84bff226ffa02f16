//! JSON flat-file inventory sink.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{
    Map, Value,
    ser::{PrettyFormatter, Serializer},
};

use crate::core::store::InventorySnapshot;

use super::{InventorySink, PersistError, PersistResult};

const INDENT: &[u8] = b"    ";

/// File-backed implementation of [`crate::persist::InventorySink`].
///
/// Every save rewrites the whole file; there is no locking, so the file must
/// not be shared with another writer.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Creates a sink for `path`. The file is not touched until load or save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl InventorySink for JsonFileSink {
    fn load(&mut self) -> PersistResult<Option<InventorySnapshot>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        // A derived struct visitor also accepts arrays; only an object is an inventory document.
        let doc: Map<String, Value> =
            serde_json::from_slice(&bytes).map_err(PersistError::Malformed)?;
        let snapshot =
            serde_json::from_value(Value::Object(doc)).map_err(PersistError::Malformed)?;
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &InventorySnapshot) -> PersistResult<()> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        snapshot.serialize(&mut ser).map_err(PersistError::Encode)?;
        fs::write(&self.path, buf)?;
        Ok(())
    }
}
