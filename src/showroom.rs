//! Named showroom owning the inventory store and its backing sink.
#![allow(missing_docs)]

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::{
    core::store::{InventoryStore, Listing, StoreError, parse_id},
    persist::{InventorySink, PersistError, json::JsonFileSink},
    types::VehicleId,
    vehicle::{VehicleDraft, VehicleRecord},
};

/// Backing file used when none is configured.
pub const DEFAULT_DATA_FILE: &str = "showroom_data.json";

/// Startup configuration for a file-backed showroom.
#[derive(Debug, Clone)]
pub struct ShowroomConfig {
    pub name: String,
    /// Path of the JSON backing file.
    pub data_file: PathBuf,
}

/// Outcome of a mutation that was applied in memory.
///
/// A failed save does not roll the mutation back; it is surfaced here as a
/// warning instead.
#[derive(Debug)]
pub struct Saved<T> {
    /// Value produced by the mutation.
    pub value: T,
    /// Set when the inventory could not be written to the sink.
    pub save_warning: Option<PersistError>,
}

impl<T> Saved<T> {
    /// True when the mutation reached the sink.
    pub fn is_durable(&self) -> bool {
        self.save_warning.is_none()
    }
}

/// A showroom: its name, its authoritative store, and where it is saved.
pub struct Showroom {
    name: String,
    store: InventoryStore,
    sink: Box<dyn InventorySink>,
    load_warning: Option<PersistError>,
}

impl Showroom {
    /// Loads the inventory from `sink`.
    ///
    /// A missing inventory starts empty. An unreadable or malformed one is
    /// discarded: the showroom starts empty and the error is kept as
    /// [`Self::load_warning`].
    pub fn open(name: impl Into<String>, mut sink: Box<dyn InventorySink>) -> Self {
        let name = name.into();
        let (store, load_warning) = match load_store(sink.as_mut()) {
            Ok(store) => (store, None),
            Err(err) => {
                warn!(showroom = %name, error = %err, "starting with an empty inventory");
                (InventoryStore::new(), Some(err))
            }
        };
        debug!(
            showroom = %name,
            vehicles = store.len(),
            next_id = store.next_id(),
            "inventory loaded"
        );

        Self {
            name,
            store,
            sink,
            load_warning,
        }
    }

    /// Opens a showroom backed by the JSON file named in `config`.
    pub fn from_config(config: &ShowroomConfig) -> Self {
        Self::open(
            config.name.clone(),
            Box::new(JsonFileSink::new(&config.data_file)),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Why the inventory was discarded at startup, if it was.
    pub fn load_warning(&self) -> Option<&PersistError> {
        self.load_warning.as_ref()
    }

    /// Adds a vehicle and saves the inventory.
    pub fn add(&mut self, draft: &VehicleDraft) -> Result<Saved<VehicleId>, StoreError> {
        let id = self.store.add(draft)?;
        info!(showroom = %self.name, id, "vehicle added");
        Ok(self.persisted(id))
    }

    /// Sells the vehicle whose id is typed in `raw_id`.
    pub fn sell(&mut self, raw_id: &str) -> Result<Saved<VehicleRecord>, StoreError> {
        let id = parse_id(raw_id)?;
        self.sell_id(id)
    }

    /// Sells vehicle `id` and saves the inventory.
    pub fn sell_id(&mut self, id: VehicleId) -> Result<Saved<VehicleRecord>, StoreError> {
        let rec = self.store.sell(id)?;
        info!(showroom = %self.name, id, "vehicle sold");
        Ok(self.persisted(rec))
    }

    /// Looks up the vehicle whose id is typed in `raw_id`.
    pub fn find(&self, raw_id: &str) -> Result<Option<&VehicleRecord>, StoreError> {
        self.store.find(raw_id)
    }

    pub fn search(&self, term: &str) -> Result<Vec<&VehicleRecord>, StoreError> {
        self.store.search(term)
    }

    pub fn list(&self) -> Listing<'_> {
        self.store.list()
    }

    fn persisted<T>(&mut self, value: T) -> Saved<T> {
        let save_warning = match self.sink.save(&self.store.export_snapshot()) {
            Ok(()) => {
                debug!(showroom = %self.name, vehicles = self.store.len(), "inventory saved");
                None
            }
            Err(err) => {
                warn!(showroom = %self.name, error = %err, "failed to save inventory");
                Some(err)
            }
        };
        Saved {
            value,
            save_warning,
        }
    }
}

fn load_store(sink: &mut dyn InventorySink) -> Result<InventoryStore, PersistError> {
    match sink.load()? {
        Some(snapshot) => Ok(InventoryStore::from_snapshot(snapshot)?),
        None => Ok(InventoryStore::new()),
    }
}
