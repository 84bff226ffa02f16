#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    types::{VehicleId, Year},
    vehicle::{VehicleDraft, VehicleRecord},
};

use super::indices::PosIndex;

/// Rejections raised by store operations. None of them mutate the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A required draft field was blank after trimming.
    #[error("All car details are required")]
    MissingField(&'static str),
    /// Year or price text did not parse as a number.
    #[error("Invalid input for year or price. Please enter numeric values")]
    NotNumeric(&'static str, String),
    #[error("Invalid year or price")]
    YearOutOfRange(Year),
    #[error("Invalid year or price")]
    NonPositivePrice(f64),
    #[error("Invalid Car ID format")]
    InvalidId(String),
    #[error("Car with ID {0} not found in the inventory")]
    NotFound(VehicleId),
    #[error("Car ID {0} is already sold")]
    AlreadySold(VehicleId),
    /// A loaded snapshot carried the same id twice.
    #[error("Duplicate Car ID {0}")]
    DuplicateId(VehicleId),
    /// No id is left after this one; it can be neither loaded nor assigned.
    #[error("Car ID {0} leaves no ID to assign next")]
    IdsExhausted(VehicleId),
    #[error("Please enter a search term")]
    BlankSearchTerm,
}

/// Whole-inventory document, the unit of load and save.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub inventory: Vec<VehicleRecord>,
}

/// Result of listing the inventory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Listing<'a> {
    Empty,
    Vehicles(&'a [VehicleRecord]),
}

/// Authoritative in-memory inventory with id assignment.
#[derive(Debug, Default)]
pub struct InventoryStore {
    records: Vec<VehicleRecord>,
    pos: PosIndex,
    next_id: VehicleId,
}

impl InventoryStore {
    /// Creates an empty store whose first id is 1.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Rebuilds a store from a loaded snapshot; the next id becomes max + 1.
    pub fn from_snapshot(snapshot: InventorySnapshot) -> Result<Self, StoreError> {
        let mut store = Self::new();

        for rec in snapshot.inventory {
            if store.pos.contains_key(&rec.id) {
                return Err(StoreError::DuplicateId(rec.id));
            }
            let after = rec.id.checked_add(1).ok_or(StoreError::IdsExhausted(rec.id))?;
            store.next_id = store.next_id.max(after);
            store.pos.insert(rec.id, store.records.len());
            store.records.push(rec);
        }

        Ok(store)
    }

    pub fn export_snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            inventory: self.records.clone(),
        }
    }

    /// Validates `draft` and appends it under the next id.
    pub fn add(&mut self, draft: &VehicleDraft) -> Result<VehicleId, StoreError> {
        let valid = draft.validate()?;

        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(StoreError::IdsExhausted(id))?;

        let rec = VehicleRecord {
            id,
            make: valid.make,
            model: valid.model,
            year: valid.year,
            color: valid.color,
            price: valid.price,
            is_sold: false,
        };
        self.pos.insert(id, self.records.len());
        self.records.push(rec);
        Ok(id)
    }

    pub fn get(&self, id: VehicleId) -> Option<&VehicleRecord> {
        self.pos.get(&id).and_then(|idx| self.records.get(*idx))
    }

    /// Parses operator-entered id text and looks the vehicle up.
    pub fn find(&self, raw_id: &str) -> Result<Option<&VehicleRecord>, StoreError> {
        let id = parse_id(raw_id)?;
        Ok(self.get(id))
    }

    /// Flips the sold flag. Returns the record as it is after the sale.
    pub fn sell(&mut self, id: VehicleId) -> Result<VehicleRecord, StoreError> {
        let idx = *self.pos.get(&id).ok_or(StoreError::NotFound(id))?;
        let rec = self.records.get_mut(idx).ok_or(StoreError::NotFound(id))?;
        if rec.is_sold {
            return Err(StoreError::AlreadySold(id));
        }
        rec.is_sold = true;
        Ok(rec.clone())
    }

    /// Case-insensitive substring search, results in insertion order.
    pub fn search(&self, term: &str) -> Result<Vec<&VehicleRecord>, StoreError> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Err(StoreError::BlankSearchTerm);
        }
        Ok(self.records.iter().filter(|r| r.matches(&needle)).collect())
    }

    /// Lists every vehicle, or [`Listing::Empty`].
    pub fn list(&self) -> Listing<'_> {
        if self.records.is_empty() {
            Listing::Empty
        } else {
            Listing::Vehicles(&self.records)
        }
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_id(&self) -> VehicleId {
        self.next_id
    }
}

/// Parses a vehicle id as typed by an operator, ignoring surrounding whitespace.
pub fn parse_id(raw: &str) -> Result<VehicleId, StoreError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| StoreError::InvalidId(trimmed.to_string()))
}
