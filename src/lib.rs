//! Single-user vehicle showroom inventory persisted to a JSON flat file.
//!
//! # Examples
//!
//! In-memory usage with [`core::store::InventoryStore`]:
//! ```
//! use showroom::{core::store::InventoryStore, vehicle::VehicleDraft};
//!
//! let mut store = InventoryStore::new();
//! let id = store
//!     .add(&VehicleDraft::new("Toyota", "Corolla", "2020", "Blue", "18000"))
//!     .expect("add");
//! assert_eq!(id, 1);
//! assert_eq!(store.search("corol").expect("search").len(), 1);
//! ```
//!
//! File-backed usage with [`showroom::Showroom`]:
//! ```no_run
//! use showroom::{
//!     persist::json::JsonFileSink,
//!     showroom::Showroom,
//!     vehicle::VehicleDraft,
//! };
//!
//! let sink = JsonFileSink::new("showroom_data.json");
//! let mut room = Showroom::open("Downtown Motors", Box::new(sink));
//! let saved = room
//!     .add(&VehicleDraft::new("Honda", "Civic", "2019", "Red", "15500"))
//!     .expect("add");
//! assert!(saved.is_durable());
//! room.sell_id(saved.value).expect("sell");
//! ```
#![deny(missing_docs)]

/// Interactive text menu.
pub mod console;
/// Core in-memory store and index helpers.
pub mod core;
/// Persistence abstraction and JSON file implementation.
pub mod persist;
/// Showroom context tying a store to its sink.
pub mod showroom;
/// Shared primitive types and enums.
pub mod types;
/// Vehicle domain records and drafts.
pub mod vehicle;
