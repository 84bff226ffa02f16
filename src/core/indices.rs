use hashbrown::HashMap;

use crate::types::VehicleId;

/// Maps a vehicle id to its position in insertion order.
pub type PosIndex = HashMap<VehicleId, usize>;
