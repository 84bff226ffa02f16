//! Shared primitive IDs and inventory-related enums.

use std::fmt;

/// Store-assigned vehicle identifier.
pub type VehicleId = u64;

/// Model year of a vehicle.
pub type Year = i32;

/// Earliest year a vehicle may be stocked with is one past this value.
pub const MIN_YEAR_EXCLUSIVE: Year = 1900;

/// Sale status of a vehicle.
///
/// The only transition is `Available -> Sold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleStatus {
    /// Still on the lot.
    Available,
    /// Sold; never reverts.
    Sold,
}

impl VehicleStatus {
    /// Maps the persisted sold flag to a status.
    pub fn from_sold(is_sold: bool) -> Self {
        if is_sold { Self::Sold } else { Self::Available }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::Sold => f.write_str("Sold"),
        }
    }
}
