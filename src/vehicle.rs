//! Vehicle domain record and the raw draft used to create one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    core::store::StoreError,
    types::{MIN_YEAR_EXCLUSIVE, VehicleId, VehicleStatus, Year},
};

/// Fully materialized, authoritative vehicle record.
///
/// Field names match the backing file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Store-assigned identifier.
    #[serde(rename = "car_id")]
    pub id: VehicleId,
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: Year,
    /// Exterior color.
    pub color: String,
    /// Asking price.
    pub price: f64,
    /// True once the vehicle has been sold.
    pub is_sold: bool,
}

impl VehicleRecord {
    /// Current sale status.
    pub fn status(&self) -> VehicleStatus {
        VehicleStatus::from_sold(self.is_sold)
    }

    /// Case-insensitive substring match over id, make, model, year and color.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.id.to_string().contains(needle)
            || self.make.to_lowercase().contains(needle)
            || self.model.to_lowercase().contains(needle)
            || self.year.to_string().contains(needle)
            || self.color.to_lowercase().contains(needle)
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Car ID: {}", self.id)?;
        writeln!(f, "Make: {}", self.make)?;
        writeln!(f, "Model: {}", self.model)?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Color: {}", self.color)?;
        writeln!(f, "Price: ${}", format_price(self.price))?;
        writeln!(f, "Status: {}", self.status())?;
        write!(f, "{}", "-".repeat(20))
    }
}

/// Caller-supplied text for a new vehicle, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VehicleDraft {
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Model year as entered.
    pub year: String,
    /// Exterior color.
    pub color: String,
    /// Price as entered.
    pub price: String,
}

/// Draft that passed validation; only the store turns it into a record.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidDraft {
    pub(crate) make: String,
    pub(crate) model: String,
    pub(crate) year: Year,
    pub(crate) color: String,
    pub(crate) price: f64,
}

impl VehicleDraft {
    /// Convenience constructor from borrowed text.
    pub fn new(make: &str, model: &str, year: &str, color: &str, price: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            year: year.to_string(),
            color: color.to_string(),
            price: price.to_string(),
        }
    }

    pub(crate) fn validate(&self) -> Result<ValidDraft, StoreError> {
        let fields = [
            ("make", &self.make),
            ("model", &self.model),
            ("year", &self.year),
            ("color", &self.color),
            ("price", &self.price),
        ];
        if let Some((name, _)) = fields.into_iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(StoreError::MissingField(name));
        }

        let year: Year = self
            .year
            .trim()
            .parse()
            .map_err(|_| StoreError::NotNumeric("year", self.year.trim().to_string()))?;
        let price: f64 = self
            .price
            .trim()
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| StoreError::NotNumeric("price", self.price.trim().to_string()))?;

        if year <= MIN_YEAR_EXCLUSIVE {
            return Err(StoreError::YearOutOfRange(year));
        }
        if price <= 0.0 {
            return Err(StoreError::NonPositivePrice(price));
        }

        Ok(ValidDraft {
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            year,
            color: self.color.trim().to_string(),
            price,
        })
    }
}

/// Renders a price with thousands separators and two decimals, e.g. `18,000.00`.
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
