//! Reference data fetched from the backend before a tower can be drafted.
//!
//! These types are read-only from the client's perspective: the backend owns
//! them, the client caches them for the session, and the draft builder only
//! snapshots what it needs for display.

use serde::{Deserialize, Serialize};

use crate::de::lenient_f64;

/// A sub-property type and the flags that gate downstream behavior.
///
/// Quantity input is only meaningful when `is_flat && is_single_floor`;
/// capacity tracking additionally requires the per-floor-same toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPropertyType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_residential: bool,
    #[serde(default)]
    pub is_commercial: bool,
    #[serde(default)]
    pub is_multi_tower: bool,
    #[serde(default)]
    pub is_flat: bool,
    #[serde(default)]
    pub is_house_villa: bool,
    #[serde(default)]
    pub is_plot: bool,
    #[serde(default)]
    pub is_commercial_unit: bool,
    #[serde(default)]
    pub is_single_floor: bool,
}

impl SubPropertyType {
    /// Whether a per-floor quantity must be supplied when adding an
    /// assignment for this sub-property type.
    pub fn requires_quantity(&self) -> bool {
        self.is_flat && self.is_single_floor
    }
}

/// A structure catalog entry (e.g. "1 BHK").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureOption {
    pub id: i64,
    pub structure_name: String,
    /// Composed display string ("1 BHK - Residential").
    #[serde(default)]
    pub structure_type: String,
}

impl StructureOption {
    /// Display label, preferring the composed structure type when present.
    pub fn display(&self) -> &str {
        if self.structure_type.is_empty() {
            &self.structure_name
        } else {
            &self.structure_type
        }
    }
}

/// An area unit ("sqft", "sqm").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaUnit {
    pub id: i64,
    pub unit_name: String,
}

/// An area catalog entry for a (sub-property type, structure, floor unit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaOption {
    pub id: i64,
    /// Numeric area; the backend sometimes transmits this as a string.
    #[serde(deserialize_with = "lenient_f64")]
    pub area: f64,
    pub area_unit: AreaUnit,
}

impl AreaOption {
    /// Display label such as "650 sqft".
    pub fn display(&self) -> String {
        format!("{} {}", self.area, self.area_unit.unit_name)
    }
}

/// The repeating unit kind found on each floor of a tower (e.g. "Flat").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorUnitItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub is_house_villa: bool,
    #[serde(default)]
    pub is_flat: bool,
}

/// A persisted block/tower summary, as listed per project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocietyBlock {
    pub id: i64,
    pub block_house_name: String,
}
