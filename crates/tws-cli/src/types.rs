//! On-disk draft file format.

use serde::{Deserialize, Serialize};

use tws_model::{FloorUnitItem, SubPropertyType};

/// One assignment line of a draft file; catalog details are resolved
/// against the backend lookups before the line enters the draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftAssignment {
    pub structure_id: i64,
    pub area_id: i64,
    /// Omitted when the sub-property type does not take a quantity.
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// A tower draft as authored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftFile {
    pub project_id: i64,
    pub sub_property_type: SubPropertyType,
    pub tower_name: String,
    pub no_of_floors: u32,
    pub is_flat_per_floor_same: bool,
    pub floor_unit: FloorUnitItem,
    #[serde(default)]
    pub assignments: Vec<DraftAssignment>,
}
