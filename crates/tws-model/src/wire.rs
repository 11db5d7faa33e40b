//! Wire shapes and boundary adapters.
//!
//! The REST backend uses two incompatible flat-identity field names
//! depending on the path that produced the structure: `id` on the creation
//! response, `flatId` on the fetch-by-block-id response. Decoding normalizes
//! both into [`crate::tower::Flat::id`] and records the flavor on the
//! structure; re-serializing for a write endpoint goes back through this
//! module, which refuses to emit the wrong flavor.

use serde::{Deserialize, Serialize};

use crate::de::lenient_f64;
use crate::error::{ModelError, Result};
use crate::tower::{
    Flat, FlatIdentityField, Floor, StandaloneUnit, TowerDetails, TowerStructure, UnitCollection,
};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// One structure+area assignment line of a tower-creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureMetaData {
    pub flat_house_structure_id: i64,
    pub area: f64,
    pub area_unit_id: i64,
    pub no_of_items: u32,
}

/// Body of `POST createTowerStructureForApi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTowerRequest {
    pub project_id: i64,
    pub sub_property_type_id: i64,
    pub tower_name: String,
    pub no_of_floors: u32,
    pub is_flat_per_floor_same: bool,
    pub floor_unit_id: i64,
    /// Empty when per-floor-same is "no".
    pub meta_datas: Vec<StructureMetaData>,
}

// ---------------------------------------------------------------------------
// Creation response (flats keyed by `id`)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedFlatWire {
    id: i64,
    #[serde(deserialize_with = "lenient_f64")]
    area: f64,
    #[serde(default)]
    area_unit: String,
    #[serde(default)]
    flat_number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedFloorWire {
    id: i64,
    floor_number: i32,
    #[serde(default)]
    flats: Vec<CreatedFlatWire>,
}

/// Response of `POST createTowerStructureForApi`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTowerWire {
    id: i64,
    #[serde(alias = "blockHouseName")]
    tower_name: String,
    no_of_floors: u32,
    is_flat_per_floor_same: bool,
    floor_unit_id: i64,
    #[serde(default)]
    floors: Vec<CreatedFloorWire>,
}

impl CreatedTowerWire {
    /// Normalize into the canonical structure, identity flavor `id`.
    pub fn into_tower_structure(self) -> TowerStructure {
        TowerStructure {
            id: self.id,
            tower_name: self.tower_name,
            no_of_floors: self.no_of_floors,
            is_flat_per_floor_same: self.is_flat_per_floor_same,
            floor_unit_id: self.floor_unit_id,
            floors: self
                .floors
                .into_iter()
                .map(|floor| Floor {
                    id: floor.id,
                    floor_number: floor.floor_number,
                    flats: floor
                        .flats
                        .into_iter()
                        .map(|flat| Flat {
                            id: flat.id,
                            area: flat.area,
                            area_unit: flat.area_unit,
                            flat_number: flat.flat_number,
                        })
                        .collect(),
                })
                .collect(),
            identity: FlatIdentityField::Id,
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch-by-id response (flats keyed by `flatId`, units behind one of four keys)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExistingFlatWire {
    flat_id: i64,
    #[serde(deserialize_with = "lenient_f64")]
    area: f64,
    #[serde(default)]
    area_unit: String,
    #[serde(default)]
    flat_number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExistingFloorWire {
    id: i64,
    floor_number: i32,
    #[serde(default)]
    flats: Vec<ExistingFlatWire>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StandaloneUnitWire {
    id: i64,
    #[serde(deserialize_with = "lenient_f64", default)]
    area: f64,
    #[serde(default)]
    area_unit: String,
    #[serde(default)]
    unit_number: String,
}

/// Response of `GET getTowerDetailsByTowerId/{blockId}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerDetailsWire {
    id: i64,
    block_house_name: String,
    #[serde(default)]
    no_of_floors: u32,
    #[serde(default)]
    is_flat_per_floor_same: bool,
    #[serde(default)]
    floor_unit_id: i64,
    #[serde(default)]
    floors: Vec<ExistingFloorWire>,
    #[serde(default)]
    plots: Vec<StandaloneUnitWire>,
    #[serde(default)]
    house_villas: Vec<StandaloneUnitWire>,
    #[serde(default)]
    commercial_units: Vec<StandaloneUnitWire>,
}

fn standalone(units: Vec<StandaloneUnitWire>) -> Vec<StandaloneUnit> {
    units
        .into_iter()
        .map(|u| StandaloneUnit {
            id: u.id,
            area: u.area,
            area_unit: u.area_unit,
            unit_number: u.unit_number,
        })
        .collect()
}

impl TowerDetailsWire {
    /// Decode the unit collection from whichever key is non-empty.
    ///
    /// This is the single place the key-probing happens; everything
    /// downstream switches on [`UnitCollection::kind`].
    pub fn into_tower_details(self) -> Result<TowerDetails> {
        let units = if !self.floors.is_empty() {
            UnitCollection::Floors(
                self.floors
                    .into_iter()
                    .map(|floor| Floor {
                        id: floor.id,
                        floor_number: floor.floor_number,
                        flats: floor
                            .flats
                            .into_iter()
                            .map(|flat| Flat {
                                id: flat.flat_id,
                                area: flat.area,
                                area_unit: flat.area_unit,
                                flat_number: flat.flat_number,
                            })
                            .collect(),
                    })
                    .collect(),
            )
        } else if !self.plots.is_empty() {
            UnitCollection::Plots(standalone(self.plots))
        } else if !self.house_villas.is_empty() {
            UnitCollection::HouseVillas(standalone(self.house_villas))
        } else if !self.commercial_units.is_empty() {
            UnitCollection::CommercialUnits(standalone(self.commercial_units))
        } else {
            return Err(ModelError::EmptyUnitCollection { id: self.id });
        };

        Ok(TowerDetails {
            id: self.id,
            block_house_name: self.block_house_name,
            no_of_floors: self.no_of_floors,
            is_flat_per_floor_same: self.is_flat_per_floor_same,
            floor_unit_id: self.floor_unit_id,
            units,
        })
    }
}

// ---------------------------------------------------------------------------
// Write payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewFlatPayload {
    id: i64,
    area: f64,
    area_unit: String,
    flat_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewFloorPayload {
    id: i64,
    floor_number: i32,
    flats: Vec<NewFlatPayload>,
}

/// Body of `POST serializeProperty`: the full freshly-created structure
/// with flat numbers filled, flats keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializePropertyPayload {
    id: i64,
    tower_name: String,
    no_of_floors: u32,
    is_flat_per_floor_same: bool,
    floor_unit_id: i64,
    floors: Vec<NewFloorPayload>,
}

/// Build the serialize-property body from a creation-path structure.
pub fn serialize_payload(structure: &TowerStructure) -> Result<SerializePropertyPayload> {
    if structure.identity != FlatIdentityField::Id {
        return Err(ModelError::IdentityMismatch {
            required: FlatIdentityField::Id,
            found: structure.identity,
        });
    }
    Ok(SerializePropertyPayload {
        id: structure.id,
        tower_name: structure.tower_name.clone(),
        no_of_floors: structure.no_of_floors,
        is_flat_per_floor_same: structure.is_flat_per_floor_same,
        floor_unit_id: structure.floor_unit_id,
        floors: structure
            .floors
            .iter()
            .map(|floor| NewFloorPayload {
                id: floor.id,
                floor_number: floor.floor_number,
                flats: floor
                    .flats
                    .iter()
                    .map(|flat| NewFlatPayload {
                        id: flat.id,
                        area: flat.area,
                        area_unit: flat.area_unit.clone(),
                        flat_number: flat.flat_number.clone(),
                    })
                    .collect(),
            })
            .collect(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExistingFlatPayload {
    flat_id: i64,
    area: f64,
    area_unit: String,
    flat_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExistingFloorPayload {
    id: i64,
    floor_number: i32,
    flats: Vec<ExistingFlatPayload>,
}

/// Body of `PUT updateTowerDetails`: the full persisted structure with the
/// root id and block name echoed, flats keyed by `flatId`.
///
/// The PUT carries no version token; concurrent writers overwrite each
/// other last-writer-wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTowerPayload {
    id: i64,
    block_house_name: String,
    no_of_floors: u32,
    is_flat_per_floor_same: bool,
    floor_unit_id: i64,
    floors: Vec<ExistingFloorPayload>,
}

/// Build the update-tower body from a fetch-by-id structure.
pub fn update_payload(structure: &TowerStructure) -> Result<UpdateTowerPayload> {
    if structure.identity != FlatIdentityField::FlatId {
        return Err(ModelError::IdentityMismatch {
            required: FlatIdentityField::FlatId,
            found: structure.identity,
        });
    }
    Ok(UpdateTowerPayload {
        id: structure.id,
        block_house_name: structure.tower_name.clone(),
        no_of_floors: structure.no_of_floors,
        is_flat_per_floor_same: structure.is_flat_per_floor_same,
        floor_unit_id: structure.floor_unit_id,
        floors: structure
            .floors
            .iter()
            .map(|floor| ExistingFloorPayload {
                id: floor.id,
                floor_number: floor.floor_number,
                flats: floor
                    .flats
                    .iter()
                    .map(|flat| ExistingFlatPayload {
                        flat_id: flat.id,
                        area: flat.area,
                        area_unit: flat.area_unit.clone(),
                        flat_number: flat.flat_number.clone(),
                    })
                    .collect(),
            })
            .collect(),
    })
}
