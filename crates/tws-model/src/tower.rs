//! Canonical tower structure types.
//!
//! Two backend paths return a materialized tower: the creation response
//! (flats keyed by `id`) and the fetch-by-block-id response (flats keyed by
//! `flatId`, inside whichever unit collection the block actually holds).
//! Both are normalized here into one shape; the original identity flavor is
//! recorded so write adapters can re-emit exactly the field the target
//! endpoint expects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Which wire field carried flat identity when the structure was decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlatIdentityField {
    /// Creation-response flavor: `flats[].id`.
    Id,
    /// Fetch-by-id flavor: `flats[].flatId`.
    FlatId,
}

impl fmt::Display for FlatIdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Id => "id",
            Self::FlatId => "flatId",
        })
    }
}

/// One unit within a floor, with its identity normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flat {
    pub id: i64,
    pub area: f64,
    pub area_unit: String,
    /// Human-readable unit number; a literal string so alphanumeric
    /// identifiers survive untouched. Empty until serialization.
    #[serde(default)]
    pub flat_number: String,
}

/// One floor of a tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: i64,
    pub floor_number: i32,
    pub flats: Vec<Flat>,
}

/// A materialized tower: the single source of truth the serializer must
/// preserve except for the `flat_number` fields it fills in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerStructure {
    pub id: i64,
    pub tower_name: String,
    pub no_of_floors: u32,
    pub is_flat_per_floor_same: bool,
    pub floor_unit_id: i64,
    pub floors: Vec<Floor>,
    /// Identity flavor of the source response; consumed by write adapters.
    pub identity: FlatIdentityField,
}

impl TowerStructure {
    /// Total number of flats across all floors.
    pub fn flat_count(&self) -> usize {
        self.floors.iter().map(|f| f.flats.len()).sum()
    }
}

/// Discriminant for the unit collection a persisted block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitKind {
    Floors,
    Plots,
    HouseVillas,
    CommercialUnits,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Floors => "floors",
            Self::Plots => "plots",
            Self::HouseVillas => "house villas",
            Self::CommercialUnits => "commercial units",
        })
    }
}

/// A unit that is not nested inside a floor (plot, villa, commercial unit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneUnit {
    pub id: i64,
    pub area: f64,
    pub area_unit: String,
    #[serde(default)]
    pub unit_number: String,
}

/// The units of a persisted block, decoded once at the boundary.
///
/// The backend signals the kind by which of four keys is non-empty; this
/// enum makes that decision exactly once so downstream logic can match on
/// the discriminant instead of probing for key presence.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitCollection {
    Floors(Vec<Floor>),
    Plots(Vec<StandaloneUnit>),
    HouseVillas(Vec<StandaloneUnit>),
    CommercialUnits(Vec<StandaloneUnit>),
}

impl UnitCollection {
    pub fn kind(&self) -> UnitKind {
        match self {
            Self::Floors(_) => UnitKind::Floors,
            Self::Plots(_) => UnitKind::Plots,
            Self::HouseVillas(_) => UnitKind::HouseVillas,
            Self::CommercialUnits(_) => UnitKind::CommercialUnits,
        }
    }
}

/// A persisted block fetched by id, with its unit collection decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct TowerDetails {
    pub id: i64,
    pub block_house_name: String,
    pub no_of_floors: u32,
    pub is_flat_per_floor_same: bool,
    pub floor_unit_id: i64,
    pub units: UnitCollection,
}

impl TowerDetails {
    /// Convert into a numbering-ready [`TowerStructure`].
    ///
    /// Only floor/flat blocks can be numbered through the serialization
    /// buffer; any other unit kind is rejected with a typed error.
    pub fn into_tower_structure(self) -> Result<TowerStructure> {
        match self.units {
            UnitCollection::Floors(floors) => Ok(TowerStructure {
                id: self.id,
                tower_name: self.block_house_name,
                no_of_floors: self.no_of_floors,
                is_flat_per_floor_same: self.is_flat_per_floor_same,
                floor_unit_id: self.floor_unit_id,
                floors,
                identity: FlatIdentityField::FlatId,
            }),
            other => Err(ModelError::UnsupportedUnitKind { kind: other.kind() }),
        }
    }
}
