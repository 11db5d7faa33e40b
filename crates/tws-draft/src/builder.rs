//! In-progress tower draft state.
//!
//! Accumulates structure+area+quantity assignments for a tower being
//! defined, gating additions against the linkable capacity when the active
//! sub-property type calls for it. Assignments are uniquely keyed by
//! (structure, area): committing the same pair again updates the quantity.

use tracing::debug;

use tws_model::{AreaOption, FloorUnitItem, StructureOption, SubPropertyType};

use crate::capacity::{LinkableCapacity, apply_assignment_delta};
use crate::error::{DraftError, Result};

/// The per-floor-same toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerFloorSame {
    #[default]
    Yes,
    No,
}

/// Unique key of an assignment within a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssignmentKey {
    pub structure_id: i64,
    pub area_id: i64,
}

/// A committed structure+area+quantity line in the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub structure_id: i64,
    pub area_id: i64,
    /// Units per floor.
    pub quantity: u32,
    /// Denormalized for display.
    pub structure_name: String,
    /// Denormalized for display.
    pub area_unit_name: String,
    /// Full catalog snapshot, needed to build the creation request.
    pub area: AreaOption,
}

impl Assignment {
    pub fn key(&self) -> AssignmentKey {
        AssignmentKey {
            structure_id: self.structure_id,
            area_id: self.area_id,
        }
    }
}

/// A structure+area selection about to be committed.
#[derive(Debug, Clone)]
pub struct AssignmentCandidate {
    pub structure: StructureOption,
    pub area: AreaOption,
    /// Raw quantity input; `None` when the input is disabled.
    pub quantity: Option<u32>,
}

impl AssignmentCandidate {
    fn key(&self) -> AssignmentKey {
        AssignmentKey {
            structure_id: self.structure.id,
            area_id: self.area.id,
        }
    }
}

/// Whether an add inserted a new line or updated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    Updated,
}

#[derive(Debug, Clone)]
struct ActiveCapacity {
    key: AssignmentKey,
    capacity: LinkableCapacity,
}

/// Draft state for one tower being defined.
#[derive(Debug, Clone)]
pub struct TowerDraft {
    sub_property_type: SubPropertyType,
    tower_name: String,
    total_floors: u32,
    per_floor_same: PerFloorSame,
    floor_unit: Option<FloorUnitItem>,
    assignments: Vec<Assignment>,
    capacity: Option<ActiveCapacity>,
}

impl TowerDraft {
    /// Start an empty draft for the given sub-property type.
    pub fn new(sub_property_type: SubPropertyType) -> Self {
        Self {
            sub_property_type,
            tower_name: String::new(),
            total_floors: 0,
            per_floor_same: PerFloorSame::Yes,
            floor_unit: None,
            assignments: Vec::new(),
            capacity: None,
        }
    }

    pub fn sub_property_type(&self) -> &SubPropertyType {
        &self.sub_property_type
    }

    pub fn tower_name(&self) -> &str {
        &self.tower_name
    }

    pub fn total_floors(&self) -> u32 {
        self.total_floors
    }

    pub fn per_floor_same(&self) -> PerFloorSame {
        self.per_floor_same
    }

    pub fn floor_unit(&self) -> Option<&FloorUnitItem> {
        self.floor_unit.as_ref()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn set_tower_name(&mut self, name: impl Into<String>) {
        self.tower_name = name.into();
    }

    /// Set the floor count; the active capacity's remaining is rederived
    /// since consumed units scale with the floor count.
    pub fn set_total_floors(&mut self, floors: u32) {
        self.total_floors = floors;
        self.rederive_capacity();
    }

    pub fn set_per_floor_same(&mut self, per_floor_same: PerFloorSame) {
        self.per_floor_same = per_floor_same;
        if !self.capacity_applicable() {
            self.capacity = None;
        }
    }

    pub fn set_floor_unit(&mut self, floor_unit: FloorUnitItem) {
        self.floor_unit = Some(floor_unit);
    }

    /// Capacity tracking applies only for flat-kind single-floor types with
    /// identical units per floor.
    pub fn capacity_applicable(&self) -> bool {
        self.sub_property_type.is_flat
            && self.sub_property_type.is_single_floor
            && self.per_floor_same == PerFloorSame::Yes
    }

    /// Load the backend-computed total for the active (structure, area) pair.
    ///
    /// Remaining is derived against units already staked in the draft for
    /// the same pair. Ignored when capacity tracking is not applicable.
    pub fn load_capacity(&mut self, key: AssignmentKey, total: u32) {
        if !self.capacity_applicable() {
            self.capacity = None;
            return;
        }
        let consumed = self.consumed_units(key);
        debug!(?key, total, consumed, "capacity loaded");
        self.capacity = Some(ActiveCapacity {
            key,
            capacity: LinkableCapacity::with_consumed(total, consumed),
        });
    }

    /// The active pair's capacity counters, when tracking is applicable.
    pub fn capacity(&self) -> Option<LinkableCapacity> {
        self.capacity.as_ref().map(|active| active.capacity)
    }

    fn consumed_units(&self, key: AssignmentKey) -> u32 {
        self.assignments
            .iter()
            .filter(|a| a.key() == key)
            .map(|a| a.quantity * self.total_floors)
            .sum()
    }

    fn quantity_for(&self, key: AssignmentKey) -> u32 {
        self.assignments
            .iter()
            .find(|a| a.key() == key)
            .map_or(0, |a| a.quantity)
    }

    fn rederive_capacity(&mut self) {
        if let Some(active) = self.capacity.take() {
            let consumed = self.consumed_units(active.key);
            self.capacity = Some(ActiveCapacity {
                key: active.key,
                capacity: LinkableCapacity::with_consumed(active.capacity.total(), consumed),
            });
        }
    }

    /// Resolve the effective quantity for a candidate.
    ///
    /// Required and positive when the sub-property type is flat-kind and
    /// single-floor, otherwise defaults to 1.
    fn resolve_quantity(&self, candidate: &AssignmentCandidate) -> Result<u32> {
        if self.sub_property_type.requires_quantity() {
            match candidate.quantity {
                Some(q) if q > 0 => Ok(q),
                _ => Err(DraftError::InvalidQuantity),
            }
        } else {
            Ok(candidate.quantity.unwrap_or(1))
        }
    }

    /// Commit a structure+area+quantity combination into the draft.
    ///
    /// Upsert semantics: an existing assignment with the same key has its
    /// quantity replaced. A rejected addition leaves the draft and the
    /// capacity counters untouched.
    pub fn add_assignment(&mut self, candidate: AssignmentCandidate) -> Result<AddOutcome> {
        if self.per_floor_same == PerFloorSame::No {
            return Err(DraftError::AssignmentsDisabled);
        }
        let quantity = self.resolve_quantity(&candidate)?;
        let key = candidate.key();

        if self.capacity_applicable() {
            let active = self
                .capacity
                .as_ref()
                .filter(|active| active.key == key)
                .ok_or(DraftError::CapacityUnavailable)?;
            let delta = i64::from(quantity) - i64::from(self.quantity_for(key));
            let updated = apply_assignment_delta(active.capacity, delta, self.total_floors)?;
            self.capacity = Some(ActiveCapacity {
                key,
                capacity: updated,
            });
        }

        let assignment = Assignment {
            structure_id: candidate.structure.id,
            area_id: candidate.area.id,
            quantity,
            structure_name: candidate.structure.structure_name.clone(),
            area_unit_name: candidate.area.area_unit.unit_name.clone(),
            area: candidate.area,
        };
        if let Some(existing) = self.assignments.iter_mut().find(|a| a.key() == key) {
            *existing = assignment;
            Ok(AddOutcome::Updated)
        } else {
            self.assignments.push(assignment);
            Ok(AddOutcome::Inserted)
        }
    }

    /// Remove an assignment by index, refunding its units when capacity
    /// tracking covers its key.
    pub fn remove_assignment(&mut self, index: usize) -> Result<Assignment> {
        if index >= self.assignments.len() {
            return Err(DraftError::IndexOutOfRange {
                index,
                len: self.assignments.len(),
            });
        }
        let removed = self.assignments.remove(index);
        if let Some(active) = self.capacity.as_ref().filter(|a| a.key == removed.key()) {
            // Refund cannot fail: the delta is negative.
            let refunded = apply_assignment_delta(
                active.capacity,
                -i64::from(removed.quantity),
                self.total_floors,
            )?;
            self.capacity = Some(ActiveCapacity {
                key: removed.key(),
                capacity: refunded,
            });
        }
        Ok(removed)
    }

    /// Clear the draft back to its initial state after a successful
    /// submission.
    pub fn reset(&mut self) {
        self.tower_name.clear();
        self.total_floors = 0;
        self.per_floor_same = PerFloorSame::Yes;
        self.floor_unit = None;
        self.assignments.clear();
        self.capacity = None;
    }
}
