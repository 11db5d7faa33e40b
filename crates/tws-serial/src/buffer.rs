//! The flattened, editable numbering buffer.
//!
//! A [`SerializationBuffer`] mirrors `floors[].flats[].flat_number` of a
//! materialized tower in floor-then-flat order. Edits happen here; the
//! nested structure is only touched when the buffer is reconstituted back
//! into it, and then only the `flat_number` fields change.

use tracing::warn;

use tws_model::TowerStructure;

use crate::error::{Result, SerializeError};

/// One flat's slot in the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferEntry {
    /// Floor index in the source structure, zero-based.
    pub floor_index: usize,
    /// Flat index within the floor, zero-based.
    pub flat_index: usize,
    pub flat_id: i64,
    pub area: f64,
    pub area_unit: String,
    /// The editable unit number; a literal string.
    pub flat_number: String,
}

/// Result of a bulk fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkFillOutcome {
    /// Flats assigned a number by this fill.
    pub filled: usize,
    /// Flats still without a number after the fill.
    pub remaining_unnumbered: usize,
}

/// Flattened per-flat numbering state for one tower.
#[derive(Debug, Clone, PartialEq)]
pub struct SerializationBuffer {
    entries: Vec<BufferEntry>,
}

impl SerializationBuffer {
    /// Flatten a structure in floor order, flats within a floor in order.
    /// Existing numbers are carried over.
    pub fn from_structure(structure: &TowerStructure) -> Self {
        let entries = structure
            .floors
            .iter()
            .enumerate()
            .flat_map(|(floor_index, floor)| {
                floor
                    .flats
                    .iter()
                    .enumerate()
                    .map(move |(flat_index, flat)| BufferEntry {
                        floor_index,
                        flat_index,
                        flat_id: flat.id,
                        area: flat.area,
                        area_unit: flat.area_unit.clone(),
                        flat_number: flat.flat_number.clone(),
                    })
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[BufferEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite one flat's number. No validation beyond addressing; any
    /// literal string is accepted, including empty.
    pub fn set_flat_number(
        &mut self,
        floor: usize,
        flat: usize,
        value: impl Into<String>,
    ) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.floor_index == floor && e.flat_index == flat)
            .ok_or(SerializeError::NoSuchFlat { floor, flat })?;
        entry.flat_number = value.into();
        Ok(())
    }

    /// Assign consecutive decimal numbers `from..=to` across the buffer in
    /// order, leaving flats beyond the range as they were.
    ///
    /// Rejects a malformed range with no state change. A range smaller than
    /// the flat count is allowed; the outcome reports how many flats remain
    /// unnumbered so the caller can warn.
    pub fn bulk_fill(&mut self, from: u64, to: u64) -> Result<BulkFillOutcome> {
        if from < 1 || to < 1 || from > to {
            return Err(SerializeError::InvalidRange { from, to });
        }
        let mut next = from;
        let mut filled = 0usize;
        for entry in &mut self.entries {
            if next > to {
                break;
            }
            entry.flat_number = next.to_string();
            next += 1;
            filled += 1;
        }
        let remaining_unnumbered = self
            .entries
            .iter()
            .filter(|e| e.flat_number.trim().is_empty())
            .count();
        if remaining_unnumbered > 0 {
            warn!(
                filled,
                remaining_unnumbered, "bulk fill range covers fewer flats than the tower holds"
            );
        }
        Ok(BulkFillOutcome {
            filled,
            remaining_unnumbered,
        })
    }

    /// Aggregate completeness check: every trimmed number must be non-empty.
    pub fn validate_complete(&self) -> Result<()> {
        let missing = self
            .entries
            .iter()
            .filter(|e| e.flat_number.trim().is_empty())
            .count();
        if missing > 0 {
            return Err(SerializeError::IncompleteNumbering {
                missing,
                total: self.entries.len(),
            });
        }
        Ok(())
    }

    /// Reconstitute the nested structure with the buffer's numbers applied.
    /// Everything except `flat_number` is preserved exactly.
    pub fn apply_to(&self, structure: &TowerStructure) -> TowerStructure {
        let mut out = structure.clone();
        for entry in &self.entries {
            if let Some(flat) = out
                .floors
                .get_mut(entry.floor_index)
                .and_then(|floor| floor.flats.get_mut(entry.flat_index))
            {
                flat.flat_number = entry.flat_number.clone();
            }
        }
        out
    }
}
