//! Numbering session for an already-persisted tower.

use tws_model::wire::{UpdateTowerPayload, update_payload};
use tws_model::{TowerDetails, TowerStructure};

use crate::buffer::SerializationBuffer;
use crate::error::Result;

/// Editing session over a tower fetched by block id.
///
/// Same flatten/bulk-fill/validate/reconstitute contract as
/// [`crate::session::SerializeSession`], but sourced from the fetch-by-id
/// response (flat identity `flatId`) and submitted via the update endpoint,
/// echoing the root id and block name. On success the caller clears its
/// block selection and re-fetches the block list; nothing is handed upward.
#[derive(Debug, Clone)]
pub struct ExistingAssignment {
    structure: TowerStructure,
    buffer: SerializationBuffer,
}

impl ExistingAssignment {
    /// Start a session from a fetched block.
    ///
    /// Only floor/flat blocks can be numbered; plots, house villas, and
    /// commercial units are rejected with a typed error.
    pub fn load(details: TowerDetails) -> Result<Self> {
        let structure = details.into_tower_structure()?;
        let buffer = SerializationBuffer::from_structure(&structure);
        Ok(Self { structure, buffer })
    }

    pub fn structure(&self) -> &TowerStructure {
        &self.structure
    }

    pub fn buffer(&self) -> &SerializationBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut SerializationBuffer {
        &mut self.buffer
    }

    /// The fully numbered structure, validated for completeness.
    pub fn numbered_structure(&self) -> Result<TowerStructure> {
        self.buffer.validate_complete()?;
        Ok(self.buffer.apply_to(&self.structure))
    }

    /// The update-tower request body (flats keyed by `flatId`, root id and
    /// block name echoed).
    ///
    /// The PUT carries no version token: if two sessions edit the same
    /// tower's numbering concurrently, the second writer overwrites the
    /// first, last-writer-wins.
    pub fn payload(&self) -> Result<UpdateTowerPayload> {
        let numbered = self.numbered_structure()?;
        Ok(update_payload(&numbered)?)
    }
}
