//! Numbering session for a freshly created tower.

use tws_model::wire::{SerializePropertyPayload, serialize_payload};
use tws_model::TowerStructure;

use crate::buffer::SerializationBuffer;
use crate::error::Result;

/// Editing session over a structure just returned by tower creation.
///
/// Flow: load, edit the buffer (bulk fill or per-flat), then take the
/// payload. The payload step validates completeness first, so an incomplete
/// buffer never reaches the network; the session itself is left intact for
/// further edits. After the backend accepts the payload the session is done
/// and the caller resets its upstream draft state.
#[derive(Debug, Clone)]
pub struct SerializeSession {
    structure: TowerStructure,
    buffer: SerializationBuffer,
}

impl SerializeSession {
    /// Start a session from a creation response.
    pub fn load(structure: TowerStructure) -> Self {
        let buffer = SerializationBuffer::from_structure(&structure);
        Self { structure, buffer }
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

    /// The serialize-property request body (flats keyed by `id`).
    pub fn payload(&self) -> Result<SerializePropertyPayload> {
        let numbered = self.numbered_structure()?;
        Ok(serialize_payload(&numbered)?)
    }
}
