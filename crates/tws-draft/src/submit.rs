//! Submission gate: draft to tower-creation request.

use tws_model::{CreateTowerRequest, StructureMetaData};

use crate::builder::{PerFloorSame, TowerDraft};
use crate::error::{DraftError, Result};

/// Convert a draft into the backend's tower-creation request.
///
/// Gates: tower name non-empty, positive floor count, floor unit selected,
/// and at least one assignment when per-floor-same is "yes". The draft is
/// not consumed; the caller resets it only after the backend accepts the
/// request.
pub fn build_create_request(draft: &TowerDraft, project_id: i64) -> Result<CreateTowerRequest> {
    if draft.tower_name().trim().is_empty() {
        return Err(DraftError::MissingTowerName);
    }
    if draft.total_floors() == 0 {
        return Err(DraftError::InvalidFloorCount {
            given: draft.total_floors(),
        });
    }
    let floor_unit = draft.floor_unit().ok_or(DraftError::MissingFloorUnit)?;

    let per_floor_same = draft.per_floor_same() == PerFloorSame::Yes;
    if per_floor_same && draft.assignments().is_empty() {
        return Err(DraftError::NoAssignments);
    }

    let meta_datas = if per_floor_same {
        draft
            .assignments()
            .iter()
            .map(|a| StructureMetaData {
                flat_house_structure_id: a.structure_id,
                area: a.area.area,
                area_unit_id: a.area.area_unit.id,
                no_of_items: a.quantity,
            })
            .collect()
    } else {
        // Floors and units get defined individually during serialization.
        Vec::new()
    };

    Ok(CreateTowerRequest {
        project_id,
        sub_property_type_id: draft.sub_property_type().id,
        tower_name: draft.tower_name().trim().to_string(),
        no_of_floors: draft.total_floors(),
        is_flat_per_floor_same: per_floor_same,
        floor_unit_id: floor_unit.id,
        meta_datas,
    })
}
