use tws_draft::{
    AddOutcome, AssignmentCandidate, AssignmentKey, DraftError, PerFloorSame, TowerDraft,
    build_create_request,
};
use tws_model::{AreaOption, AreaUnit, FloorUnitItem, StructureOption, SubPropertyType};

fn flat_single_floor_type() -> SubPropertyType {
    SubPropertyType {
        id: 4,
        name: "Apartment".to_string(),
        is_residential: true,
        is_commercial: false,
        is_multi_tower: true,
        is_flat: true,
        is_house_villa: false,
        is_plot: false,
        is_commercial_unit: false,
        is_single_floor: true,
    }
}

fn structure(id: i64, name: &str) -> StructureOption {
    StructureOption {
        id,
        structure_name: name.to_string(),
        structure_type: format!("{name} - Residential"),
    }
}

fn area(id: i64, sqft: f64) -> AreaOption {
    AreaOption {
        id,
        area: sqft,
        area_unit: AreaUnit {
            id: 1,
            unit_name: "sqft".to_string(),
        },
    }
}

fn floor_unit() -> FloorUnitItem {
    FloorUnitItem {
        id: 1,
        name: "Flat".to_string(),
        code: "FLT".to_string(),
        is_house_villa: false,
        is_flat: true,
    }
}

fn draft_with_capacity(floors: u32, total: u32) -> TowerDraft {
    let mut draft = TowerDraft::new(flat_single_floor_type());
    draft.set_tower_name("A1");
    draft.set_total_floors(floors);
    draft.set_floor_unit(floor_unit());
    draft.load_capacity(
        AssignmentKey {
            structure_id: 5,
            area_id: 2,
        },
        total,
    );
    draft
}

fn candidate(quantity: u32) -> AssignmentCandidate {
    AssignmentCandidate {
        structure: structure(5, "1 BHK"),
        area: area(2, 650.0),
        quantity: Some(quantity),
    }
}

#[test]
fn upsert_is_idempotent() {
    let mut draft = draft_with_capacity(4, 40);

    assert_eq!(
        draft.add_assignment(candidate(3)).unwrap(),
        AddOutcome::Inserted
    );
    assert_eq!(
        draft.add_assignment(candidate(3)).unwrap(),
        AddOutcome::Updated
    );

    assert_eq!(draft.assignments().len(), 1);
    assert_eq!(draft.assignments()[0].quantity, 3);
    // 3 per floor over 4 floors, not 6.
    assert_eq!(draft.capacity().unwrap().remaining(), 40 - 12);
}

#[test]
fn upsert_to_lower_quantity_refunds_the_difference() {
    let mut draft = draft_with_capacity(4, 40);
    draft.add_assignment(candidate(3)).unwrap();
    draft.add_assignment(candidate(1)).unwrap();
    assert_eq!(draft.capacity().unwrap().remaining(), 40 - 4);
}

#[test]
fn remove_refunds_exactly_what_was_consumed() {
    let mut draft = draft_with_capacity(4, 20);
    draft.add_assignment(candidate(2)).unwrap();
    assert_eq!(draft.capacity().unwrap().remaining(), 12);

    let removed = draft.remove_assignment(0).unwrap();
    assert_eq!(removed.quantity, 2);
    assert_eq!(draft.capacity().unwrap().remaining(), 20);
    assert!(draft.assignments().is_empty());
}

#[test]
fn oversubscription_is_rejected_and_draft_unchanged() {
    let mut draft = draft_with_capacity(4, 10);
    let err = draft.add_assignment(candidate(3)).unwrap_err();
    assert_eq!(
        err,
        DraftError::CapacityExceeded {
            requested: 12,
            remaining: 10
        }
    );
    assert!(draft.assignments().is_empty());
    assert_eq!(draft.capacity().unwrap().remaining(), 10);
}

#[test]
fn quantity_must_be_positive_when_required() {
    let mut draft = draft_with_capacity(4, 40);
    let mut cand = candidate(0);
    assert_eq!(
        draft.add_assignment(cand.clone()).unwrap_err(),
        DraftError::InvalidQuantity
    );
    cand.quantity = None;
    assert_eq!(
        draft.add_assignment(cand).unwrap_err(),
        DraftError::InvalidQuantity
    );
}

#[test]
fn quantity_defaults_to_one_when_not_required() {
    let mut spt = flat_single_floor_type();
    spt.is_single_floor = false;
    let mut draft = TowerDraft::new(spt);
    draft.set_total_floors(4);
    let mut cand = candidate(0);
    cand.quantity = None;
    draft.add_assignment(cand).unwrap();
    assert_eq!(draft.assignments()[0].quantity, 1);
}

#[test]
fn per_floor_same_no_disables_assignments_and_capacity() {
    let mut draft = draft_with_capacity(4, 40);
    draft.set_per_floor_same(PerFloorSame::No);
    assert!(draft.capacity().is_none());
    assert_eq!(
        draft.add_assignment(candidate(2)).unwrap_err(),
        DraftError::AssignmentsDisabled
    );
}

#[test]
fn missing_capacity_blocks_additions_fail_closed() {
    let mut draft = TowerDraft::new(flat_single_floor_type());
    draft.set_tower_name("A1");
    draft.set_total_floors(4);
    draft.set_floor_unit(floor_unit());
    assert_eq!(
        draft.add_assignment(candidate(1)).unwrap_err(),
        DraftError::CapacityUnavailable
    );
}

#[test]
fn submission_gate_and_request_shape() {
    let mut draft = draft_with_capacity(3, 30);

    draft.set_tower_name("  ");
    assert_eq!(
        build_create_request(&draft, 12).unwrap_err(),
        DraftError::MissingTowerName
    );

    draft.set_tower_name("A1");
    assert_eq!(
        build_create_request(&draft, 12).unwrap_err(),
        DraftError::NoAssignments
    );

    draft.add_assignment(candidate(2)).unwrap();
    let request = build_create_request(&draft, 12).unwrap();
    assert_eq!(request.tower_name, "A1");
    assert_eq!(request.no_of_floors, 3);
    assert!(request.is_flat_per_floor_same);
    assert_eq!(request.meta_datas.len(), 1);
    assert_eq!(request.meta_datas[0].flat_house_structure_id, 5);
    assert_eq!(request.meta_datas[0].area, 650.0);
    assert_eq!(request.meta_datas[0].area_unit_id, 1);
    assert_eq!(request.meta_datas[0].no_of_items, 2);
}

#[test]
fn per_floor_same_no_submits_empty_assignment_list() {
    let mut draft = TowerDraft::new(flat_single_floor_type());
    draft.set_tower_name("B2");
    draft.set_total_floors(5);
    draft.set_floor_unit(floor_unit());
    draft.set_per_floor_same(PerFloorSame::No);

    let request = build_create_request(&draft, 12).unwrap();
    assert!(!request.is_flat_per_floor_same);
    assert!(request.meta_datas.is_empty());
}

#[test]
fn reset_clears_everything() {
    let mut draft = draft_with_capacity(3, 30);
    draft.add_assignment(candidate(2)).unwrap();
    draft.reset();
    assert!(draft.tower_name().is_empty());
    assert_eq!(draft.total_floors(), 0);
    assert!(draft.assignments().is_empty());
    assert!(draft.capacity().is_none());
    assert!(draft.floor_unit().is_none());
}
