//! Property test: no add/remove sequence may drive the remaining linkable
//! units negative or above the fetched total.

use proptest::prelude::*;

use tws_draft::{AssignmentCandidate, AssignmentKey, PerFloorSame, TowerDraft};
use tws_model::{AreaOption, AreaUnit, FloorUnitItem, StructureOption, SubPropertyType};

#[derive(Debug, Clone)]
enum Op {
    Add { structure_id: i64, quantity: u32 },
    Remove { index: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1..4i64, 0..6u32).prop_map(|(structure_id, quantity)| Op::Add {
            structure_id,
            quantity
        }),
        (0..6usize).prop_map(|index| Op::Remove { index }),
    ]
}

fn draft(total_floors: u32, total: u32, active_structure: i64) -> TowerDraft {
    let spt = SubPropertyType {
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
    };
    let mut draft = TowerDraft::new(spt);
    draft.set_tower_name("A1");
    draft.set_total_floors(total_floors);
    draft.set_per_floor_same(PerFloorSame::Yes);
    draft.set_floor_unit(FloorUnitItem {
        id: 1,
        name: "Flat".to_string(),
        code: String::new(),
        is_house_villa: false,
        is_flat: true,
    });
    draft.load_capacity(
        AssignmentKey {
            structure_id: active_structure,
            area_id: 2,
        },
        total,
    );
    draft
}

fn candidate(structure_id: i64, quantity: u32) -> AssignmentCandidate {
    AssignmentCandidate {
        structure: StructureOption {
            id: structure_id,
            structure_name: format!("{structure_id} BHK"),
            structure_type: String::new(),
        },
        area: AreaOption {
            id: 2,
            area: 650.0,
            area_unit: AreaUnit {
                id: 1,
                unit_name: "sqft".to_string(),
            },
        },
        quantity: Some(quantity),
    }
}

proptest! {
    #[test]
    fn capacity_counters_stay_in_bounds(
        ops in proptest::collection::vec(op_strategy(), 1..40),
        total_floors in 1..6u32,
        total in 0..50u32,
    ) {
        let active_structure = 1i64;
        let mut draft = draft(total_floors, total, active_structure);

        for op in ops {
            match op {
                Op::Add { structure_id, quantity } => {
                    // Rejections are fine; the invariant is about state.
                    let _ = draft.add_assignment(candidate(structure_id, quantity));
                }
                Op::Remove { index } => {
                    let _ = draft.remove_assignment(index);
                }
            }

            let capacity = draft.capacity().expect("tracking stays active");
            prop_assert!(capacity.remaining() <= capacity.total());
            prop_assert_eq!(capacity.total(), total);

            // Remaining always equals total minus what the active pair consumes.
            let consumed: u32 = draft
                .assignments()
                .iter()
                .filter(|a| a.structure_id == active_structure && a.area_id == 2)
                .map(|a| a.quantity * total_floors)
                .sum();
            prop_assert_eq!(capacity.remaining(), total.saturating_sub(consumed));
        }
    }
}
