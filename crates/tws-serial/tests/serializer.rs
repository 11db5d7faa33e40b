use tws_model::{Flat, FlatIdentityField, Floor, TowerStructure};
use tws_serial::{SerializationBuffer, SerializeError, SerializeSession};

/// A tower with `flats_per_floor` flats on each of `floors` floors,
/// numbers empty.
fn tower(floors: usize, flats_per_floor: usize) -> TowerStructure {
    let floors = (0..floors)
        .map(|i| Floor {
            id: 100 + i as i64,
            floor_number: i as i32 + 1,
            flats: (0..flats_per_floor)
                .map(|j| Flat {
                    id: 1000 + (i * flats_per_floor + j) as i64,
                    area: 650.0,
                    area_unit: "sqft".to_string(),
                    flat_number: String::new(),
                })
                .collect(),
        })
        .collect::<Vec<_>>();
    TowerStructure {
        id: 31,
        tower_name: "A1".to_string(),
        no_of_floors: floors.len() as u32,
        is_flat_per_floor_same: true,
        floor_unit_id: 1,
        floors,
        identity: FlatIdentityField::Id,
    }
}

#[test]
fn flatten_is_floor_then_flat_order() {
    let structure = tower(2, 3);
    let buffer = SerializationBuffer::from_structure(&structure);
    let ids: Vec<i64> = buffer.entries().iter().map(|e| e.flat_id).collect();
    assert_eq!(ids, vec![1000, 1001, 1002, 1003, 1004, 1005]);
}

#[test]
fn bulk_fill_covers_range_and_leaves_rest_untouched() {
    let structure = tower(4, 2); // 8 flats
    let mut buffer = SerializationBuffer::from_structure(&structure);
    buffer.set_flat_number(3, 1, "PENTHOUSE").unwrap();

    let outcome = buffer.bulk_fill(101, 105).unwrap();
    assert_eq!(outcome.filled, 5);
    // Flats 6 and 7 untouched and empty; flat 8 keeps its manual number.
    assert_eq!(outcome.remaining_unnumbered, 2);

    let numbers: Vec<&str> = buffer
        .entries()
        .iter()
        .map(|e| e.flat_number.as_str())
        .collect();
    assert_eq!(
        numbers,
        vec!["101", "102", "103", "104", "105", "", "", "PENTHOUSE"]
    );
}

#[test]
fn bulk_fill_rejects_inverted_range_without_change() {
    let structure = tower(2, 2);
    let mut buffer = SerializationBuffer::from_structure(&structure);
    buffer.set_flat_number(0, 0, "A").unwrap();
    let before = buffer.clone();

    let err = buffer.bulk_fill(10, 5).unwrap_err();
    assert!(matches!(
        err,
        SerializeError::InvalidRange { from: 10, to: 5 }
    ));
    assert_eq!(buffer, before);

    let err = buffer.bulk_fill(0, 3).unwrap_err();
    assert!(matches!(err, SerializeError::InvalidRange { .. }));
    assert_eq!(buffer, before);
}

#[test]
fn bulk_fill_larger_than_tower_stops_at_last_flat() {
    let structure = tower(1, 3);
    let mut buffer = SerializationBuffer::from_structure(&structure);
    let outcome = buffer.bulk_fill(1, 100).unwrap();
    assert_eq!(outcome.filled, 3);
    assert_eq!(outcome.remaining_unnumbered, 0);
}

#[test]
fn set_flat_number_rejects_unknown_position() {
    let structure = tower(1, 1);
    let mut buffer = SerializationBuffer::from_structure(&structure);
    let err = buffer.set_flat_number(2, 0, "9").unwrap_err();
    assert!(matches!(err, SerializeError::NoSuchFlat { floor: 2, flat: 0 }));
}

#[test]
fn no_op_reconstitution_is_identity() {
    let mut structure = tower(2, 2);
    structure.floors[1].flats[0].flat_number = "201".to_string();

    let buffer = SerializationBuffer::from_structure(&structure);
    let rebuilt = buffer.apply_to(&structure);
    assert_eq!(rebuilt, structure);
}

#[test]
fn submission_gate_blocks_incomplete_numbering() {
    let structure = tower(2, 2);
    let mut session = SerializeSession::load(structure);
    session.buffer_mut().bulk_fill(1, 3).unwrap(); // one flat left empty
    session.buffer_mut().set_flat_number(1, 1, "   ").unwrap(); // whitespace only

    let err = session.payload().unwrap_err();
    assert!(matches!(
        err,
        SerializeError::IncompleteNumbering {
            missing: 1,
            total: 4
        }
    ));

    // Session stays editable after the rejection.
    session.buffer_mut().set_flat_number(1, 1, "4").unwrap();
    assert!(session.payload().is_ok());
}

#[test]
fn payload_preserves_everything_but_numbers() {
    let structure = tower(2, 2);
    let mut session = SerializeSession::load(structure.clone());
    session.buffer_mut().bulk_fill(1, 4).unwrap();

    let numbered = session.numbered_structure().unwrap();
    assert_eq!(numbered.id, structure.id);
    assert_eq!(numbered.no_of_floors, structure.no_of_floors);
    for (floor, original) in numbered.floors.iter().zip(&structure.floors) {
        assert_eq!(floor.id, original.id);
        for (flat, original_flat) in floor.flats.iter().zip(&original.flats) {
            assert_eq!(flat.id, original_flat.id);
            assert_eq!(flat.area, original_flat.area);
            assert_eq!(flat.area_unit, original_flat.area_unit);
            assert!(!flat.flat_number.is_empty());
        }
    }
}
