pub mod de;
pub mod error;
pub mod lookup;
pub mod tower;
pub mod wire;

pub use error::{ModelError, Result};
pub use lookup::{
    AreaOption, AreaUnit, FloorUnitItem, SocietyBlock, StructureOption, SubPropertyType,
};
pub use tower::{
    Flat, FlatIdentityField, Floor, StandaloneUnit, TowerDetails, TowerStructure, UnitCollection,
    UnitKind,
};
pub use wire::{
    CreateTowerRequest, CreatedTowerWire, SerializePropertyPayload, StructureMetaData,
    TowerDetailsWire, UpdateTowerPayload, serialize_payload, update_payload,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_uses_backend_field_names() {
        let request = CreateTowerRequest {
            project_id: 12,
            sub_property_type_id: 4,
            tower_name: "A1".to_string(),
            no_of_floors: 3,
            is_flat_per_floor_same: true,
            floor_unit_id: 1,
            meta_datas: vec![StructureMetaData {
                flat_house_structure_id: 5,
                area: 650.0,
                area_unit_id: 2,
                no_of_items: 2,
            }],
        };
        let json = serde_json::to_value(&request).expect("serialize request");
        assert!(json.get("metaDatas").is_some());
        assert!(json.get("isFlatPerFloorSame").is_some());
        assert_eq!(json["metaDatas"][0]["flatHouseStructureId"], 5);
        assert_eq!(json["metaDatas"][0]["noOfItems"], 2);
    }
}
