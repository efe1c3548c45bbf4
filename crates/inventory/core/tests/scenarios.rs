use inventory_core::{
    CellPosition, GridInventory, InventoryError, ItemDescriptor, ItemInstanceId, PlacedItem,
};

fn trunk() -> GridInventory {
    GridInventory::new(6, 4, 64)
}

fn occupant(inventory: &GridInventory, x: i32, y: i32) -> Option<ItemInstanceId> {
    inventory
        .item_at_cell(CellPosition::new(x, y))
        .map(PlacedItem::id)
}

#[test]
fn auto_placed_item_lands_top_left() {
    let mut inventory = trunk();

    let id = inventory
        .add_item_auto(ItemDescriptor::new("toolbox", 5), 2, 2)
        .unwrap();

    assert_eq!(inventory.item_by_id(id).unwrap().anchor(), CellPosition::ORIGIN);
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert_eq!(occupant(&inventory, x, y), Some(id));
    }
    assert_eq!(occupant(&inventory, 2, 0), None);
    assert_eq!(occupant(&inventory, 0, 2), None);
    assert_eq!(inventory.total_weight(), 5);
}

#[test]
fn placing_onto_occupied_region_fails() {
    let mut inventory = trunk();
    let toolbox = inventory
        .add_item_auto(ItemDescriptor::new("toolbox", 5), 2, 2)
        .unwrap();

    let result = inventory.add_item_at(ItemDescriptor::new("flashlight", 1), 1, 1, CellPosition::ORIGIN);

    assert_eq!(
        result,
        Err(InventoryError::InvalidPlacement {
            position: CellPosition::ORIGIN,
            width: 1,
            height: 1,
        })
    );
    assert_eq!(inventory.len(), 1);
    assert_eq!(occupant(&inventory, 0, 0), Some(toolbox));
    assert!(!inventory.can_place_item(CellPosition::new(1, 1), 1, 1, None));
    assert!(inventory.can_place_item(CellPosition::new(1, 1), 1, 1, Some(toolbox)));
}

#[test]
fn add_over_weight_ceiling_changes_nothing() {
    let mut inventory = trunk();
    for _ in 0..6 {
        inventory
            .add_item_auto(ItemDescriptor::new("brick", 10), 1, 1)
            .unwrap();
    }
    assert_eq!(inventory.total_weight(), 60);
    let before = inventory.snapshot();

    let result = inventory.add_item_auto(ItemDescriptor::new("battery", 5), 1, 1);

    assert_eq!(
        result,
        Err(InventoryError::CapacityExceeded {
            required: 5,
            available: 4,
        })
    );
    assert_eq!(inventory.snapshot(), before);
    assert_eq!(inventory.total_weight(), 60);
}

// Scenario D with a 1x2 footprint; a 1x1 item keeps its shape when rotated.
#[test]
fn rotation_off_the_right_edge_is_rejected() {
    let mut inventory = trunk();
    let id = inventory
        .add_item_at(ItemDescriptor::new("crowbar", 3), 1, 2, CellPosition::new(5, 2))
        .unwrap();

    // Rotating turns 1x2 into 2x1, which would need column 6.
    let result = inventory.rotate_item(id);

    assert!(matches!(result, Err(InventoryError::InvalidPlacement { .. })));
    let item = inventory.item_by_id(id).unwrap();
    assert!(!item.is_rotated());
    assert_eq!(item.anchor(), CellPosition::new(5, 2));
    assert_eq!(occupant(&inventory, 5, 2), Some(id));
    assert_eq!(occupant(&inventory, 5, 3), Some(id));
}

#[test]
fn rotation_at_corner_cell_with_no_room_is_rejected() {
    let mut inventory = trunk();
    let id = inventory
        .add_item_at(ItemDescriptor::new("fuse", 1), 1, 1, CellPosition::new(5, 3))
        .unwrap();
    let wide = inventory
        .add_item_at(ItemDescriptor::new("plank", 2), 2, 1, CellPosition::new(0, 3))
        .unwrap();

    // A 1x1 footprint rotates onto itself.
    assert!(inventory.rotate_item(id).is_ok());
    assert_eq!(inventory.item_by_id(id).unwrap().anchor(), CellPosition::new(5, 3));

    // Moving the plank's anchor to (5, 3) would need x + 2 > 6.
    assert!(inventory.place_item(wide, CellPosition::new(5, 3)).is_err());
    assert!(inventory.remove_item(id).is_ok());
    assert!(inventory.place_item(wide, CellPosition::new(5, 3)).is_err());
    assert_eq!(inventory.item_by_id(wide).unwrap().anchor(), CellPosition::new(0, 3));
}

#[test]
fn removed_item_frees_its_anchor() {
    let mut inventory = trunk();
    let anchor = CellPosition::new(3, 1);
    let id = inventory
        .add_item_at(ItemDescriptor::new("cooler", 8), 2, 2, anchor)
        .unwrap();

    inventory.remove_item(id).unwrap();
    assert_eq!(occupant(&inventory, 3, 1), None);

    let again = inventory
        .add_item_at(ItemDescriptor::new("cooler", 8), 2, 2, anchor)
        .unwrap();
    assert_ne!(again, id);
    assert_eq!(occupant(&inventory, 4, 2), Some(again));
}

#[test]
fn explicit_out_of_bounds_positions_fail() {
    let mut inventory = trunk();
    let descriptor = ItemDescriptor::new("sign", 1);

    for position in [
        CellPosition::new(-1, 0),
        CellPosition::new(0, -1),
        CellPosition::new(5, 0),
        CellPosition::new(0, 3),
    ] {
        let result = inventory.add_item_at(descriptor.clone(), 2, 2, position);
        assert!(matches!(result, Err(InventoryError::InvalidPlacement { .. })));
    }
    assert!(inventory.is_empty());
    assert_eq!(inventory.free_cell_count(), 24);
}

#[test]
fn full_grid_reports_no_space() {
    let mut inventory = trunk();
    for _ in 0..6 {
        inventory
            .add_item_auto(ItemDescriptor::new("box", 1), 2, 2)
            .unwrap();
    }
    assert_eq!(inventory.free_cell_count(), 0);
    assert_eq!(inventory.find_available_position(1, 1), None);
    assert_eq!(
        inventory.add_item_auto(ItemDescriptor::new("pebble", 0), 1, 1),
        Err(InventoryError::NoSpaceAvailable {
            width: 1,
            height: 1
        })
    );
}
