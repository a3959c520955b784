use salvo::{Orientation, Ship, ShipSnapshot, ShipType, SnapshotError};

#[test]
fn test_place_cells() {
    let def = ShipType::new("Cruiser", 3);
    let ship = Ship::place(def, (2, 1), Orientation::Horizontal);
    assert_eq!(ship.cells(), &[(2, 1), (2, 2), (2, 3)]);

    let def = ShipType::new("Battleship", 4);
    let ship = Ship::place(def, (0, 0), Orientation::Vertical);
    assert_eq!(ship.cells(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);
    for &(r, c) in ship.cells() {
        assert!(ship.contains((r, c)));
    }
    assert!(!ship.contains((4, 0)));
}

#[test]
fn test_place_does_not_check_bounds() {
    let ship = Ship::place(ShipType::new("Carrier", 5), (0, 8), Orientation::Horizontal);
    assert_eq!(ship.cells().len(), 5);
    assert_eq!(ship.cells()[4], (0, 12));
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::place(ShipType::new("Destroyer", 2), (1, 1), Orientation::Horizontal);
    assert!(!ship.is_sunk());
    assert!(ship.register_hit((1, 1)));
    assert!(!ship.is_sunk());
    // same cell twice does not count double
    assert!(ship.register_hit((1, 1)));
    assert!(!ship.is_sunk());
    assert_eq!(ship.hit_count(), 1);
    assert!(ship.register_hit((1, 2)));
    assert!(ship.is_sunk());
    // miss
    assert!(!ship.register_hit((0, 0)));
    assert_eq!(ship.hit_count(), 2);
}

#[test]
fn test_snapshot_restore() {
    let mut ship = Ship::place(ShipType::new("Submarine", 3), (4, 4), Orientation::Vertical);
    ship.register_hit((5, 4));
    let snap = ShipSnapshot::from(&ship);
    assert_eq!(snap.name, "Submarine");
    assert_eq!(snap.hits, vec![(5, 4)]);
    assert_eq!(Ship::try_from(snap).unwrap(), ship);
}

#[test]
fn test_snapshot_rejects_bad_ships() {
    let good = ShipSnapshot {
        name: "Destroyer".to_string(),
        size: 2,
        cells: vec![(0, 0), (0, 1)],
        hits: vec![],
    };

    let unknown = ShipSnapshot {
        name: "Rowboat".to_string(),
        ..good.clone()
    };
    assert_eq!(
        Ship::try_from(unknown).unwrap_err(),
        SnapshotError::UnknownShip("Rowboat".to_string())
    );

    let wrong_size = ShipSnapshot {
        size: 3,
        ..good.clone()
    };
    assert!(matches!(
        Ship::try_from(wrong_size),
        Err(SnapshotError::SizeMismatch { .. })
    ));

    let bent = ShipSnapshot {
        cells: vec![(0, 0), (1, 1)],
        ..good.clone()
    };
    assert!(matches!(
        Ship::try_from(bent),
        Err(SnapshotError::MalformedShip { .. })
    ));

    let stray_hit = ShipSnapshot {
        hits: vec![(5, 5)],
        ..good
    };
    assert!(matches!(
        Ship::try_from(stray_hit),
        Err(SnapshotError::HitOutsideShip { .. })
    ));
}
