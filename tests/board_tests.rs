use salvo::{
    all_cells, neighbors8, Board, BoardError, BoardSnapshot, CellView, Orientation, ShipType,
    ShotOutcome, SnapshotError, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_random_fleet(&mut rng).unwrap();
    board
}

#[test]
fn test_manual_place_and_sink() {
    let mut board = Board::new();
    let cruiser = ShipType::new("Cruiser", 3);
    board.place(cruiser, (0, 0), Orientation::Horizontal).unwrap();

    assert_eq!(board.receive_shot((0, 0)).unwrap(), ShotOutcome::Hit("Cruiser"));
    assert_eq!(board.receive_shot((0, 1)).unwrap(), ShotOutcome::Hit("Cruiser"));
    assert_eq!(board.receive_shot((0, 2)).unwrap(), ShotOutcome::Sunk("Cruiser"));
    assert!(board.all_sunk());

    // repeated shot is reported, not an error
    assert_eq!(board.receive_shot((0, 2)).unwrap(), ShotOutcome::AlreadyShot);
}

#[test]
fn test_miss_and_repeat() {
    let mut board = Board::new();
    board.place(FLEET[4], (5, 5), Orientation::Vertical).unwrap();
    assert_eq!(board.receive_shot((0, 0)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.receive_shot((0, 0)).unwrap(), ShotOutcome::AlreadyShot);
    assert_eq!(board.shots().len(), 1);
    assert!(!board.all_sunk());
}

#[test]
fn test_out_of_bounds_shot_is_error() {
    let mut board = Board::new();
    assert_eq!(
        board.receive_shot((10, 3)).unwrap_err(),
        BoardError::OutOfBounds { row: 10, col: 3 }
    );
    assert!(board.shots().is_empty());
}

#[test]
fn test_can_place_rules() {
    let mut board = Board::new();
    assert!(!board.can_place(5, (0, 6), Orientation::Horizontal));
    assert!(!board.can_place(5, (6, 0), Orientation::Vertical));
    assert!(board.can_place(5, (0, 5), Orientation::Horizontal));

    board.place(FLEET[2], (4, 4), Orientation::Horizontal).unwrap();
    // overlap
    assert!(!board.can_place(2, (4, 5), Orientation::Vertical));
    // orthogonally adjacent
    assert!(!board.can_place(2, (5, 4), Orientation::Horizontal));
    // diagonal touch
    assert!(!board.can_place(2, (5, 7), Orientation::Vertical));
    assert!(!board.can_place(2, (2, 3), Orientation::Vertical));
    // one clear cell away
    assert!(board.can_place(2, (6, 4), Orientation::Horizontal));
    assert!(board.can_place(2, (4, 8), Orientation::Horizontal));

    assert_eq!(
        board.place(FLEET[4], (3, 3), Orientation::Horizontal).unwrap_err(),
        BoardError::ShipTooClose
    );
    assert_eq!(
        board.place(FLEET[0], (9, 7), Orientation::Horizontal).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
}

#[test]
fn test_place_random_fleet_keeps_ships_apart() {
    for seed in 0..20 {
        let board = random_board(seed);
        assert_eq!(board.ships().len(), NUM_SHIPS);
        assert_eq!(board.occupied().len(), TOTAL_SHIP_CELLS);
        for (i, a) in board.ships().iter().enumerate() {
            for b in board.ships().iter().skip(i + 1) {
                for &(r, c) in a.cells() {
                    assert!(!b.contains((r, c)));
                    for n in neighbors8(r, c) {
                        assert!(!b.contains(n), "{} touches {}", a.name(), b.name());
                    }
                }
            }
        }
    }
}

#[test]
fn test_random_fleet_matches_fleet_table() {
    let board = random_board(7);
    let names: Vec<_> = board.ships().iter().map(|s| s.name()).collect();
    let expected: Vec<_> = FLEET.iter().map(|d| d.name()).collect();
    assert_eq!(names, expected);
    for (ship, def) in board.ships().iter().zip(FLEET.iter()) {
        assert_eq!(ship.size(), def.length());
    }
}

#[test]
fn test_impossible_ship_exhausts_placement() {
    let board = Board::new();
    let mut rng = SmallRng::seed_from_u64(1);
    let err = board
        .random_placement(&mut rng, ShipType::new("Leviathan", 11))
        .unwrap_err();
    assert_eq!(err, BoardError::PlacementExhausted { ship: "Leviathan" });
}

#[test]
fn test_full_sweep_sinks_everything() {
    let mut board = random_board(99);
    let mut hits = 0;
    let mut sinks = Vec::new();
    for coord in all_cells() {
        match board.receive_shot(coord).unwrap() {
            ShotOutcome::Hit(_) => hits += 1,
            ShotOutcome::Sunk(name) => {
                hits += 1;
                sinks.push(name);
            }
            ShotOutcome::Miss => {}
            ShotOutcome::AlreadyShot => panic!("fresh cell reported as repeat"),
        }
    }
    assert!(board.all_sunk());
    assert_eq!(hits, TOTAL_SHIP_CELLS);
    assert_eq!(sinks.len(), NUM_SHIPS);
    assert_eq!(board.ships_remaining(), 0);
    assert!(board.fleet_status().all(|(_, _, sunk)| sunk));
}

#[test]
fn test_fleet_status_tracks_sinking() {
    let mut board = Board::new();
    board.place(FLEET[4], (0, 0), Orientation::Horizontal).unwrap();
    board.place(FLEET[2], (5, 5), Orientation::Vertical).unwrap();
    board.receive_shot((0, 0)).unwrap();
    board.receive_shot((0, 1)).unwrap();
    let status: Vec<_> = board.fleet_status().collect();
    assert_eq!(status, vec![("Destroyer", 2, true), ("Cruiser", 3, false)]);
    assert_eq!(board.ships_remaining(), 1);
}

#[test]
fn test_view_projection() {
    let mut board = Board::new();
    board.place(FLEET[4], (0, 0), Orientation::Horizontal).unwrap();
    board.receive_shot((0, 0)).unwrap();
    board.receive_shot((5, 5)).unwrap();

    let hidden = board.view(false);
    assert_eq!(hidden.get((0, 0)), Some(CellView::Hit));
    assert_eq!(hidden.get((5, 5)), Some(CellView::Miss));
    assert_eq!(hidden.get((0, 1)), Some(CellView::Unknown));
    assert_eq!(hidden.get((9, 9)), Some(CellView::Unknown));

    let revealed = board.view(true);
    assert_eq!(revealed.get((0, 0)), Some(CellView::Hit));
    assert_eq!(revealed.get((0, 1)), Some(CellView::Ship));
    assert_eq!(revealed.get((9, 9)), Some(CellView::Unknown));
    assert_eq!(revealed.get((10, 0)), None);
}

#[test]
fn test_board_snapshot_roundtrip() {
    let mut board = random_board(3);
    for coord in [(0, 0), (4, 4), (9, 2)] {
        board.receive_shot(coord).unwrap();
    }
    let snap = BoardSnapshot::from(&board);
    let restored = Board::try_from(snap.clone()).unwrap();
    assert_eq!(restored, board);
    assert_eq!(BoardSnapshot::from(&restored), snap);
}

#[test]
fn test_board_snapshot_rejects_inconsistent_state() {
    let mut board = Board::new();
    board.place(FLEET[4], (0, 0), Orientation::Horizontal).unwrap();
    board.receive_shot((0, 0)).unwrap();
    let snap = BoardSnapshot::from(&board);

    let mut no_shot = snap.clone();
    no_shot.shots.clear();
    assert!(matches!(
        Board::try_from(no_shot),
        Err(SnapshotError::ShotRecordMismatch { .. })
    ));

    let mut twice = snap.clone();
    twice.ships.push(twice.ships[0].clone());
    assert!(matches!(
        Board::try_from(twice),
        Err(SnapshotError::DuplicateShip { .. })
    ));

    let mut stray = snap;
    stray.shots.push((12, 0));
    assert_eq!(
        Board::try_from(stray).unwrap_err(),
        SnapshotError::CellOutOfBounds { row: 12, col: 0 }
    );
}
