#![cfg(feature = "std")]

use std::path::PathBuf;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use salvo::persist::{self, SaveFormat};
use salvo::{Game, GameSnapshot, Mode, SnapshotError};

fn played_game(seed: u64, mode: Mode, turns: usize) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(mode, &mut rng).unwrap();
    for _ in 0..turns {
        if game.is_finished() {
            break;
        }
        if game.is_computer_turn() {
            game.play_computer_turn(&mut rng).unwrap();
        } else {
            let target = (rng.random_range(0..10), rng.random_range(0..10));
            game.resolve_turn(target).unwrap();
        }
    }
    game
}

fn temp_save(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("salvo-{}-{}", std::process::id(), name))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn json_roundtrip(seed in any::<u64>(), turns in 0usize..120, versus in any::<bool>()) {
        let mode = if versus { Mode::VsHuman } else { Mode::VsComputer };
        let game = played_game(seed, mode, turns);
        let json = serde_json::to_string(&game.snapshot()).unwrap();
        let state: GameSnapshot = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(Game::from_snapshot(state).unwrap(), game);
    }

    #[test]
    fn bincode_roundtrip(seed in any::<u64>(), turns in 0usize..120) {
        let game = played_game(seed, Mode::VsComputer, turns);
        let bytes = persist::to_bytes(&game, SaveFormat::Bincode).unwrap();
        prop_assert_eq!(persist::from_bytes(&bytes, SaveFormat::Bincode).unwrap(), game);
    }
}

#[test]
fn test_finished_match_roundtrip() {
    let game = played_game(5, Mode::VsComputer, 5_000);
    assert!(game.is_finished());
    let bytes = persist::to_bytes(&game, SaveFormat::Json).unwrap();
    let restored = persist::from_bytes(&bytes, SaveFormat::Json).unwrap();
    assert_eq!(restored.winner(), game.winner());
    assert_eq!(restored, game);
}

#[test]
fn test_format_from_extension() {
    assert_eq!(SaveFormat::from_path("match.bin".as_ref()), SaveFormat::Bincode);
    assert_eq!(SaveFormat::from_path("match.BIN".as_ref()), SaveFormat::Bincode);
    assert_eq!(SaveFormat::from_path("match.json".as_ref()), SaveFormat::Json);
    assert_eq!(SaveFormat::from_path("match".as_ref()), SaveFormat::Json);
}

#[test]
fn test_save_and_load_files() {
    let game = played_game(21, Mode::VsHuman, 15);
    for name in ["roundtrip.json", "roundtrip.bin"] {
        let path = temp_save(name);
        persist::save(&game, &path).unwrap();
        let loaded = persist::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, game);
    }
}

#[test]
fn test_load_missing_file_fails() {
    let err = persist::load(temp_save("does-not-exist.json")).unwrap_err();
    assert!(format!("{:#}", err).contains("reading save file"));
}

#[test]
fn test_invalid_json_rejected() {
    assert!(persist::from_bytes(b"{ not json", SaveFormat::Json).is_err());
}

#[test]
fn test_ai_must_match_mode() {
    let mut state = played_game(8, Mode::VsHuman, 4).snapshot();
    state.ai = Some(Default::default());
    assert_eq!(
        Game::from_snapshot(state.clone()).unwrap_err(),
        SnapshotError::AiMismatch
    );

    state.mode = Mode::VsComputer;
    state.ai = None;
    assert_eq!(
        Game::from_snapshot(state).unwrap_err(),
        SnapshotError::AiMismatch
    );
}

#[test]
fn test_unknown_ship_rejected() {
    let game = played_game(9, Mode::VsComputer, 0);
    let mut state = game.snapshot();
    state.board_two.ships[0].name = "Dinghy".to_string();
    assert_eq!(
        Game::from_snapshot(state).unwrap_err(),
        SnapshotError::UnknownShip("Dinghy".to_string())
    );
}

#[test]
fn test_winner_must_match_sunk_fleet() {
    let mut state = played_game(14, Mode::VsHuman, 0).snapshot();
    state.winner = Some(salvo::Side::Two);
    assert_eq!(
        Game::from_snapshot(state).unwrap_err(),
        SnapshotError::WinnerMismatch {
            winner: Some(salvo::Side::Two)
        }
    );

    let finished = played_game(5, Mode::VsComputer, 5_000);
    let winner = finished.winner().unwrap();
    let mut state = finished.snapshot();
    state.winner = Some(winner.opponent());
    assert!(matches!(
        Game::from_snapshot(state),
        Err(SnapshotError::WinnerMismatch { .. })
    ));

    let mut ongoing = finished.snapshot();
    ongoing.winner = None;
    assert_eq!(
        Game::from_snapshot(ongoing).unwrap_err(),
        SnapshotError::WinnerMismatch { winner: None }
    );
}
