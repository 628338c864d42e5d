use battleships::{
    Board, BoardError, CellMark, CellStatus, Coordinate, DuplicateShotPolicy, GameConfig,
    Orientation, PlacementMode, ShipDef, ShotOutcome, TargetError, MAX_COLUMNS, MAX_ROWS,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn single_destroyer() -> GameConfig {
    GameConfig {
        roster: vec![ShipDef::new("Destroyer", 2)],
        ..GameConfig::default()
    }
}

fn destroyer_board(config: &GameConfig) -> Board {
    let mut board = Board::empty(config).unwrap();
    board
        .place_ship(0, Coordinate::new(5, 5), Orientation::Horizontal)
        .unwrap();
    board
}

fn first_open_cell(board: &Board) -> Coordinate {
    (1..=board.y_dimension())
        .flat_map(|row| (1..=board.x_dimension()).map(move |col| Coordinate::new(col, row)))
        .find(|c| !board.is_occupied(c))
        .unwrap()
}

#[test]
fn test_miss_on_fresh_board() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(&GameConfig::default(), &mut rng).unwrap();
    let target = first_open_cell(&board);

    assert_eq!(board.receive_shot(target).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.targeted_coordinates().len(), 1);
    assert_eq!(board.targeted_coordinates()[0].target, target);
    assert_eq!(board.targeted_coordinates()[0].status, CellStatus::Missed);
    assert!(board.fleet().iter().all(|s| s.hit_count() == 0));
    assert!(!board.is_fleet_sunk());
}

#[test]
fn test_hit_then_sink_last_ship() {
    let config = single_destroyer();
    let mut board = destroyer_board(&config);

    assert_eq!(board.receive_shot(Coordinate::new(5, 5)).unwrap(), ShotOutcome::Hit);
    assert!(!board.is_fleet_sunk());
    assert_eq!(
        board.receive_shot(Coordinate::new(6, 5)).unwrap(),
        ShotOutcome::Sunk("Destroyer".to_string())
    );
    assert!(board.is_fleet_sunk());
    assert!(board.is_fleet_sunk());
}

#[test]
fn test_out_of_bounds_shot_leaves_board_untouched() {
    let config = single_destroyer();
    let mut board = destroyer_board(&config);
    let err = board.receive_shot(Coordinate::new(11, 1)).unwrap_err();
    assert!(matches!(
        err,
        BoardError::InvalidTarget(TargetError::OutOfBounds { x_dimension: 10, y_dimension: 10, .. })
    ));
    assert!(board.targeted_coordinates().is_empty());
}

#[test]
fn test_parse_target_checks_bounds() {
    let board = Board::empty(&GameConfig::default()).unwrap();
    assert_eq!(board.parse_target("b2").unwrap(), Coordinate::new(2, 2));
    assert_eq!(board.parse_target("J10").unwrap(), Coordinate::new(10, 10));
    assert!(matches!(
        board.parse_target("K1"),
        Err(BoardError::InvalidTarget(TargetError::OutOfBounds { .. }))
    ));
    assert!(matches!(
        board.parse_target("A0"),
        Err(BoardError::InvalidTarget(TargetError::OutOfBounds { .. }))
    ));
    assert_eq!(
        board.parse_target("?3"),
        Err(BoardError::InvalidTarget(TargetError::InvalidColumn('?')))
    );
}

#[test]
fn test_repeat_shots_allowed_by_default() {
    let config = single_destroyer();
    let mut board = destroyer_board(&config);

    assert_eq!(board.receive_shot(Coordinate::new(1, 1)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.receive_shot(Coordinate::new(1, 1)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.targeted_coordinates().len(), 2);

    // a repeated hit is recorded but cannot sink the ship on its own
    assert_eq!(board.receive_shot(Coordinate::new(5, 5)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.receive_shot(Coordinate::new(5, 5)).unwrap(), ShotOutcome::Hit);
    assert!(!board.is_fleet_sunk());
    assert_eq!(board.targeted_coordinates().len(), 4);

    assert_eq!(
        board.receive_shot(Coordinate::new(6, 5)).unwrap(),
        ShotOutcome::Sunk("Destroyer".to_string())
    );
    assert_eq!(board.receive_shot(Coordinate::new(6, 5)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.receive_shot(Coordinate::new(5, 5)).unwrap(), ShotOutcome::Hit);
    assert!(board.is_fleet_sunk());
    assert_eq!(board.status_at(&Coordinate::new(6, 5)), CellStatus::Hit);
}

#[test]
fn test_repeat_shots_rejected_when_strict() {
    let config = GameConfig {
        duplicate_shots: DuplicateShotPolicy::Reject,
        ..single_destroyer()
    };
    let mut board = destroyer_board(&config);

    board.receive_shot(Coordinate::new(5, 5)).unwrap();
    assert_eq!(
        board.receive_shot(Coordinate::new(5, 5)),
        Err(BoardError::DuplicateShot(Coordinate::new(5, 5)))
    );
    assert_eq!(board.targeted_coordinates().len(), 1);
}

#[test]
fn test_manual_placement_errors() {
    let mut board = Board::empty(&GameConfig::default()).unwrap();
    assert_eq!(
        board.place_ship(0, Coordinate::new(7, 1), Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    board
        .place_ship(0, Coordinate::new(1, 1), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.place_ship(1, Coordinate::new(3, 1), Orientation::Vertical),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(
        board.place_ship(0, Coordinate::new(1, 5), Orientation::Horizontal),
        Err(BoardError::ShipAlreadyPlaced)
    );
    assert_eq!(
        board.place_ship(9, Coordinate::new(1, 5), Orientation::Horizontal),
        Err(BoardError::InvalidIndex)
    );
    assert_eq!(
        board.place_ship(1, Coordinate::new(usize::MAX, 1), Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place_ship(1, Coordinate::new(1, usize::MAX), Orientation::Vertical),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place_ship(1, Coordinate::new(0, 5), Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(board.occupied_coordinates().len(), 5);

    let config = GameConfig {
        roster: vec![ShipDef::new("Leviathan", usize::MAX)],
        ..GameConfig::default()
    };
    let mut board = Board::empty(&config).unwrap();
    assert_eq!(
        board.place_ship(0, Coordinate::new(10, 10), Orientation::Vertical),
        Err(BoardError::ShipOutOfBounds)
    );
    assert!(!board.fleet()[0].is_placed());
}

#[test]
fn test_place_fleet_fills_remaining_ships() {
    let mut board = Board::empty(&GameConfig::default()).unwrap();
    board
        .place_ship(0, Coordinate::new(1, 1), Orientation::Vertical)
        .unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    board.place_fleet(&mut rng).unwrap();
    assert_eq!(board.fleet()[0].locations()[0], Coordinate::new(1, 1));
    assert_eq!(board.occupied_coordinates().len(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_ship_larger_than_board_fails_fast() {
    let config = GameConfig {
        x_dimension: 3,
        y_dimension: 3,
        ..GameConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Board::new(&config, &mut rng).unwrap_err(),
        BoardError::PlacementExhausted {
            ship: "Carrier".to_string(),
            attempts: 0
        }
    );
}

#[test]
fn test_full_board_exhausts_attempt_budget() {
    let config = GameConfig {
        x_dimension: 2,
        y_dimension: 2,
        roster: vec![
            ShipDef::new("A", 2),
            ShipDef::new("B", 2),
            ShipDef::new("C", 2),
        ],
        placement_attempts: 200,
        ..GameConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(11);
    assert_eq!(
        Board::new(&config, &mut rng).unwrap_err(),
        BoardError::PlacementExhausted {
            ship: "C".to_string(),
            attempts: 200
        }
    );
}

#[test]
fn test_horizontal_only_placement() {
    let config = GameConfig {
        placement: PlacementMode::HorizontalOnly,
        ..GameConfig::default()
    };
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(&config, &mut rng).unwrap();
        for ship in board.fleet() {
            let row = ship.locations()[0].row();
            assert!(ship.locations().iter().all(|c| c.row() == row));
        }
    }
}

#[test]
fn test_same_seed_same_fleet() {
    let config = GameConfig::default();
    let a = Board::new(&config, &mut SmallRng::seed_from_u64(42)).unwrap();
    let b = Board::new(&config, &mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.occupied_coordinates(), b.occupied_coordinates());
}

#[test]
fn test_views_hide_ships_from_opponent() {
    let config = single_destroyer();
    let mut board = destroyer_board(&config);
    board.receive_shot(Coordinate::new(5, 5)).unwrap();
    board.receive_shot(Coordinate::new(1, 1)).unwrap();

    let own = board.own_view();
    assert_eq!(own.mark(Coordinate::new(5, 5)), Some(CellMark::Hit));
    assert_eq!(own.mark(Coordinate::new(6, 5)), Some(CellMark::Ship));
    assert_eq!(own.mark(Coordinate::new(1, 1)), Some(CellMark::Miss));
    assert_eq!(own.mark(Coordinate::new(2, 2)), Some(CellMark::Empty));
    assert_eq!(own.mark(Coordinate::new(11, 2)), None);

    let tracking = board.tracking_view();
    assert_eq!(tracking.count(CellMark::Ship), 0);
    assert_eq!(tracking.count(CellMark::Hit), 1);
    assert_eq!(tracking.count(CellMark::Miss), 1);
    assert_eq!(tracking.mark(Coordinate::new(6, 5)), Some(CellMark::Empty));
    assert_eq!(tracking.rows().count(), 10);
}

#[test]
fn test_invalid_config_rejected() {
    let config = GameConfig {
        x_dimension: 27,
        ..GameConfig::default()
    };
    assert!(matches!(Board::empty(&config), Err(BoardError::InvalidConfig(_))));

    let config = GameConfig {
        x_dimension: MAX_COLUMNS,
        y_dimension: usize::MAX / 2,
        ..GameConfig::default()
    };
    assert!(matches!(config.validate(), Err(BoardError::InvalidConfig(_))));
    let mut rng = SmallRng::seed_from_u64(3);
    assert!(matches!(
        Board::new(&config, &mut rng),
        Err(BoardError::InvalidConfig(_))
    ));

    let widest = GameConfig {
        x_dimension: MAX_COLUMNS,
        y_dimension: MAX_ROWS,
        ..GameConfig::default()
    };
    let board = Board::new(&widest, &mut rng).unwrap();
    assert_eq!(board.tracking_view().rows().count(), MAX_ROWS);

    let config = GameConfig {
        roster: Vec::new(),
        ..GameConfig::default()
    };
    assert!(matches!(config.validate(), Err(BoardError::InvalidConfig(_))));
    assert_eq!(GameConfig::default().total_ship_cells(), TOTAL_SHIP_CELLS);
}
