use minefield::{BoardConfig, CellValue, Difficulty, Game, GameError, GameState, Position, RevealOutcome};
use std::collections::HashSet;

fn all_positions(game: &Game) -> impl Iterator<Item = Position> {
    let (rows, cols) = game.dimensions();
    (0..rows).flat_map(move |r| (0..cols).map(move |c| Position::new(r, c)))
}

fn revealed_safe_cells(game: &Game) -> usize {
    all_positions(game)
        .filter(|&p| game.is_revealed(p) && game.adjacency_value(p) != CellValue::Mine)
        .count()
}

/// Drains every mine; afterwards each cell's adjacency value tells whether it is one.
fn drain_all(game: &mut Game) -> Vec<Position> {
    std::iter::from_fn(|| game.drain_next_mine()).collect()
}

#[test]
fn test_first_move_is_always_safe() {
    let config = Difficulty::Easy.config();
    let mut failures = 0;

    for seed in 0..1_000u64 {
        let mut game = Game::with_seed(config, seed);
        let first = Position::new((seed % 8) as usize, ((seed / 8) % 8) as usize);

        let outcome = game.reveal(first);
        let mines = drain_all(&mut game);

        let too_close = mines.iter().any(|m| m.chebyshev_distance(first) <= 2);
        if outcome != RevealOutcome::OpenSpace || too_close || mines.len() != 10 {
            println!("Failure on seed {}", seed);
            failures += 1;
        }
    }

    assert_eq!(failures, 0, "Unsafe opening on {} out of 1,000 seeds", failures);
}

#[test]
fn test_scenario_a_corner_opening() {
    for seed in 0..100u64 {
        let mut game = Game::with_seed(BoardConfig::new(8, 8, 10).unwrap(), seed);
        let before = game.spaces_remaining();

        game.reveal(Position::new(0, 0));

        assert!(game.spaces_remaining() < before);
        assert_eq!(before - game.spaces_remaining(), revealed_safe_cells(&game));
        let mines = drain_all(&mut game);
        assert!(mines.iter().all(|m| m.row > 2 || m.col > 2));
    }
}

#[test]
fn test_scenario_b_no_flags_left() {
    let mut game = Game::with_seed(BoardConfig::new(5, 5, 2).unwrap(), 9);
    assert!(game.toggle_flag(Position::new(0, 0)));
    assert!(game.toggle_flag(Position::new(0, 1)));
    assert_eq!(game.flags_remaining(), 0);

    assert!(!game.toggle_flag(Position::new(4, 4)));
    assert!(!game.is_flagged(Position::new(4, 4)));
    assert_eq!(game.flags_remaining(), 0);
}

#[test]
fn test_scenario_c_flood_fill_returns_flag() {
    let config = BoardConfig::new(6, 6, 2).unwrap();
    let mut game = Game::with_mines(config, &[Position::new(5, 5), Position::new(5, 4)]).unwrap();

    assert!(game.toggle_flag(Position::new(2, 2)));
    assert_eq!(game.flags_remaining(), 1);

    assert_eq!(game.reveal(Position::new(1, 1)), RevealOutcome::OpenSpace);

    assert!(game.is_revealed(Position::new(2, 2)));
    assert!(!game.is_flagged(Position::new(2, 2)));
    assert_eq!(game.flags_remaining(), 2);
}

#[test]
fn test_scenario_d_mine_count_boundary() {
    assert!(Game::try_new(5, 5, 1).is_ok());
    assert!(Game::try_new(5, 5, 15).is_ok());
    assert_eq!(
        Game::try_new(5, 5, 16).unwrap_err(),
        GameError::InvalidMineCount { rows: 5, cols: 5, mines: 16 }
    );
    assert_eq!(
        Game::try_new(0, 5, 1).unwrap_err(),
        GameError::InvalidDimensions { rows: 0, cols: 5 }
    );
}

#[test]
fn test_scenario_d_densest_board_still_opens() {
    for seed in 0..200u64 {
        let mut game = Game::with_seed(BoardConfig::new(5, 5, 15).unwrap(), seed);
        // Only the opening's 3x3 is guaranteed clear here, so one safe cell is left over
        assert_eq!(game.reveal(Position::new(2, 2)), RevealOutcome::OpenSpace);
        assert_eq!(game.spaces_remaining(), 1);
        assert_eq!(drain_all(&mut game).len(), 15);
    }
}

#[test]
fn test_scenario_e_drain_every_mine() {
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        let mut game = Game::with_seed(config, 2024);
        game.reveal(Position::new(config.rows() / 2, config.cols() / 2));

        let mut calls = 0;
        let mut drained = HashSet::new();
        while let Some(mine) = game.drain_next_mine() {
            calls += 1;
            assert!(drained.insert(mine), "{:?} drained twice", mine);
            assert!(game.is_revealed(mine));
            assert_eq!(game.adjacency_value(mine), CellValue::Mine);
        }

        assert_eq!(calls, config.mines());
        assert_eq!(game.mines_left_to_drain(), 0);
    }
}

#[test]
fn test_revealing_every_safe_cell_wins() {
    for seed in 0..50u64 {
        let config = Difficulty::Medium.config();
        let mut game = Game::with_seed(config, seed);
        game.reveal(Position::new(0, 0));

        // Learn the layout from a clone, then clear the real board
        let mut peek = game.clone();
        let mines: HashSet<Position> = drain_all(&mut peek).into_iter().collect();

        let safe: Vec<Position> = all_positions(&game).filter(|p| !mines.contains(p)).collect();
        for &pos in &safe {
            if !game.is_revealed(pos) {
                assert!(!game.is_won(), "won early on seed {} with {:?} hidden", seed, pos);
                assert_ne!(game.reveal(pos), RevealOutcome::MineHit);
            }
        }

        assert!(game.is_won());
        assert_eq!(game.spaces_remaining(), 0);
        assert_eq!(game.state(), GameState::Won);
    }
}

#[test]
fn test_mine_hit_does_not_touch_spaces() {
    let mut game = Game::with_seed(Difficulty::Easy.config(), 77);
    game.reveal(Position::new(4, 4));
    let before = game.spaces_remaining();

    let mut peek = game.clone();
    let mine = peek.drain_next_mine().unwrap();

    assert_eq!(game.reveal(mine), RevealOutcome::MineHit);
    assert_eq!(game.spaces_remaining(), before);
    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.drain_next_mine(), Some(mine));
}
