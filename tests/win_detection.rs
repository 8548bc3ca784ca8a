//! Differential tests for local win detection
//!
//! The clipped neighborhood check around the last move must agree with an
//! exhaustive full-board scan on every reachable position.

use mnk::game::{Board, Coord, Mark, find_winner, is_winning_move};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Play random legal moves until the board is terminal, asserting after
/// every move that the local check agrees with the naive reference.
fn play_random_game(rows: usize, cols: usize, win_len: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(rows, cols);
    let mut mark = Mark::X;

    loop {
        let free = board.free_cells();
        let Some(&cell) = free.choose(&mut rng) else {
            break;
        };
        board.place(cell, mark).unwrap();

        let local = is_winning_move(&board, win_len, cell);
        let global = find_winner(&board, win_len).is_some();
        assert_eq!(
            local, global,
            "divergence on {rows}x{cols} K={win_len} seed={seed} after move {cell}"
        );

        if local {
            assert_eq!(find_winner(&board, win_len), Some(mark));
            break;
        }
        mark = mark.opponent();
    }
}

#[test]
fn test_local_check_matches_full_scan_3x3() {
    for seed in 0..200 {
        play_random_game(3, 3, 3, seed);
    }
}

#[test]
fn test_local_check_matches_full_scan_4x4_k3() {
    for seed in 0..200 {
        play_random_game(4, 4, 3, seed);
    }
}

#[test]
fn test_local_check_matches_full_scan_5x5_k4() {
    for seed in 0..200 {
        play_random_game(5, 5, 4, seed);
    }
}

#[test]
fn test_local_check_matches_full_scan_rectangular_boards() {
    for seed in 0..100 {
        play_random_game(3, 7, 3, seed);
        play_random_game(7, 3, 3, seed);
        play_random_game(4, 6, 4, seed);
    }
}

#[test]
fn test_edge_and_corner_moves_never_panic() {
    // Fill the border cells first so every win check clips the
    // neighborhood against at least one board edge
    let mut board = Board::new(5, 5);
    let mut mark = Mark::X;
    for row in 0..5 {
        for col in 0..5 {
            if row == 0 || row == 4 || col == 0 || col == 4 {
                let cell = Coord::new(row, col);
                board.place(cell, mark).unwrap();
                let local = is_winning_move(&board, 4, cell);
                assert_eq!(local, find_winner(&board, 4).is_some());
                if local {
                    return;
                }
                mark = mark.opponent();
            }
        }
    }
}
