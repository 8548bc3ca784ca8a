//! Win detection for the generalized m,n,k-game

use super::board::{Board, Coord, Mark};

/// Direction axes for line runs: horizontal, vertical, diagonal, anti-diagonal
const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Check whether the most recent move completed a winning line.
///
/// A move can only complete a line passing through its own cell, so the
/// search is confined to the cells at most `win_len - 1` steps away along
/// the four line axes (the clipped (2K-1)x(2K-1) neighborhood of the last
/// move). For each axis the contiguous run of identical marks through the
/// last move is counted; any run of at least `win_len` wins.
pub fn is_winning_move(board: &Board, win_len: usize, last: Coord) -> bool {
    let Some(mark) = board.get(last) else {
        return false;
    };

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let run = 1 + count_run(board, mark, last, dr, dc, win_len)
            + count_run(board, mark, last, -dr, -dc, win_len);
        run >= win_len
    })
}

/// Count contiguous cells holding `mark` along one direction ray from
/// `from` (exclusive), looking at most `win_len - 1` steps out.
fn count_run(board: &Board, mark: Mark, from: Coord, dr: i64, dc: i64, win_len: usize) -> usize {
    let mut count = 0;
    let mut row = from.row as i64;
    let mut col = from.col as i64;

    for _ in 1..win_len {
        row += dr;
        col += dc;
        if row < 0 || col < 0 {
            break;
        }
        let coord = Coord::new(row as usize, col as usize);
        if board.get(coord) != Some(mark) {
            break;
        }
        count += 1;
    }
    count
}

/// Exhaustive full-board winner scan.
///
/// Slower reference for [`is_winning_move`]; checks every length-K run on
/// the board regardless of where the last move landed. Used by the
/// differential tests and by callers that inspect a board without a
/// last-move hint.
pub fn find_winner(board: &Board, win_len: usize) -> Option<Mark> {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let start = Coord::new(row, col);
            let Some(mark) = board.get(start) else {
                continue;
            };
            for &(dr, dc) in &DIRECTIONS {
                if run_from(board, mark, start, dr, dc) >= win_len {
                    return Some(mark);
                }
            }
        }
    }
    None
}

fn run_from(board: &Board, mark: Mark, start: Coord, dr: i64, dc: i64) -> usize {
    let mut count = 0;
    let mut row = start.row as i64;
    let mut col = start.col as i64;

    loop {
        if row < 0 || col < 0 {
            break;
        }
        let coord = Coord::new(row as usize, col as usize);
        if board.get(coord) != Some(mark) {
            break;
        }
        count += 1;
        row += dr;
        col += dc;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: usize, cols: usize, layout: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new(rows, cols);
        for &(row, col, mark) in layout {
            board.place(Coord::new(row, col), mark).unwrap();
        }
        board
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from(
            3,
            3,
            &[
                (1, 0, Mark::X),
                (1, 1, Mark::X),
                (1, 2, Mark::X),
                (0, 0, Mark::O),
                (2, 2, Mark::O),
            ],
        );
        assert!(is_winning_move(&board, 3, Coord::new(1, 2)));
        assert!(is_winning_move(&board, 3, Coord::new(1, 0)));
        assert_eq!(find_winner(&board, 3), Some(Mark::X));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_from(
            3,
            3,
            &[(0, 2, Mark::O), (1, 2, Mark::O), (2, 2, Mark::O)],
        );
        assert!(is_winning_move(&board, 3, Coord::new(1, 2)));
    }

    #[test]
    fn test_diagonal_win_at_corner() {
        // Last move at a corner must clip the neighborhood without panicking
        let board = board_from(
            3,
            3,
            &[(0, 0, Mark::X), (1, 1, Mark::X), (2, 2, Mark::X)],
        );
        assert!(is_winning_move(&board, 3, Coord::new(0, 0)));
        assert!(is_winning_move(&board, 3, Coord::new(2, 2)));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from(
            3,
            3,
            &[(0, 2, Mark::O), (1, 1, Mark::O), (2, 0, Mark::O)],
        );
        assert!(is_winning_move(&board, 3, Coord::new(1, 1)));
    }

    #[test]
    fn test_no_win_on_mixed_line() {
        let board = board_from(
            3,
            3,
            &[(0, 0, Mark::X), (0, 1, Mark::O), (0, 2, Mark::X)],
        );
        assert!(!is_winning_move(&board, 3, Coord::new(0, 2)));
        assert_eq!(find_winner(&board, 3), None);
    }

    #[test]
    fn test_win_shorter_than_board() {
        // K = 3 on a 5x5 board; the line does not have to span the board
        let board = board_from(
            5,
            5,
            &[(2, 1, Mark::X), (2, 2, Mark::X), (2, 3, Mark::X)],
        );
        assert!(is_winning_move(&board, 3, Coord::new(2, 2)));
        assert!(!is_winning_move(&board, 4, Coord::new(2, 2)));
    }

    #[test]
    fn test_move_joining_two_runs() {
        // X X . X X with the gap filled last: run of 5 >= K, still a win
        let board = board_from(
            5,
            5,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::X),
                (0, 2, Mark::X),
                (0, 3, Mark::X),
                (0, 4, Mark::X),
            ],
        );
        assert!(is_winning_move(&board, 4, Coord::new(0, 2)));
    }

    #[test]
    fn test_empty_last_cell_is_not_a_win() {
        let board = Board::new(3, 3);
        assert!(!is_winning_move(&board, 3, Coord::new(1, 1)));
    }
}
