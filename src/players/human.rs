//! Human console player

use std::io::{BufRead, Write};

use super::Player;
use crate::{
    Result,
    error::Error,
    game::{Board, GameOutcome, Mark},
};

/// Blocking console player.
///
/// Prompts for `row,col` on stdin and blocks the game loop until input
/// arrives; there is deliberately no timeout. Malformed text is caught
/// and re-prompted locally, so only range/occupancy rejection is left to
/// the engine.
pub struct HumanPlayer {
    mark: Option<Mark>,
    input: Box<dyn BufRead>,
}

impl HumanPlayer {
    /// Read moves from stdin
    pub fn new() -> Self {
        Self::with_input(Box::new(std::io::stdin().lock()))
    }

    /// Read moves from an arbitrary source (tests, scripted sessions)
    pub fn with_input(input: Box<dyn BufRead>) -> Self {
        Self { mark: None, input }
    }

    fn prompt(&self) {
        match self.mark {
            Some(mark) => print!("Player {mark} (row,col): "),
            None => print!("Your move (row,col): "),
        }
        let _ = std::io::stdout().flush();
    }

    fn parse_line(line: &str) -> Option<(i64, i64)> {
        let (row, col) = line.split_once(',')?;
        let row = row.trim().parse().ok()?;
        let col = col.trim().parse().ok()?;
        Some((row, col))
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for HumanPlayer {
    fn assign_mark(&mut self, mark: Mark) {
        self.mark = Some(mark);
    }

    fn select_move(&mut self, _board: &Board) -> Result<(i64, i64)> {
        loop {
            self.prompt();
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }
            match Self::parse_line(&line) {
                Some(mv) => return Ok(mv),
                None => println!("Invalid input, expected: row,col"),
            }
        }
    }

    fn end_of_game(&mut self, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn player_with(lines: &str) -> HumanPlayer {
        HumanPlayer::with_input(Box::new(Cursor::new(lines.to_string())))
    }

    #[test]
    fn test_parses_row_col_pair() {
        let board = Board::new(3, 3);
        let mut player = player_with("1, 2\n");
        assert_eq!(player.select_move(&board).unwrap(), (1, 2));
    }

    #[test]
    fn test_malformed_text_is_reprompted_not_fatal() {
        let board = Board::new(3, 3);
        let mut player = player_with("garbage\n1-2\n2,a\n0,2\n");
        assert_eq!(player.select_move(&board).unwrap(), (0, 2));
    }

    #[test]
    fn test_negative_input_is_passed_through_for_engine_validation() {
        let board = Board::new(3, 3);
        let mut player = player_with("-1,0\n");
        assert_eq!(player.select_move(&board).unwrap(), (-1, 0));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let board = Board::new(3, 3);
        let mut player = player_with("");
        assert!(matches!(player.select_move(&board), Err(Error::InputClosed)));
    }
}
