//! Move-line encoding.
//!
//! A turn's reply is a single line of `x y direction` triples separated by
//! spaces. Cells that hold are simply left out.

use crate::board::{Direction, Location, Move};

use super::frame::{parse_number, FrameError};

/// Formats a single move as `x y direction`.
pub fn format_move(m: &Move) -> String {
    format!("{} {} {}", m.location.x, m.location.y, m.direction.code())
}

/// Formats a turn's moves as one line, dropping holds.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .filter(|m| !m.is_hold())
        .map(format_move)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a move line back into moves.
pub fn parse_moves(line: &str) -> Result<Vec<Move>, FrameError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() % 3 != 0 {
        return Err(FrameError::WrongCount {
            field: "move",
            expected: tokens.len() / 3 * 3 + 3,
            actual: tokens.len(),
        });
    }

    tokens
        .chunks_exact(3)
        .map(|chunk| {
            let x = parse_number::<usize>(chunk[0], "move x")?;
            let y = parse_number::<usize>(chunk[1], "move y")?;
            let code = parse_number::<u8>(chunk[2], "move direction")?;
            let direction = Direction::from_code(code).ok_or_else(|| FrameError::InvalidNumber {
                field: "move direction",
                token: chunk[2].to_string(),
            })?;
            Ok(Move::new(Location::new(x, y), direction))
        })
        .collect()
}
