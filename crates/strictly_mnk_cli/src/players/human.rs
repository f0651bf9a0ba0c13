//! Human player that reads moves from a line-oriented input.

use std::io::{BufRead, Write};
use strictly_mnk::{Board, MoveSource, Outcome, Position, Side};
use tracing::{debug, warn};

/// Position returned when input ends; it is off every board and so forfeits.
const RESIGN: Position = Position { row: -1, col: -1 };

/// Human player answering prompts with `row col` lines.
///
/// The board is shown before every prompt. Unparseable lines are re-prompted.
/// Coordinates are passed through unchecked, so an off-board or occupied
/// answer forfeits like any other source's would.
pub struct HumanSource<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanSource<R, W> {
    /// Creates a human source over the given input and output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Writes to the output. Display problems never end the match.
    fn show(&mut self, text: &str) {
        if let Err(e) = self.output.write_all(text.as_bytes()).and_then(|_| self.output.flush()) {
            warn!(error = %e, "Failed to write prompt");
        }
    }
}

/// Parses `row col`, separated by whitespace or a comma.
pub fn parse_position(line: &str) -> Option<Position> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(_) => None,
        None => Some(Position::new(row, col)),
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanSource<R, W> {
    fn play(&mut self, board: &Board, side: Side) -> Position {
        let prompt = format!("{}{} ({}), enter row and column: ", board.display(), self.name, side);
        loop {
            self.show(&prompt);
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    warn!(source = %self.name, "Input closed, resigning");
                    return RESIGN;
                }
                Err(e) => {
                    warn!(source = %self.name, error = %e, "Failed to read move, resigning");
                    return RESIGN;
                }
                Ok(_) => {}
            }

            match parse_position(&line) {
                Some(pos) => {
                    debug!(source = %self.name, %pos, "Human move");
                    return pos;
                }
                None => self.show("Expected two numbers, e.g. `1 2`.\n"),
            }
        }
    }

    fn done(&mut self, outcome: Outcome) {
        self.show(&format!("Match over: {outcome}.\n"));
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn human(input: &str) -> HumanSource<Cursor<Vec<u8>>, Vec<u8>> {
        HumanSource::new("you", Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1 2\n"), Some(Position::new(1, 2)));
        assert_eq!(parse_position("  0,4 "), Some(Position::new(0, 4)));
        assert_eq!(parse_position("-1 3"), Some(Position::new(-1, 3)));
        assert_eq!(parse_position("1"), None);
        assert_eq!(parse_position("1 2 3"), None);
        assert_eq!(parse_position("a b"), None);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut source = human("nonsense\n2 1\n");
        let pos = source.play(&Board::empty(3, 3), Side::O);
        assert_eq!(pos, Position::new(2, 1));

        let shown = String::from_utf8(source.output).unwrap();
        assert_eq!(shown.matches("enter row and column").count(), 2);
        assert!(shown.starts_with("- - -\n- - -\n- - -\nyou (O)"));
        assert!(shown.contains("Expected two numbers"));
    }

    #[test]
    fn test_end_of_input_resigns() {
        let mut source = human("");
        assert_eq!(source.play(&Board::empty(3, 3), Side::X), RESIGN);
        assert!(!Board::empty(3, 3).contains(RESIGN));
    }

    #[test]
    fn test_done_reports_outcome() {
        let mut source = human("");
        source.done(Outcome::Winner(Side::X));
        assert_eq!(String::from_utf8(source.output).unwrap(), "Match over: X wins.\n");
    }
}
