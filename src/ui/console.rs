use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use crate::error::{PlacementError, PlayError};
use crate::game::placement::place_at;
use crate::game::{Board, Coord, Side};

/// Line-oriented prompts over any reader/writer pair.
///
/// Every prompt re-asks until the answer parses; only I/O failure or end of
/// input gets out of the loop early.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print one line.
    pub fn say(&mut self, message: impl Display) -> Result<(), PlayError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn show_board(&mut self, board: &Board) -> Result<(), PlayError> {
        write!(self.output, "\n{board}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `message` without a newline and read one trimmed line.
    pub fn prompt(&mut self, message: &str) -> Result<String, PlayError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn prompt_number(
        &mut self,
        message: &str,
        range: RangeInclusive<usize>,
    ) -> Result<usize, PlayError> {
        loop {
            let answer = self.prompt(message)?;
            match answer.parse::<usize>() {
                Ok(n) if range.contains(&n) => return Ok(n),
                _ => self.say(format_args!(
                    "Please enter a number from {} to {}.",
                    range.start(),
                    range.end()
                ))?,
            }
        }
    }

    pub fn prompt_yes_no(&mut self, message: &str) -> Result<bool, PlayError> {
        loop {
            match self.prompt(message)?.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    pub fn prompt_coord(&mut self, message: &str) -> Result<Coord, PlayError> {
        loop {
            match self.prompt(message)?.parse::<Coord>() {
                Ok(coord) => return Ok(coord),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Ask which player the human wants to be.
    pub fn prompt_side(&mut self) -> Result<Side, PlayError> {
        let message = format!(
            "Do you want to play as {}({}) or {}({})? (1/2): ",
            Side::A,
            Side::A.symbol(),
            Side::B,
            Side::B.symbol()
        );
        let choice = self.prompt_number(&message, 1..=2)?;
        Ok(if choice == 1 { Side::A } else { Side::B })
    }

    /// Ask for every piece of both sides, side A first.
    pub fn place_pieces(&mut self, pieces: usize) -> Result<Board, PlayError> {
        let mut board = Board::new();
        for side in [Side::A, Side::B] {
            let mut placed = 0;
            while placed < pieces {
                let message = format!(
                    "Please enter coordinate of piece #{} for {side}: ",
                    placed + 1
                );
                let coord = self.prompt_coord(&message)?;
                match place_at(&mut board, side, coord) {
                    Ok(()) => placed += 1,
                    Err(PlacementError::Occupied(_)) => {
                        self.say("This coordinate is occupied by another piece!")?
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(board)
    }
}
