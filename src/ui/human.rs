use std::io::{BufRead, Write};

use crate::ai::Agent;
use crate::error::PlayError;
use crate::game::{Board, Move, Side};

use super::console::Console;

/// The human player, asking for moves on the console.
pub struct ConsoleAgent<R, W> {
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> ConsoleAgent<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        ConsoleAgent { console }
    }

    pub fn console_mut(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

impl<R: BufRead, W: Write> Agent for ConsoleAgent<R, W> {
    fn select_move(
        &mut self,
        board: &mut Board,
        side: Side,
        _remaining_rounds: usize,
    ) -> Result<Move, PlayError> {
        let from = loop {
            let from = self.console.prompt_coord("Choose piece to move: ")?;
            if board.get(from.row, from.col).ok().and_then(|c| c.side()) != Some(side) {
                self.console
                    .say("You don't have a piece at that location! Please try again!")?;
            } else if !from.neighbors().any(|to| board.is_empty_at(to)) {
                self.console
                    .say("That piece has no free neighbours! Choose another one!")?;
            } else {
                break from;
            }
        };

        loop {
            let to = self
                .console
                .prompt_coord(&format!("Choose the new position for {from}: "))?;
            let mv = Move::new(from, to);
            if mv.is_legal_on(board, side) {
                self.console.say(format_args!("{side} moves the piece at {mv}"))?;
                return Ok(mv);
            }
            self.console.say(
                "That is not a valid square! Try vertical and horizontal neighbours with no pieces!",
            )?;
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
