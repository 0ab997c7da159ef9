//! # Gridlock
//!
//! A two-player game on a 7x7 board. Pieces never capture; each ply moves one
//! piece a single step up, down, left or right into an empty cell. A side that
//! cannot move loses, and when the turn limit runs out the side with more
//! room to move wins. One side is played by an alpha-beta minimax search.
//!
//! ## Modules
//!
//! - [`game`] — Board, sides, coordinates, move generation, placement, turn state machine
//! - [`ai`] — Agent trait, mobility evaluation, minimax search, random agent
//! - [`ui`] — Console prompts and the human agent
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
