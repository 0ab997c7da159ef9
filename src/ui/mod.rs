//! Console front end: prompts, board printing and the human agent.

mod console;
mod human;

pub use console::Console;
pub use human::ConsoleAgent;
