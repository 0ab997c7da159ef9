//! Move selection: the agent trait, the mobility evaluator, the alpha-beta
//! minimax search and a random mover.

mod agent;
pub mod evaluator;
mod random;
pub mod search;

pub use agent::Agent;
pub use evaluator::{mobility, static_eval, Heuristic, MobilityHeuristic, Score};
pub use random::RandomAgent;
pub use search::{MinimaxAgent, SearchStats, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
