use log::info;

use crate::ai::{mobility, Agent};
use crate::config::GameConfig;
use crate::error::PlayError;

use super::{has_legal_move, Board, Move, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

impl GameOutcome {
    /// Decide a game that ran out of turns: the side with more mobility wins.
    pub fn by_mobility(board: &Board) -> Self {
        let a = mobility(board, Side::A);
        let b = mobility(board, Side::B);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Side::A),
            std::cmp::Ordering::Less => GameOutcome::Winner(Side::B),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The side to move could not move and lost.
    NoLegalMoves { winner: Side },
    /// All rounds were played; decided by mobility.
    TurnLimitReached { outcome: GameOutcome },
}

impl EndReason {
    pub fn outcome(&self) -> GameOutcome {
        match *self {
            EndReason::NoLegalMoves { winner } => GameOutcome::Winner(winner),
            EndReason::TurnLimitReached { outcome } => outcome,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    ToMove(Side),
    Ended(EndReason),
}

/// One game: the board, its configuration and the turn state machine.
///
/// Side A always moves first. Whichever side is not `config.human_side` is
/// played by the computer agent.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    config: GameConfig,
    state: TurnState,
    plies: usize,
    last_move: Option<(Side, Move)>,
}

impl GameSession {
    /// Start a game on an already populated board.
    pub fn new(config: GameConfig, board: Board) -> Self {
        GameSession {
            board,
            config,
            state: TurnState::ToMove(Side::A),
            plies: 0,
            last_move: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::Ended(_))
    }

    /// Plies played so far.
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// 1-based number of the round in progress.
    pub fn round(&self) -> usize {
        self.plies / 2 + 1
    }

    /// Rounds left before the turn limit, counting the current one.
    pub fn remaining_rounds(&self) -> usize {
        self.config.turn_limit.saturating_sub(self.plies / 2)
    }

    pub fn last_move(&self) -> Option<(Side, Move)> {
        self.last_move
    }

    fn ply_limit(&self) -> usize {
        self.config.turn_limit.saturating_mul(2)
    }

    fn end(&mut self, reason: EndReason) -> TurnState {
        info!("game over after {} plies: {:?}", self.plies, reason);
        self.state = TurnState::Ended(reason);
        self.state
    }

    /// Play one ply and return the new state.
    ///
    /// The move returned by the agent is applied as is; agents are
    /// responsible for legality.
    pub fn step(
        &mut self,
        human: &mut dyn Agent,
        computer: &mut dyn Agent,
    ) -> Result<TurnState, PlayError> {
        let side = match self.state {
            TurnState::Ended(_) => return Ok(self.state),
            TurnState::ToMove(side) => side,
        };

        if self.plies >= self.ply_limit() {
            let outcome = GameOutcome::by_mobility(&self.board);
            return Ok(self.end(EndReason::TurnLimitReached { outcome }));
        }
        if !has_legal_move(&self.board, side) {
            return Ok(self.end(EndReason::NoLegalMoves {
                winner: side.other(),
            }));
        }

        let agent: &mut dyn Agent = if side == self.config.human_side {
            human
        } else {
            computer
        };
        let remaining = self.remaining_rounds();
        let mv = agent.select_move(&mut self.board, side, remaining)?;
        self.board.apply(&mv);
        info!("round {}: {side} ({}) moves {mv}", self.round(), agent.name());

        self.plies += 1;
        self.last_move = Some((side, mv));

        if self.plies >= self.ply_limit() {
            let outcome = GameOutcome::by_mobility(&self.board);
            return Ok(self.end(EndReason::TurnLimitReached { outcome }));
        }
        self.state = TurnState::ToMove(side.other());
        Ok(self.state)
    }

    /// Play until the game ends.
    pub fn play(
        &mut self,
        human: &mut dyn Agent,
        computer: &mut dyn Agent,
    ) -> Result<EndReason, PlayError> {
        loop {
            if let TurnState::Ended(reason) = self.step(human, computer)? {
                return Ok(reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAgent, RandomAgent};
    use crate::game::placement::{board_from_coords, random_board, validate_counts};
    use crate::game::{Cell, Coord};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Plays a fixed list of moves and counts how often it was asked.
    struct ScriptedAgent {
        moves: Vec<Move>,
        calls: usize,
    }

    impl ScriptedAgent {
        fn new(moves: Vec<Move>) -> Self {
            ScriptedAgent { moves, calls: 0 }
        }
    }

    impl Agent for ScriptedAgent {
        fn select_move(
            &mut self,
            _board: &mut Board,
            side: Side,
            _remaining_rounds: usize,
        ) -> Result<Move, PlayError> {
            let mv = self.moves.get(self.calls).copied();
            self.calls += 1;
            mv.ok_or(PlayError::NoLegalMoves(side))
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    fn config(turn_limit: usize, human_side: Side) -> GameConfig {
        GameConfig {
            turn_limit,
            human_side,
            ..GameConfig::default()
        }
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::new(from.parse().unwrap(), to.parse().unwrap())
    }

    #[test]
    fn test_initial_state() {
        let session = GameSession::new(config(5, Side::A), Board::new());
        assert_eq!(session.state(), TurnState::ToMove(Side::A));
        assert!(!session.is_over());
        assert_eq!(session.round(), 1);
        assert_eq!(session.remaining_rounds(), 5);
    }

    #[test]
    fn test_blocked_first_mover_loses_immediately() {
        // A in the corner, walled in by B.
        let board = board_from_coords(&[Coord::new(0, 0)], &[Coord::new(0, 1), Coord::new(1, 0)])
            .unwrap();
        let mut session = GameSession::new(config(5, Side::A), board);
        let mut human = ScriptedAgent::new(vec![]);
        let mut computer = ScriptedAgent::new(vec![]);

        let state = session.step(&mut human, &mut computer).unwrap();
        assert_eq!(
            state,
            TurnState::Ended(EndReason::NoLegalMoves { winner: Side::B })
        );
        assert_eq!(human.calls + computer.calls, 0);
        assert_eq!(session.board(), &board);
        assert_eq!(session.plies(), 0);
    }

    #[test]
    fn test_partly_blocked_side_keeps_playing() {
        // A closes b1, but B can still move its g7 piece.
        let board = board_from_coords(
            &[Coord::new(0, 1), Coord::new(2, 0)],
            &[Coord::new(0, 0), Coord::new(6, 6)],
        )
        .unwrap();
        let mut human = ScriptedAgent::new(vec![mv("c1", "b1")]);
        let mut computer = ScriptedAgent::new(vec![mv("g7", "f7")]);
        let mut session = GameSession::new(config(10, Side::A), board);

        assert_eq!(
            session.step(&mut human, &mut computer).unwrap(),
            TurnState::ToMove(Side::B)
        );
        assert_eq!(session.last_move(), Some((Side::A, mv("c1", "b1"))));
        // B still has the g7 piece.
        assert_eq!(
            session.step(&mut human, &mut computer).unwrap(),
            TurnState::ToMove(Side::A)
        );
        assert_eq!(computer.calls, 1);
        assert_eq!(session.board().get(5, 6), Ok(Cell::B));
    }

    #[test]
    fn test_side_sealed_in_mid_game_loses() {
        let board = board_from_coords(&[Coord::new(0, 1), Coord::new(2, 0)], &[Coord::new(0, 0)])
            .unwrap();
        let mut human = ScriptedAgent::new(vec![mv("c1", "b1")]);
        let mut computer = ScriptedAgent::new(vec![]);
        let mut session = GameSession::new(config(10, Side::A), board);

        let reason = session.play(&mut human, &mut computer).unwrap();
        assert_eq!(reason, EndReason::NoLegalMoves { winner: Side::A });
        assert_eq!(reason.outcome(), GameOutcome::Winner(Side::A));
        assert_eq!(computer.calls, 0);
        assert_eq!(session.plies(), 1);
    }

    #[test]
    fn test_mobility_decides_turn_limit() {
        // A reaches 2 + 3 cells, B reaches 3.
        let board = board_from_coords(
            &[Coord::new(0, 0), Coord::new(6, 3)],
            &[Coord::new(3, 0)],
        )
        .unwrap();
        assert_eq!(mobility(&board, Side::A), 5);
        assert_eq!(mobility(&board, Side::B), 3);
        assert_eq!(GameOutcome::by_mobility(&board), GameOutcome::Winner(Side::A));

        let mirrored = board_from_coords(
            &[Coord::new(3, 0)],
            &[Coord::new(0, 0), Coord::new(6, 3)],
        )
        .unwrap();
        assert_eq!(GameOutcome::by_mobility(&mirrored), GameOutcome::Winner(Side::B));
    }

    #[test]
    fn test_equal_mobility_is_draw() {
        let board = board_from_coords(&[Coord::new(0, 0)], &[Coord::new(6, 6)]).unwrap();
        assert_eq!(GameOutcome::by_mobility(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_turn_limit_ends_game() {
        let board = board_from_coords(
            &[Coord::new(0, 0), Coord::new(6, 3)],
            &[Coord::new(3, 0)],
        )
        .unwrap();
        // Both pieces shuffle and come back.
        let mut human = ScriptedAgent::new(vec![mv("a1", "a2"), mv("a2", "a1")]);
        let mut computer = ScriptedAgent::new(vec![mv("d1", "e1"), mv("e1", "d1")]);
        let mut session = GameSession::new(config(2, Side::A), board);

        let reason = session.play(&mut human, &mut computer).unwrap();
        assert_eq!(session.plies(), 4);
        assert_eq!(session.board(), &board);
        assert_eq!(
            reason,
            EndReason::TurnLimitReached {
                outcome: GameOutcome::Winner(Side::A)
            }
        );
    }

    #[test]
    fn test_ended_is_terminal() {
        let board = board_from_coords(&[Coord::new(0, 0)], &[Coord::new(0, 1), Coord::new(1, 0)])
            .unwrap();
        let mut session = GameSession::new(config(5, Side::B), board);
        let mut human = ScriptedAgent::new(vec![]);
        let mut computer = ScriptedAgent::new(vec![]);

        let first = session.step(&mut human, &mut computer).unwrap();
        let second = session.step(&mut human, &mut computer).unwrap();
        assert_eq!(first, second);
        assert!(session.is_over());
        assert_eq!(human.calls + computer.calls, 0);
    }

    #[test]
    fn test_remaining_rounds_counts_down_per_round() {
        let board = board_from_coords(&[Coord::new(0, 0)], &[Coord::new(6, 6)]).unwrap();
        let mut human = ScriptedAgent::new(vec![mv("a1", "a2"), mv("a2", "a1")]);
        let mut computer = ScriptedAgent::new(vec![mv("g7", "g6"), mv("g6", "g7")]);
        let mut session = GameSession::new(config(3, Side::A), board);

        assert_eq!(session.remaining_rounds(), 3);
        session.step(&mut human, &mut computer).unwrap();
        assert_eq!(session.remaining_rounds(), 3);
        session.step(&mut human, &mut computer).unwrap();
        assert_eq!(session.remaining_rounds(), 2);
        assert_eq!(session.round(), 2);
    }

    #[test]
    fn test_unbounded_turn_limit_does_not_overflow() {
        let board = board_from_coords(&[Coord::new(0, 0)], &[Coord::new(6, 6)]).unwrap();
        let mut session = GameSession::new(config(usize::MAX, Side::A), board);
        let mut human = RandomAgent::seeded(1);
        let mut computer = RandomAgent::seeded(2);

        assert_eq!(
            session.step(&mut human, &mut computer).unwrap(),
            TurnState::ToMove(Side::B)
        );
        assert_eq!(
            session.step(&mut human, &mut computer).unwrap(),
            TurnState::ToMove(Side::A)
        );
        assert_eq!(session.remaining_rounds(), usize::MAX - 1);
    }

    #[test]
    fn test_minimax_vs_random_completes() {
        let mut rng = StdRng::seed_from_u64(21);
        for seed in 0..3 {
            let board = random_board(5, &mut rng).unwrap();
            let mut session = GameSession::new(config(6, Side::B), board);
            let mut human = RandomAgent::seeded(seed);
            let mut computer = MinimaxAgent::new(2);

            let reason = session.play(&mut human, &mut computer).unwrap();
            assert!(session.plies() <= 12);
            assert!(validate_counts(session.board(), 5).is_ok());
            if let EndReason::TurnLimitReached { outcome } = reason {
                assert_eq!(session.plies(), 12);
                assert_eq!(outcome, GameOutcome::by_mobility(session.board()));
            }
        }
    }
}
