use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gridlock::ai::MinimaxAgent;
use gridlock::config::{GameConfig, MAX_TURN_LIMIT};
use gridlock::game::placement::{random_board, validate_counts, MAX_PIECES};
use gridlock::game::{EndReason, GameOutcome, GameSession, Side, TurnState};
use gridlock::ui::{Console, ConsoleAgent};

/// Play Gridlock against the computer on the console.
#[derive(Parser)]
#[command(name = "gridlock", about = "Play the 7x7 relocation game against the computer")]
struct Cli {
    /// Path to TOML configuration file. When it is missing, unset options are prompted for.
    #[arg(long, default_value = "gridlock.toml")]
    config: PathBuf,

    /// Pieces per side
    #[arg(long)]
    pieces: Option<usize>,

    /// Number of rounds before the game is decided by mobility
    #[arg(long)]
    turns: Option<usize>,

    /// Play as Player1 (1, moves first) or Player2 (2)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    player: Option<u8>,

    /// Maximum search depth of the computer
    #[arg(long)]
    depth: Option<usize>,

    /// Enter every piece's coordinate instead of placing them randomly
    #[arg(long)]
    manual_placement: bool,

    /// Seed for random placement
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let prompt_missing = !cli.config.exists();
    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    setup(&cli, &mut config, &mut console, prompt_missing)?;
    config.validate().context("invalid game configuration")?;

    let board = if config.random_placement {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        random_board(config.piece_count, &mut rng)?
    } else {
        console.place_pieces(config.piece_count)?
    };
    validate_counts(&board, config.piece_count)?;

    console.say("This is how the board looks like:")?;
    console.show_board(&board)?;
    config.human_side = match cli.player {
        Some(1) => Side::A,
        Some(_) => Side::B,
        None if prompt_missing => console.prompt_side()?,
        None => config.human_side,
    };

    let human_side = config.human_side;
    let mut computer = MinimaxAgent::new(config.max_depth);
    let mut human = ConsoleAgent::new(console);
    let mut session = GameSession::new(config, board);

    let reason = loop {
        if session.state() == TurnState::ToMove(human_side) {
            human
                .console_mut()
                .say(format_args!("\nTURN #{}", session.round()))?;
        }

        let plies = session.plies();
        let state = session.step(&mut human, &mut computer)?;
        if session.plies() > plies {
            let console = human.console_mut();
            if let Some((side, mv)) = session.last_move() {
                if side != human_side {
                    console.say(format_args!("Computer moves the piece at {mv}"))?;
                }
            }
            console.show_board(session.board())?;
        }

        if let TurnState::Ended(reason) = state {
            break reason;
        }
    };

    report(human.console_mut(), reason, human_side)?;
    Ok(())
}

/// Fill in whatever the command line did not set, prompting when there is no config file.
fn setup<R: BufRead, W: Write>(
    cli: &Cli,
    config: &mut GameConfig,
    console: &mut Console<R, W>,
    prompt_missing: bool,
) -> Result<()> {
    config.piece_count = match cli.pieces {
        Some(pieces) => pieces,
        None if prompt_missing => console.prompt_number(
            &format!("Please enter how many pieces each player will get (min 1, max {MAX_PIECES}): "),
            1..=MAX_PIECES,
        )?,
        None => config.piece_count,
    };
    config.turn_limit = match cli.turns {
        Some(turns) => turns,
        None if prompt_missing => console.prompt_number(
            &format!("Please enter turn limit for the game (min 1, max {MAX_TURN_LIMIT}): "),
            1..=MAX_TURN_LIMIT,
        )?,
        None => config.turn_limit,
    };
    if let Some(depth) = cli.depth {
        config.max_depth = depth;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.random_placement = if cli.manual_placement {
        false
    } else if prompt_missing {
        console.prompt_yes_no("Do you want the locations of the pieces randomized? (y/n): ")?
    } else {
        config.random_placement
    };
    Ok(())
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    reason: EndReason,
    human_side: Side,
) -> Result<()> {
    match reason {
        EndReason::NoLegalMoves { winner } => {
            console.say(format_args!("{} has no legal moves left.", winner.other()))?
        }
        EndReason::TurnLimitReached { .. } => console.say("Turn limit reached.")?,
    }

    let verdict = match reason.outcome() {
        GameOutcome::Draw => "Draw!",
        GameOutcome::Winner(side) if side == human_side => "You won!",
        GameOutcome::Winner(_) => "You lost!",
    };
    console.say(verdict)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("gridlock").chain(args.iter().copied()))
    }

    #[test]
    fn test_setup_prompts_for_everything_without_config() {
        let mut config = GameConfig::default();
        let mut c = console("3\n0\n1001\n8\ny\n");
        setup(&cli(&[]), &mut config, &mut c, true).unwrap();

        assert_eq!(config.piece_count, 3);
        assert_eq!(config.turn_limit, 8);
        assert!(config.random_placement);
        let out = output(c);
        assert!(out.contains("how many pieces"));
        assert_eq!(out.matches("Please enter a number from 1 to 1000.").count(), 2);
        assert!(out.contains("randomized"));
    }

    #[test]
    fn test_setup_command_line_skips_prompts() {
        let mut config = GameConfig::default();
        let mut c = console("12\n");
        let args = cli(&["--pieces", "6", "--depth", "3", "--seed", "9", "--manual-placement"]);
        setup(&args, &mut config, &mut c, true).unwrap();

        assert_eq!(config.piece_count, 6);
        assert_eq!(config.turn_limit, 12);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.seed, Some(9));
        assert!(!config.random_placement);
        let out = output(c);
        assert!(!out.contains("how many pieces"));
        assert!(!out.contains("randomized"));
    }

    #[test]
    fn test_setup_keeps_config_file_values() {
        let mut config = GameConfig {
            piece_count: 7,
            turn_limit: 30,
            random_placement: false,
            ..GameConfig::default()
        };
        let expected = config.clone();
        let mut c = console("");
        setup(&cli(&[]), &mut config, &mut c, false).unwrap();

        assert_eq!(config, expected);
        assert!(output(c).is_empty());
    }

    #[test]
    fn test_cli_rejects_unknown_player() {
        assert!(Cli::try_parse_from(["gridlock", "--player", "3"]).is_err());
        assert_eq!(cli(&["--player", "2"]).player, Some(2));
    }

    #[test]
    fn test_report_from_the_human_side() {
        let mut c = console("");
        report(&mut c, EndReason::NoLegalMoves { winner: Side::B }, Side::B).unwrap();
        let out = output(c);
        assert!(out.contains("Player1 has no legal moves left."));
        assert!(out.contains("You won!"));

        let mut c = console("");
        let lost = EndReason::TurnLimitReached {
            outcome: GameOutcome::Winner(Side::A),
        };
        report(&mut c, lost, Side::B).unwrap();
        let out = output(c);
        assert!(out.contains("Turn limit reached."));
        assert!(out.contains("You lost!"));

        let mut c = console("");
        let draw = EndReason::TurnLimitReached {
            outcome: GameOutcome::Draw,
        };
        report(&mut c, draw, Side::A).unwrap();
        assert!(output(c).contains("Draw!"));
    }
}
