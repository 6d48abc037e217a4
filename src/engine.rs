//! Engine session.
//!
//! Holds the per-game constants from the handshake together with the
//! configuration, and turns every incoming map frame into a move line.
//! Nothing carries over from one turn to the next besides those constants.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::board::{Grid, Move, PlayerId};
use crate::config::EngineConfig;
use crate::decision::{plan_turn, plan_turn_parallel, Planner, TurnPlan};
use crate::protocol::{format_moves, FrameError, GameInfo};

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the {0}")]
    UnexpectedEof(&'static str),

    #[error("bad handshake: {0}")]
    Handshake(#[from] FrameError),
}

/// Decision plan for one grid snapshot, honouring the parallel switch.
pub fn plan_for(grid: &Grid, player: PlayerId, config: &EngineConfig) -> TurnPlan {
    let planner = Planner::new(grid, player, &config.weights, &config.thresholds);
    if config.parallel {
        plan_turn_parallel(&planner)
    } else {
        plan_turn(&planner)
    }
}

/// Moves for one grid snapshot.
pub fn decide_moves(grid: &Grid, player: PlayerId, config: &EngineConfig) -> Vec<Move> {
    plan_for(grid, player, config).moves()
}

/// One game's worth of engine state.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    game: GameInfo,
    turn: u32,
}

impl Engine {
    /// Creates an engine for a game whose handshake has been decoded.
    pub fn new(config: EngineConfig, game: GameInfo) -> Self {
        Engine {
            config,
            game,
            turn: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn game(&self) -> &GameInfo {
        &self.game
    }

    /// Number of turns answered so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Decodes a frame and plans the turn.
    pub fn play_turn(&mut self, frame: &str) -> Result<Vec<Move>, FrameError> {
        self.turn += 1;
        let grid = self.game.parse_frame(frame)?;
        let plan = plan_for(&grid, self.game.player, &self.config);
        let tally = plan.tally();
        let moves = plan.moves();
        debug!(
            turn = self.turn,
            territory = tally.total(),
            moves = moves.len(),
            expand = tally.expand,
            attack = tally.attack,
            pressure = tally.pressure,
            reinforce = tally.reinforce,
            "turn planned"
        );
        Ok(moves)
    }

    /// Answers one frame with a move line. A malformed frame is logged and
    /// answered with an empty line so the game keeps going.
    pub fn handle_frame<W: Write>(&mut self, frame: &str, out: &mut W) -> std::io::Result<()> {
        let line = match self.play_turn(frame) {
            Ok(moves) => format_moves(&moves),
            Err(e) => {
                warn!(turn = self.turn, error = %e, "skipping malformed frame");
                String::new()
            }
        };
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

fn next_line<R: BufRead>(input: &mut R, what: &'static str) -> Result<String, SessionError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SessionError::UnexpectedEof(what));
    }
    Ok(line)
}

/// Runs a full game: handshake, then one reply per frame until input ends.
pub fn run<R: BufRead, W: Write>(
    config: EngineConfig,
    mut input: R,
    mut out: W,
) -> Result<(), SessionError> {
    let tag = next_line(&mut input, "player tag")?;
    let dimensions = next_line(&mut input, "map dimensions")?;
    let productions = next_line(&mut input, "production map")?;
    let game = GameInfo::parse(&tag, &dimensions, &productions)?;

    let first = next_line(&mut input, "initial frame")?;
    let grid = game.parse_frame(&first)?;
    info!(
        player = game.player,
        width = game.width,
        height = game.height,
        territory = grid.territory_of(game.player),
        "game started"
    );

    let mut engine = Engine::new(config, game);
    writeln!(out, "{}", engine.config().name)?;
    out.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        engine.handle_frame(&line, &mut out)?;
    }

    info!(turns = engine.turn(), "game over");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Location};
    use crate::protocol::parse_moves;

    /// 3x3 map: we own the centre with 20 strength, an unclaimed cell with 4
    /// strength sits to the north, everything else is unclaimed and strong.
    const TAG: &str = "1\n";
    const DIMS: &str = "3 3\n";
    const PRODUCTIONS: &str = "1 1 1 1 2 1 1 1 1\n";
    const FRAME: &str = "4 0 1 1 4 0 50 4 50 50 20 50 50 50 50\n";

    fn session_input(frames: &[&str]) -> String {
        let mut input = format!("{TAG}{DIMS}{PRODUCTIONS}{FRAME}");
        for f in frames {
            input.push_str(f);
        }
        input
    }

    fn engine() -> Engine {
        let game = GameInfo::parse(TAG, DIMS, PRODUCTIONS).unwrap();
        Engine::new(EngineConfig::default(), game)
    }

    #[test]
    fn play_turn_attacks_weak_neighbour() {
        let mut engine = engine();
        let moves = engine.play_turn(FRAME).unwrap();
        assert_eq!(moves, vec![Move::new(Location::new(1, 1), Direction::North)]);
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn malformed_frame_gets_empty_reply() {
        let mut engine = engine();
        let mut out = Vec::new();
        engine.handle_frame("1 2 3", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n");
        assert_eq!(engine.turn(), 1);
    }

    #[test]
    fn run_sends_name_then_one_line_per_frame() {
        let input = session_input(&[FRAME, "\n", FRAME]);
        let mut out = Vec::new();
        run(EngineConfig::default(), input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "territory");
        assert_eq!(parse_moves(lines[1]).unwrap().len(), 1);
        assert_eq!(lines[1], lines[2]);
    }

    #[test]
    fn run_uses_configured_name() {
        let config = EngineConfig {
            name: "probe".to_string(),
            ..EngineConfig::default()
        };
        let mut out = Vec::new();
        run(config, session_input(&[]).as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "probe\n");
    }

    #[test]
    fn run_fails_on_truncated_handshake() {
        let err = run(EngineConfig::default(), "1\n3 3\n".as_bytes(), Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, SessionError::UnexpectedEof("production map")));
    }

    #[test]
    fn run_fails_on_bad_handshake() {
        let input = format!("0\n{DIMS}{PRODUCTIONS}{FRAME}");
        let err = run(EngineConfig::default(), input.as_bytes(), Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, SessionError::Handshake(FrameError::UnclaimedPlayer)));
    }

    #[test]
    fn parallel_config_gives_same_moves() {
        let game = GameInfo::parse(TAG, DIMS, PRODUCTIONS).unwrap();
        let grid = game.parse_frame(FRAME).unwrap();
        let parallel = EngineConfig {
            parallel: true,
            ..EngineConfig::default()
        };
        assert_eq!(
            decide_moves(&grid, 1, &parallel),
            decide_moves(&grid, 1, &EngineConfig::default())
        );
    }
}
