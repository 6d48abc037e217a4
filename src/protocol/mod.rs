//! Game-engine protocol handling.
//!
//! Decodes the handshake and per-turn map frames into grids, and encodes the
//! engine's moves as reply lines. Nothing in the decision core depends on
//! this module.

pub mod frame;
pub mod moves;

pub use frame::{
    parse_dimensions, parse_frame, parse_player_tag, parse_productions, FrameError, GameInfo,
};
pub use moves::{format_move, format_moves, parse_moves};
