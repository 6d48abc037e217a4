//! Handshake and map-frame decoding.
//!
//! The game engine talks in whitespace-separated integers, one message per
//! line:
//!
//! - player tag: `<id>`
//! - dimensions: `<width> <height>`
//! - productions: `width * height` values, row-major
//! - map frame: run-length-encoded owners as `<count> <owner>` pairs
//!   covering every cell, followed by `width * height` strengths
//!
//! Productions only arrive once, so every frame is decoded against the
//! production map from the handshake.

use crate::board::{Grid, GridError, PlayerId, Site, UNCLAIMED};

/// Errors that can occur while decoding protocol messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("invalid {field} value: '{token}'")]
    InvalidNumber { field: &'static str, token: String },

    #[error("player tag must be positive")]
    UnclaimedPlayer,

    #[error("expected {expected} {field} values, got {actual}")]
    WrongCount {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("map of {width}x{height} cells is too large")]
    MapTooLarge { width: usize, height: usize },

    #[error("owner run of length zero")]
    EmptyRun,

    #[error("owner runs cover {covered} cells but the map has {expected}")]
    RunOverflow { covered: usize, expected: usize },

    #[error("{0} unexpected trailing values")]
    TrailingValues(usize),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Per-game constants delivered by the handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    pub player: PlayerId,
    pub width: usize,
    pub height: usize,
    /// Production of every cell, row-major.
    pub productions: Vec<u16>,
}

impl GameInfo {
    /// Decodes the three handshake lines that precede the first frame.
    pub fn parse(tag: &str, dimensions: &str, productions: &str) -> Result<Self, FrameError> {
        let player = parse_player_tag(tag)?;
        let (width, height) = parse_dimensions(dimensions)?;
        let productions = parse_productions(productions, width, height)?;
        Ok(GameInfo {
            player,
            width,
            height,
            productions,
        })
    }

    /// Number of cells on the map.
    pub fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Decodes a map frame into a grid.
    pub fn parse_frame(&self, line: &str) -> Result<Grid, FrameError> {
        parse_frame(line, self.width, self.height, &self.productions)
    }
}

pub(crate) fn parse_number<T: std::str::FromStr>(
    token: &str,
    field: &'static str,
) -> Result<T, FrameError> {
    token.parse::<T>().map_err(|_| FrameError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}

/// Number of cells on a `width` x `height` map.
fn cells(width: usize, height: usize) -> Result<usize, FrameError> {
    width
        .checked_mul(height)
        .ok_or(FrameError::MapTooLarge { width, height })
}

/// Parses the line carrying our player id.
pub fn parse_player_tag(line: &str) -> Result<PlayerId, FrameError> {
    let token = line
        .split_whitespace()
        .next()
        .ok_or(FrameError::Missing("player tag"))?;
    let player: PlayerId = parse_number(token, "player tag")?;
    if player == UNCLAIMED {
        return Err(FrameError::UnclaimedPlayer);
    }
    Ok(player)
}

/// Parses the `width height` line.
pub fn parse_dimensions(line: &str) -> Result<(usize, usize), FrameError> {
    let mut tokens = line.split_whitespace();
    let width = tokens.next().ok_or(FrameError::Missing("map width"))?;
    let height = tokens.next().ok_or(FrameError::Missing("map height"))?;
    let width: usize = parse_number(width, "map width")?;
    let height: usize = parse_number(height, "map height")?;
    if width == 0 || height == 0 {
        return Err(GridError::EmptyDimensions { width, height }.into());
    }
    cells(width, height)?;
    Ok((width, height))
}

/// Parses the row-major production map.
pub fn parse_productions(line: &str, width: usize, height: usize) -> Result<Vec<u16>, FrameError> {
    let productions = line
        .split_whitespace()
        .map(|t| parse_number(t, "production"))
        .collect::<Result<Vec<u16>, _>>()?;
    let expected = cells(width, height)?;
    if productions.len() != expected {
        return Err(FrameError::WrongCount {
            field: "production",
            expected,
            actual: productions.len(),
        });
    }
    Ok(productions)
}

/// Decodes one map frame against the production map.
pub fn parse_frame(
    line: &str,
    width: usize,
    height: usize,
    productions: &[u16],
) -> Result<Grid, FrameError> {
    let expected = cells(width, height)?;
    if productions.len() != expected {
        return Err(FrameError::WrongCount {
            field: "production",
            expected,
            actual: productions.len(),
        });
    }

    let mut tokens = line.split_whitespace();

    let mut owners: Vec<PlayerId> = Vec::with_capacity(expected);
    while owners.len() < expected {
        let count = tokens.next().ok_or(FrameError::Missing("owner run length"))?;
        let owner = tokens.next().ok_or(FrameError::Missing("owner id"))?;
        let count: usize = parse_number(count, "owner run length")?;
        let owner: PlayerId = parse_number(owner, "owner id")?;
        if count == 0 {
            return Err(FrameError::EmptyRun);
        }
        if count > expected - owners.len() {
            return Err(FrameError::RunOverflow {
                covered: owners.len().saturating_add(count),
                expected,
            });
        }
        let covered = owners.len() + count;
        owners.resize(covered, owner);
    }

    let strengths = tokens
        .by_ref()
        .take(expected)
        .map(|t| parse_number(t, "strength"))
        .collect::<Result<Vec<u16>, _>>()?;
    if strengths.len() != expected {
        return Err(FrameError::WrongCount {
            field: "strength",
            expected,
            actual: strengths.len(),
        });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(FrameError::TrailingValues(trailing));
    }

    let sites = owners
        .into_iter()
        .zip(strengths)
        .zip(productions.iter().copied())
        .map(|((owner, strength), production)| Site::new(owner, strength, production))
        .collect();

    Ok(Grid::new(width, height, sites)?)
}
