//! Wire format of the remote 2048 engine.

use serde::{Deserialize, Serialize};

/// Board side length.
pub const SIZE: usize = 4;

/// Lookahead depth requested from the suggestion endpoint.
pub const DEFAULT_SUGGEST_DEPTH: u32 = 2;

/// Row-major 4x4 grid of tile values, `0` meaning an empty cell.
///
/// Serialized as a nested JSON array; any other shape is rejected on
/// deserialization.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([[u32; SIZE]; SIZE]);

impl Board {
    pub const EMPTY: Self = Self([[0; SIZE]; SIZE]);

    pub const fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Self {
        Self(rows)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.0.get(row)?.get(col).copied()
    }

    /// Copy of the board with one cell replaced, `None` if out of range.
    pub fn with_cell(mut self, row: usize, col: usize, value: u32) -> Option<Self> {
        *self.0.get_mut(row)?.get_mut(col)? = value;
        Some(self)
    }

    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        use Direction::*;
        match self {
            Up => "UP",
            Down => "DOWN",
            Left => "LEFT",
            Right => "RIGHT",
        }
    }
}

/// Status reported by the engine after a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MoveStatus {
    Win,
    Lose,
    /// The move had no effect; the game continues.
    Noop,
}

impl MoveStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }

    pub const fn as_str(self) -> &'static str {
        use MoveStatus::*;
        match self {
            Win => "WIN",
            Lose => "LOSE",
            Noop => "NOOP",
        }
    }
}

/// Body of the restart and move endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResponse {
    pub board: Board,
    /// `None` when the game simply continues.
    #[serde(default)]
    pub status: Option<MoveStatus>,
}

/// Opaque payload of the suggestion endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestion(pub serde_json::Value);

impl Suggestion {
    /// Two-space indented JSON, the way it is shown to the player.
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Method {
    Patch,
    Post,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "PATCH",
            Self::Post => "POST",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Restart,
    Move(Direction),
    Suggest(u32),
}

impl Endpoint {
    pub const fn method(self) -> Method {
        match self {
            Self::Restart | Self::Move(_) => Method::Patch,
            Self::Suggest(_) => Method::Post,
        }
    }

    pub fn path(self) -> String {
        match self {
            Self::Restart => "/api/restart".to_string(),
            Self::Move(direction) => format!("/api/move/{}", direction.as_str()),
            Self::Suggest(depth) => format!("/api/suggest/{}", depth),
        }
    }

    /// Absolute URL against the configured origin. An empty origin yields
    /// a path relative to the page.
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}
