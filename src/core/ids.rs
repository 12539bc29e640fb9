//! Stable identifiers for players and tiles.
//!
//! ## PlayerId
//!
//! Handle allocated by the board when a player joins. Ids are never reused,
//! so a tile's owner stays valid even after other players leave the game.
//!
//! ## TileId
//!
//! A tile's position on the board ring. The tile sequence is fixed for the
//! lifetime of a board, so the position doubles as the tile's key.

use serde::{Deserialize, Serialize};

/// Player handle, unique for the lifetime of a board.
///
/// Players are looked up by name at the public API; the id is what tiles
/// store as their owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Tile key: the tile's index on the board ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub usize);

impl TileId {
    /// Create a tile ID for a board position.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// The board position this tile occupies.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0
    }
}

impl From<usize> for TileId {
    fn from(position: usize) -> Self {
        Self(position)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}
