//! Tile variants: basic, property, utility.
//!
//! Tiles are plain data owned by the board. Landing resolution is computed
//! by [`Tile::action`] and carried out by the board, so a tile never holds a
//! reference to a player or to the board.

mod ownable;
mod tile;

pub use ownable::{Ownership, RentTable};
pub use tile::{Landing, Tile, TileKind};
