//! Immutable payload snapshots.
//!
//! Events never carry live references into the board. Everything a
//! presentation layer sees is copied out at the moment the event fires.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{DiceFaces, Player, PlayerId, TileId, TileType};
use crate::tiles::{Tile, TileKind};

/// A player's state at the moment an event fired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub piece: String,
    pub position: usize,
    pub cash: i64,
    /// Owned tiles in acquisition order.
    pub properties: Vector<TileId>,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            piece: player.piece().to_string(),
            position: player.position(),
            cash: player.cash(),
            properties: player.owned().clone(),
        }
    }
}

/// A tile's state at the moment an event fired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub name: String,
    pub position: usize,
    pub tile_type: TileType,
    /// Purchase value, for ownable tiles.
    pub value: Option<i64>,
    /// Owner's name, resolved when the snapshot was taken.
    pub owner: Option<String>,
    pub is_owned: bool,
    pub mortgaged: bool,
    /// Rent at the current level, for properties.
    pub rent: Option<i64>,
    pub improvement_level: Option<usize>,
}

impl TileSnapshot {
    /// Snapshot `tile`, naming its owner as `owner`.
    pub fn new(tile: &Tile, owner: Option<&str>) -> Self {
        let deed = tile.deed();
        let rent = tile.rent();
        Self {
            name: tile.name().to_string(),
            position: tile.position(),
            tile_type: match tile.kind() {
                TileKind::Basic => TileType::Basic,
                TileKind::Property { .. } => TileType::Property,
                TileKind::Utility { .. } => TileType::Utility,
            },
            value: deed.map(|d| d.value()),
            owner: owner.map(str::to_string),
            is_owned: deed.is_some_and(|d| d.is_owned()),
            mortgaged: deed.is_some_and(|d| d.is_mortgaged()),
            rent: rent.map(|r| r.current()),
            improvement_level: rent.map(|r| r.level()),
        }
    }
}

/// Outcome of one dice roll by the move command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub a: u8,
    pub b: u8,
    pub is_double: bool,
    /// Whether the player may roll again this turn.
    pub roll_again: bool,
}

impl DiceRoll {
    /// Describe `faces`, with `roll_again` decided by the turn state.
    #[must_use]
    pub fn new(faces: DiceFaces, roll_again: bool) -> Self {
        Self {
            a: faces.a,
            b: faces.b,
            is_double: faces.is_double(),
            roll_again,
        }
    }

    /// Spaces the roll moves a piece.
    #[must_use]
    pub fn sum(&self) -> u8 {
        self.a + self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::RentTable;

    #[test]
    fn test_player_snapshot_copies_state() {
        let player = Player::new(PlayerId::new(3), "Ada", "Boot", 7, 900);
        let snapshot = PlayerSnapshot::from(&player);

        assert_eq!(snapshot.id, PlayerId::new(3));
        assert_eq!(snapshot.name, "Ada");
        assert_eq!(snapshot.piece, "Boot");
        assert_eq!(snapshot.position, 7);
        assert_eq!(snapshot.cash, 900);
        assert!(snapshot.properties.is_empty());
    }

    #[test]
    fn test_tile_snapshot_property() {
        let tile = Tile::property("Baltic", 3, 60, RentTable::new(&[4, 20], 1));
        let snapshot = TileSnapshot::new(&tile, None);

        assert_eq!(snapshot.tile_type, TileType::Property);
        assert_eq!(snapshot.value, Some(60));
        assert_eq!(snapshot.rent, Some(20));
        assert_eq!(snapshot.improvement_level, Some(1));
        assert!(!snapshot.is_owned);
        assert_eq!(snapshot.owner, None);
    }

    #[test]
    fn test_tile_snapshot_basic() {
        let snapshot = TileSnapshot::new(&Tile::basic("GO", 0), None);
        assert_eq!(snapshot.tile_type, TileType::Basic);
        assert_eq!(snapshot.value, None);
        assert_eq!(snapshot.rent, None);
        assert!(!snapshot.mortgaged);
    }

    #[test]
    fn test_dice_roll() {
        let roll = DiceRoll::new(DiceFaces { a: 4, b: 4 }, true);
        assert!(roll.is_double);
        assert!(roll.roll_again);
        assert_eq!(roll.sum(), 8);
    }

    #[test]
    fn test_snapshot_serialization() {
        let player = Player::new(PlayerId::new(0), "Ada", "Boot", 0, 1500);
        let snapshot = PlayerSnapshot::from(&player);
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: PlayerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
