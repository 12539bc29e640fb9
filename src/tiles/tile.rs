//! Board tiles.
//!
//! Tiles form a closed set of kinds sharing one struct. Ownable kinds carry
//! an [`Ownership`] record; the only behaviour that differs by kind is
//! [`Tile::charge`].

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, PlayerId, TileConfig, TileId, TileType};

use super::ownable::{Ownership, RentTable};

/// Tile variant with its kind-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Landing does nothing.
    Basic,
    /// Charges rent from an improvement-indexed table.
    Property { deed: Ownership, rent: RentTable },
    /// Ownable, but has no charge policy yet: landing on an owned utility
    /// costs nothing.
    Utility { deed: Ownership },
}

/// What landing on a tile asks of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    /// No effect.
    Nothing,
    /// The lander owes `amount` to `landlord`.
    Charge { landlord: PlayerId, amount: i64 },
    /// The tile is for sale.
    BuyOpportunity,
}

/// One space on the board ring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    name: String,
    kind: TileKind,
}

impl Tile {
    /// A tile with no landing effect.
    pub fn basic(name: impl Into<String>, position: usize) -> Self {
        Self {
            id: TileId::new(position),
            name: name.into(),
            kind: TileKind::Basic,
        }
    }

    /// A rent-charging property.
    pub fn property(name: impl Into<String>, position: usize, value: i64, rent: RentTable) -> Self {
        Self {
            id: TileId::new(position),
            name: name.into(),
            kind: TileKind::Property {
                deed: Ownership::new(value),
                rent,
            },
        }
    }

    /// A utility.
    pub fn utility(name: impl Into<String>, position: usize, value: i64) -> Self {
        Self {
            id: TileId::new(position),
            name: name.into(),
            kind: TileKind::Utility {
                deed: Ownership::new(value),
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.id.position()
    }

    #[must_use]
    pub fn kind(&self) -> &TileKind {
        &self.kind
    }

    /// Ownership record, if this tile can be owned.
    #[must_use]
    pub fn deed(&self) -> Option<&Ownership> {
        match &self.kind {
            TileKind::Basic => None,
            TileKind::Property { deed, .. } | TileKind::Utility { deed } => Some(deed),
        }
    }

    pub(crate) fn deed_mut(&mut self) -> Option<&mut Ownership> {
        match &mut self.kind {
            TileKind::Basic => None,
            TileKind::Property { deed, .. } | TileKind::Utility { deed } => Some(deed),
        }
    }

    #[must_use]
    pub fn is_ownable(&self) -> bool {
        self.deed().is_some()
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.deed().and_then(Ownership::owner)
    }

    #[must_use]
    pub fn is_mortgaged(&self) -> bool {
        self.deed().is_some_and(Ownership::is_mortgaged)
    }

    #[cfg(test)]
    pub(crate) fn is_owned(&self) -> bool {
        self.deed().is_some_and(Ownership::is_owned)
    }

    /// Rent table, for properties.
    #[must_use]
    pub fn rent(&self) -> Option<&RentTable> {
        match &self.kind {
            TileKind::Property { rent, .. } => Some(rent),
            _ => None,
        }
    }

    /// What `player` owes the owner on landing, per tile kind.
    ///
    /// Utilities charge nothing until a charge formula exists.
    #[must_use]
    pub fn charge(&self, _player: PlayerId) -> Option<i64> {
        match &self.kind {
            TileKind::Property { rent, .. } => Some(rent.current()),
            TileKind::Utility { .. } | TileKind::Basic => None,
        }
    }

    /// Resolve a landing by `player`.
    ///
    /// Mortgaged tiles do nothing, owned tiles charge, unowned ownable tiles
    /// are offered for sale.
    #[must_use]
    pub fn action(&self, player: PlayerId) -> Landing {
        let Some(deed) = self.deed() else {
            return Landing::Nothing;
        };

        if deed.is_mortgaged() {
            return Landing::Nothing;
        }

        match deed.owner() {
            Some(landlord) => match self.charge(player) {
                Some(amount) => Landing::Charge { landlord, amount },
                None => Landing::Nothing,
            },
            None => Landing::BuyOpportunity,
        }
    }
}

impl TryFrom<&TileConfig> for Tile {
    type Error = ConfigError;

    fn try_from(config: &TileConfig) -> Result<Self, Self::Error> {
        if config.tile_type == TileType::Basic {
            return Ok(Tile::basic(&config.name, config.position));
        }

        let data = config.data.as_ref().ok_or_else(|| ConfigError::MissingData {
            tile: config.name.clone(),
        })?;

        Ok(match config.tile_type {
            TileType::Property => Tile::property(
                &config.name,
                config.position,
                data.cost,
                RentTable::new(&data.rent, data.level),
            ),
            _ => Tile::utility(&config.name, config.position, data.cost),
        })
    }
}
