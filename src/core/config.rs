//! Board definition types.
//!
//! A host provides a `BoardConfig` at startup, either parsed from JSON with
//! [`BoardConfig::from_json`] or built in code:
//! - `CurrencyConfig`: Symbol and starting cash
//! - `TileConfig`: One entry per board position
//! - `BoardConfig`: Combines all configuration
//!
//! ## JSON shape
//!
//! ```json
//! {
//!   "style": "Classic",
//!   "currency": { "symbol": "$", "defaultAmount": 1500 },
//!   "tiles": [
//!     { "name": "GO", "position": 0, "type": "basic" },
//!     { "name": "Baltic", "position": 1, "type": "property",
//!       "data": { "cost": 60, "rent": [4, 20, 60] } }
//!   ]
//! }
//! ```
//!
//! `size` defaults to 40 and must equal the number of tiles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Ring length used when a definition does not name one.
pub const DEFAULT_BOARD_SIZE: usize = 40;

fn default_size() -> usize {
    DEFAULT_BOARD_SIZE
}

/// Currency descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConfig {
    /// Display symbol, e.g. `$`.
    pub symbol: String,

    /// Cash a player starts with unless told otherwise.
    pub default_amount: i64,

    /// Cash credited each time a player passes the start tile.
    #[serde(default)]
    pub pass_start_bonus: i64,
}

impl CurrencyConfig {
    /// Create a currency with no pass-start bonus.
    pub fn new(symbol: impl Into<String>, default_amount: i64) -> Self {
        Self {
            symbol: symbol.into(),
            default_amount,
            pass_start_bonus: 0,
        }
    }

    /// Set the pass-start bonus.
    #[must_use]
    pub fn with_pass_start_bonus(mut self, bonus: i64) -> Self {
        self.pass_start_bonus = bonus;
        self
    }
}

/// Tile variant named in a definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    Basic,
    Property,
    Utility,
}

impl TileType {
    /// Whether tiles of this type can be bought.
    #[must_use]
    pub const fn is_ownable(self) -> bool {
        !matches!(self, TileType::Basic)
    }
}

/// Economic data for ownable tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileData {
    /// Purchase value.
    pub cost: i64,

    /// Rent by improvement level, level 0 first. Unused for utilities.
    #[serde(default)]
    pub rent: Vec<i64>,

    /// Starting improvement level.
    #[serde(default)]
    pub level: usize,
}

/// Configuration for a single tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileConfig {
    /// Display name. Mortgage commands refer to tiles by this name.
    pub name: String,

    /// Index on the board ring.
    #[serde(alias = "index")]
    pub position: usize,

    /// Tile variant.
    #[serde(rename = "type")]
    pub tile_type: TileType,

    /// Cost and rent. Required for ownable tiles.
    #[serde(default)]
    pub data: Option<TileData>,
}

impl TileConfig {
    /// A tile with no landing effect.
    pub fn basic(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            tile_type: TileType::Basic,
            data: None,
        }
    }

    /// A property charging rent from `rent[level]`.
    pub fn property(name: impl Into<String>, position: usize, cost: i64, rent: &[i64]) -> Self {
        Self {
            name: name.into(),
            position,
            tile_type: TileType::Property,
            data: Some(TileData {
                cost,
                rent: rent.to_vec(),
                level: 0,
            }),
        }
    }

    /// A utility.
    pub fn utility(name: impl Into<String>, position: usize, cost: i64) -> Self {
        Self {
            name: name.into(),
            position,
            tile_type: TileType::Utility,
            data: Some(TileData {
                cost,
                rent: Vec::new(),
                level: 0,
            }),
        }
    }

    /// Set the starting improvement level.
    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        if let Some(data) = self.data.as_mut() {
            data.level = level;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.tile_type.is_ownable() {
            return Ok(());
        }

        let data = self.data.as_ref().ok_or_else(|| ConfigError::MissingData {
            tile: self.name.clone(),
        })?;

        if let Some(&amount) = std::iter::once(&data.cost)
            .chain(data.rent.iter())
            .find(|&&amount| amount < 0)
        {
            return Err(ConfigError::NegativeAmount {
                tile: self.name.clone(),
                amount,
            });
        }

        if self.tile_type == TileType::Property {
            if data.rent.is_empty() {
                return Err(ConfigError::EmptyRentTable {
                    tile: self.name.clone(),
                });
            }
            if data.level >= data.rent.len() {
                return Err(ConfigError::LevelOutOfRange {
                    tile: self.name.clone(),
                    level: data.level,
                    levels: data.rent.len(),
                });
            }
        }

        Ok(())
    }
}

/// Complete board definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Style label shown by the presentation layer.
    pub style: String,

    /// Ring length.
    #[serde(default = "default_size")]
    pub size: usize,

    /// Currency descriptor.
    pub currency: CurrencyConfig,

    /// Tile definitions, in any order.
    pub tiles: Vec<TileConfig>,
}

impl BoardConfig {
    /// Create an empty definition of the default size.
    pub fn new(style: impl Into<String>, currency: CurrencyConfig) -> Self {
        Self {
            style: style.into(),
            size: DEFAULT_BOARD_SIZE,
            currency,
            tiles: Vec::new(),
        }
    }

    /// Parse and validate a JSON definition.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the ring length.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Add a tile definition.
    #[must_use]
    pub fn with_tile(mut self, tile: TileConfig) -> Self {
        self.tiles.push(tile);
        self
    }

    /// Check the board invariants: one tile per position, every ownable
    /// tile priced, every property with a usable rent table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.tiles.len() != self.size {
            return Err(ConfigError::SizeMismatch {
                expected: self.size,
                actual: self.tiles.len(),
            });
        }

        let mut seen: BTreeMap<usize, &str> = BTreeMap::new();
        for tile in &self.tiles {
            if tile.position >= self.size {
                return Err(ConfigError::PositionOutOfRange {
                    tile: tile.name.clone(),
                    position: tile.position,
                    size: self.size,
                });
            }
            if let Some(first) = seen.insert(tile.position, &tile.name) {
                return Err(ConfigError::DuplicatePosition {
                    position: tile.position,
                    first: first.to_string(),
                    second: tile.name.clone(),
                });
            }
            tile.validate()?;
        }

        Ok(())
    }

    /// Tiles ordered by position.
    #[must_use]
    pub fn ordered_tiles(&self) -> Vec<&TileConfig> {
        let mut tiles: Vec<_> = self.tiles.iter().collect();
        tiles.sort_by_key(|t| t.position);
        tiles
    }
}
