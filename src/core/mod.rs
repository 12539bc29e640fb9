//! Core engine types: identifiers, players, dice, RNG, configuration.
//!
//! This module contains the building blocks the board is assembled from.
//! Boards are described by `BoardConfig` rather than hardcoded.

pub mod ids;
pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod error;

pub use ids::{PlayerId, TileId};
pub use player::{Player, Step};
pub use rng::{FaceSource, GameRng, ScriptedFaces, DIE_FACES};
pub use dice::{Dice, DiceFaces};
pub use config::{BoardConfig, CurrencyConfig, TileConfig, TileData, TileType, DEFAULT_BOARD_SIZE};
pub use error::ConfigError;
