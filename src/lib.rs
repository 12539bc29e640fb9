//! # monopoly-engine
//!
//! Game-state engine for a turn-based property-trading board game.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: The [`Board`] owns every tile, player, and the dice.
//!    Tiles name their owner by [`PlayerId`]; nothing holds a live reference
//!    into the board.
//!
//! 2. **Events, Not Errors**: Refused purchases, unpayable rent, and unknown
//!    names never surface as errors. Each outcome is an [`Event`] relayed to
//!    the single registered [`Subscriber`]. Only board construction can fail.
//!
//! 3. **Depth-First Dispatch**: A subscriber answers events with [`Intent`]s,
//!    which run to completion before the event that prompted them returns.
//!
//! ## Architecture
//!
//! ```text
//! presentation ─► Controller ─► Command ─► Board::accept_notification
//!                                               │
//!                    Presenter ◄─ Router ◄─ relay_notification
//! ```
//!
//! ## Modules
//!
//! - `core`: identifiers, players, dice, RNG, board configuration
//! - `tiles`: tile kinds, ownership, rent tables
//! - `notify`: intents, events, snapshots
//! - `board`: authoritative state and the board mutators
//! - `control`: commands, turn state, controller, presenter routing

pub mod board;
pub mod control;
pub mod core;
pub mod notify;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, ConfigError, CurrencyConfig, Dice, DiceFaces, FaceSource, GameRng, Player,
    PlayerId, ScriptedFaces, Step, TileConfig, TileId, TileType,
};

pub use crate::tiles::{Landing, Ownership, RentTable, Tile, TileKind};

pub use crate::notify::{
    DiceRoll, Direction, Event, EventKind, Intent, Notification, PlayerSnapshot, Replies,
    TileSnapshot,
};

pub use crate::board::{Board, Debt, Subscriber};

pub use crate::control::{
    Command, CommandSet, Controller, MortgageCommand, MoveCommand, Presenter, PurchaseCommand,
    Router, TurnState,
};
