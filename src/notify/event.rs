//! Events flowing from the board out to the subscriber.
//!
//! The set is closed: every outcome the engine reports, including every
//! failure, is one of these variants. Nothing crosses the board boundary as
//! an error.

use serde::{Deserialize, Serialize};

use super::snapshot::{DiceRoll, PlayerSnapshot, TileSnapshot};
use super::Direction;

/// A game event with its payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// The player asked to roll with no rolls left this turn.
    OutOfMoves { player: String },

    /// The move command rolled the dice.
    DiceRolled(DiceRoll),

    /// The player landed on an unowned ownable tile.
    BuyOpportunity {
        player: PlayerSnapshot,
        tile: TileSnapshot,
    },

    /// The player moved past the start tile. Carries the state from before
    /// the move.
    PassedStart { player: PlayerSnapshot, bonus: i64 },

    /// The player arrived on `tile`. The board runs the tile's landing
    /// action after relaying this.
    PlayerMoved {
        player: PlayerSnapshot,
        tile: TileSnapshot,
    },

    TilePurchased {
        player: PlayerSnapshot,
        tile: TileSnapshot,
    },

    /// The player tried to buy a tile they already own.
    AlreadyOwned {
        player: PlayerSnapshot,
        tile: TileSnapshot,
    },

    /// The tile cannot be bought: it is not ownable or belongs to someone
    /// else.
    NotForSale {
        player: PlayerSnapshot,
        tile: TileSnapshot,
    },

    /// The player cannot afford the tile. `deficit = value - cash`.
    InsufficientFunds {
        player: PlayerSnapshot,
        tile: TileSnapshot,
        deficit: i64,
    },

    /// Rent exceeds the player's cash. Nothing was charged;
    /// `shortfall = rent - cash`.
    LiquidationRequired {
        player: PlayerSnapshot,
        landlord: PlayerSnapshot,
        shortfall: i64,
    },

    RentPaid {
        renter: PlayerSnapshot,
        landlord: PlayerSnapshot,
        rent: i64,
    },

    /// The tile was mortgaged and `amount` credited.
    Mortgaged {
        player: PlayerSnapshot,
        tile: TileSnapshot,
        amount: i64,
    },

    AlreadyMortgaged {
        player: PlayerSnapshot,
        tile: TileSnapshot,
    },

    /// The player tried to act on a tile they do not own.
    NotOwned {
        player: PlayerSnapshot,
        tile: TileSnapshot,
    },

    /// The player left the game. Their tiles went to `beneficiary`, or back
    /// to the bank.
    Bankrupted {
        player: PlayerSnapshot,
        beneficiary: Option<PlayerSnapshot>,
    },
}

/// Payload-free tag for each event variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    OutOfMoves,
    DiceRolled,
    BuyOpportunity,
    PassedStart,
    PlayerMoved,
    TilePurchased,
    AlreadyOwned,
    NotForSale,
    InsufficientFunds,
    LiquidationRequired,
    RentPaid,
    Mortgaged,
    AlreadyMortgaged,
    NotOwned,
    Bankrupted,
}

impl EventKind {
    /// Every event kind.
    pub const ALL: [EventKind; 15] = [
        EventKind::OutOfMoves,
        EventKind::DiceRolled,
        EventKind::BuyOpportunity,
        EventKind::PassedStart,
        EventKind::PlayerMoved,
        EventKind::TilePurchased,
        EventKind::AlreadyOwned,
        EventKind::NotForSale,
        EventKind::InsufficientFunds,
        EventKind::LiquidationRequired,
        EventKind::RentPaid,
        EventKind::Mortgaged,
        EventKind::AlreadyMortgaged,
        EventKind::NotOwned,
        EventKind::Bankrupted,
    ];

    /// Wire code, e.g. `BUY_OPPORTUNITY`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            EventKind::OutOfMoves => "OUT_OF_MOVES",
            EventKind::DiceRolled => "DICE_ROLLED",
            EventKind::BuyOpportunity => "BUY_OPPORTUNITY",
            EventKind::PassedStart => "PASSED_START",
            EventKind::PlayerMoved => "PLAYER_MOVED",
            EventKind::TilePurchased => "TILE_PURCHASED",
            EventKind::AlreadyOwned => "ALREADY_OWNED",
            EventKind::NotForSale => "NOT_FOR_SALE",
            EventKind::InsufficientFunds => "INSUFFICIENT_FUNDS",
            EventKind::LiquidationRequired => "LIQUIDATION_REQUIRED",
            EventKind::RentPaid => "RENT_PAID",
            EventKind::Mortgaged => "MORTGAGED",
            EventKind::AlreadyMortgaged => "ALREADY_MORTGAGED",
            EventKind::NotOwned => "NOT_OWNED",
            EventKind::Bankrupted => "BANKRUPTED",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Event {
    /// The variant tag.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::OutOfMoves { .. } => EventKind::OutOfMoves,
            Event::DiceRolled(_) => EventKind::DiceRolled,
            Event::BuyOpportunity { .. } => EventKind::BuyOpportunity,
            Event::PassedStart { .. } => EventKind::PassedStart,
            Event::PlayerMoved { .. } => EventKind::PlayerMoved,
            Event::TilePurchased { .. } => EventKind::TilePurchased,
            Event::AlreadyOwned { .. } => EventKind::AlreadyOwned,
            Event::NotForSale { .. } => EventKind::NotForSale,
            Event::InsufficientFunds { .. } => EventKind::InsufficientFunds,
            Event::LiquidationRequired { .. } => EventKind::LiquidationRequired,
            Event::RentPaid { .. } => EventKind::RentPaid,
            Event::Mortgaged { .. } => EventKind::Mortgaged,
            Event::AlreadyMortgaged { .. } => EventKind::AlreadyMortgaged,
            Event::NotOwned { .. } => EventKind::NotOwned,
            Event::Bankrupted { .. } => EventKind::Bankrupted,
        }
    }

    /// Where the board routes this event.
    ///
    /// A move is acted on by the board (landing resolution) as well as
    /// relayed; everything else is only relayed.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match self {
            Event::PlayerMoved { .. } => Direction::BoardRelay,
            _ => Direction::ToSubscriber,
        }
    }

    /// Name of the player the event is about, if any.
    #[must_use]
    pub fn player_name(&self) -> Option<&str> {
        match self {
            Event::OutOfMoves { player } => Some(player),
            Event::DiceRolled(_) => None,
            Event::RentPaid { renter, .. } => Some(&renter.name),
            Event::BuyOpportunity { player, .. }
            | Event::PassedStart { player, .. }
            | Event::PlayerMoved { player, .. }
            | Event::TilePurchased { player, .. }
            | Event::AlreadyOwned { player, .. }
            | Event::NotForSale { player, .. }
            | Event::InsufficientFunds { player, .. }
            | Event::LiquidationRequired { player, .. }
            | Event::Mortgaged { player, .. }
            | Event::AlreadyMortgaged { player, .. }
            | Event::NotOwned { player, .. }
            | Event::Bankrupted { player, .. } => Some(&player.name),
        }
    }
}
