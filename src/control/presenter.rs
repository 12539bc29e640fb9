//! Presentation seam.
//!
//! A [`Presenter`] has one callback per event kind, all defaulting to doing
//! nothing. [`Router`] adapts a presenter into the board's [`Subscriber`],
//! routing each event to its callback through a single match.
//!
//! Callbacks answer with intents. Answering a buy opportunity with
//! `Intent::purchase`, or a liquidation with a series of `Intent::mortgage`,
//! is how a presentation layer makes decisions inside the causal chain.

use tracing::trace;

use crate::board::Subscriber;
use crate::notify::{DiceRoll, Event, PlayerSnapshot, Replies, TileSnapshot};

/// Presentation-layer callbacks.
#[allow(unused_variables)]
pub trait Presenter {
    /// Called for every event before its kind-specific callback.
    fn observe(&mut self, event: &Event) {}

    fn out_of_moves(&mut self, player: &str) -> Replies {
        Replies::new()
    }

    fn dice_rolled(&mut self, roll: &DiceRoll) -> Replies {
        Replies::new()
    }

    /// The player may buy `tile`. Reply with a purchase intent to buy it.
    fn buy_opportunity(&mut self, player: &PlayerSnapshot, tile: &TileSnapshot) -> Replies {
        Replies::new()
    }

    fn passed_start(&mut self, player: &PlayerSnapshot, bonus: i64) -> Replies {
        Replies::new()
    }

    fn player_moved(&mut self, player: &PlayerSnapshot, tile: &TileSnapshot) -> Replies {
        Replies::new()
    }

    fn tile_purchased(&mut self, player: &PlayerSnapshot, tile: &TileSnapshot) -> Replies {
        Replies::new()
    }

    fn already_owned(&mut self, player: &PlayerSnapshot, tile: &TileSnapshot) -> Replies {
        Replies::new()
    }

    fn not_for_sale(&mut self, player: &PlayerSnapshot, tile: &TileSnapshot) -> Replies {
        Replies::new()
    }

    fn insufficient_funds(
        &mut self,
        player: &PlayerSnapshot,
        tile: &TileSnapshot,
        deficit: i64,
    ) -> Replies {
        Replies::new()
    }

    /// `player` owes more rent than they hold. Reply with mortgages to raise
    /// the `shortfall`, or with a bankruptcy.
    fn liquidation_required(
        &mut self,
        player: &PlayerSnapshot,
        landlord: &PlayerSnapshot,
        shortfall: i64,
    ) -> Replies {
        Replies::new()
    }

    fn rent_paid(&mut self, renter: &PlayerSnapshot, landlord: &PlayerSnapshot, rent: i64) -> Replies {
        Replies::new()
    }

    fn mortgaged(&mut self, player: &PlayerSnapshot, tile: &TileSnapshot, amount: i64) -> Replies {
        Replies::new()
    }

    fn already_mortgaged(&mut self, player: &PlayerSnapshot, tile: &TileSnapshot) -> Replies {
        Replies::new()
    }

    fn not_owned(&mut self, player: &PlayerSnapshot, tile: &TileSnapshot) -> Replies {
        Replies::new()
    }

    fn bankrupted(
        &mut self,
        player: &PlayerSnapshot,
        beneficiary: Option<&PlayerSnapshot>,
    ) -> Replies {
        Replies::new()
    }
}

/// Routes board events to a [`Presenter`].
#[derive(Debug, Default)]
pub struct Router<P> {
    presenter: P,
}

impl<P: Presenter> Router<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Send one event to the matching callback.
    pub fn route(&mut self, event: &Event) -> Replies {
        trace!(kind = %event.kind(), "routing event");
        let p = &mut self.presenter;
        p.observe(event);

        match event {
            Event::OutOfMoves { player } => p.out_of_moves(player),
            Event::DiceRolled(roll) => p.dice_rolled(roll),
            Event::BuyOpportunity { player, tile } => p.buy_opportunity(player, tile),
            Event::PassedStart { player, bonus } => p.passed_start(player, *bonus),
            Event::PlayerMoved { player, tile } => p.player_moved(player, tile),
            Event::TilePurchased { player, tile } => p.tile_purchased(player, tile),
            Event::AlreadyOwned { player, tile } => p.already_owned(player, tile),
            Event::NotForSale { player, tile } => p.not_for_sale(player, tile),
            Event::InsufficientFunds {
                player,
                tile,
                deficit,
            } => p.insufficient_funds(player, tile, *deficit),
            Event::LiquidationRequired {
                player,
                landlord,
                shortfall,
            } => p.liquidation_required(player, landlord, *shortfall),
            Event::RentPaid {
                renter,
                landlord,
                rent,
            } => p.rent_paid(renter, landlord, *rent),
            Event::Mortgaged {
                player,
                tile,
                amount,
            } => p.mortgaged(player, tile, *amount),
            Event::AlreadyMortgaged { player, tile } => p.already_mortgaged(player, tile),
            Event::NotOwned { player, tile } => p.not_owned(player, tile),
            Event::Bankrupted {
                player,
                beneficiary,
            } => p.bankrupted(player, beneficiary.as_ref()),
        }
    }
}

impl<P: Presenter> Subscriber for Router<P> {
    fn accept_notification(&mut self, event: &Event) -> Replies {
        self.route(event)
    }
}
