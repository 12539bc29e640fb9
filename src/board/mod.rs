//! The board: authoritative game state and notification hub.
//!
//! ## Board
//!
//! Owns the tile ring, the players, and the dice. It is the only place
//! positions, cash, and ownership change, and every change is followed by
//! its outbound event before control returns to the caller.
//!
//! ## Dispatch
//!
//! [`Board::accept_notification`] is the single ingress point. Intents run a
//! mutator; events are relayed to the one registered [`Subscriber`]. The
//! subscriber may answer with intents, which run before the relay returns:
//!
//! ```text
//! intent ─► mutator ─► relay(event) ─► subscriber ─► replies ─► accept_notification ...
//! ```
//!
//! Dispatch is synchronous and depth-first. Nothing is queued.

mod actions;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{BoardConfig, ConfigError, CurrencyConfig, Dice, DiceFaces, Player, PlayerId};
use crate::notify::{Direction, Event, Intent, Notification, PlayerSnapshot, Replies, TileSnapshot};
use crate::tiles::Tile;

/// The single consumer of board events.
///
/// Returned intents are executed by the board, in order, before the event's
/// dispatch completes.
pub trait Subscriber {
    fn accept_notification(&mut self, event: &Event) -> Replies;
}

/// Rent a player could not cover, awaiting liquidation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub debtor: PlayerId,
    pub creditor: PlayerId,
    pub amount: i64,
}

/// Authoritative game state.
pub struct Board {
    size: usize,
    style: String,
    currency: CurrencyConfig,
    tiles: Vec<Tile>,
    players: FxHashMap<PlayerId, Player>,
    /// Players in the order they joined.
    turn_order: Vec<PlayerId>,
    next_player_id: PlayerId,
    dice: Dice,
    subscriber: Option<Box<dyn Subscriber>>,
    /// Unpaid rents, oldest first.
    debts: Vec<Debt>,
}

impl Board {
    /// Build a board from a definition.
    ///
    /// The definition is validated first; tiles are placed by position.
    pub fn new(config: &BoardConfig, dice: Dice) -> Result<Self, ConfigError> {
        config.validate()?;

        let tiles = config
            .ordered_tiles()
            .into_iter()
            .map(Tile::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(style = %config.style, size = config.size, "board created");

        Ok(Self {
            size: config.size,
            style: config.style.clone(),
            currency: config.currency.clone(),
            tiles,
            players: FxHashMap::default(),
            turn_order: Vec::new(),
            next_player_id: PlayerId::new(0),
            dice,
            subscriber: None,
            debts: Vec::new(),
        })
    }

    // === Queries ===

    /// Ring length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Currency descriptor, by value so callers cannot alter the board's.
    #[must_use]
    pub fn currency(&self) -> CurrencyConfig {
        self.currency.clone()
    }

    /// Snapshots of every tile, ordered by position.
    #[must_use]
    pub fn tiles(&self) -> Vec<TileSnapshot> {
        self.tiles.iter().map(|t| self.snapshot_tile(t)).collect()
    }

    /// The tile at a position.
    #[must_use]
    pub fn tile(&self, position: usize) -> Option<&Tile> {
        self.tiles.get(position)
    }

    /// Snapshots of every active player, in joining order.
    #[must_use]
    pub fn players(&self) -> Vec<PlayerSnapshot> {
        self.turn_order
            .iter()
            .filter_map(|id| self.players.get(id))
            .map(PlayerSnapshot::from)
            .collect()
    }

    /// Look up an active player by name.
    ///
    /// Names are not checked for uniqueness; the earliest joiner wins.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.find_player(name).and_then(|id| self.players.get(&id))
    }

    /// Look up an active player by id.
    #[must_use]
    pub fn player_by_id(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Number of active players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.turn_order.len()
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// Roll the dice.
    pub fn dice_roll(&mut self) -> DiceFaces {
        let faces = self.dice.roll();
        debug!(a = faces.a, b = faces.b, "dice rolled");
        faces
    }

    /// The oldest rent awaiting liquidation, if any.
    #[must_use]
    pub fn pending_debt(&self) -> Option<Debt> {
        self.debts.first().copied()
    }

    /// Every rent awaiting liquidation, oldest first.
    #[must_use]
    pub fn pending_debts(&self) -> &[Debt] {
        &self.debts
    }

    /// Whether a subscriber is registered.
    #[must_use]
    pub fn subscribed(&self) -> bool {
        self.subscriber.is_some()
    }

    // === Players ===

    /// Add a player at the start tile with the default starting cash.
    pub fn player_add(&mut self, name: impl Into<String>, piece: impl Into<String>) -> PlayerId {
        self.player_add_at(name, piece, 0, None)
    }

    /// Add a player at `position` holding `cash` (default: the currency's
    /// default amount).
    ///
    /// Duplicate names are accepted.
    pub fn player_add_at(
        &mut self,
        name: impl Into<String>,
        piece: impl Into<String>,
        position: usize,
        cash: Option<i64>,
    ) -> PlayerId {
        let id = self.next_player_id;
        self.next_player_id = id.next();

        let cash = cash.unwrap_or(self.currency.default_amount);
        let player = Player::new(id, name, piece, position % self.size, cash);
        debug!(player = %player.name(), %id, cash, "player added");

        self.players.insert(id, player);
        self.turn_order.push(id);
        id
    }

    // === Notifications ===

    /// Replace the subscriber. At most one is registered at a time.
    pub fn register(&mut self, subscriber: impl Subscriber + 'static) {
        self.register_boxed(Box::new(subscriber));
    }

    /// Replace the subscriber with an already-boxed one.
    pub fn register_boxed(&mut self, subscriber: Box<dyn Subscriber>) {
        if self.subscriber.replace(subscriber).is_some() {
            debug!("subscriber replaced");
        }
    }

    /// Single ingress point for notifications.
    ///
    /// Intents invoke the matching mutator. Events are relayed to the
    /// subscriber; a move event additionally runs the landing action of the
    /// tile the player arrived on, after the relay.
    pub fn accept_notification(&mut self, notification: impl Into<Notification>) {
        let notification = notification.into();
        match notification {
            Notification::Intent(intent) => self.accept_intent(intent),
            Notification::Event(event) => match event.direction() {
                Direction::BoardRelay => self.accept_move(event),
                Direction::ToSubscriber | Direction::ToBoard => self.relay_notification(event),
            },
        }
    }

    /// Pass an event to the subscriber, then run whatever it replies with.
    pub fn relay_notification(&mut self, event: Event) {
        let Some(subscriber) = self.subscriber.as_mut() else {
            warn!(kind = %event.kind(), "no subscriber registered, event dropped");
            return;
        };

        trace!(kind = %event.kind(), player = ?event.player_name(), "relaying event");
        let replies = subscriber.accept_notification(&event);

        for intent in replies {
            self.accept_notification(intent);
        }
    }

    fn accept_intent(&mut self, intent: Intent) {
        debug!(?intent, "intent accepted");
        match intent {
            Intent::Move { player, delta } => self.player_move(&player, delta),
            Intent::Purchase { player } => self.player_purchase(&player),
            Intent::Mortgage { player, tile } => self.player_mortgage(&player, &tile),
            Intent::Bankrupt {
                player,
                beneficiary,
            } => self.player_bankrupt(&player, beneficiary.as_deref()),
        }
    }

    fn accept_move(&mut self, event: Event) {
        let landing = match &event {
            Event::PlayerMoved { player, tile } => Some((player.id, tile.position)),
            _ => None,
        };

        self.relay_notification(event);

        if let Some((player, position)) = landing {
            self.land(player, position);
        }
    }

    // === Helpers ===

    pub(crate) fn find_player(&self, name: &str) -> Option<PlayerId> {
        self.turn_order
            .iter()
            .copied()
            .find(|id| self.players.get(id).is_some_and(|p| p.name() == name))
    }

    pub(crate) fn snapshot_player(&self, id: PlayerId) -> Option<PlayerSnapshot> {
        self.players.get(&id).map(PlayerSnapshot::from)
    }

    pub(crate) fn snapshot_tile(&self, tile: &Tile) -> TileSnapshot {
        let owner = tile
            .owner()
            .and_then(|id| self.players.get(&id))
            .map(Player::name);
        TileSnapshot::new(tile, owner)
    }

    pub(crate) fn snapshot_tile_at(&self, position: usize) -> Option<TileSnapshot> {
        self.tiles.get(position).map(|t| self.snapshot_tile(t))
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("style", &self.style)
            .field("size", &self.size)
            .field("players", &self.turn_order.len())
            .field("dice", &self.dice)
            .field("subscribed", &self.subscriber.is_some())
            .field("debts", &self.debts)
            .finish()
    }
}
