//! Commands: one user intent each, checked against turn state and sent to
//! the board.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::notify::{DiceRoll, Event, Intent};

/// Doubles after which the player may not roll again.
pub const DOUBLES_LIMIT: u8 = 3;

/// A command with per-turn state.
pub trait Command {
    /// Return to the start-of-turn state.
    fn reset(&mut self) {}
}

/// Rolling state of the current player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Doubles rolled so far this turn.
    pub doubles: u8,
    /// Whether another roll is allowed.
    pub can_roll: bool,
}

impl TurnState {
    /// The state every turn starts in.
    pub const START: TurnState = TurnState {
        doubles: 0,
        can_roll: true,
    };

    /// Whether the turn ended on the doubles limit.
    ///
    /// Jail is not modelled; callers decide what this means.
    #[must_use]
    pub fn rolled_triple_doubles(&self) -> bool {
        self.doubles >= DOUBLES_LIMIT
    }

    /// Record one roll.
    fn record(&mut self, is_double: bool) {
        if is_double {
            if self.doubles + 1 >= DOUBLES_LIMIT {
                self.can_roll = false;
            }
            self.doubles += 1;
        } else {
            self.can_roll = false;
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::START
    }
}

/// Roll the dice and move the current player.
#[derive(Clone, Debug, Default)]
pub struct MoveCommand {
    state: TurnState,
}

impl MoveCommand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Roll for `player` and move them by the sum.
    ///
    /// With no rolls left, emits `OutOfMoves` and leaves the dice alone.
    pub fn execute(&mut self, board: &mut Board, player: &str) {
        if !self.state.can_roll {
            debug!(player = %player, "no rolls left");
            board.accept_notification(Event::OutOfMoves {
                player: player.to_string(),
            });
            return;
        }

        let faces = board.dice_roll();
        self.state.record(faces.is_double());

        board.accept_notification(Event::DiceRolled(DiceRoll::new(faces, self.state.can_roll)));
        board.accept_notification(Intent::move_by(player, i64::from(faces.sum())));
    }
}

impl Command for MoveCommand {
    fn reset(&mut self) {
        self.state = TurnState::START;
    }
}

/// Buy the tile the player stands on.
#[derive(Clone, Copy, Debug, Default)]
pub struct PurchaseCommand;

impl PurchaseCommand {
    pub fn execute(&mut self, board: &mut Board, player: &str) {
        board.accept_notification(Intent::purchase(player));
    }
}

impl Command for PurchaseCommand {}

/// Mortgage one of the player's tiles.
#[derive(Clone, Copy, Debug, Default)]
pub struct MortgageCommand;

impl MortgageCommand {
    pub fn execute(&mut self, board: &mut Board, player: &str, tile: &str) {
        board.accept_notification(Intent::mortgage(player, tile));
    }
}

impl Command for MortgageCommand {}

/// Every command the controller drives.
#[derive(Clone, Debug, Default)]
pub struct CommandSet {
    pub movement: MoveCommand,
    pub purchase: PurchaseCommand,
    pub mortgage: MortgageCommand,
}

impl CommandSet {
    /// Reset every command for a new turn.
    pub fn reset_all(&mut self) {
        self.movement.reset();
        self.purchase.reset();
        self.mortgage.reset();
    }
}
