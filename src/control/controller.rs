//! The controller: entry point for the presentation layer.

use tracing::debug;

use crate::board::Board;
use crate::core::{CurrencyConfig, PlayerId};
use crate::notify::{DiceRoll, Event, Intent, PlayerSnapshot, TileSnapshot};

use super::command::{CommandSet, TurnState};
use super::presenter::{Presenter, Router};

/// Composes the board, the command set, and the routing to a presenter.
///
/// Holds no game state of its own beyond the commands' turn state.
#[derive(Debug)]
pub struct Controller {
    board: Board,
    commands: CommandSet,
}

impl Controller {
    /// Take ownership of `board` and register `presenter` as its subscriber.
    pub fn new(mut board: Board, presenter: impl Presenter + 'static) -> Self {
        board.register(Router::new(presenter));
        Self {
            board,
            commands: CommandSet::default(),
        }
    }

    // === Commands ===

    /// Add a player on the start tile with the default cash.
    pub fn player_add(&mut self, name: &str, piece: &str) -> PlayerId {
        self.board.player_add(name, piece)
    }

    /// Add a player at `position` holding `cash`.
    pub fn player_add_at(&mut self, name: &str, piece: &str, position: usize, cash: Option<i64>) -> PlayerId {
        self.board.player_add_at(name, piece, position, cash)
    }

    /// Roll and move the current player.
    pub fn player_move(&mut self, name: &str) {
        self.commands.movement.execute(&mut self.board, name);
    }

    /// Move a player a fixed distance as though it had been rolled.
    ///
    /// Turn state is untouched. Intended for debugging and scripted setups.
    pub fn player_move_fixed(&mut self, name: &str, delta: u8) {
        let a = delta / 2;
        let roll = DiceRoll {
            a,
            b: delta - a,
            is_double: false,
            roll_again: false,
        };
        debug!(player = %name, delta, "fixed move");
        self.board.accept_notification(Event::DiceRolled(roll));
        self.board
            .accept_notification(Intent::move_by(name, i64::from(delta)));
    }

    /// Buy the tile the player stands on.
    pub fn player_purchase(&mut self, name: &str) {
        self.commands.purchase.execute(&mut self.board, name);
    }

    pub fn player_mortgage(&mut self, name: &str, tile: &str) {
        self.commands.mortgage.execute(&mut self.board, name, tile);
    }

    /// Remove a player, handing their tiles to `beneficiary` or the bank.
    pub fn player_bankrupt(&mut self, name: &str, beneficiary: Option<&str>) {
        self.board
            .accept_notification(Intent::bankrupt(name, beneficiary));
    }

    /// Start a fresh turn for the command state.
    pub fn reset_command_state(&mut self) {
        debug!("command state reset");
        self.commands.reset_all();
    }

    /// End the current player's turn.
    pub fn end_turn(&mut self) {
        self.reset_command_state();
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.commands.movement.state()
    }

    // === Queries ===

    #[must_use]
    pub fn query_size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn query_style(&self) -> &str {
        self.board.style()
    }

    #[must_use]
    pub fn query_currency(&self) -> CurrencyConfig {
        self.board.currency()
    }

    #[must_use]
    pub fn query_tiles(&self) -> Vec<TileSnapshot> {
        self.board.tiles()
    }

    #[must_use]
    pub fn players(&self) -> Vec<PlayerSnapshot> {
        self.board.players()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}
