//! Turn control: commands, the controller, and presentation routing.
//!
//! ## Key Components
//!
//! - [`MoveCommand`]: rolls and moves, tracking doubles in a [`TurnState`]
//! - [`PurchaseCommand`], [`MortgageCommand`]: forward intents to the board
//! - [`Controller`]: owns the board and the commands; the presentation
//!   layer's entry point
//! - [`Presenter`] / [`Router`]: per-event callbacks behind the board's
//!   subscriber seam
//!
//! ## Turn state
//!
//! ```text
//! START {doubles: 0, can_roll: true}
//!   ── double (1st, 2nd) ──► doubles += 1, can_roll stays true
//!   ── double (3rd) ───────► doubles = 3, can_roll = false
//!   ── non-double ─────────► can_roll = false
//! can_roll == false ── execute ──► OutOfMoves, no roll
//! end_turn ──► START
//! ```

mod command;
mod controller;
mod presenter;

pub use command::{Command, CommandSet, MortgageCommand, MoveCommand, PurchaseCommand, TurnState, DOUBLES_LIMIT};
pub use controller::Controller;
pub use presenter::{Presenter, Router};
