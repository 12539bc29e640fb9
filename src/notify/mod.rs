//! Notification bus: typed, directional messages between controller, board,
//! and presentation.
//!
//! ## Key Components
//!
//! - [`Intent`]: Controller → Board. A requested mutation.
//! - [`Event`]: Board → Controller. Something happened that the
//!   presentation layer may react to.
//! - [`Notification`]: Either of the above, routed by [`Direction`].
//! - [`Replies`]: Intents a subscriber answers an event with. The board
//!   processes them before the event's handler returns, so dispatch stays
//!   depth-first and strictly ordered.
//!
//! Payloads are snapshots ([`PlayerSnapshot`], [`TileSnapshot`]); a
//! notification never holds a reference into the board.

mod event;
mod intent;
mod snapshot;

pub use event::{Event, EventKind};
pub use intent::Intent;
pub use snapshot::{DiceRoll, PlayerSnapshot, TileSnapshot};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Intents a subscriber sends back in response to one event.
pub type Replies = SmallVec<[Intent; 2]>;

/// Where a notification is headed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Controller → Board: invokes a board mutator.
    ToBoard,
    /// Board → Controller: forwarded verbatim to the subscriber.
    ToSubscriber,
    /// Handled inside the board and then forwarded to the subscriber.
    BoardRelay,
}

/// A message on the bus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    Intent(Intent),
    Event(Event),
}

impl Notification {
    /// Where the board routes this notification.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match self {
            Notification::Intent(_) => Direction::ToBoard,
            Notification::Event(event) => event.direction(),
        }
    }
}

impl From<Intent> for Notification {
    fn from(intent: Intent) -> Self {
        Notification::Intent(intent)
    }
}

impl From<Event> for Notification {
    fn from(event: Event) -> Self {
        Notification::Event(event)
    }
}
