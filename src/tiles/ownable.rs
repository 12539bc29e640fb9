//! Shared state of ownable tiles and the per-kind charge data.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Ownership record carried by every ownable tile.
///
/// A tile is owned iff `owner` is set; there is no separate flag to fall
/// out of sync.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    value: i64,
    owner: Option<PlayerId>,
    mortgaged: bool,
}

impl Ownership {
    /// An unowned, unmortgaged deed worth `value`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self {
            value,
            owner: None,
            mortgaged: false,
        }
    }

    /// Purchase value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Cash raised by mortgaging: half the value, rounded down.
    #[must_use]
    pub fn mortgage_value(&self) -> i64 {
        self.value / 2
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    #[must_use]
    pub fn is_mortgaged(&self) -> bool {
        self.mortgaged
    }

    /// Switch this tile to mortgage mode. Mortgaged tiles never charge.
    pub fn mortgage(&mut self) {
        self.mortgaged = true;
    }

    /// Switch this tile off mortgage mode.
    pub fn unmortgage(&mut self) {
        self.mortgaged = false;
    }

    pub(crate) fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }
}

/// Rent by improvement level. Level 0 is the base rent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentTable {
    levels: SmallVec<[i64; 6]>,
    level: usize,
}

impl RentTable {
    /// Create a table at the given level.
    ///
    /// The level is clamped to the last entry of the table.
    #[must_use]
    pub fn new(levels: &[i64], level: usize) -> Self {
        Self {
            levels: SmallVec::from_slice(levels),
            level: level.min(levels.len().saturating_sub(1)),
        }
    }

    /// Current improvement level.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Number of improvement levels.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.levels.len()
    }

    /// Rent at the current level.
    #[must_use]
    pub fn current(&self) -> i64 {
        self.levels.get(self.level).copied().unwrap_or(0)
    }
}
