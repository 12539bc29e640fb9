//! Player economic state.
//!
//! A `Player` owns its cash and position and keeps back-references (tile
//! ids) to the tiles it owns. The tiles themselves belong to the board.
//! Mutators are crate-private: only the board changes positions, cash, and
//! ownership.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::ids::{PlayerId, TileId};

/// An economic actor on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    piece: String,
    position: usize,
    cash: i64,
    owned: Vector<TileId>,
}

impl Player {
    /// Create a player at `position` holding `cash`.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        piece: impl Into<String>,
        position: usize,
        cash: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            piece: piece.into(),
            position,
            cash,
            owned: Vector::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn piece(&self) -> &str {
        &self.piece
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn cash(&self) -> i64 {
        self.cash
    }

    /// Tiles owned, in order of acquisition.
    #[must_use]
    pub fn owned(&self) -> &Vector<TileId> {
        &self.owned
    }

    /// Check if the player owns a tile.
    #[must_use]
    pub fn owns(&self, tile: TileId) -> bool {
        self.owned.contains(&tile)
    }

    /// Where a move of `delta` spaces on a ring of `size` tiles ends.
    ///
    /// A forward move passes start whenever it reaches or crosses the start
    /// tile, including moves of one or more whole laps. Does not move the
    /// player.
    #[must_use]
    pub fn step(&self, delta: i64, size: usize) -> Step {
        let ring = size as i64;
        let from = self.position as i64;
        let offset = delta.rem_euclid(ring);
        Step {
            from: self.position,
            to: ((from + offset) % ring) as usize,
            passed_start: delta > 0 && delta >= ring - from,
        }
    }

    /// Amount missing to pay `amount`, or `None` if the player can cover it.
    #[must_use]
    pub fn shortfall(&self, amount: i64) -> Option<i64> {
        (self.cash < amount).then(|| amount - self.cash)
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    pub(crate) fn credit(&mut self, amount: i64) {
        self.cash += amount;
    }

    pub(crate) fn debit(&mut self, amount: i64) {
        self.cash -= amount;
    }

    pub(crate) fn acquire(&mut self, tile: TileId) {
        if !self.owns(tile) {
            self.owned.push_back(tile);
        }
    }

    /// Give up every owned tile, returning them in acquisition order.
    pub(crate) fn release_all(&mut self) -> Vector<TileId> {
        std::mem::take(&mut self.owned)
    }
}

/// Outcome of a movement calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub from: usize,
    pub to: usize,
    /// The move went forward past the start tile.
    pub passed_start: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(position: usize, cash: i64) -> Player {
        Player::new(PlayerId::new(0), "Ada", "Boot", position, cash)
    }

    #[test]
    fn test_new_player() {
        let player = player_at(0, 1500);
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.piece(), "Boot");
        assert_eq!(player.cash(), 1500);
        assert!(player.owned().is_empty());
    }

    #[test]
    fn test_step_without_wrap() {
        let step = player_at(5, 0).step(7, 40);
        assert_eq!(step, Step { from: 5, to: 12, passed_start: false });
    }

    #[test]
    fn test_step_wraps_past_start() {
        let step = player_at(38, 0).step(5, 40);
        assert_eq!(step.to, 3);
        assert!(step.passed_start);
    }

    #[test]
    fn test_step_landing_on_start_counts_as_passing() {
        let step = player_at(35, 0).step(5, 40);
        assert_eq!(step.to, 0);
        assert!(step.passed_start);
    }

    #[test]
    fn test_step_backwards_never_passes_start() {
        let step = player_at(2, 0).step(-3, 40);
        assert_eq!(step.to, 39);
        assert!(!step.passed_start);
    }

    #[test]
    fn test_step_full_lap() {
        let step = player_at(10, 0).step(40, 40);
        assert_eq!(step.to, 10);
        assert!(step.passed_start);
    }

    #[test]
    fn test_step_extreme_deltas_stay_on_ring() {
        let step = player_at(1, 0).step(i64::MAX, 40);
        assert_eq!(step.to, ((1 + i64::MAX % 40) % 40) as usize);
        assert!(step.passed_start);

        let step = player_at(39, 0).step(i64::MIN, 40);
        assert_eq!(step.to, ((39 + i64::MIN.rem_euclid(40)) % 40) as usize);
        assert!(!step.passed_start);
    }

    #[test]
    fn test_shortfall() {
        let player = player_at(0, 100);
        assert_eq!(player.shortfall(100), None);
        assert_eq!(player.shortfall(40), None);
        assert_eq!(player.shortfall(130), Some(30));
    }

    #[test]
    fn test_acquire_is_idempotent() {
        let mut player = player_at(0, 100);
        player.acquire(TileId::new(3));
        player.acquire(TileId::new(3));
        player.acquire(TileId::new(1));

        assert_eq!(player.owned().len(), 2);
        assert!(player.owns(TileId::new(1)));

        let released = player.release_all();
        assert_eq!(released.iter().copied().collect::<Vec<_>>(), vec![TileId::new(3), TileId::new(1)]);
        assert!(player.owned().is_empty());
    }

    #[test]
    fn test_cash_mutation() {
        let mut player = player_at(0, 100);
        player.debit(30);
        player.credit(5);
        assert_eq!(player.cash(), 75);
    }
}
