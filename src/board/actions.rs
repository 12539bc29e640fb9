//! Board mutators: movement, landing, and the economy.
//!
//! Each mutator looks its player up by name, changes state, and relays the
//! resulting event. A relay can run subscriber replies that remove or
//! bankrupt the very player being handled, so players are fetched again
//! after every relay.

use tracing::{debug, info, warn};

use crate::core::{PlayerId, TileId};
use crate::notify::{Event, PlayerSnapshot};
use crate::tiles::{Landing, Tile};

use super::{Board, Debt};

impl Board {
    /// Move a player `delta` spaces around the ring.
    ///
    /// Passing start relays `PassedStart` (with the pre-move state) and then
    /// credits the bonus. The move itself is relayed as `PlayerMoved`, after
    /// which the destination tile's landing action runs.
    pub fn player_move(&mut self, name: &str, delta: i64) {
        let Some(id) = self.lookup(name) else {
            return;
        };
        let Some(player) = self.players.get(&id) else {
            return;
        };

        let step = player.step(delta, self.size);

        if step.passed_start {
            let bonus = self.currency.pass_start_bonus;
            let before = PlayerSnapshot::from(player);
            self.relay_notification(Event::PassedStart {
                player: before,
                bonus,
            });

            let Some(player) = self.players.get_mut(&id) else {
                return;
            };
            player.credit(bonus);

            // A reply that already moved the player supersedes this move
            if player.position() != step.from {
                debug!(player = %name, delta, "move superseded by reply");
                return;
            }
        }

        let Some(player) = self.players.get_mut(&id) else {
            return;
        };
        player.set_position(step.to);
        debug!(player = %name, delta, from = step.from, to = step.to, "player moved");

        let (Some(player), Some(tile)) = (self.snapshot_player(id), self.snapshot_tile_at(step.to))
        else {
            return;
        };
        self.accept_notification(Event::PlayerMoved { player, tile });
    }

    /// Run the landing action of the tile at `position` for `player`.
    ///
    /// Skipped if the player has left the game or moved on while the move
    /// event was being handled.
    pub(crate) fn land(&mut self, player: PlayerId, position: usize) {
        let Some(lander) = self.players.get(&player) else {
            return;
        };
        if lander.position() != position {
            return;
        }
        let Some(tile) = self.tiles.get(position) else {
            return;
        };

        match tile.action(player) {
            Landing::Nothing => {}
            Landing::Charge { landlord, amount } => self.pay_rent(player, landlord, amount),
            Landing::BuyOpportunity => {
                let event = Event::BuyOpportunity {
                    player: PlayerSnapshot::from(lander),
                    tile: self.snapshot_tile(tile),
                };
                self.relay_notification(event);
            }
        }
    }

    /// Charge `amount` of rent from `renter` to `landlord`.
    ///
    /// Landing on your own tile costs nothing. Rent the renter cannot cover
    /// is not charged; it is queued behind any earlier debts and
    /// `LiquidationRequired` is relayed instead.
    pub(crate) fn pay_rent(&mut self, renter: PlayerId, landlord: PlayerId, amount: i64) {
        if renter == landlord {
            return;
        }

        let (Some(payer), Some(payee)) = (self.players.get(&renter), self.players.get(&landlord))
        else {
            warn!(%renter, %landlord, "rent between unknown players ignored");
            return;
        };

        if let Some(shortfall) = payer.shortfall(amount) {
            let event = Event::LiquidationRequired {
                player: PlayerSnapshot::from(payer),
                landlord: PlayerSnapshot::from(payee),
                shortfall,
            };
            info!(player = %payer.name(), amount, shortfall, "liquidation required");
            self.debts.push(Debt {
                debtor: renter,
                creditor: landlord,
                amount,
            });
            self.relay_notification(event);
            return;
        }

        self.transfer_rent(renter, landlord, amount);
    }

    /// Buy the tile the player is standing on.
    pub fn player_purchase(&mut self, name: &str) {
        let Some(id) = self.lookup(name) else {
            return;
        };
        let Some(player) = self.players.get(&id) else {
            return;
        };
        let position = player.position();
        let Some(tile) = self.tiles.get(position) else {
            return;
        };

        let snapshot = PlayerSnapshot::from(player);
        let event = match tile.deed() {
            Some(deed) if deed.is_owned_by(id) => Event::AlreadyOwned {
                player: snapshot,
                tile: self.snapshot_tile(tile),
            },
            None => Event::NotForSale {
                player: snapshot,
                tile: self.snapshot_tile(tile),
            },
            Some(deed) if deed.is_owned() => Event::NotForSale {
                player: snapshot,
                tile: self.snapshot_tile(tile),
            },
            Some(deed) => match player.shortfall(deed.value()) {
                Some(deficit) => Event::InsufficientFunds {
                    player: snapshot,
                    tile: self.snapshot_tile(tile),
                    deficit,
                },
                None => {
                    let value = deed.value();
                    self.acquire(id, position, value);
                    return;
                }
            },
        };

        debug!(player = %name, kind = %event.kind(), "purchase refused");
        self.relay_notification(event);
    }

    /// Mortgage one of the player's tiles, crediting half its value.
    ///
    /// Settles the player's pending debts afterwards, as far as the raised
    /// cash covers them.
    pub fn player_mortgage(&mut self, name: &str, tile_name: &str) {
        let Some(id) = self.lookup(name) else {
            return;
        };
        let Some(position) = self.tiles.iter().position(|t| t.name() == tile_name) else {
            warn!(player = %name, tile = %tile_name, "unknown tile, mortgage ignored");
            return;
        };
        let (Some(player), Some(tile)) = (self.players.get(&id), self.tiles.get(position)) else {
            return;
        };

        if !player.owns(tile.id()) {
            let event = Event::NotOwned {
                player: PlayerSnapshot::from(player),
                tile: self.snapshot_tile(tile),
            };
            self.relay_notification(event);
            return;
        }

        if tile.is_mortgaged() {
            let event = Event::AlreadyMortgaged {
                player: PlayerSnapshot::from(player),
                tile: self.snapshot_tile(tile),
            };
            self.relay_notification(event);
            return;
        }

        let Some(deed) = self.tiles.get_mut(position).and_then(Tile::deed_mut) else {
            return;
        };
        deed.mortgage();
        let amount = deed.mortgage_value();

        let Some(player) = self.players.get_mut(&id) else {
            return;
        };
        player.credit(amount);
        info!(player = %name, tile = %tile_name, amount, "tile mortgaged");

        let (Some(player), Some(tile)) = (self.snapshot_player(id), self.snapshot_tile_at(position))
        else {
            return;
        };
        self.relay_notification(Event::Mortgaged {
            player,
            tile,
            amount,
        });

        self.settle_debt(id);
    }

    /// Remove a player from the game.
    ///
    /// Their tiles go to `beneficiary`, or back to the bank (unowned and
    /// unmortgaged) when there is none. Pending debts owed by or to the
    /// player are dropped.
    pub fn player_bankrupt(&mut self, name: &str, beneficiary: Option<&str>) {
        let Some(id) = self.lookup(name) else {
            return;
        };

        let heir = match beneficiary {
            None => None,
            Some(heir_name) => match self.find_player(heir_name) {
                Some(heir) if heir != id => Some(heir),
                _ => {
                    warn!(player = %name, beneficiary = %heir_name, "invalid beneficiary, bankruptcy ignored");
                    return;
                }
            },
        };

        let Some(mut player) = self.players.remove(&id) else {
            return;
        };
        self.turn_order.retain(|p| *p != id);
        let snapshot = PlayerSnapshot::from(&player);

        for tile in player.release_all() {
            if let Some(deed) = self.tiles.get_mut(tile.position()).and_then(Tile::deed_mut) {
                deed.set_owner(heir);
                if heir.is_none() {
                    deed.unmortgage();
                }
            }
            if let Some(heir) = heir.and_then(|h| self.players.get_mut(&h)) {
                heir.acquire(tile);
            }
        }

        self.debts.retain(|d| d.debtor != id && d.creditor != id);

        info!(player = %name, beneficiary = ?beneficiary, "player bankrupt");

        let beneficiary = heir.and_then(|h| self.snapshot_player(h));
        self.relay_notification(Event::Bankrupted {
            player: snapshot,
            beneficiary,
        });
    }

    // === Helpers ===

    fn lookup(&self, name: &str) -> Option<PlayerId> {
        let id = self.find_player(name);
        if id.is_none() {
            warn!(player = %name, "player not found, ignored");
        }
        id
    }

    fn acquire(&mut self, id: PlayerId, position: usize, value: i64) {
        let Some(player) = self.players.get_mut(&id) else {
            return;
        };
        player.debit(value);
        player.acquire(TileId::new(position));

        if let Some(deed) = self.tiles.get_mut(position).and_then(Tile::deed_mut) {
            deed.set_owner(Some(id));
        }

        let (Some(player), Some(tile)) = (self.snapshot_player(id), self.snapshot_tile_at(position))
        else {
            return;
        };
        info!(player = %player.name, tile = %tile.name, value, "tile purchased");
        self.relay_notification(Event::TilePurchased { player, tile });
    }

    fn transfer_rent(&mut self, renter: PlayerId, landlord: PlayerId, amount: i64) {
        if let Some(payer) = self.players.get_mut(&renter) {
            payer.debit(amount);
        }
        if let Some(payee) = self.players.get_mut(&landlord) {
            payee.credit(amount);
        }

        let (Some(renter), Some(landlord)) = (self.snapshot_player(renter), self.snapshot_player(landlord))
        else {
            return;
        };
        debug!(renter = %renter.name, landlord = %landlord.name, amount, "rent paid");
        self.relay_notification(Event::RentPaid {
            renter,
            landlord,
            rent: amount,
        });
    }

    /// Pay off `debtor`'s pending debts in the order they arose, stopping at
    /// the first one their cash cannot cover.
    fn settle_debt(&mut self, debtor: PlayerId) {
        while let Some(index) = self.debts.iter().position(|d| d.debtor == debtor) {
            let debt = self.debts[index];
            let Some(player) = self.players.get(&debtor) else {
                self.debts.retain(|d| d.debtor != debtor);
                return;
            };
            if !self.players.contains_key(&debt.creditor) {
                warn!(player = %player.name(), "creditor left the game, debt dropped");
                self.debts.remove(index);
                continue;
            }
            if player.shortfall(debt.amount).is_some() {
                return;
            }

            self.debts.remove(index);
            info!(player = %player.name(), amount = debt.amount, "debt settled");
            self.transfer_rent(debtor, debt.creditor, debt.amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::tests::{kinds, recorded_board, small_config, Recorder};
    use crate::board::{Board, Debt};
    use crate::core::{BoardConfig, CurrencyConfig, Dice, PlayerId, TileConfig};
    use crate::notify::{Event, EventKind, Intent, Replies};

    #[test]
    fn test_move_lands_and_offers_purchase() {
        let (mut board, events) = recorded_board();
        board.player_add("Ada", "Boot");

        board.player_move("Ada", 1);

        assert_eq!(board.player("Ada").unwrap().position(), 1);
        assert_eq!(
            kinds(&events),
            vec![EventKind::PlayerMoved, EventKind::BuyOpportunity]
        );
    }

    #[test]
    fn test_move_unknown_player_is_ignored() {
        let (mut board, events) = recorded_board();
        board.player_move("Nobody", 3);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_passed_start_before_move() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 4, None);

        board.player_move("Ada", 3);

        assert_eq!(board.player("Ada").unwrap().position(), 2);
        assert_eq!(
            kinds(&events),
            vec![EventKind::PassedStart, EventKind::PlayerMoved]
        );
        match &events.borrow()[0] {
            Event::PassedStart { player, bonus } => {
                assert_eq!(player.position, 4);
                assert_eq!(*bonus, 0);
            }
            other => panic!("unexpected {other:?}"),
        };
    }

    #[test]
    fn test_pass_start_bonus_credited() {
        let mut config = small_config();
        config.currency = config.currency.with_pass_start_bonus(200);
        let mut board = Board::new(&config, Dice::seeded(1)).unwrap();
        board.register(Recorder::default());
        board.player_add_at("Ada", "Boot", 4, Some(100));

        board.player_move("Ada", 1);

        assert_eq!(board.player("Ada").unwrap().cash(), 300);
    }

    #[test]
    fn test_backward_move_never_passes_start() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);

        board.player_move("Ada", -2);

        assert_eq!(board.player("Ada").unwrap().position(), 4);
        assert_eq!(kinds(&events)[0], EventKind::PlayerMoved);
    }

    #[test]
    fn test_purchase() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);

        board.player_purchase("Ada");

        let ada = board.player("Ada").unwrap();
        assert_eq!(ada.cash(), 1440);
        assert_eq!(board.tile(1).unwrap().owner(), Some(ada.id()));
        assert!(ada.owns(board.tile(1).unwrap().id()));
        assert_eq!(kinds(&events), vec![EventKind::TilePurchased]);
        match &events.borrow()[0] {
            Event::TilePurchased { tile, .. } => {
                assert_eq!(tile.owner.as_deref(), Some("Ada"));
                assert!(tile.is_owned);
            }
            other => panic!("unexpected {other:?}"),
        };
    }

    #[test]
    fn test_purchase_twice_is_already_owned() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);

        board.player_purchase("Ada");
        board.player_purchase("Ada");

        assert_eq!(board.player("Ada").unwrap().cash(), 1440);
        assert_eq!(
            kinds(&events),
            vec![EventKind::TilePurchased, EventKind::AlreadyOwned]
        );
    }

    #[test]
    fn test_purchase_insufficient_funds() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 4, Some(150));

        board.player_purchase("Ada");

        assert_eq!(board.player("Ada").unwrap().cash(), 150);
        assert!(!board.tile(4).unwrap().is_owned());
        match &events.borrow()[0] {
            Event::InsufficientFunds { deficit, .. } => assert_eq!(*deficit, 250),
            other => panic!("unexpected {other:?}"),
        };
    }

    #[test]
    fn test_purchase_not_for_sale() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);
        board.player_add_at("Bo", "Hat", 1, None);
        board.player_add_at("Cy", "Car", 2, None);

        board.player_purchase("Ada");
        board.player_purchase("Bo");
        board.player_purchase("Cy");

        assert_eq!(board.player("Bo").unwrap().cash(), 1500);
        assert_eq!(
            kinds(&events),
            vec![
                EventKind::TilePurchased,
                EventKind::NotForSale,
                EventKind::NotForSale
            ]
        );
    }

    #[test]
    fn test_rent_paid() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);
        board.player_add("Bo", "Hat");
        board.player_purchase("Ada");

        board.player_move("Bo", 1);

        assert_eq!(board.player("Ada").unwrap().cash(), 1444);
        assert_eq!(board.player("Bo").unwrap().cash(), 1496);
        assert_eq!(kinds(&events).last(), Some(&EventKind::RentPaid));
    }

    #[test]
    fn test_own_tile_charges_nothing() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);
        board.player_purchase("Ada");

        board.player_move("Ada", 5);

        assert_eq!(board.player("Ada").unwrap().cash(), 1440);
        assert_eq!(kinds(&events).last(), Some(&EventKind::PlayerMoved));
    }

    #[test]
    fn test_liquidation_required_leaves_cash() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 4, None);
        board.player_add_at("Bo", "Hat", 3, Some(30));
        board.player_purchase("Ada");

        board.player_move("Bo", 1);

        assert_eq!(board.player("Bo").unwrap().cash(), 30);
        let ada = board.player("Ada").unwrap().id();
        let bo = board.player("Bo").unwrap().id();
        assert_eq!(
            board.pending_debt(),
            Some(Debt { debtor: bo, creditor: ada, amount: 50 })
        );
        match events.borrow().last() {
            Some(Event::LiquidationRequired { shortfall, .. }) => assert_eq!(*shortfall, 20),
            other => panic!("unexpected {other:?}"),
        };
    }

    #[test]
    fn test_mortgage_credits_half() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);
        board.player_purchase("Ada");

        board.player_mortgage("Ada", "Baltic");

        assert_eq!(board.player("Ada").unwrap().cash(), 1470);
        assert!(board.tile(1).unwrap().is_mortgaged());
        match events.borrow().last() {
            Some(Event::Mortgaged { amount, tile, .. }) => {
                assert_eq!(*amount, 30);
                assert!(tile.mortgaged);
            }
            other => panic!("unexpected {other:?}"),
        };
    }

    #[test]
    fn test_mortgage_refusals() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);
        board.player_add("Bo", "Hat");
        board.player_purchase("Ada");
        events.borrow_mut().clear();

        board.player_mortgage("Bo", "Baltic");
        board.player_mortgage("Ada", "Baltic");
        board.player_mortgage("Ada", "Baltic");
        board.player_mortgage("Ada", "Nowhere");

        assert_eq!(board.player("Ada").unwrap().cash(), 1470);
        assert_eq!(
            kinds(&events),
            vec![
                EventKind::NotOwned,
                EventKind::Mortgaged,
                EventKind::AlreadyMortgaged
            ]
        );
    }

    #[test]
    fn test_mortgaged_tile_charges_no_rent() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);
        board.player_add("Bo", "Hat");
        board.player_purchase("Ada");
        board.player_mortgage("Ada", "Baltic");

        board.player_move("Bo", 1);

        assert_eq!(board.player("Bo").unwrap().cash(), 1500);
        assert_eq!(kinds(&events).last(), Some(&EventKind::PlayerMoved));
    }

    #[test]
    fn test_liquidation_settled_by_mortgage_reply() {
        let mut board = Board::new(&small_config(), Dice::seeded(1)).unwrap();
        let recorder = Recorder::answering(|event| match event {
            Event::LiquidationRequired { player, .. } => {
                Replies::from_iter([Intent::mortgage(player.name.clone(), "Baltic")])
            }
            _ => Replies::new(),
        });
        let events = recorder.events.clone();

        board.player_add_at("Ada", "Boot", 4, None);
        board.player_add_at("Bo", "Hat", 1, Some(100));
        board.player_purchase("Ada");
        board.player_purchase("Bo");
        board.register(recorder);
        board.player_move("Bo", 3);

        // 40 cash + 30 from the mortgage covers the 50 rent
        assert_eq!(board.player("Bo").unwrap().cash(), 20);
        assert_eq!(board.player("Ada").unwrap().cash(), 1150);
        assert_eq!(board.pending_debt(), None);
        assert_eq!(
            kinds(&events),
            vec![
                EventKind::PlayerMoved,
                EventKind::LiquidationRequired,
                EventKind::Mortgaged,
                EventKind::RentPaid
            ]
        );
    }

    #[test]
    fn test_bankrupt_transfers_tiles() {
        let (mut board, events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);
        board.player_add_at("Bo", "Hat", 4, None);
        board.player_purchase("Ada");
        board.player_mortgage("Ada", "Baltic");

        board.player_bankrupt("Ada", Some("Bo"));

        assert!(board.player("Ada").is_none());
        assert_eq!(board.player_count(), 1);
        let bo = board.player("Bo").unwrap();
        assert_eq!(board.tile(1).unwrap().owner(), Some(bo.id()));
        assert!(board.tile(1).unwrap().is_mortgaged());
        assert!(bo.owns(board.tile(1).unwrap().id()));

        match events.borrow().last() {
            Some(Event::Bankrupted { player, beneficiary }) => {
                assert_eq!(player.properties.len(), 1);
                assert_eq!(beneficiary.as_ref().map(|b| b.properties.len()), Some(1));
            }
            other => panic!("unexpected {other:?}"),
        };
    }

    #[test]
    fn test_bankrupt_to_bank() {
        let (mut board, _events) = recorded_board();
        board.player_add_at("Ada", "Boot", 1, None);
        board.player_purchase("Ada");
        board.player_mortgage("Ada", "Baltic");

        board.player_bankrupt("Ada", None);

        let tile = board.tile(1).unwrap();
        assert!(!tile.is_owned());
        assert!(!tile.is_mortgaged());
        assert_eq!(board.player_count(), 0);
    }

    #[test]
    fn test_bankrupt_invalid_beneficiary_ignored() {
        let (mut board, events) = recorded_board();
        board.player_add("Ada", "Boot");

        board.player_bankrupt("Ada", Some("Nobody"));
        board.player_bankrupt("Ada", Some("Ada"));

        assert_eq!(board.player_count(), 1);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_bankrupt_clears_debt() {
        let (mut board, _events) = recorded_board();
        board.player_add_at("Ada", "Boot", 4, None);
        board.player_add_at("Bo", "Hat", 3, Some(10));
        board.player_purchase("Ada");
        board.player_move("Bo", 1);
        assert!(board.pending_debt().is_some());

        board.player_bankrupt("Bo", Some("Ada"));

        assert_eq!(board.pending_debt(), None);
    }

    /// GO, then three 100-cost properties renting 50, 60, and 5.
    fn debt_board() -> (Board, PlayerId, PlayerId, PlayerId) {
        let config = BoardConfig::new("Debts", CurrencyConfig::new("$", 1500))
            .with_size(4)
            .with_tile(TileConfig::basic("GO", 0))
            .with_tile(TileConfig::property("Oriental", 1, 100, &[50]))
            .with_tile(TileConfig::property("Vermont", 2, 100, &[60]))
            .with_tile(TileConfig::property("Connecticut", 3, 100, &[5]));
        let mut board = Board::new(&config, Dice::seeded(1)).unwrap();
        board.register(Recorder::default());

        let ada = board.player_add_at("Ada", "Boot", 1, None);
        let cy = board.player_add_at("Cy", "Car", 2, None);
        let bo = board.player_add_at("Bo", "Hat", 3, Some(110));
        board.player_purchase("Ada");
        board.player_purchase("Cy");
        board.player_purchase("Bo");

        // Bo, holding 10, owes Ada 50 and then Cy 60
        board.player_move("Bo", 2);
        board.player_move("Bo", 1);
        (board, ada, bo, cy)
    }

    #[test]
    fn test_unpaid_rents_queue_up() {
        let (board, ada, bo, cy) = debt_board();

        assert_eq!(board.player("Bo").unwrap().cash(), 10);
        assert_eq!(
            board.pending_debts(),
            &[
                Debt { debtor: bo, creditor: ada, amount: 50 },
                Debt { debtor: bo, creditor: cy, amount: 60 },
            ]
        );
        assert_eq!(board.pending_debt().map(|d| d.creditor), Some(ada));
    }

    #[test]
    fn test_queued_debts_settle_oldest_first() {
        let (mut board, _ada, bo, cy) = debt_board();

        board.player_mortgage("Bo", "Connecticut");

        assert_eq!(board.player("Ada").unwrap().cash(), 1450);
        assert_eq!(board.player("Bo").unwrap().cash(), 10);
        assert_eq!(board.player("Cy").unwrap().cash(), 1400);
        assert_eq!(
            board.pending_debts(),
            &[Debt { debtor: bo, creditor: cy, amount: 60 }]
        );
    }

    #[test]
    fn test_bankrupt_creditor_drops_only_their_debt() {
        let (mut board, _ada, bo, cy) = debt_board();

        board.player_bankrupt("Ada", None);

        assert_eq!(
            board.pending_debts(),
            &[Debt { debtor: bo, creditor: cy, amount: 60 }]
        );
    }

    #[test]
    fn test_move_reply_to_passed_start_wins() {
        let mut config = small_config();
        config.currency = config.currency.with_pass_start_bonus(200);
        let mut board = Board::new(&config, Dice::seeded(1)).unwrap();
        let mut answered = false;
        let recorder = Recorder::answering(move |event| match event {
            Event::PassedStart { player, .. } if !answered => {
                answered = true;
                Replies::from_iter([Intent::move_by(player.name.clone(), 2)])
            }
            _ => Replies::new(),
        });
        let events = recorder.events.clone();
        board.register(recorder);
        board.player_add_at("Ada", "Boot", 4, None);

        board.player_move("Ada", 3);

        let ada = board.player("Ada").unwrap();
        assert_eq!(ada.position(), 1);
        assert_eq!(ada.cash(), 1900);
        assert_eq!(
            kinds(&events),
            vec![
                EventKind::PassedStart,
                EventKind::PassedStart,
                EventKind::PlayerMoved,
                EventKind::BuyOpportunity
            ]
        );
    }

    #[test]
    fn test_bankrupt_reply_stops_landing() {
        let mut board = Board::new(&small_config(), Dice::seeded(1)).unwrap();
        let recorder = Recorder::answering(|event| match event {
            Event::PassedStart { player, .. } => {
                Replies::from_iter([Intent::bankrupt(player.name.clone(), None)])
            }
            _ => Replies::new(),
        });
        let events = recorder.events.clone();
        board.register(recorder);
        board.player_add_at("Ada", "Boot", 4, None);

        board.player_move("Ada", 2);

        assert_eq!(board.player_count(), 0);
        assert_eq!(
            kinds(&events),
            vec![EventKind::PassedStart, EventKind::Bankrupted]
        );
    }
}
