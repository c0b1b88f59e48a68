use std::fmt;

use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::config::{EndPolicy, EngineConfig};
use crate::errors::{ConfigError, GameError};
use crate::game::{GameObserver, GameState, NullObserver};
use crate::logger::{EventKind, EventRecord, GameRecord};
use crate::player::SetPlayer;
use crate::rules::validate_set;
use crate::search;
use crate::stock::Stock;

/// Core game engine for one game of Set.
/// Owns the stock, the face-up table, the players and the observer that is
/// told about no-set, empty-stock and game-over conditions.
///
/// # Examples
///
/// ```
/// use setgame_engine::engine::Engine;
/// use setgame_engine::player::{Player, SetPlayer};
///
/// let mut engine: Engine<Player> = Engine::with_ids([0, 1]);
/// let dealt = engine.draw().expect("lenient engines never refuse a draw");
/// assert_eq!(dealt.len(), 12);
/// assert_eq!(engine.stock().len(), 69);
///
/// if let Some(set) = engine.find_set_on_table(None) {
///     let table = engine.set_found(set, &0).expect("set comes from the table");
///     assert_eq!(table.len(), 9);
///     assert_eq!(engine.player(&0).map(|p| p.score()), Some(3));
/// }
/// ```
pub struct Engine<P: SetPlayer> {
    config: EngineConfig,
    /// Undrawn cards
    stock: Stock,
    /// Face-up cards available for matching
    table: Vec<Card>,
    players: Vec<P>,
    observer: Box<dyn GameObserver>,
    state: GameState,
    /// Every change to stock, table or scores, in order
    history: Vec<EventRecord>,
}

impl<P: SetPlayer> Engine<P> {
    pub fn new(players: Vec<P>) -> Self {
        Self::build(players, EngineConfig::default())
    }

    /// Engine whose players are built from their identifiers.
    pub fn with_ids<I: IntoIterator<Item = P::Id>>(ids: I) -> Self {
        Self::new(ids.into_iter().map(P::with_id).collect())
    }

    pub fn with_config(players: Vec<P>, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(players, config))
    }

    fn build(players: Vec<P>, config: EngineConfig) -> Self {
        let stock = Stock::new_with_seed(config.effective_seed());
        let table = Vec::with_capacity(config.extended_table_size);
        Self {
            config,
            stock,
            table,
            players,
            observer: Box::new(NullObserver),
            state: GameState::Active,
            history: Vec::new(),
        }
    }

    /// Registers the observer, replacing the previous one.
    pub fn set_observer<O: GameObserver + 'static>(&mut self, observer: O) {
        self.observer = Box::new(observer);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
    pub fn seed(&self) -> u64 {
        self.config.effective_seed()
    }
    pub fn stock(&self) -> &[Card] {
        self.stock.cards()
    }
    pub fn table(&self) -> &[Card] {
        &self.table
    }
    pub fn players(&self) -> &[P] {
        &self.players
    }
    pub fn player(&self, id: &P::Id) -> Option<&P> {
        self.players.iter().find(|p| p.id() == id)
    }
    pub fn state(&self) -> GameState {
        self.state
    }
    pub fn history(&self) -> &[EventRecord] {
        &self.history
    }

    /// Deals cards until the table holds its regular capacity.
    ///
    /// Returns only the newly dealt cards. When the table is already at (or
    /// above) capacity nothing moves and the current table is returned.
    pub fn draw(&mut self) -> Result<Vec<Card>, GameError> {
        self.ensure_playable()?;
        if self.table.len() >= self.config.table_size {
            return Ok(self.table.clone());
        }
        Ok(self.deal(self.config.table_size - self.table.len(), EventKind::Draw))
    }

    /// Returns every table card to the stock and deals a fresh table.
    pub fn redraw(&mut self) -> Result<Vec<Card>, GameError> {
        self.ensure_playable()?;
        let returned = std::mem::take(&mut self.table);
        if !returned.is_empty() {
            debug!(returned = returned.len(), "returning table to stock");
            self.record(EventKind::Redraw, returned.clone(), None);
            self.stock.put_back(returned);
        }
        Ok(self.deal(self.config.table_size, EventKind::Draw))
    }

    /// Tops the table up to its extended capacity.
    ///
    /// Unlike [`Engine::draw`], this returns the whole resulting table.
    pub fn add_cards(&mut self) -> Result<Vec<Card>, GameError> {
        self.ensure_playable()?;
        if self.table.len() < self.config.extended_table_size {
            let missing = self.config.extended_table_size - self.table.len();
            self.deal(missing, EventKind::AddCards);
        }
        Ok(self.table.clone())
    }

    /// Takes a claimed set off the table and credits it to `player`.
    ///
    /// Returns the table after removal.
    ///
    /// # Errors
    ///
    /// Nothing changes when an error is returned:
    /// - [`GameError::InvalidSet`] - the cards do not form a set
    /// - [`GameError::UnknownPlayer`] - no player has the given id
    /// - [`GameError::NotOnTable`] - a card is not (or no longer) on the table
    /// - [`GameError::GameEnded`] - the game is over under [`EndPolicy::Strict`]
    pub fn set_found(&mut self, set: [Card; 3], player: &P::Id) -> Result<Vec<Card>, GameError> {
        self.ensure_playable()?;
        let set = validate_set(set).inspect_err(|_| {
            warn!(?set, %player, "rejected cards that do not form a set");
        })?;
        let idx = self.player_index(player)?;

        let mut remaining = self.table.clone();
        for card in &set {
            match remaining.iter().position(|c| c == card) {
                Some(pos) => {
                    remaining.remove(pos);
                }
                None => {
                    warn!(%card, %player, "rejected set with a card missing from the table");
                    return Err(GameError::NotOnTable { card: *card });
                }
            }
        }

        let stock_was_empty = self.stock.is_empty();
        self.table = remaining;
        self.players[idx].credit(&set);
        info!(%player, score = self.players[idx].score(), "set found");
        self.record(EventKind::SetFound, set.to_vec(), Some(player.to_string()));
        self.after_mutation(stock_was_empty);
        Ok(self.table.clone())
    }

    /// Removes cards from the table without scoring them.
    ///
    /// Cards are matched by value; cards not on the table are ignored.
    /// Returns the cards actually removed, which leave play entirely.
    pub fn remove_from_table(&mut self, cards: &[Card]) -> Result<Vec<Card>, GameError> {
        self.ensure_playable()?;
        let mut removed = Vec::with_capacity(cards.len());
        for card in cards {
            if let Some(pos) = self.table.iter().position(|c| c == card) {
                removed.push(self.table.remove(pos));
            }
        }
        if !removed.is_empty() {
            debug!(removed = removed.len(), "removed cards from table");
            self.record(EventKind::RemovedFromTable, removed.clone(), None);
            let stock_was_empty = self.stock.is_empty();
            self.after_mutation(stock_was_empty);
        }
        Ok(removed)
    }

    /// Credits cards straight to a player's won pile.
    pub fn add_score(&mut self, cards: &[Card], player: &P::Id) -> Result<(), GameError> {
        let idx = self.player_index(player)?;
        self.players[idx].credit(cards);
        self.record(EventKind::ScoreAdded, cards.to_vec(), Some(player.to_string()));
        Ok(())
    }

    /// Takes up to `count` cards out of a player's won pile.
    pub fn remove_score(&mut self, count: usize, player: &P::Id) -> Result<Vec<Card>, GameError> {
        let idx = self.player_index(player)?;
        let removed = self.players[idx].debit(count);
        debug!(%player, requested = count, removed = removed.len(), "debited score");
        self.record(EventKind::ScoreRemoved, removed.clone(), Some(player.to_string()));
        Ok(removed)
    }

    /// Looks for a set among `cards`, skipping `except` when given.
    pub fn find_set(&mut self, cards: &[Card], except: Option<&[Card; 3]>) -> Option<[Card; 3]> {
        search::find_one(cards, except, self.stock.rng_mut())
    }

    pub fn find_set_on_table(&mut self, except: Option<&[Card; 3]>) -> Option<[Card; 3]> {
        search::find_one(&self.table, except, self.stock.rng_mut())
    }

    pub fn find_all_sets(&mut self, cards: &[Card]) -> Vec<[Card; 3]> {
        search::find_all(cards, self.stock.rng_mut())
    }

    pub fn has_set_on_table(&self) -> bool {
        search::exists(&self.table)
    }

    /// Snapshot of the game for [`crate::logger::write_record`].
    pub fn game_record(&self, game_id: String) -> GameRecord {
        GameRecord {
            game_id,
            seed: self.seed(),
            events: self.history.clone(),
            scores: self
                .players
                .iter()
                .map(|p| (p.id().to_string(), p.score()))
                .collect(),
            ts: None,
        }
    }

    fn ensure_playable(&self) -> Result<(), GameError> {
        if self.config.end_policy == EndPolicy::Strict && self.state.is_ended() {
            return Err(GameError::GameEnded);
        }
        Ok(())
    }

    fn player_index(&self, id: &P::Id) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| GameError::UnknownPlayer { id: id.to_string() })
    }

    /// Moves up to `n` random cards from stock to table and re-evaluates.
    fn deal(&mut self, n: usize, kind: EventKind) -> Vec<Card> {
        let stock_was_empty = self.stock.is_empty();
        let dealt = self.stock.draw(n);
        if dealt.is_empty() {
            return dealt;
        }
        self.table.extend_from_slice(&dealt);
        debug!(
            dealt = dealt.len(),
            table = self.table.len(),
            stock = self.stock.remaining(),
            "dealt cards"
        );
        self.record(kind, dealt.clone(), None);
        self.after_mutation(stock_was_empty);
        dealt
    }

    fn after_mutation(&mut self, stock_was_empty: bool) {
        let stock_empty = self.stock.is_empty();
        let next = GameState::evaluate(stock_empty, search::exists(&self.table));

        if stock_empty && !stock_was_empty {
            info!("stock exhausted");
            self.observer.on_no_more_cards();
        }
        match next {
            GameState::NoSetOnTable => self.observer.on_no_set_found(),
            GameState::Ended if !self.state.is_ended() => {
                info!(table = self.table.len(), "game ended");
                self.observer.on_game_ended();
            }
            _ => {}
        }

        if next != self.state {
            debug!(from = ?self.state, to = ?next, "state changed");
            self.state = next;
            let seq = self.next_seq();
            self.history.push(EventRecord {
                seq,
                kind: EventKind::StateChanged,
                cards: Vec::new(),
                player: None,
                state: Some(next),
                ts: None,
            });
        }
    }

    fn next_seq(&self) -> usize {
        self.history.len() + 1
    }

    fn record(&mut self, kind: EventKind, cards: Vec<Card>, player: Option<String>) {
        let seq = self.next_seq();
        self.history.push(EventRecord {
            seq,
            kind,
            cards,
            player,
            state: None,
            ts: None,
        });
    }
}

impl<P: SetPlayer + fmt::Debug> fmt::Debug for Engine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("stock", &self.stock.remaining())
            .field("table", &self.table)
            .field("players", &self.players)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
