use serde::{Deserialize, Serialize};

/// Where a game stands, re-evaluated after every change to stock or table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    /// Cards remain in the stock and the table shows at least one set
    Active,
    /// The table shows no set but cards remain in the stock
    NoSetOnTable,
    /// The stock is empty and the table still shows a set
    StockExhausted,
    /// The stock is empty and the table shows no set; terminal
    Ended,
}

impl GameState {
    pub fn evaluate(stock_empty: bool, set_on_table: bool) -> Self {
        match (stock_empty, set_on_table) {
            (false, true) => GameState::Active,
            (false, false) => GameState::NoSetOnTable,
            (true, true) => GameState::StockExhausted,
            (true, false) => GameState::Ended,
        }
    }

    pub fn is_ended(self) -> bool {
        self == GameState::Ended
    }
}

/// Host callbacks fired inline by the engine's mutating operations.
///
/// All methods default to doing nothing, so an observer only implements the
/// notifications it cares about. Observers must be `Send` so an engine can
/// be moved behind a mutex shared between threads.
pub trait GameObserver: Send {
    /// The table holds no set after a change.
    fn on_no_set_found(&mut self) {}
    /// The stock just ran out of cards.
    fn on_no_more_cards(&mut self) {}
    /// The stock is empty and no set is left on the table.
    fn on_game_ended(&mut self) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
