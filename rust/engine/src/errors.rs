use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cards {cards:?} do not form a set")]
    InvalidSet { cards: [Card; 3] },
    #[error("Card {card} is not on the table")]
    NotOnTable { card: Card },
    #[error("No player with id {id}")]
    UnknownPlayer { id: String },
    #[error("Game already ended")]
    GameEnded,
    #[error("Invalid {attribute} value: {value}")]
    InvalidAttribute { attribute: &'static str, value: u8 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
